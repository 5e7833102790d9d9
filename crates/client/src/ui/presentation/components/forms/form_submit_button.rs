use dioxus::prelude::*;

/// Submit button for the enclosing form.
#[component]
pub fn FormSubmitButton(
    title: &'static str,
    #[props(default)] disabled: bool,
    #[props(default)] busy: bool,
    #[props(default)] primary: bool,
    #[props(default)] full_width: bool,
) -> Element {
    let color = if primary {
        "bg-green-500 text-white"
    } else {
        "bg-gray-700 text-white"
    };
    let width = if full_width { "w-full" } else { "" };

    rsx! {
        button {
            r#type: "submit",
            disabled: disabled || busy,
            class: "px-6 py-2 {color} {width} border-0 rounded-lg cursor-pointer font-medium disabled:opacity-50 disabled:cursor-not-allowed",
            if busy {
                "Saving..."
            } else {
                "{title}"
            }
        }
    }
}
