use dioxus::prelude::*;

/// Single-line text input with title and inline error.
#[component]
pub fn FormInput(
    name: &'static str,
    title: &'static str,
    value: String,
    #[props(!optional)] error: Option<String>,
    #[props(default = "text")] input_type: &'static str,
    placeholder: Option<&'static str>,
    autocomplete: Option<&'static str>,
    #[props(default)] autofocus: bool,
    oninput: EventHandler<String>,
    onblur: EventHandler<()>,
) -> Element {
    let border = if error.is_some() {
        "border-red-500"
    } else {
        "border-gray-700"
    };

    rsx! {
        div {
            class: "flex flex-col gap-1 mb-4",
            label {
                r#for: name,
                class: "block text-gray-400 text-sm font-medium",
                "{title}"
            }
            input {
                id: name,
                name: name,
                r#type: input_type,
                value: "{value}",
                placeholder: placeholder.unwrap_or_default(),
                autocomplete: autocomplete.unwrap_or("off"),
                autofocus: autofocus,
                class: "w-full p-3 bg-dark-bg border {border} rounded-lg text-white text-base",
                oninput: move |e| oninput.call(e.value()),
                onblur: move |_| onblur.call(()),
            }
            if let Some(err) = error.as_ref() {
                span {
                    class: "text-red-500 text-xs",
                    "{err}"
                }
            }
        }
    }
}
