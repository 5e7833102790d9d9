use dioxus::prelude::*;

use lumen_domain::IconOption;

/// Select over a fixed option list. An empty value shows the placeholder.
#[component]
pub fn FormSelect(
    name: &'static str,
    title: &'static str,
    value: String,
    options: Vec<IconOption>,
    #[props(!optional)] error: Option<String>,
    #[props(default = "Select...")] placeholder: &'static str,
    onchange: EventHandler<String>,
    onblur: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-1 mb-4",
            label {
                r#for: name,
                class: "block text-gray-400 text-sm font-medium",
                "{title}"
            }
            select {
                id: name,
                name: name,
                value: "{value}",
                class: "w-full p-3 bg-dark-bg border border-gray-700 rounded-lg text-white text-base",
                onchange: move |e| onchange.call(e.value()),
                onblur: move |_| onblur.call(()),
                option {
                    value: "",
                    disabled: true,
                    selected: value.is_empty(),
                    "{placeholder}"
                }
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
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
