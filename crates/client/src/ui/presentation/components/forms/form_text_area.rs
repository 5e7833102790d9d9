use dioxus::prelude::*;

/// Multi-line text input with title and inline error.
#[component]
pub fn FormTextArea(
    name: &'static str,
    title: &'static str,
    value: String,
    #[props(!optional)] error: Option<String>,
    #[props(default = 4)] rows: i64,
    oninput: EventHandler<String>,
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
            textarea {
                id: name,
                name: name,
                value: "{value}",
                rows: rows,
                class: "w-full p-3 bg-dark-bg border border-gray-700 rounded-lg text-white text-base resize-y",
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
