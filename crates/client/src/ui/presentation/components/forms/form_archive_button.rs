use dioxus::prelude::*;

#[component]
pub fn FormArchiveButton(
    #[props(default)] disabled: bool,
    onclick: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            disabled: disabled,
            class: "px-4 py-2 bg-transparent text-red-500 border-0 cursor-pointer mr-auto disabled:opacity-50",
            onclick: move |_| onclick.call(()),
            {children}
        }
    }
}
