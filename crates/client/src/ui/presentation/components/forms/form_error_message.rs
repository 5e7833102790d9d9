use dioxus::prelude::*;

use crate::application::forms::SubmitError;

/// Form-level error region for failed submissions.
#[component]
pub fn FormErrorMessage(
    #[props(!optional)] error: Option<SubmitError>,
    #[props(default)] inline: bool,
) -> Element {
    let Some(error) = error else {
        return rsx! {};
    };

    let layout = if inline {
        "inline-block mr-auto"
    } else {
        "block mt-4"
    };

    rsx! {
        div {
            role: "alert",
            class: "{layout} text-red-500 text-sm",
            "{error}"
        }
    }
}
