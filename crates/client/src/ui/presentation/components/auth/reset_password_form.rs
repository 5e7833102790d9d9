//! Reset Password Form - choose a new password

use dioxus::prelude::*;

use lumen_domain::fields::reset_password::{PASSWORD, PASSWORD_CONFIRM};
use lumen_domain::ResetPasswordData;

use crate::application::forms::AsyncHandler;
use crate::application::ResetPasswordSchema;
use crate::presentation::components::forms::{FormErrorMessage, FormInput, FormSubmitButton};
use crate::presentation::forms::use_form_keyed;
use crate::presentation::services::{use_password_complexity, PolicyHandle};

/// Props for ResetPasswordForm
#[derive(Props, Clone, PartialEq)]
pub struct ResetPasswordFormProps {
    /// Site password policy; each distinct password is checked once per policy
    pub policy: PolicyHandle,
    pub on_submit: AsyncHandler<ResetPasswordData>,
}

/// Reset Password Form component
#[component]
pub fn ResetPasswordForm(props: ResetPasswordFormProps) -> Element {
    // A new policy gets a new schema and an empty check cache
    let form = use_form_keyed(
        props.policy.clone(),
        |policy| ResetPasswordSchema::new(policy.port()),
        ResetPasswordSchema::initial_values,
    );

    let complexity = use_password_complexity();
    let description = use_hook(move || complexity.description());

    let (values, password_error, confirm_error, submit_error, busy) = {
        let state = form.state.read();
        (
            state.values().clone(),
            state.visible_error(PASSWORD).map(ToString::to_string),
            state.visible_error(PASSWORD_CONFIRM).map(ToString::to_string),
            state.submit_error().cloned(),
            state.is_busy(),
        )
    };

    let on_password = {
        let form = form.clone();
        move |value: String| form.edit(PASSWORD, move |v| v.password = value)
    };
    let on_password_blur = {
        let form = form.clone();
        move |_: ()| form.blur(PASSWORD)
    };
    let on_confirm = {
        let form = form.clone();
        move |value: String| form.edit(PASSWORD_CONFIRM, move |v| v.password_confirm = value)
    };
    let on_confirm_blur = {
        let form = form.clone();
        move |_: ()| form.blur(PASSWORD_CONFIRM)
    };
    let on_submit = {
        let form = form.clone();
        let handler = props.on_submit.clone();
        move |e: FormEvent| {
            e.prevent_default();
            form.submit(handler.clone());
        }
    };

    rsx! {
        div {
            class: "flex flex-col gap-2 max-w-md",
            h2 {
                class: "m-0 text-white text-xl",
                "New password"
            }
            p {
                class: "mb-4 text-gray-400 text-sm",
                "To keep your data secure, passwords {description}"
            }
            form {
                onsubmit: on_submit,
                FormInput {
                    name: PASSWORD,
                    title: "Create a password",
                    input_type: "password",
                    placeholder: "Shhh...",
                    autocomplete: "new-password",
                    autofocus: true,
                    value: values.password,
                    error: password_error,
                    oninput: on_password,
                    onblur: on_password_blur,
                }
                FormInput {
                    name: PASSWORD_CONFIRM,
                    title: "Confirm your password",
                    input_type: "password",
                    placeholder: "Shhh... but one more time so we get it right",
                    autocomplete: "new-password",
                    value: values.password_confirm,
                    error: confirm_error,
                    oninput: on_confirm,
                    onblur: on_confirm_blur,
                }
                FormSubmitButton {
                    title: "Save new password",
                    busy: busy,
                    primary: true,
                    full_width: true,
                }
                FormErrorMessage {
                    error: submit_error,
                }
            }
        }
    }
}
