//! Timeline Form - create or edit a timeline
//!
//! A new timeline can only be created. An existing one can be updated or
//! archived. Submit stays disabled until the descriptor differs from the one
//! the form was opened with.

use dioxus::prelude::*;

use lumen_domain::fields::timeline::{DESCRIPTION, ICON, NAME};
use lumen_domain::{FieldName, TimelineDraft};

use crate::application::forms::{AsyncHandler, Handler};
use crate::application::{archive_action, TimelineSchema};
use crate::presentation::components::forms::{
    FormArchiveButton, FormErrorMessage, FormInput, FormSelect, FormSubmitButton, FormTextArea,
};
use crate::presentation::forms::use_form;
use crate::presentation::services::use_timeline_icons;

/// Props for TimelineForm
#[derive(Props, Clone, PartialEq)]
pub struct TimelineFormProps {
    pub initial: TimelineDraft,
    pub on_submit: AsyncHandler<TimelineDraft>,
    /// Only offered for existing timelines
    pub on_archive: Option<AsyncHandler<()>>,
    pub on_cancel: Option<Handler<()>>,
}

/// Timeline Form component
#[component]
pub fn TimelineForm(props: TimelineFormProps) -> Element {
    let icons = use_timeline_icons();
    let initial = props.initial.clone();
    let form = use_form(move || TimelineSchema::new(icons), move || initial);

    let options = form.schema().icons().options().to_vec();

    let (values, name_error, description_error, icon_error, submit_error, busy, can_submit) = {
        let state = form.state.read();
        (
            state.values().clone(),
            state.visible_error(NAME).map(ToString::to_string),
            state.visible_error(DESCRIPTION).map(ToString::to_string),
            state.visible_error(ICON).map(ToString::to_string),
            state.submit_error().cloned(),
            state.is_busy(),
            state.can_submit(true),
        )
    };
    let submit_label = values.submit_label();
    let archive = archive_action(&values, props.on_archive.clone());
    let fields = values.fields().clone();

    let on_name = {
        let form = form.clone();
        move |value: String| form.edit(NAME, move |d| d.fields_mut().name = value)
    };
    let on_description = {
        let form = form.clone();
        move |value: String| form.edit(DESCRIPTION, move |d| d.fields_mut().description = value)
    };
    let on_icon = {
        let form = form.clone();
        move |value: String| form.edit(ICON, move |d| d.fields_mut().icon = value)
    };
    let on_blur = |field: FieldName| {
        let form = form.clone();
        move |_: ()| form.blur(field)
    };
    let on_submit = {
        let form = form.clone();
        let handler = props.on_submit.clone();
        move |e: FormEvent| {
            e.prevent_default();
            if !form.state.read().can_submit(true) {
                return;
            }
            form.submit(handler.clone());
        }
    };
    let on_archive = archive.map(|handler| {
        let form = form.clone();
        move |_: ()| form.run_action(handler.clone())
    });
    let on_cancel = {
        let handler = props.on_cancel.clone();
        move |_: MouseEvent| {
            if let Some(handler) = &handler {
                handler.call(());
            }
        }
    };

    rsx! {
        form {
            class: "flex flex-col max-w-lg",
            onsubmit: on_submit,
            FormInput {
                name: NAME,
                title: "Name",
                placeholder: "Product releases",
                autofocus: true,
                value: fields.name,
                error: name_error,
                oninput: on_name,
                onblur: on_blur(NAME),
            }
            FormTextArea {
                name: DESCRIPTION,
                title: "Description",
                value: fields.description,
                error: description_error,
                oninput: on_description,
                onblur: on_blur(DESCRIPTION),
            }
            FormSelect {
                name: ICON,
                title: "Default icon",
                placeholder: "Select an icon",
                value: fields.icon,
                options: options,
                error: icon_error,
                onchange: on_icon,
                onblur: on_blur(ICON),
            }
            div {
                class: "flex items-center justify-end gap-3 pt-4 border-t border-gray-700",
                FormErrorMessage {
                    error: submit_error,
                    inline: true,
                }
                if let Some(on_archive) = on_archive {
                    FormArchiveButton {
                        disabled: busy,
                        onclick: on_archive,
                        "Archive timeline and all events"
                    }
                }
                button {
                    r#type: "button",
                    class: "px-4 py-2 bg-gray-700 text-white border-0 rounded-lg cursor-pointer",
                    onclick: on_cancel,
                    "Cancel"
                }
                FormSubmitButton {
                    title: submit_label,
                    disabled: !can_submit,
                    busy: busy,
                    primary: true,
                }
            }
        }
    }
}
