use anyhow::Context;
use dioxus::prelude::*;
use uuid::Uuid;

use lumen_domain::{ResetPasswordData, TimelineData, TimelineDraft, TimelineId};

use crate::application::forms::{AsyncHandler, Handler, SubmitError};
use presentation::components::auth::ResetPasswordForm;
use presentation::components::timelines::TimelineForm;
use presentation::services::{use_password_policy, use_timeline_icons};

pub mod presentation;

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/client/src/main.rs`).
    let shell = use_context::<ShellKind>();
    let policy = use_password_policy();

    let layout = match shell {
        ShellKind::Desktop => "grid grid-cols-2 gap-8 p-8",
        ShellKind::Mobile => "flex flex-col gap-6 p-4",
    };

    let on_reset = AsyncHandler::new(|data: ResetPasswordData| {
        tracing::info!(
            password_length = data.password.chars().count(),
            "Password reset accepted"
        );
        async { Ok(()) }
    });

    rsx! {
        div {
            class: "{layout} min-h-screen bg-dark-bg",
            section {
                ResetPasswordForm {
                    policy: policy,
                    on_submit: on_reset,
                }
            }
            section {
                TimelineManager {}
            }
        }
    }
}

/// List of timelines with an editor for one of them at a time.
#[component]
fn TimelineManager() -> Element {
    let timelines: Signal<Vec<TimelineData>> = use_signal(Vec::new);
    let mut editing: Signal<Option<TimelineData>> = use_signal(|| None);

    let icons = use_timeline_icons();

    let save = AsyncHandler::new(move |draft: TimelineDraft| {
        let result = save_timeline(timelines, editing, draft).map_err(SubmitError::from);
        async move { result }
    });

    let archive = AsyncHandler::new(move |_: ()| {
        let mut timelines = timelines;
        let mut editing = editing;
        if let Some(target) = editing.peek().clone() {
            tracing::info!(timeline_id = ?target.id, "Timeline archived");
            let mut list = timelines.write();
            if let Some(existing) = list.iter_mut().find(|t| t.id == target.id) {
                *existing = target.archived();
            }
        }
        editing.set(None);
        async { Ok(()) }
    });

    let cancel = Handler::new(move |_: ()| {
        let mut editing = editing;
        editing.set(None);
    });

    let active: Vec<(String, String, TimelineData)> = timelines
        .read()
        .iter()
        .filter(|t| !t.archived)
        .map(|t| {
            let label = icons.label_for(&t.icon).unwrap_or(t.icon.as_str()).to_string();
            (record_key(t), label, t.clone())
        })
        .collect();
    let open = editing.read().clone().map(|t| (record_key(&t), t));

    rsx! {
        div {
            class: "flex flex-col gap-4",
            div {
                class: "flex justify-between items-center",
                h2 {
                    class: "m-0 text-white text-xl",
                    "Timelines"
                }
                button {
                    class: "px-4 py-2 bg-gray-700 text-white border-0 rounded-lg cursor-pointer",
                    onclick: move |_| editing.set(Some(TimelineData::default())),
                    "New timeline"
                }
            }
            ul {
                class: "flex flex-col gap-2",
                for (key, icon_label, timeline) in active {
                    li {
                        key: "{key}",
                        class: "flex justify-between text-gray-300",
                        span { "{timeline.name}" }
                        span {
                            class: "text-xs text-gray-500",
                            "{icon_label}"
                        }
                        button {
                            class: "text-sm text-blue-400 bg-transparent border-0 cursor-pointer",
                            onclick: {
                                let timeline = timeline.clone();
                                move |_| editing.set(Some(timeline.clone()))
                            },
                            "Edit"
                        }
                    }
                }
            }
            if let Some((key, data)) = open {
                TimelineForm {
                    key: "{key}",
                    initial: TimelineDraft::from(data),
                    on_submit: save,
                    on_archive: archive,
                    on_cancel: cancel,
                }
            }
        }
    }
}

/// Upsert the edited record and close the editor.
fn save_timeline(
    mut timelines: Signal<Vec<TimelineData>>,
    mut editing: Signal<Option<TimelineData>>,
    draft: TimelineDraft,
) -> anyhow::Result<()> {
    let base = editing.peek().clone().unwrap_or_default();
    let mut saved = base.with_draft(draft);
    if saved.id.is_none() {
        let id = TimelineId::new(Uuid::new_v4().to_string())
            .context("Assigning an id to the new timeline")?;
        saved.id = Some(id);
    }
    tracing::info!(timeline_id = ?saved.id, "Timeline saved");

    let mut list = timelines.write();
    match list.iter_mut().find(|t| t.id == saved.id) {
        Some(existing) => *existing = saved,
        None => list.push(saved),
    }
    drop(list);
    editing.set(None);
    Ok(())
}

/// Stable list key; unsaved records share the empty key.
fn record_key(timeline: &TimelineData) -> String {
    timeline
        .id
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default()
}
