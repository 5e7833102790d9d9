//! Timeline descriptor
//!
//! A timeline groups events on a chart. On the client it is edited as a
//! [`TimelineDraft`]: either a new descriptor that has never been saved, or an
//! existing one carrying its server id. The variant decides which actions the
//! edit form offers.

use serde::{Deserialize, Serialize};

use crate::ids::{CollectionId, TimelineId};
use crate::validation::{max_length, one_of, required, run_rules, FieldErrors, Validation};
use crate::value_objects::IconCatalog;

/// Maximum length for a timeline name
pub const TIMELINE_NAME_MAX_LENGTH: usize = 255;

/// Maximum length for a timeline description
pub const TIMELINE_DESCRIPTION_MAX_LENGTH: usize = 255;

/// Field names used by the timeline form.
pub mod fields {
    use crate::validation::FieldName;

    pub const NAME: FieldName = "name";
    pub const DESCRIPTION: FieldName = "description";
    pub const ICON: FieldName = "icon";
}

/// The user-editable part of a timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimelineFields {
    pub name: String,
    /// Empty means no description
    #[serde(default)]
    pub description: String,
    pub icon: String,
}

impl TimelineFields {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }
}

/// A timeline descriptor under edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimelineDraft {
    /// Not yet saved; creating it is the only action.
    New(TimelineFields),
    /// Already saved; can be updated or archived.
    Existing {
        id: TimelineId,
        fields: TimelineFields,
    },
}

impl Default for TimelineDraft {
    fn default() -> Self {
        TimelineDraft::New(TimelineFields::default())
    }
}

impl TimelineDraft {
    pub fn existing(id: TimelineId, fields: TimelineFields) -> Self {
        TimelineDraft::Existing { id, fields }
    }

    pub fn id(&self) -> Option<&TimelineId> {
        match self {
            TimelineDraft::New(_) => None,
            TimelineDraft::Existing { id, .. } => Some(id),
        }
    }

    pub fn fields(&self) -> &TimelineFields {
        match self {
            TimelineDraft::New(fields) | TimelineDraft::Existing { fields, .. } => fields,
        }
    }

    pub fn fields_mut(&mut self) -> &mut TimelineFields {
        match self {
            TimelineDraft::New(fields) | TimelineDraft::Existing { fields, .. } => fields,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, TimelineDraft::New(_))
    }

    /// Label of the submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.is_new() {
            "Create"
        } else {
            "Update"
        }
    }

    /// Only saved timelines can be archived.
    pub fn can_archive(&self) -> bool {
        !self.is_new()
    }

    /// Check name, description and icon against their rules.
    ///
    /// Returns the draft unchanged when every field passes.
    pub fn validate(&self, icons: &IconCatalog) -> Validation<TimelineDraft> {
        let fields = self.fields();
        let mut errors = FieldErrors::new();

        let name_limit = |v: &str| max_length(v, TIMELINE_NAME_MAX_LENGTH);
        errors.record(fields::NAME, run_rules(&fields.name, &[&required, &name_limit]));

        errors.record(
            fields::DESCRIPTION,
            max_length(&fields.description, TIMELINE_DESCRIPTION_MAX_LENGTH),
        );

        let in_catalog = |v: &str| one_of(v, icons.values());
        errors.record(fields::ICON, run_rules(&fields.icon, &[&required, &in_catalog]));

        errors.into_validation(self.clone())
    }
}

// ============================================================================
// Wire shape
// ============================================================================

/// Timeline as exchanged with the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TimelineId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub icon: String,
    #[serde(default)]
    pub collection_id: Option<CollectionId>,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub archived: bool,
}

impl TimelineData {
    /// Apply an edited draft on top of this record.
    ///
    /// Fields the form does not edit (collection, default, archived) are
    /// kept. An empty description is stored as `None`.
    pub fn with_draft(self, draft: TimelineDraft) -> Self {
        let id = draft.id().cloned().or(self.id);
        let TimelineFields {
            name,
            description,
            icon,
        } = match draft {
            TimelineDraft::New(fields) | TimelineDraft::Existing { fields, .. } => fields,
        };
        Self {
            id,
            name,
            description: (!description.is_empty()).then_some(description),
            icon,
            ..self
        }
    }

    /// The same record flagged as archived.
    pub fn archived(self) -> Self {
        Self {
            archived: true,
            ..self
        }
    }
}

impl From<TimelineData> for TimelineDraft {
    fn from(data: TimelineData) -> Self {
        let fields = TimelineFields {
            name: data.name,
            description: data.description.unwrap_or_default(),
            icon: data.icon,
        };
        match data.id {
            Some(id) => TimelineDraft::Existing { id, fields },
            None => TimelineDraft::New(fields),
        }
    }
}
