//! Lumen domain types for the password reset and timeline edit forms.
//!
//! Everything here is synchronous and free of UI concerns: the field error
//! taxonomy, composable field rules, the timeline descriptor and the password
//! reset request. The client crate drives these from its form engine.

pub mod entities;
pub mod error;
pub mod ids;
pub mod validation;
pub mod value_objects;

pub use entities::{
    fields, ResetPasswordData, TimelineData, TimelineDraft, TimelineFields,
    TIMELINE_DESCRIPTION_MAX_LENGTH, TIMELINE_NAME_MAX_LENGTH,
};
pub use error::DomainError;
pub use ids::{CollectionId, TimelineId};
pub use validation::{FieldError, FieldErrors, FieldName, Validation};
pub use value_objects::{IconCatalog, IconOption, PasswordComplexity};
