//! Editable records behind the form flows

mod credentials;
mod timeline;

pub use credentials::ResetPasswordData;
pub use timeline::{
    TimelineData, TimelineDraft, TimelineFields, TIMELINE_DESCRIPTION_MAX_LENGTH,
    TIMELINE_NAME_MAX_LENGTH,
};

/// Field names per form.
pub mod fields {
    pub mod reset_password {
        pub use crate::entities::credentials::fields::*;
    }

    pub mod timeline {
        pub use crate::entities::timeline::fields::*;
    }
}
