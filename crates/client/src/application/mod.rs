//! Application layer: form engine and the rules of each form.

pub mod forms;
pub mod reset_password;
pub mod timeline;

pub use reset_password::ResetPasswordSchema;
pub use timeline::{archive_action, TimelineSchema};
