//! Presentation layer: services context, form binding, and components.

pub mod components;
pub mod forms;
pub mod services;

pub use services::Services;
