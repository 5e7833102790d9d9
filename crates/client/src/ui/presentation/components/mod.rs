//! Presentation components.

pub mod auth;
pub mod forms;
pub mod timelines;
