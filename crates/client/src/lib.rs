//! Lumen client crate.
//!
//! Form engine, password policy adapters and the Dioxus form views for
//! password reset and timeline editing. Multi-platform support is provided
//! via compile-time `cfg` selection.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::ShellKind;
