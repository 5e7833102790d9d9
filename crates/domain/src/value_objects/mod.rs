//! Value objects shared by the form flows

mod icon;
mod password_complexity;

pub use icon::{IconCatalog, IconOption};
pub use password_complexity::PasswordComplexity;
