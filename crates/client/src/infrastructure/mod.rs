//! Adapters implementing the outbound ports.

pub mod password_policy;

pub use password_policy::ComplexityPolicy;
