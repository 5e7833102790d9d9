//! Port traits the client depends on.

pub mod outbound;
