//! Form engine
//!
//! A small form library the two form views are built on: state container
//! with dirty tracking, async-capable schemas, a per-form memo for external
//! checks, and drivers for the submit lifecycle.

mod error;
mod handler;
mod memo;
mod schema;
mod state;
mod submission;

pub use error::SubmitError;
pub use handler::{AsyncHandler, Handler, SubmitFuture};
pub use memo::MemoizedPolicy;
pub use schema::FormSchema;
pub use state::{FormState, SubmitStatus};
pub use submission::{revalidate, run_action, submit, FormStore};
