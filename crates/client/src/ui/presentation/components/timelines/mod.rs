//! Timeline views.

mod timeline_form;

pub use timeline_form::{TimelineForm, TimelineFormProps};
