//! Form controls shared by the form views.
//!
//! These are stateless: each takes its current value and error and reports
//! input through event handlers. State lives in the owning form's
//! [`FormController`](crate::ui::presentation::forms::FormController).

mod form_archive_button;
mod form_error_message;
mod form_input;
mod form_select;
mod form_submit_button;
mod form_text_area;

pub use form_archive_button::FormArchiveButton;
pub use form_error_message::FormErrorMessage;
pub use form_input::FormInput;
pub use form_select::FormSelect;
pub use form_submit_button::FormSubmitButton;
pub use form_text_area::FormTextArea;
