//! Form state container
//!
//! Holds the initial and current values of one form instance together with
//! field errors, which fields the user has visited, and where the form is in
//! its submission lifecycle. It has no Dioxus dependency; components keep it
//! in a `Signal` and call into it from event handlers.

use std::collections::BTreeSet;

use lumen_domain::{FieldError, FieldErrors, FieldName, Validation};

use super::SubmitError;

/// Where a form is in its submission lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// Submit pressed, awaiting validation
    Validating,
    /// Validation passed, awaiting the submit handler
    Submitting,
    /// The handler succeeded
    Succeeded,
    /// The handler failed; the error is shown at form level
    Failed(SubmitError),
}

/// State of one form instance.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<V> {
    initial: V,
    values: V,
    errors: FieldErrors,
    touched: BTreeSet<FieldName>,
    submit_attempted: bool,
    status: SubmitStatus,
}

impl<V: Clone + PartialEq> FormState<V> {
    pub fn new(initial: V) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: FieldErrors::new(),
            touched: BTreeSet::new(),
            submit_attempted: false,
            status: SubmitStatus::Idle,
        }
    }

    pub fn initial(&self) -> &V {
        &self.initial
    }

    pub fn values(&self) -> &V {
        &self.values
    }

    /// Whether the current values differ from the initial ones.
    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self.status,
            SubmitStatus::Validating | SubmitStatus::Submitting
        )
    }

    /// Whether the submit control should be enabled.
    ///
    /// `require_dirty` gates forms that only make sense after an edit.
    pub fn can_submit(&self, require_dirty: bool) -> bool {
        !self.is_busy() && (!require_dirty || self.is_dirty())
    }

    /// Edit the current values and mark `field` as touched.
    ///
    /// A previous submit failure is cleared, since it applied to the old
    /// values.
    pub fn edit(&mut self, field: FieldName, update: impl FnOnce(&mut V)) {
        update(&mut self.values);
        self.touched.insert(field);
        if matches!(self.status, SubmitStatus::Failed(_) | SubmitStatus::Succeeded) {
            self.status = SubmitStatus::Idle;
        }
    }

    pub fn touch(&mut self, field: FieldName) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// Whether any validation has reason to run: a field was visited or a
    /// submit was attempted.
    pub fn wants_validation(&self) -> bool {
        self.submit_attempted || !self.touched.is_empty()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error to show next to `field`.
    ///
    /// Hidden until the user has visited the field or tried to submit.
    pub fn visible_error(&self, field: &str) -> Option<&FieldError> {
        if self.submit_attempted || self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Whether `validated` are still the current values.
    pub fn is_current(&self, validated: &V) -> bool {
        &self.values == validated
    }

    /// Whether applying `validation` of `validated` would change anything.
    pub fn would_apply(&self, validated: &V, validation: &Validation<V>) -> bool {
        self.is_current(validated) && self.errors != validation.errors()
    }

    /// Store the outcome of validating `validated`.
    ///
    /// Ignored when the values have changed since validation started; a
    /// newer run will report on the current values.
    pub fn apply_validation(&mut self, validated: &V, validation: &Validation<V>) -> bool {
        if !self.is_current(validated) {
            return false;
        }
        self.errors = validation.errors();
        true
    }

    /// Error message for the form-level region.
    pub fn submit_error(&self) -> Option<&SubmitError> {
        match &self.status {
            SubmitStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    // ------------------------------------------------------------------------
    // Submission lifecycle
    // ------------------------------------------------------------------------

    /// Start a submission. Returns the values to validate, or `None` if a
    /// submission is already running.
    pub fn begin_submit(&mut self) -> Option<V> {
        if self.is_busy() {
            return None;
        }
        self.submit_attempted = true;
        self.status = SubmitStatus::Validating;
        Some(self.values.clone())
    }

    /// Validation rejected `validated`; back to idle.
    ///
    /// The errors are shown only if the user has not edited the form while
    /// validation was pending.
    pub fn reject(&mut self, validated: &V, errors: FieldErrors) {
        if self.is_current(validated) {
            self.errors = errors;
        }
        self.status = SubmitStatus::Idle;
    }

    /// Validation of `validated` passed; the handler is about to run.
    pub fn mark_submitting(&mut self, validated: &V) {
        if self.is_current(validated) {
            self.errors = FieldErrors::new();
        }
        self.status = SubmitStatus::Submitting;
    }

    /// Record the handler's outcome.
    ///
    /// On success the submitted values become the new baseline, so the form
    /// is clean again.
    pub fn finish_submit(&mut self, submitted: V, result: Result<(), SubmitError>) {
        self.status = match result {
            Ok(()) => {
                self.initial = submitted;
                SubmitStatus::Succeeded
            }
            Err(err) => SubmitStatus::Failed(err),
        };
    }

    /// Start a non-validating action such as archive.
    pub fn begin_action(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.status = SubmitStatus::Submitting;
        true
    }

    /// Record an action's outcome; values are left as they are.
    pub fn finish_action(&mut self, result: Result<(), SubmitError>) {
        self.status = match result {
            Ok(()) => SubmitStatus::Succeeded,
            Err(err) => SubmitStatus::Failed(err),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Values {
        name: String,
    }

    fn named(name: &str) -> Values {
        Values {
            name: name.to_string(),
        }
    }

    #[test]
    fn dirty_tracks_difference_from_initial() {
        let mut form = FormState::new(named("Launch"));
        assert!(!form.is_dirty());
        assert!(!form.can_submit(true));
        assert!(form.can_submit(false));

        form.edit("name", |v| v.name = "Launch v2".to_string());
        assert!(form.is_dirty());
        assert!(form.can_submit(true));

        form.edit("name", |v| v.name = "Launch".to_string());
        assert!(!form.is_dirty());
        assert!(!form.can_submit(true));
    }

    #[test]
    fn errors_hidden_until_touched_or_submitted() {
        let mut form = FormState::new(Values::default());
        let mut errors = FieldErrors::new();
        errors.insert("name", FieldError::Required);
        let validation = Validation::Invalid(errors);

        assert!(form.apply_validation(&Values::default(), &validation));
        assert_eq!(form.visible_error("name"), None);

        form.touch("name");
        assert_eq!(form.visible_error("name"), Some(&FieldError::Required));

        let mut fresh = FormState::new(Values::default());
        fresh.apply_validation(&Values::default(), &validation);
        fresh.begin_submit();
        assert_eq!(fresh.visible_error("name"), Some(&FieldError::Required));
    }

    #[test]
    fn stale_validation_ignored() {
        let mut form = FormState::new(Values::default());
        form.edit("name", |v| v.name = "new".to_string());

        let mut errors = FieldErrors::new();
        errors.insert("name", FieldError::Required);
        assert!(!form.apply_validation(&Values::default(), &Validation::Invalid(errors)));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn begin_submit_refuses_while_busy() {
        let mut form = FormState::new(named("a"));
        assert_eq!(form.begin_submit(), Some(named("a")));
        assert_eq!(form.status(), &SubmitStatus::Validating);
        assert_eq!(form.begin_submit(), None);

        form.mark_submitting(&named("a"));
        assert!(form.is_busy());
        assert!(!form.can_submit(false));
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn rejected_submit_returns_to_idle_with_errors() {
        let mut form = FormState::new(Values::default());
        let submitted = form.begin_submit().unwrap();

        let mut errors = FieldErrors::new();
        errors.insert("name", FieldError::Required);
        form.reject(&submitted, errors);

        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert_eq!(form.visible_error("name"), Some(&FieldError::Required));
    }

    #[test]
    fn failed_submit_surfaces_error_until_next_edit() {
        let mut form = FormState::new(named("a"));
        form.edit("name", |v| v.name = "b".to_string());
        let submitted = form.begin_submit().unwrap();
        form.mark_submitting(&submitted);
        form.finish_submit(submitted, Err(SubmitError::rejected("server said no")));

        assert_eq!(form.submit_error(), Some(&SubmitError::rejected("server said no")));
        assert!(form.is_dirty());

        form.edit("name", |v| v.name = "c".to_string());
        assert_eq!(form.submit_error(), None);
        assert_eq!(form.status(), &SubmitStatus::Idle);
    }

    #[test]
    fn successful_submit_rebases_initial_values() {
        let mut form = FormState::new(named("a"));
        form.edit("name", |v| v.name = "b".to_string());
        let submitted = form.begin_submit().unwrap();
        form.mark_submitting(&submitted);
        form.finish_submit(submitted, Ok(()));

        assert_eq!(form.status(), &SubmitStatus::Succeeded);
        assert_eq!(form.initial(), &named("b"));
        assert!(!form.is_dirty());
    }

    #[test]
    fn action_failure_keeps_values() {
        let mut form = FormState::new(named("a"));
        form.edit("name", |v| v.name = "b".to_string());
        assert!(form.begin_action());
        assert!(!form.begin_action());
        form.finish_action(Err(SubmitError::unavailable("offline")));

        assert_eq!(form.values(), &named("b"));
        assert_eq!(form.submit_error(), Some(&SubmitError::unavailable("offline")));
    }

    #[test]
    fn late_rejection_keeps_newer_errors() {
        let mut form = FormState::new(named("slow"));
        let submitted = form.begin_submit().unwrap();

        form.edit("name", |v| v.name = "fast".to_string());
        assert!(form.apply_validation(&named("fast"), &Validation::Valid(named("fast"))));

        let mut stale = FieldErrors::new();
        stale.insert("name", FieldError::password_policy("too weak"));
        form.reject(&submitted, stale);

        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn would_apply_only_for_current_values_with_new_errors() {
        let mut form = FormState::new(named("a"));
        let valid = Validation::Valid(named("a"));
        assert!(!form.would_apply(&named("a"), &valid));

        let mut errors = FieldErrors::new();
        errors.insert("name", FieldError::Required);
        let invalid = Validation::Invalid(errors);
        assert!(form.would_apply(&named("a"), &invalid));
        assert!(!form.would_apply(&named("b"), &invalid));

        form.apply_validation(&named("a"), &invalid);
        assert!(!form.would_apply(&named("a"), &invalid));
    }
}
