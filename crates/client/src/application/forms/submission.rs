//! Validation and submission drivers
//!
//! These run the async part of a form's lifecycle against a [`FormStore`],
//! touching the state only between suspension points so the store is never
//! borrowed across an `.await`.

use std::cell::RefCell;

use lumen_domain::Validation;

use super::{AsyncHandler, FormSchema, FormState};

/// Shared access to a form's state.
///
/// Implemented for `Signal<FormState<_>>` in the UI layer and for
/// `RefCell<FormState<_>>` elsewhere. `read_form` must not notify
/// subscribers; `with_form` does.
pub trait FormStore<V> {
    fn read_form<R>(&self, f: impl FnOnce(&FormState<V>) -> R) -> R;

    fn with_form<R>(&self, f: impl FnOnce(&mut FormState<V>) -> R) -> R;
}

impl<V> FormStore<V> for RefCell<FormState<V>> {
    fn read_form<R>(&self, f: impl FnOnce(&FormState<V>) -> R) -> R {
        f(&self.borrow())
    }

    fn with_form<R>(&self, f: impl FnOnce(&mut FormState<V>) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Re-run validation on the current values.
///
/// Does nothing until a field has been visited or a submit attempted.
pub async fn revalidate<S, St>(store: &St, schema: &S)
where
    S: FormSchema + ?Sized,
    St: FormStore<S::Values> + ?Sized,
{
    let Some(values) = store.read_form(|form| form.wants_validation().then(|| form.values().clone()))
    else {
        return;
    };

    let validation = schema.validate(&values).await;
    let applied = store.read_form(|form| form.would_apply(&values, &validation))
        && store.with_form(|form| form.apply_validation(&values, &validation));
    tracing::debug!(
        valid = validation.is_valid(),
        applied,
        "Form revalidated"
    );
}

/// Validate, then hand the values to `handler`.
///
/// Returns `true` when the handler ran and succeeded.
pub async fn submit<S, St>(store: &St, schema: &S, handler: &AsyncHandler<S::Values>) -> bool
where
    S: FormSchema + ?Sized,
    St: FormStore<S::Values> + ?Sized,
{
    let Some(values) = store.with_form(|form| form.begin_submit()) else {
        tracing::debug!("Submit ignored: form is busy");
        return false;
    };

    let valid = match schema.validate(&values).await {
        Validation::Valid(valid) => valid,
        Validation::Invalid(errors) => {
            tracing::debug!(error_count = errors.len(), "Submit blocked by field errors");
            store.with_form(|form| form.reject(&values, errors));
            return false;
        }
    };

    store.with_form(|form| form.mark_submitting(&valid));
    let result = handler.call(valid.clone()).await;
    let succeeded = result.is_ok();
    match &result {
        Ok(()) => tracing::info!("Form submitted"),
        Err(e) => tracing::warn!(error = %e, "Form submission failed"),
    }
    store.with_form(|form| form.finish_submit(valid, result));
    succeeded
}

/// Run an action that needs no validation, such as archive.
pub async fn run_action<V, St>(store: &St, handler: &AsyncHandler<()>) -> bool
where
    V: Clone + PartialEq,
    St: FormStore<V> + ?Sized,
{
    if !store.with_form(|form| form.begin_action()) {
        tracing::debug!("Action ignored: form is busy");
        return false;
    }

    let result = handler.call(()).await;
    let succeeded = result.is_ok();
    if let Err(e) = &result {
        tracing::warn!(error = %e, "Form action failed");
    }
    store.with_form(|form| form.finish_action(result));
    succeeded
}
