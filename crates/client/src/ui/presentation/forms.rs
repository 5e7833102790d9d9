//! Dioxus binding of the form engine
//!
//! [`use_form`] creates one schema and one state signal per mounted form.
//! [`use_form_keyed`] also rebuilds the schema whenever its key changes.
//! The returned [`FormController`] is what event handlers call into; it
//! spawns the async validation and submission drivers on the component's
//! scope.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::Instrument;
use uuid::Uuid;

use lumen_domain::FieldName;

use crate::application::forms::{self, AsyncHandler, FormSchema, FormState, FormStore};

impl<V: 'static> FormStore<V> for Signal<FormState<V>> {
    fn read_form<R>(&self, f: impl FnOnce(&FormState<V>) -> R) -> R {
        f(&self.peek())
    }

    fn with_form<R>(&self, f: impl FnOnce(&mut FormState<V>) -> R) -> R {
        let mut signal = *self;
        let mut state = signal.write();
        f(&mut *state)
    }
}

pub struct FormController<S: FormSchema + 'static> {
    pub state: Signal<FormState<S::Values>>,
    schema: Rc<S>,
    session: Uuid,
}

impl<S: FormSchema + 'static> Clone for FormController<S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            schema: Rc::clone(&self.schema),
            session: self.session,
        }
    }
}

/// Schema built from a key, rebuilt only when the key changes.
pub struct SchemaSlot<K, S> {
    current: RefCell<Option<(K, Rc<S>)>>,
}

impl<K: PartialEq, S> SchemaSlot<K, S> {
    pub fn new() -> Self {
        Self {
            current: RefCell::new(None),
        }
    }

    /// Schema for `key`, building it with `make` on first use or a new key.
    pub fn get(&self, key: K, make: impl FnOnce(&K) -> S) -> Rc<S> {
        let mut current = self.current.borrow_mut();
        if let Some((cached, schema)) = current.as_ref() {
            if *cached == key {
                return Rc::clone(schema);
            }
            tracing::debug!("Form schema rebuilt for new inputs");
        }
        let schema = Rc::new(make(&key));
        *current = Some((key, Rc::clone(&schema)));
        schema
    }
}

impl<K: PartialEq, S> Default for SchemaSlot<K, S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the schema and state of a form for the lifetime of the calling
/// component.
pub fn use_form<S: FormSchema + 'static>(
    make_schema: impl FnOnce() -> S,
    initial: impl FnOnce() -> S::Values,
) -> FormController<S> {
    use_form_keyed((), move |_| make_schema(), initial)
}

/// Like [`use_form`], but the schema is rebuilt whenever `key` differs from
/// the previous render's. Form state is kept across rebuilds.
pub fn use_form_keyed<K, S>(
    key: K,
    make_schema: impl FnOnce(&K) -> S,
    initial: impl FnOnce() -> S::Values,
) -> FormController<S>
where
    K: PartialEq + 'static,
    S: FormSchema + 'static,
{
    let slot = use_hook(|| Rc::new(SchemaSlot::<K, S>::new()));
    let schema = slot.get(key, make_schema);
    let state = use_signal(|| FormState::new(initial()));
    let session = use_hook(Uuid::new_v4);

    use_drop(move || {
        tracing::debug!(form_session = %session, "Form disposed");
    });

    FormController {
        state,
        schema,
        session,
    }
}

impl<S: FormSchema + 'static> FormController<S> {
    pub fn schema(&self) -> &S {
        &self.schema
    }

    fn span(&self) -> tracing::Span {
        tracing::debug_span!("form", form_session = %self.session)
    }

    /// Apply a user edit to `field` and re-validate.
    pub fn edit(&self, field: FieldName, update: impl FnOnce(&mut S::Values)) {
        self.state.with_form(|form| form.edit(field, update));
        self.revalidate();
    }

    /// The user left `field`.
    pub fn blur(&self, field: FieldName) {
        self.state.with_form(|form| form.touch(field));
        self.revalidate();
    }

    pub fn revalidate(&self) {
        let state = self.state;
        let schema = Rc::clone(&self.schema);
        spawn(
            async move {
                forms::revalidate(&state, schema.as_ref()).await;
            }
            .instrument(self.span()),
        );
    }

    pub fn submit(&self, handler: AsyncHandler<S::Values>) {
        let state = self.state;
        let schema = Rc::clone(&self.schema);
        spawn(
            async move {
                forms::submit(&state, schema.as_ref(), &handler).await;
            }
            .instrument(self.span()),
        );
    }

    /// Run a non-validating action such as archive.
    pub fn run_action(&self, handler: AsyncHandler<()>) {
        let state = self.state;
        spawn(
            async move {
                forms::run_action(&state, &handler).await;
            }
            .instrument(self.span()),
        );
    }
}
