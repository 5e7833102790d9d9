//! Callback wrappers injected into forms
//!
//! Dioxus props must be `Clone + PartialEq`. These wrappers hold the callback
//! behind an `Rc` and compare by pointer, so a parent passing the same
//! handler again does not force a re-render.

use std::future::Future;
use std::rc::Rc;

use futures_util::future::{FutureExt, LocalBoxFuture};

use super::SubmitError;

/// Fire-and-forget callback, e.g. cancel.
pub struct Handler<T: 'static>(Rc<dyn Fn(T)>);

impl<T: 'static> Handler<T> {
    pub fn new(f: impl Fn(T) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, value: T) {
        (self.0)(value)
    }
}

impl<T: 'static> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: 'static> PartialEq for Handler<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Result of an asynchronous form action.
pub type SubmitFuture = LocalBoxFuture<'static, Result<(), SubmitError>>;

/// Asynchronous callback whose failure is surfaced by the form, e.g. submit
/// or archive.
pub struct AsyncHandler<T: 'static>(Rc<dyn Fn(T) -> SubmitFuture>);

impl<T: 'static> AsyncHandler<T> {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(T) -> Fut + 'static,
        Fut: Future<Output = Result<(), SubmitError>> + 'static,
    {
        Self(Rc::new(move |value| f(value).boxed_local()))
    }

    pub fn call(&self, value: T) -> SubmitFuture {
        (self.0)(value)
    }
}

impl<T: 'static> Clone for AsyncHandler<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: 'static> PartialEq for AsyncHandler<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn clones_compare_equal_distinct_handlers_do_not() {
        let a = Handler::new(|_: ()| {});
        let b = Handler::new(|_: ()| {});
        assert!(a == a.clone());
        assert!(a != b);
    }

    #[test]
    fn handler_forwards_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let handler = Handler::new(move |v: u32| sink.borrow_mut().push(v));
        handler.call(3);
        handler.clone().call(4);
        assert_eq!(*seen.borrow(), vec![3, 4]);
    }

    #[tokio::test]
    async fn async_handler_returns_callback_result() {
        let ok = AsyncHandler::new(|_: ()| async { Ok(()) });
        assert_eq!(ok.call(()).await, Ok(()));

        let failing = AsyncHandler::new(|_: ()| async { Err(SubmitError::rejected("nope")) });
        assert_eq!(failing.call(()).await, Err(SubmitError::rejected("nope")));
    }
}
