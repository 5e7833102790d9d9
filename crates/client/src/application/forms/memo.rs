//! Per-form cache for asynchronous field checks
//!
//! Keyed by the exact input value. An entry holds the shared check future,
//! so a value being checked and a value already checked are looked up the
//! same way, and a second request for either joins the first instead of
//! calling the port again. The cache belongs to one form instance and is
//! dropped with it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::{FutureExt, LocalBoxFuture, Shared};

use crate::ports::outbound::PasswordPolicyPort;

type PendingCheck = Shared<LocalBoxFuture<'static, Option<String>>>;

/// Password policy check memoized by exact password value.
pub struct MemoizedPolicy {
    policy: Arc<dyn PasswordPolicyPort>,
    checks: RefCell<HashMap<String, PendingCheck>>,
}

impl MemoizedPolicy {
    pub fn new(policy: Arc<dyn PasswordPolicyPort>) -> Self {
        Self {
            policy,
            checks: RefCell::new(HashMap::new()),
        }
    }

    /// Rejection reason for `password`, or `None` if the policy accepts it.
    ///
    /// The port is called at most once per distinct value for the lifetime
    /// of this cache.
    pub async fn check(&self, password: &str) -> Option<String> {
        let pending = {
            let mut checks = self.checks.borrow_mut();
            checks
                .entry(password.to_owned())
                .or_insert_with(|| {
                    tracing::debug!(cached = false, "Starting password policy check");
                    let policy = Arc::clone(&self.policy);
                    let password = password.to_owned();
                    async move { policy.validate(&password).await }
                        .boxed_local()
                        .shared()
                })
                .clone()
        };
        pending.await
    }
}
