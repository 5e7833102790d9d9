//! Service providers for the presentation layer
//!
//! The composition root puts a [`Services`] bundle into Dioxus context.
//! Components read what they need through the `use_*` hooks below instead of
//! depending on infrastructure types.

use dioxus::prelude::*;
use std::sync::Arc;

use lumen_domain::{IconCatalog, PasswordComplexity};

use crate::ports::outbound::PasswordPolicyPort;

/// Everything the form views need from outside the UI.
#[derive(Clone)]
pub struct Services {
    pub password_policy: Arc<dyn PasswordPolicyPort>,
    pub password_complexity: PasswordComplexity,
    pub timeline_icons: IconCatalog,
}

impl Services {
    pub fn new(
        password_policy: Arc<dyn PasswordPolicyPort>,
        password_complexity: PasswordComplexity,
        timeline_icons: IconCatalog,
    ) -> Self {
        Self {
            password_policy,
            password_complexity,
            timeline_icons,
        }
    }
}

/// Password policy handle usable as a component prop.
///
/// Compares by pointer, like the form handlers.
#[derive(Clone)]
pub struct PolicyHandle(Arc<dyn PasswordPolicyPort>);

impl PolicyHandle {
    pub fn new(policy: Arc<dyn PasswordPolicyPort>) -> Self {
        Self(policy)
    }

    pub fn port(&self) -> Arc<dyn PasswordPolicyPort> {
        Arc::clone(&self.0)
    }
}

impl PartialEq for PolicyHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Hook to access the password policy from context
pub fn use_password_policy() -> PolicyHandle {
    let services = use_context::<Services>();
    PolicyHandle::new(services.password_policy)
}

/// Hook to access the configured password complexity
pub fn use_password_complexity() -> PasswordComplexity {
    use_context::<Services>().password_complexity
}

/// Hook to access the timeline icon catalog
pub fn use_timeline_icons() -> IconCatalog {
    use_context::<Services>().timeline_icons
}
