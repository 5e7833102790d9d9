//! PasswordPolicyPort - site password policy check
//!
//! The reset form does not know the password rules itself. It hands each
//! candidate password to this port, which may evaluate it locally or ask the
//! server. Implementations live in `crate::infrastructure`.

/// Checks a candidate password against the site policy.
///
/// Use via Dioxus context: `use_context::<Services>().password_policy`
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait PasswordPolicyPort: Send + Sync {
    /// Returns `None` when the password is acceptable, otherwise the reason
    /// to show the user.
    async fn validate(&self, password: &str) -> Option<String>;
}
