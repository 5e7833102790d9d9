//! In-process password policy
//!
//! Evaluates the configured [`PasswordComplexity`] without a round trip.
//! Used by the composition root when no server-side check is wired in.

use lumen_domain::PasswordComplexity;

use crate::ports::outbound::PasswordPolicyPort;

#[derive(Debug, Clone, Default)]
pub struct ComplexityPolicy {
    complexity: PasswordComplexity,
}

impl ComplexityPolicy {
    pub fn new(complexity: PasswordComplexity) -> Self {
        Self { complexity }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl PasswordPolicyPort for ComplexityPolicy {
    async fn validate(&self, password: &str) -> Option<String> {
        let reason = self.complexity.check(password);
        tracing::debug!(accepted = reason.is_none(), "Local password policy evaluated");
        reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_compliant_password() {
        let policy = ComplexityPolicy::default();
        assert_eq!(policy.validate("Abc12345").await, None);
    }

    #[tokio::test]
    async fn rejects_with_requirement_text() {
        let policy = ComplexityPolicy::new("total=8,special=1".parse().unwrap());
        assert_eq!(
            policy.validate("Abc12345").await,
            Some("password must be at least 8 characters long and include 1 special character".to_string())
        );
    }
}
