//! Password reset request

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::{matches, required, run_rules, FieldError};

/// Field names used by the reset form.
pub mod fields {
    use crate::validation::FieldName;

    pub const PASSWORD: FieldName = "password";
    pub const PASSWORD_CONFIRM: FieldName = "password_confirm";
}

/// New password and its confirmation, as submitted by the reset form.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordData {
    pub password: String,
    pub password_confirm: String,
}

impl ResetPasswordData {
    pub fn new(password: impl Into<String>, password_confirm: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            password_confirm: password_confirm.into(),
        }
    }

    /// The password must be present before it is sent to the policy check.
    pub fn check_password_present(&self) -> Result<(), FieldError> {
        required(&self.password)
    }

    /// The confirmation must be present and identical to the password.
    pub fn check_confirmation(&self) -> Result<(), FieldError> {
        let same_as_password = |v: &str| matches(v, &self.password);
        run_rules(&self.password_confirm, &[&required, &same_as_password])
    }
}

impl fmt::Debug for ResetPasswordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetPasswordData")
            .field("password", &"<redacted>")
            .field("password_confirm", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_required() {
        let data = ResetPasswordData::default();
        assert_eq!(data.check_password_present(), Err(FieldError::Required));
        assert_eq!(data.check_confirmation(), Err(FieldError::Required));
    }

    #[test]
    fn mismatched_confirmation_rejected() {
        let data = ResetPasswordData::new("Abc12345", "Abc12346");
        assert_eq!(data.check_password_present(), Ok(()));
        assert_eq!(data.check_confirmation(), Err(FieldError::PasswordMismatch));
    }

    #[test]
    fn matching_confirmation_accepted() {
        let data = ResetPasswordData::new("Abc12345", "Abc12345");
        assert_eq!(data.check_confirmation(), Ok(()));
    }

    #[test]
    fn debug_never_shows_password() {
        let data = ResetPasswordData::new("Abc12345", "Abc12345");
        let rendered = format!("{:?}", data);
        assert!(!rendered.contains("Abc12345"));
        assert!(rendered.contains("redacted"));
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let json = serde_json::to_value(ResetPasswordData::new("a", "b")).unwrap();
        assert_eq!(json["password"], "a");
        assert_eq!(json["password_confirm"], "b");
    }
}
