//! Password reset form rules
//!
//! `password` must be present and accepted by the site policy;
//! `password_confirm` must be present and identical. The policy check goes
//! through a [`MemoizedPolicy`] owned by the schema, so one schema instance
//! per mounted form gives one cache per form session.

use std::sync::Arc;

use async_trait::async_trait;
use lumen_domain::fields::reset_password::{PASSWORD, PASSWORD_CONFIRM};
use lumen_domain::{FieldError, FieldErrors, ResetPasswordData, Validation};

use crate::application::forms::{FormSchema, MemoizedPolicy};
use crate::ports::outbound::PasswordPolicyPort;

pub struct ResetPasswordSchema {
    policy: MemoizedPolicy,
}

impl ResetPasswordSchema {
    pub fn new(policy: Arc<dyn PasswordPolicyPort>) -> Self {
        Self {
            policy: MemoizedPolicy::new(policy),
        }
    }

    /// Values a freshly mounted form starts from.
    pub fn initial_values() -> ResetPasswordData {
        ResetPasswordData::default()
    }

    async fn check_password(&self, data: &ResetPasswordData) -> Result<(), FieldError> {
        data.check_password_present()?;
        // A blank reason counts as acceptance
        match self.policy.check(&data.password).await {
            Some(reason) if !reason.is_empty() => Err(FieldError::password_policy(reason)),
            _ => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl FormSchema for ResetPasswordSchema {
    type Values = ResetPasswordData;

    async fn validate(&self, values: &ResetPasswordData) -> Validation<ResetPasswordData> {
        let mut errors = FieldErrors::new();
        errors.record(PASSWORD, self.check_password(values).await);
        errors.record(PASSWORD_CONFIRM, values.check_confirmation());
        errors.into_validation(values.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::forms::{revalidate, submit, AsyncHandler, FormState, FormStore};
    use crate::ports::outbound::MockPasswordPolicyPort;
    use mockall::predicate::eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn approving_policy() -> MockPasswordPolicyPort {
        let mut policy = MockPasswordPolicyPort::new();
        policy.expect_validate().returning(|_| None);
        policy
    }

    fn recording_handler() -> (AsyncHandler<ResetPasswordData>, Rc<RefCell<Vec<ResetPasswordData>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let handler = AsyncHandler::new(move |data: ResetPasswordData| {
            sink.borrow_mut().push(data);
            async { Ok(()) }
        });
        (handler, calls)
    }

    fn enter(store: &RefCell<FormState<ResetPasswordData>>, password: &str, confirm: &str) {
        store.with_form(|form| {
            form.edit(PASSWORD, |v| v.password = password.to_string());
            form.edit(PASSWORD_CONFIRM, |v| v.password_confirm = confirm.to_string());
        });
    }

    #[tokio::test]
    async fn empty_form_reports_required() {
        let mut policy = MockPasswordPolicyPort::new();
        policy.expect_validate().never();
        let schema = ResetPasswordSchema::new(Arc::new(policy));

        let errors = schema
            .validate(&ResetPasswordSchema::initial_values())
            .await
            .errors();
        assert_eq!(errors.get(PASSWORD), Some(&FieldError::Required));
        assert_eq!(errors.get(PASSWORD_CONFIRM), Some(&FieldError::Required));
    }

    #[tokio::test]
    async fn policy_reason_shown_verbatim() {
        let mut policy = MockPasswordPolicyPort::new();
        policy
            .expect_validate()
            .with(eq("password"))
            .returning(|_| Some("password is too common".to_string()));
        let schema = ResetPasswordSchema::new(Arc::new(policy));

        let errors = schema
            .validate(&ResetPasswordData::new("password", "password"))
            .await
            .errors();
        assert_eq!(
            errors.get(PASSWORD).map(ToString::to_string),
            Some("password is too common".to_string())
        );
        assert!(!errors.contains(PASSWORD_CONFIRM));
    }

    #[tokio::test]
    async fn policy_called_once_per_password_value() {
        let mut policy = MockPasswordPolicyPort::new();
        policy.expect_validate().with(eq("Abc12345")).times(1).returning(|_| None);
        policy.expect_validate().with(eq("Abc123456")).times(1).returning(|_| None);
        let schema = ResetPasswordSchema::new(Arc::new(policy));

        for confirm in ["", "A", "Abc12345"] {
            schema.validate(&ResetPasswordData::new("Abc12345", confirm)).await;
        }
        schema.validate(&ResetPasswordData::new("Abc123456", "")).await;
        schema.validate(&ResetPasswordData::new("Abc12345", "Abc12345")).await;
    }

    #[tokio::test]
    async fn mismatch_blocks_until_corrected() {
        let schema = ResetPasswordSchema::new(Arc::new(approving_policy()));
        let store = RefCell::new(FormState::new(ResetPasswordSchema::initial_values()));
        let (handler, calls) = recording_handler();

        enter(&store, "Abc12345", "Abc12346");
        assert!(!submit(&store, &schema, &handler).await);
        assert!(calls.borrow().is_empty());
        assert_eq!(
            store.borrow().visible_error(PASSWORD_CONFIRM),
            Some(&FieldError::PasswordMismatch)
        );

        enter(&store, "Abc12345", "Abc12345");
        assert!(submit(&store, &schema, &handler).await);
        assert_eq!(*calls.borrow(), vec![ResetPasswordData::new("Abc12345", "Abc12345")]);
    }

    #[tokio::test]
    async fn rejected_password_blocks_submit() {
        let mut policy = MockPasswordPolicyPort::new();
        policy
            .expect_validate()
            .returning(|_| Some("must include 1 number".to_string()));
        let schema = ResetPasswordSchema::new(Arc::new(policy));
        let store = RefCell::new(FormState::new(ResetPasswordSchema::initial_values()));
        let (handler, calls) = recording_handler();

        enter(&store, "abcdefgh", "abcdefgh");
        assert!(!submit(&store, &schema, &handler).await);
        assert!(calls.borrow().is_empty());
        assert_eq!(
            store.borrow().visible_error(PASSWORD),
            Some(&FieldError::password_policy("must include 1 number"))
        );
    }

    #[tokio::test]
    async fn blank_policy_reason_accepts_password() {
        let mut policy = MockPasswordPolicyPort::new();
        policy.expect_validate().returning(|_| Some(String::new()));
        let schema = ResetPasswordSchema::new(Arc::new(policy));

        let validation = schema
            .validate(&ResetPasswordData::new("Abc12345", "Abc12345"))
            .await;
        assert!(validation.is_valid());
    }

    #[tokio::test]
    async fn changing_password_rechecks_visited_confirmation() {
        let schema = ResetPasswordSchema::new(Arc::new(approving_policy()));
        let store = RefCell::new(FormState::new(ResetPasswordSchema::initial_values()));
        let set_password = |password: &str| {
            store.with_form(|form| form.edit(PASSWORD, |v| v.password = password.to_string()));
        };

        store.with_form(|form| {
            form.edit(PASSWORD_CONFIRM, |v| v.password_confirm = "Abc12345".to_string())
        });
        set_password("Abc12345");
        revalidate(&store, &schema).await;
        assert_eq!(store.borrow().visible_error(PASSWORD_CONFIRM), None);

        set_password("Abc123456");
        revalidate(&store, &schema).await;
        assert_eq!(
            store.borrow().visible_error(PASSWORD_CONFIRM),
            Some(&FieldError::PasswordMismatch)
        );

        set_password("Abc12345");
        revalidate(&store, &schema).await;
        assert_eq!(store.borrow().visible_error(PASSWORD_CONFIRM), None);
    }
}
