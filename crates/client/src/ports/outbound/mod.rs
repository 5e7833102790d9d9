//! Outbound ports - services the forms call out to.

mod password_policy_port;

pub use password_policy_port::PasswordPolicyPort;

#[cfg(any(test, feature = "testing"))]
pub use password_policy_port::MockPasswordPolicyPort;
