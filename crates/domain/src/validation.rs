//! Field rules and validation results
//!
//! Each rule is a plain function over a field value returning
//! `Result<(), FieldError>`. Rules for one field are chained with
//! [`run_rules`], which stops at the first failure. A form validator collects
//! per-field outcomes into [`FieldErrors`] and turns them into a
//! [`Validation`] at the end.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of a form field as used in error maps and markup.
pub type FieldName = &'static str;

/// A single field rule.
pub type Rule<'a> = &'a dyn Fn(&str) -> Result<(), FieldError>;

/// Field-scoped validation failure, rendered inline next to the field.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FieldError {
    #[error("required")]
    Required,

    #[error("must be {max} characters or less")]
    MaxLength { max: usize },

    /// Reason text supplied by the external password policy, shown verbatim.
    #[error("{message}")]
    PasswordPolicy { message: String },

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("{value:?} is not one of the available options")]
    InvalidEnumValue { value: String },
}

impl FieldError {
    pub fn password_policy(message: impl Into<String>) -> Self {
        Self::PasswordPolicy {
            message: message.into(),
        }
    }

    pub fn invalid_enum_value(value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            value: value.into(),
        }
    }
}

// ============================================================================
// Rules
// ============================================================================

/// Fails with `Required` on an empty value. Whitespace counts as content.
pub fn required(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

/// Fails when the value is longer than `max` UTF-16 code units, the length
/// a browser reports for the same text.
pub fn max_length(value: &str, max: usize) -> Result<(), FieldError> {
    if value.encode_utf16().count() > max {
        Err(FieldError::MaxLength { max })
    } else {
        Ok(())
    }
}

/// Fails unless `value` is byte-for-byte equal to `expected`.
pub fn matches(value: &str, expected: &str) -> Result<(), FieldError> {
    if value == expected {
        Ok(())
    } else {
        Err(FieldError::PasswordMismatch)
    }
}

/// Fails unless `value` is one of `allowed`.
pub fn one_of<'a>(
    value: &str,
    allowed: impl IntoIterator<Item = &'a str>,
) -> Result<(), FieldError> {
    if allowed.into_iter().any(|candidate| candidate == value) {
        Ok(())
    } else {
        Err(FieldError::invalid_enum_value(value))
    }
}

/// Runs rules in order, returning the first failure.
pub fn run_rules(value: &str, rules: &[Rule<'_>]) -> Result<(), FieldError> {
    rules.iter().try_for_each(|rule| rule(value))
}

// ============================================================================
// FieldErrors
// ============================================================================

/// Errors keyed by field, one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field's outcome. An `Ok` clears any earlier error for it.
    pub fn record(&mut self, field: FieldName, outcome: Result<(), FieldError>) {
        match outcome {
            Ok(()) => {
                self.0.remove(field);
            }
            Err(error) => {
                self.0.insert(field, error);
            }
        }
    }

    pub fn insert(&mut self, field: FieldName, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    /// `Valid(value)` when nothing was recorded, `Invalid(self)` otherwise.
    pub fn into_validation<T>(self, value: T) -> Validation<T> {
        if self.is_empty() {
            Validation::Valid(value)
        } else {
            Validation::Invalid(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, error)?;
            first = false;
        }
        Ok(())
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Outcome of validating a whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T> {
    Valid(T),
    Invalid(FieldErrors),
}

impl<T> Validation<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    /// Errors of an invalid result; empty for a valid one.
    pub fn errors(&self) -> FieldErrors {
        match self {
            Validation::Valid(_) => FieldErrors::new(),
            Validation::Invalid(errors) => errors.clone(),
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_only_empty() {
        assert_eq!(required(""), Err(FieldError::Required));
        assert_eq!(required(" "), Ok(()));
        assert_eq!(required("a"), Ok(()));
    }

    #[test]
    fn max_length_counts_utf16_units() {
        assert_eq!(max_length(&"a".repeat(255), 255), Ok(()));
        assert_eq!(
            max_length(&"a".repeat(256), 255),
            Err(FieldError::MaxLength { max: 255 })
        );
        // BMP characters are one unit regardless of UTF-8 width
        assert_eq!(max_length(&"é".repeat(255), 255), Ok(()));
    }

    #[test]
    fn astral_characters_count_twice() {
        // U+1F600 is a surrogate pair: 127 of them plus one ASCII char is 255 units
        let at_limit = format!("{}a", "\u{1F600}".repeat(127));
        assert_eq!(max_length(&at_limit, 255), Ok(()));

        let over = "\u{1F600}".repeat(128);
        assert_eq!(over.chars().count(), 128);
        assert_eq!(max_length(&over, 255), Err(FieldError::MaxLength { max: 255 }));

        assert_eq!(
            max_length(&"\u{1F600}".repeat(200), 255),
            Err(FieldError::MaxLength { max: 255 })
        );
    }

    #[test]
    fn matches_is_exact() {
        assert_eq!(matches("Abc12345", "Abc12345"), Ok(()));
        assert_eq!(matches("abc12345", "Abc12345"), Err(FieldError::PasswordMismatch));
        assert_eq!(matches("Abc12345 ", "Abc12345"), Err(FieldError::PasswordMismatch));
    }

    #[test]
    fn one_of_reports_offending_value() {
        let allowed = ["star", "bell"];
        assert_eq!(one_of("bell", allowed), Ok(()));
        let err = one_of("rocket", allowed).unwrap_err();
        assert_eq!(err, FieldError::invalid_enum_value("rocket"));
        assert!(err.to_string().contains("rocket"));
    }

    #[test]
    fn run_rules_stops_at_first_failure() {
        let limit = |v: &str| max_length(v, 3);
        assert_eq!(run_rules("", &[&required, &limit]), Err(FieldError::Required));
        assert_eq!(
            run_rules("abcd", &[&required, &limit]),
            Err(FieldError::MaxLength { max: 3 })
        );
        assert_eq!(run_rules("abc", &[&required, &limit]), Ok(()));
    }

    #[test]
    fn record_clears_previous_error() {
        let mut errors = FieldErrors::new();
        errors.record("name", Err(FieldError::Required));
        assert!(errors.contains("name"));
        errors.record("name", Ok(()));
        assert!(errors.is_empty());
    }

    #[test]
    fn into_validation_depends_on_errors() {
        assert_eq!(FieldErrors::new().into_validation(7), Validation::Valid(7));

        let mut errors = FieldErrors::new();
        errors.insert("icon", FieldError::Required);
        let validation = errors.clone().into_validation(7);
        assert!(!validation.is_valid());
        assert_eq!(validation.errors(), errors);
    }

    #[test]
    fn policy_message_displayed_verbatim() {
        let err = FieldError::password_policy("password is too common");
        assert_eq!(err.to_string(), "password is too common");
    }

    #[test]
    fn field_errors_display_lists_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("name", FieldError::Required);
        errors.insert("icon", FieldError::Required);
        assert_eq!(errors.to_string(), "icon: required; name: required");
    }
}
