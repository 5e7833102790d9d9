//! Password complexity requirements
//!
//! The site-wide password policy is configured as a minimum total length and
//! minimum counts per character class. The same requirements drive the
//! human-readable description shown above the reset form and the local
//! policy check.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Minimum length and per-class counts a password must meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PasswordComplexity {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub lower: u32,
    #[serde(default)]
    pub upper: u32,
    #[serde(default)]
    pub digit: u32,
    #[serde(default)]
    pub special: u32,
}

impl Default for PasswordComplexity {
    /// The "normal" strength preset: six characters including one number.
    fn default() -> Self {
        Self {
            total: 6,
            lower: 0,
            upper: 0,
            digit: 1,
            special: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharacterClass {
    Lower,
    Upper,
    Digit,
    Special,
}

impl CharacterClass {
    const ALL: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    fn label(self, count: u32) -> &'static str {
        match (self, count == 1) {
            (CharacterClass::Lower, true) => "lower case letter",
            (CharacterClass::Lower, false) => "lower case letters",
            (CharacterClass::Upper, true) => "upper case letter",
            (CharacterClass::Upper, false) => "upper case letters",
            (CharacterClass::Digit, true) => "number",
            (CharacterClass::Digit, false) => "numbers",
            (CharacterClass::Special, true) => "special character",
            (CharacterClass::Special, false) => "special characters",
        }
    }

    fn matches(self, c: char) -> bool {
        match self {
            CharacterClass::Lower => c.is_lowercase(),
            CharacterClass::Upper => c.is_uppercase(),
            CharacterClass::Digit => c.is_ascii_digit(),
            CharacterClass::Special => !c.is_alphanumeric() && !c.is_whitespace(),
        }
    }
}

impl PasswordComplexity {
    fn required(&self, class: CharacterClass) -> u32 {
        match class {
            CharacterClass::Lower => self.lower,
            CharacterClass::Upper => self.upper,
            CharacterClass::Digit => self.digit,
            CharacterClass::Special => self.special,
        }
    }

    /// Human-readable requirement text, completing "passwords ...".
    ///
    /// e.g. "must be at least 6 characters long and include 1 number"
    pub fn description(&self) -> String {
        let classes: Vec<String> = CharacterClass::ALL
            .iter()
            .filter_map(|class| {
                let count = self.required(*class);
                (count > 0).then(|| format!("{} {}", count, class.label(count)))
            })
            .collect();

        match (self.total, classes.is_empty()) {
            (0, true) => "can be anything".to_string(),
            (0, false) => format!("must include {}", join_with_and(&classes)),
            (total, true) => format!("must be at least {} characters long", total),
            (total, false) => format!(
                "must be at least {} characters long and include {}",
                total,
                join_with_and(&classes)
            ),
        }
    }

    /// Evaluate a password locally.
    ///
    /// Returns `None` when every requirement is met, otherwise the rejection
    /// reason to show next to the field.
    pub fn check(&self, password: &str) -> Option<String> {
        let length = password.chars().count() as u32;
        let short = length < self.total;
        let missing_class = CharacterClass::ALL.iter().any(|class| {
            let found = password.chars().filter(|c| class.matches(*c)).count() as u32;
            found < self.required(*class)
        });

        if short || missing_class {
            Some(format!("password {}", self.description()))
        } else {
            None
        }
    }
}

fn join_with_and(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

impl fmt::Display for PasswordComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total={},lower={},upper={},digit={},special={}",
            self.total, self.lower, self.upper, self.digit, self.special
        )
    }
}

impl FromStr for PasswordComplexity {
    type Err = DomainError;

    /// Parses `key=value` pairs separated by commas, e.g. `total=8,digit=1`.
    /// Keys that are not given default to zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut complexity = PasswordComplexity {
            total: 0,
            lower: 0,
            upper: 0,
            digit: 0,
            special: 0,
        };

        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| DomainError::parse(format!("Expected key=value, got: {}", pair)))?;
            let count: u32 = value.trim().parse().map_err(|_| {
                DomainError::parse(format!("Invalid count for {}: {}", key.trim(), value.trim()))
            })?;
            match key.trim().to_ascii_lowercase().as_str() {
                "total" => complexity.total = count,
                "lower" => complexity.lower = count,
                "upper" => complexity.upper = count,
                "digit" => complexity.digit = count,
                "special" => complexity.special = count,
                other => {
                    return Err(DomainError::parse(format!(
                        "Unknown complexity key: {}",
                        other
                    )))
                }
            }
        }

        Ok(complexity)
    }
}
