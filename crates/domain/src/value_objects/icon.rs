//! Timeline icon catalog

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One selectable icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconOption {
    /// Stored value, e.g. `"star"`
    pub value: String,
    /// Label shown in the select
    pub label: String,
}

impl IconOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Derive a label by capitalizing the value.
    fn from_value(value: &str) -> Self {
        let mut chars = value.chars();
        let label = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        Self::new(value, label)
    }
}

/// The set of icons a timeline may use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconCatalog(Vec<IconOption>);

impl IconCatalog {
    /// Build a catalog, dropping duplicate values (first one wins).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the catalog would be empty or a
    /// value is blank.
    pub fn new(options: Vec<IconOption>) -> Result<Self, DomainError> {
        let mut unique: Vec<IconOption> = Vec::with_capacity(options.len());
        for option in options {
            if option.value.trim().is_empty() {
                return Err(DomainError::validation("Icon value cannot be empty"));
            }
            if !unique.iter().any(|o| o.value == option.value) {
                unique.push(option);
            }
        }
        if unique.is_empty() {
            return Err(DomainError::validation("Icon catalog cannot be empty"));
        }
        Ok(Self(unique))
    }

    pub fn options(&self) -> &[IconOption] {
        &self.0
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|o| o.value.as_str())
    }

    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

impl Default for IconCatalog {
    fn default() -> Self {
        Self(
            ["star", "balloons", "mail", "warning", "bell", "cloud"]
                .iter()
                .map(|value| IconOption::from_value(value))
                .collect(),
        )
    }
}

impl FromStr for IconCatalog {
    type Err = DomainError;

    /// Parses a comma separated list of icon values, e.g. `star,bell,cloud`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let options = s
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(IconOption::from_value)
            .collect();
        Self::new(options).map_err(|e| DomainError::parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_star() {
        let catalog = IconCatalog::default();
        assert_eq!(catalog.label_for("star"), Some("Star"));
        assert_eq!(catalog.label_for("Star"), None);
    }

    #[test]
    fn parse_dedups_and_labels() {
        let catalog: IconCatalog = "bell, cloud,bell".parse().unwrap();
        assert_eq!(catalog.values().collect::<Vec<_>>(), vec!["bell", "cloud"]);
        assert_eq!(catalog.label_for("cloud"), Some("Cloud"));
    }

    #[test]
    fn empty_catalog_rejected() {
        let err = " , ".parse::<IconCatalog>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(IconCatalog::new(vec![IconOption::new(" ", "Blank")]).is_err());
    }
}
