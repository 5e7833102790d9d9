use thiserror::Error;

/// Form-level failure, shown in the form's error message region.
///
/// Raised by submit and archive handlers; field problems never end up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The receiving side refused the data
    #[error("{0}")]
    Rejected(String),

    /// The receiving side could not be reached
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl SubmitError {
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Keeps the whole context chain, outermost first.
impl From<anyhow::Error> for SubmitError {
    fn from(err: anyhow::Error) -> Self {
        Self::Rejected(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Context};

    #[test]
    fn anyhow_chain_becomes_rejection_message() {
        let err = Err::<(), _>(anyhow!("id cannot be empty"))
            .context("Saving timeline")
            .unwrap_err();

        assert_eq!(
            SubmitError::from(err),
            SubmitError::rejected("Saving timeline: id cannot be empty")
        );
    }

    #[test]
    fn unavailable_is_prefixed() {
        assert_eq!(
            SubmitError::unavailable("offline").to_string(),
            "Service unavailable: offline"
        );
    }
}
