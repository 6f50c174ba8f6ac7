//! Error types for validator construction

use thiserror::Error;

/// Result type for validator construction
pub type ValidatorResult<T> = Result<T, ValidatorError>;

/// Errors that can occur while building a validator
///
/// Request-time validation failures are never surfaced as errors; they are
/// delivered through the [`Responder`](crate::Responder) capability instead.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The validation spec named no sections
    #[error("misconfigured: no required fields set")]
    EmptySpec,

    /// Generic configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ValidatorError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_spec_message() {
        let err = ValidatorError::EmptySpec;
        assert_eq!(err.to_string(), "misconfigured: no required fields set");
    }

    #[test]
    fn test_config_helper() {
        let err = ValidatorError::config("bad option");
        assert_eq!(err.to_string(), "configuration error: bad option");
    }
}
