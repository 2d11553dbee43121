//! Error returned by failing terminal operations

/// Why a chain did not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssertionError {
    /// The checks ran and the combination is false.
    #[error("{message}")]
    Invalid {
        /// Composed failure text.
        message: String,
    },
    /// A check could not run on its input (e.g. a null subject).
    #[error("{message}")]
    Precondition {
        /// Composed precondition text.
        message: String,
    },
}

impl AssertionError {
    /// The composed text.
    pub fn message(&self) -> &str {
        match self {
            AssertionError::Invalid { message } | AssertionError::Precondition { message } => {
                message
            }
        }
    }

    /// Whether this is a precondition failure.
    pub fn is_precondition(&self) -> bool {
        matches!(self, AssertionError::Precondition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = AssertionError::Precondition {
            message: "null".to_string(),
        };
        assert_eq!(err.to_string(), "null");
        assert!(err.is_precondition());
        assert_eq!(err.message(), "null");
    }
}
