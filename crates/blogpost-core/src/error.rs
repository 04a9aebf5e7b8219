//! Domain-level error types.

use thiserror::Error;

/// Boxed cause of a store failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{message}")]
    Store {
        message: String,
        #[source]
        source: BoxError,
    },
}

impl RepoError {
    /// Wrap a store failure with a description of the operation that failed.
    pub fn store(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        RepoError::Store {
            message: message.into(),
            source: source.into(),
        }
    }
}

/// Service-level errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Blog Post with ID {id} not found.")]
    NotFound { id: i32 },

    #[error("{message}")]
    Repository {
        message: String,
        #[source]
        source: RepoError,
    },
}

impl ServiceError {
    pub(crate) fn repository(message: impl Into<String>, source: RepoError) -> Self {
        ServiceError::Repository {
            message: message.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_service_error_keeps_cause_chain() {
        let io = std::io::Error::other("disk full");
        let err = ServiceError::repository(
            "An error occurred while adding a new blog post.",
            RepoError::store("An error occurred while adding a new blog post.", io),
        );

        let repo = err.source().expect("repository cause");
        let store = repo.source().expect("store cause");
        assert_eq!(store.to_string(), "disk full");
    }

    #[test]
    fn test_not_found_message() {
        let err = ServiceError::NotFound { id: 999 };
        assert_eq!(err.to_string(), "Blog Post with ID 999 not found.");
    }
}
