//! Error taxonomy shared by every link adapter, the repository and the service.

use thiserror::Error;

/// Boxed backend error carried by [`LinkError::Unexpected`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used across the link layers.
pub type LinkResult<T> = Result<T, LinkError>;

/// Outcome of a failed link operation.
///
/// `NotFound` is an expected outcome of lookups and is never treated as a
/// failure by the instrumentation layer. Everything a backend reports that has
/// no domain meaning ends up in `Unexpected`, untouched.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Link not found")]
    NotFound,

    #[error("Link is not valid: {0}")]
    InvalidInput(String),

    #[error("Link's slug already exists")]
    AlreadyExists,

    #[error("Operation `{0}` is not implemented")]
    NotImplemented(&'static str),

    #[error("Unexpected backend error: {0}")]
    Unexpected(#[source] BoxError),
}

impl LinkError {
    /// Wraps any backend error (or message) as [`LinkError::Unexpected`].
    pub fn unexpected(err: impl Into<BoxError>) -> Self {
        Self::Unexpected(err.into())
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Returns true for the expected "nothing stored under this slug" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl From<sqlx::Error> for LinkError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound,
            other if crate::utils::db_error::is_unique_violation_on_slug(&other) => {
                Self::AlreadyExists
            }
            other => Self::unexpected(other),
        }
    }
}

impl From<redis::RedisError> for LinkError {
    fn from(err: redis::RedisError) -> Self {
        Self::unexpected(err)
    }
}
