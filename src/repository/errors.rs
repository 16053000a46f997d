use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The addressed record does not exist.
    #[error("not found")]
    NotFound,
    /// Stored or supplied data violates a domain constraint.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// A pooled connection could not be obtained.
    #[error("connection error: {0}")]
    ConnectionError(String),
    /// The database rejected a query.
    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<diesel::result::Error> for RepositoryError {
    fn from(value: diesel::result::Error) -> Self {
        match value {
            diesel::result::Error::NotFound => RepositoryError::NotFound,
            other => RepositoryError::DatabaseError(other.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for RepositoryError {
    fn from(value: diesel::r2d2::PoolError) -> Self {
        RepositoryError::ConnectionError(value.to_string())
    }
}
