use thiserror::Error;
use validator::ValidationErrors;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// Submitted form fields failed validation.
    #[error("{0}")]
    Validation(ValidationErrors),
    /// Submitted data was rejected for a reason not tied to a single field.
    #[error("{0}")]
    Form(String),
    /// A value violated a domain constraint.
    #[error("{0}")]
    TypeConstraint(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
