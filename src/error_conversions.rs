//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! `From` impls live here instead.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod server {
    use crate::domain::types::TypeConstraintError;
    use crate::forms::cart::{AddToCartFormError, UpdateQuantityFormError};
    use crate::forms::checkout::CheckoutFormError;
    use crate::services::ServiceError;

    impl From<TypeConstraintError> for ServiceError {
        fn from(val: TypeConstraintError) -> Self {
            ServiceError::TypeConstraint(val.to_string())
        }
    }

    impl From<AddToCartFormError> for ServiceError {
        fn from(val: AddToCartFormError) -> Self {
            match val {
                AddToCartFormError::Validation(errors) => ServiceError::Validation(errors),
                other => ServiceError::Form(other.to_string()),
            }
        }
    }

    impl From<UpdateQuantityFormError> for ServiceError {
        fn from(val: UpdateQuantityFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }

    impl From<CheckoutFormError> for ServiceError {
        fn from(val: CheckoutFormError) -> Self {
            match val {
                CheckoutFormError::Validation(errors) => ServiceError::Validation(errors),
                other => ServiceError::Form(other.to_string()),
            }
        }
    }
}
