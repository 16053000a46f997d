use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::checkout::CheckoutDetails;
use crate::domain::types::{PaymentMethod, SessionId, TypeConstraintError};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    #[validate(length(min = 1, message = "session id is required"))]
    pub session_id: String,
    #[validate(length(min = 2, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 2, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 10, message = "Phone number must be at least 10 digits"))]
    pub phone: String,
    #[validate(length(min = 5, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 2, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 2, message = "State is required"))]
    pub state: String,
    #[validate(length(min = 6, message = "Pincode must be 6 digits"))]
    pub pincode: String,
    pub payment_method: String,
    pub notes: Option<String>,
}

#[derive(Debug, Error)]
pub enum CheckoutFormError {
    #[error("Checkout form validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("Checkout form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CheckoutFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<TypeConstraintError> for CheckoutFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CheckoutForm> for CheckoutDetails {
    type Error = CheckoutFormError;

    fn try_from(value: CheckoutForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            session_id: SessionId::new(value.session_id)?,
            first_name: value.first_name.trim().to_string(),
            last_name: value.last_name.trim().to_string(),
            email: value.email.trim().to_string(),
            phone: value.phone.trim().to_string(),
            address: value.address.trim().to_string(),
            city: value.city.trim().to_string(),
            state: value.state.trim().to_string(),
            pincode: value.pincode.trim().to_string(),
            payment_method: PaymentMethod::try_from(value.payment_method.as_str())?,
            notes: value
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_form(session_id: &str) -> CheckoutForm {
        CheckoutForm {
            session_id: session_id.to_string(),
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "12 Lotus Lane".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "411001".to_string(),
            payment_method: "upi".to_string(),
            notes: Some("  ".to_string()),
        }
    }

    #[test]
    fn accepts_valid_form() {
        let details: CheckoutDetails = sample_form("abc").try_into().unwrap();
        assert_eq!(details.payment_method, PaymentMethod::Upi);
        assert_eq!(details.customer_name(), "Asha Rao");
        assert!(details.notes.is_none());
    }

    #[test]
    fn rejects_invalid_email() {
        let mut form = sample_form("abc");
        form.email = "not-an-email".to_string();
        let result: Result<CheckoutDetails, _> = form.try_into();
        let err = result.unwrap_err();
        assert!(matches!(err, CheckoutFormError::Validation(_)));
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn rejects_short_pincode() {
        let mut form = sample_form("abc");
        form.pincode = "4110".to_string();
        let result: Result<CheckoutDetails, _> = form.try_into();
        assert!(matches!(result, Err(CheckoutFormError::Validation(_))));
    }

    #[test]
    fn rejects_unknown_payment_method() {
        let mut form = sample_form("abc");
        form.payment_method = "barter".to_string();
        let result: Result<CheckoutDetails, _> = form.try_into();
        assert!(matches!(result, Err(CheckoutFormError::TypeConstraint(_))));
    }
}
