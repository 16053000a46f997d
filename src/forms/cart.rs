use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::cart::NewCartItem;
use crate::domain::types::{CartItemId, ProductId, Quantity, SessionId, TypeConstraintError};

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartForm {
    #[validate(length(min = 1, message = "session id is required"))]
    pub session_id: String,
    #[validate(range(min = 1, message = "product id must be positive"))]
    pub product_id: i32,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
}

#[derive(Debug, Error)]
pub enum AddToCartFormError {
    #[error("Invalid cart item data: {0}")]
    Validation(ValidationErrors),
    #[error("Invalid cart item data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddToCartFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<TypeConstraintError> for AddToCartFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddToCartForm> for NewCartItem {
    type Error = AddToCartFormError;

    fn try_from(value: AddToCartForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            session_id: SessionId::new(value.session_id)?,
            product_id: ProductId::new(value.product_id)?,
            quantity: Quantity::new(value.quantity)?,
        })
    }
}

/// Body of a quantity change. Zero or negative quantities remove the line.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityForm {
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateQuantityFormPayload {
    pub item_id: CartItemId,
    pub quantity: i32,
}

#[derive(Debug, Error)]
pub enum UpdateQuantityFormError {
    #[error("Invalid ID or quantity: {0}")]
    TypeConstraint(String),
}

impl From<TypeConstraintError> for UpdateQuantityFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl UpdateQuantityForm {
    pub fn into_payload(self, item_id: &str) -> Result<UpdateQuantityFormPayload, UpdateQuantityFormError> {
        let item_id = item_id.trim().parse::<i32>().map_err(|_| {
            UpdateQuantityFormError::TypeConstraint(format!("cart item id: {item_id}"))
        })?;
        Ok(UpdateQuantityFormPayload {
            item_id: CartItemId::new(item_id)?,
            quantity: self.quantity,
        })
    }
}
