use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::pricing::CartTotals;
use crate::domain::types::{PaymentMethod, SessionId};

/// Validated shipping and payment details captured at checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutDetails {
    pub session_id: SessionId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
}

impl CheckoutDetails {
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Result of a successful checkout.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderConfirmation {
    pub order_number: String,
    pub session_id: SessionId,
    pub customer_name: String,
    pub email: String,
    pub payment_method: PaymentMethod,
    pub totals: CartTotals,
    pub placed_at: NaiveDateTime,
}
