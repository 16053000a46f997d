use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::checkout::OrderConfirmation;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmationDto {
    pub order_number: String,
    pub session_id: String,
    pub customer_name: String,
    pub email: String,
    pub payment_method: String,
    pub item_count: i64,
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
    pub placed_at: NaiveDateTime,
}

impl From<OrderConfirmation> for OrderConfirmationDto {
    fn from(value: OrderConfirmation) -> Self {
        Self {
            order_number: value.order_number,
            session_id: value.session_id.into_inner(),
            customer_name: value.customer_name,
            email: value.email,
            payment_method: value.payment_method.as_str().to_string(),
            item_count: value.totals.item_count,
            subtotal: value.totals.subtotal,
            shipping: value.totals.shipping,
            total: value.totals.total,
            placed_at: value.placed_at,
        }
    }
}
