use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::cart::CartLine;
use crate::domain::pricing::CartTotals;
use crate::domain::types::SessionId;
use crate::dto::catalog::ProductDto;

/// Cart item enriched with its resolved product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub id: i32,
    pub session_id: String,
    pub product_id: i32,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
    pub product: Option<ProductDto>,
}

impl From<CartLine> for CartItemDto {
    fn from(value: CartLine) -> Self {
        let CartLine { item, product } = value;
        Self {
            id: item.id.get(),
            session_id: item.session_id.into_inner(),
            product_id: item.product_id.get(),
            quantity: item.quantity.get(),
            created_at: item.created_at,
            product: product.map(ProductDto::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummaryDto {
    pub session_id: String,
    pub item_count: i64,
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
}

impl CartSummaryDto {
    pub fn new(session_id: SessionId, totals: CartTotals) -> Self {
        Self {
            session_id: session_id.into_inner(),
            item_count: totals.item_count,
            subtotal: totals.subtotal,
            shipping: totals.shipping,
            total: totals.total,
        }
    }
}
