use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;
use crate::domain::types::{CartItemId, ProductId, Quantity, SessionId};

/// One line of a session's cart.
///
/// At most one item exists per `(session_id, product_id)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: CartItemId,
    pub session_id: SessionId,
    pub product_id: ProductId,
    pub quantity: Quantity,
    pub created_at: NaiveDateTime,
}

/// Request to add `quantity` units of a product to a session's cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCartItem {
    pub session_id: SessionId,
    pub product_id: ProductId,
    pub quantity: Quantity,
}

/// Cart item paired with its product, if the product still resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: CartItem,
    pub product: Option<Product>,
}

/// Outcome of setting a cart item's quantity.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityUpdate {
    /// The quantity was positive and the item now carries it.
    Updated(CartItem),
    /// The quantity was zero or below and the item was deleted.
    Removed,
    /// No item with that id exists.
    NotFound,
}
