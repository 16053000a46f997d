use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::cart::CartItem as DomainCartItem;
use crate::domain::types::{Quantity, SessionId, TypeConstraintError};

/// Diesel model representing a row in the `cart_items` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::cart_items)]
pub struct CartItem {
    pub id: i32,
    pub session_id: String,
    pub product_id: i32,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`CartItem`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::cart_items)]
pub struct NewCartItem<'a> {
    pub session_id: &'a str,
    pub product_id: i32,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
}

impl TryFrom<CartItem> for DomainCartItem {
    type Error = TypeConstraintError;

    fn try_from(item: CartItem) -> Result<Self, Self::Error> {
        Ok(Self {
            id: item.id.try_into()?,
            session_id: SessionId::new(item.session_id)?,
            product_id: item.product_id.try_into()?,
            quantity: Quantity::new(item.quantity)?,
            created_at: item.created_at,
        })
    }
}
