//! Cart totals derived from resolved cart lines.
//!
//! Everything here is pure and recomputed on demand; nothing is cached.

use serde::Serialize;

use crate::domain::cart::CartLine;

/// Orders with a subtotal strictly above this amount ship for free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 1000.0;
/// Flat shipping fee charged below the threshold.
pub const FLAT_SHIPPING_FEE: f64 = 50.0;

/// Derived totals for a cart.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CartTotals {
    pub item_count: i64,
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
}

impl CartTotals {
    pub fn from_lines(lines: &[CartLine]) -> Self {
        let subtotal = subtotal(lines);
        let shipping = shipping(subtotal);
        Self {
            item_count: item_count(lines),
            subtotal,
            shipping,
            total: total(subtotal, shipping),
        }
    }
}

/// Sum of `price * quantity`; lines whose product did not resolve add nothing.
pub fn subtotal(lines: &[CartLine]) -> f64 {
    lines
        .iter()
        .filter_map(|line| {
            line.product
                .as_ref()
                .map(|product| product.price.get() * f64::from(line.item.quantity.get()))
        })
        .sum()
}

pub fn shipping(subtotal: f64) -> f64 {
    if subtotal > FREE_SHIPPING_THRESHOLD {
        0.0
    } else {
        FLAT_SHIPPING_FEE
    }
}

pub fn total(subtotal: f64, shipping: f64) -> f64 {
    subtotal + shipping
}

/// Total units across all lines, resolved or not.
pub fn item_count(lines: &[CartLine]) -> i64 {
    lines
        .iter()
        .map(|line| i64::from(line.item.quantity.get()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::CartItem;
    use crate::domain::product::Product;
    use crate::domain::types::{
        CartItemId, CategoryId, ProductId, ProductName, ProductPrice, Quantity, Rating,
        ReviewCount, SessionId, Slug, StockCount,
    };
    use chrono::DateTime;

    fn product(id: i32, price: f64) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            name: ProductName::new(format!("Product {id}")).unwrap(),
            slug: Slug::new(format!("product-{id}")).unwrap(),
            description: None,
            price: ProductPrice::new(price).unwrap(),
            compare_at_price: None,
            image_url: None,
            category_id: CategoryId::new(1).unwrap(),
            is_featured: false,
            is_trending: false,
            badge: None,
            stock: StockCount::new(10).unwrap(),
            rating: Rating::default(),
            review_count: ReviewCount::new(0).unwrap(),
        }
    }

    fn line(id: i32, quantity: i32, product: Option<Product>) -> CartLine {
        CartLine {
            item: CartItem {
                id: CartItemId::new(id).unwrap(),
                session_id: SessionId::new("session").unwrap(),
                product_id: ProductId::new(id).unwrap(),
                quantity: Quantity::new(quantity).unwrap(),
                created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            },
            product,
        }
    }

    #[test]
    fn free_shipping_above_threshold() {
        let lines = vec![line(1, 2, Some(product(1, 600.0)))];
        let totals = CartTotals::from_lines(&lines);
        assert_eq!(totals.subtotal, 1200.0);
        assert_eq!(totals.shipping, 0.0);
        assert_eq!(totals.total, 1200.0);
        assert_eq!(totals.item_count, 2);
    }

    #[test]
    fn flat_fee_below_threshold() {
        let lines = vec![line(1, 1, Some(product(1, 100.0)))];
        let totals = CartTotals::from_lines(&lines);
        assert_eq!(totals.subtotal, 100.0);
        assert_eq!(totals.shipping, 50.0);
        assert_eq!(totals.total, 150.0);
    }

    #[test]
    fn threshold_itself_is_not_free() {
        assert_eq!(shipping(1000.0), FLAT_SHIPPING_FEE);
        assert_eq!(shipping(1000.01), 0.0);
    }

    #[test]
    fn unresolved_products_contribute_nothing() {
        let lines = vec![
            line(1, 3, Some(product(1, 249.0))),
            line(2, 5, None),
        ];
        assert_eq!(subtotal(&lines), 747.0);
        assert_eq!(item_count(&lines), 8);
    }

    #[test]
    fn empty_cart_still_pays_shipping() {
        let totals = CartTotals::from_lines(&[]);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.shipping, 50.0);
        assert_eq!(totals.total, 50.0);
        assert_eq!(totals.item_count, 0);
    }
}
