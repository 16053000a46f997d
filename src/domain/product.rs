use serde::{Deserialize, Serialize};

use crate::domain::types::{
    BadgeLabel, CategoryId, Description, ImageUrl, ProductId, ProductName, ProductPrice, Rating,
    ReviewCount, Slug, StockCount,
};

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub slug: Slug,
    pub description: Option<Description>,
    pub price: ProductPrice,
    /// Original price before discount.
    pub compare_at_price: Option<ProductPrice>,
    pub image_url: Option<ImageUrl>,
    pub category_id: CategoryId,
    pub is_featured: bool,
    pub is_trending: bool,
    pub badge: Option<BadgeLabel>,
    pub stock: StockCount,
    pub rating: Rating,
    pub review_count: ReviewCount,
}

impl Product {
    /// Case-insensitive substring match against name and description.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

/// Information required to create a new [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub name: ProductName,
    pub slug: Slug,
    pub description: Option<Description>,
    pub price: ProductPrice,
    pub compare_at_price: Option<ProductPrice>,
    pub image_url: Option<ImageUrl>,
    pub category_id: CategoryId,
    pub is_featured: bool,
    pub is_trending: bool,
    pub badge: Option<BadgeLabel>,
    pub stock: StockCount,
    pub rating: Rating,
    pub review_count: ReviewCount,
}
