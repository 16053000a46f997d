use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::product::Product;

/// Render an amount the way the storefront client expects decimal fields.
pub fn decimal_string(value: f64) -> String {
    value.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            slug: value.slug.into_inner(),
            description: value.description.map(String::from),
            image_url: value.image_url.map(|u| u.into_inner()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: String,
    pub compare_at_price: Option<String>,
    pub image_url: Option<String>,
    pub category_id: i32,
    pub is_featured: bool,
    pub is_trending: bool,
    pub badge: Option<String>,
    pub stock: i32,
    pub rating: String,
    pub review_count: i32,
}

impl From<Product> for ProductDto {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            slug: value.slug.into_inner(),
            description: value.description.map(String::from),
            price: decimal_string(value.price.get()),
            compare_at_price: value.compare_at_price.map(|p| decimal_string(p.get())),
            image_url: value.image_url.map(|u| u.into_inner()),
            category_id: value.category_id.get(),
            is_featured: value.is_featured,
            is_trending: value.is_trending,
            badge: value.badge.map(String::from),
            stock: value.stock.get(),
            rating: decimal_string(value.rating.get()),
            review_count: value.review_count.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_render_without_trailing_zeroes() {
        assert_eq!(decimal_string(349.0), "349");
        assert_eq!(decimal_string(4.5), "4.5");
        assert_eq!(decimal_string(0.0), "0");
    }
}
