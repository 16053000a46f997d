use diesel::prelude::*;

use crate::domain::product::{Product as DomainProduct, NewProduct as DomainNewProduct};
use crate::domain::types::{
    BadgeLabel, Description, ImageUrl, ProductName, ProductPrice, Rating, ReviewCount, Slug,
    StockCount, TypeConstraintError,
};

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: f64,
    pub compare_at_price: Option<f64>,
    pub image_url: Option<String>,
    pub category_id: i32,
    pub is_featured: bool,
    pub is_trending: bool,
    pub badge: Option<String>,
    pub stock: i32,
    pub rating: f64,
    pub review_count: i32,
}

/// Insertable form of [`Product`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub price: f64,
    pub compare_at_price: Option<f64>,
    pub image_url: Option<&'a str>,
    pub category_id: i32,
    pub is_featured: bool,
    pub is_trending: bool,
    pub badge: Option<&'a str>,
    pub stock: i32,
    pub rating: f64,
    pub review_count: i32,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            name: ProductName::new(product.name)?,
            slug: Slug::new(product.slug)?,
            description: product.description.map(Description::new).transpose()?,
            price: ProductPrice::new(product.price)?,
            compare_at_price: product.compare_at_price.map(ProductPrice::new).transpose()?,
            image_url: product.image_url.map(ImageUrl::new).transpose()?,
            category_id: product.category_id.try_into()?,
            is_featured: product.is_featured,
            is_trending: product.is_trending,
            badge: product.badge.map(BadgeLabel::new).transpose()?,
            stock: StockCount::new(product.stock)?,
            rating: Rating::new(product.rating)?,
            review_count: ReviewCount::new(product.review_count)?,
        })
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(product: &'a DomainNewProduct) -> Self {
        Self {
            name: product.name.as_str(),
            slug: product.slug.as_str(),
            description: product.description.as_ref().map(|d| d.as_str()),
            price: product.price.get(),
            compare_at_price: product.compare_at_price.map(ProductPrice::get),
            image_url: product.image_url.as_ref().map(|u| u.as_str()),
            category_id: product.category_id.get(),
            is_featured: product.is_featured,
            is_trending: product.is_trending,
            badge: product.badge.as_ref().map(|b| b.as_str()),
            stock: product.stock.get(),
            rating: product.rating.get(),
            review_count: product.review_count.get(),
        }
    }
}
