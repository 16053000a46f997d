use crate::db::{DbConnection, DbPool};
use crate::domain::cart::{CartItem, NewCartItem, QuantityUpdate};
use crate::domain::category::{Category, NewCategory};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::{CartItemId, ProductId, SessionId, Slug};

pub mod cart;
pub mod catalog;
pub mod category;
pub mod errors;
pub mod product;

use errors::RepositoryResult;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing or searching products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Restrict to products of the category with this slug.
    pub category_slug: Option<Slug>,
    /// Case-insensitive substring matched against name and description.
    pub search: Option<String>,
    /// Only products flagged as featured.
    pub featured: bool,
    /// Only products flagged as trending.
    pub trending: bool,
}

impl ProductListQuery {
    pub fn category(mut self, slug: Slug) -> Self {
        self.category_slug = Some(slug);
        self
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
    pub fn trending(mut self) -> Self {
        self.trending = true;
        self
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List every category ordered by id.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its slug.
    fn get_category_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Category>>;
}

/// Bulk catalog writes. Used for seeding only.
pub trait CatalogWriter {
    /// Insert `categories`, then the products built from the created rows, as
    /// one unit of work.
    ///
    /// Returns `false` without writing anything when any category already
    /// exists. When `products` fails nothing is kept.
    fn import_catalog<F>(&self, categories: &[NewCategory], products: F) -> RepositoryResult<bool>
    where
        F: FnOnce(&[Category]) -> RepositoryResult<Vec<NewProduct>>;
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List products matching the supplied query parameters, ordered by id.
    ///
    /// An unknown category slug yields an empty list.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    /// Retrieve a product by its slug.
    fn get_product_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Product>>;
}

/// Read-only operations for session carts.
pub trait CartReader {
    /// All items in the session's cart.
    fn list_cart_items(&self, session_id: &SessionId) -> RepositoryResult<Vec<CartItem>>;
}

/// Mutations of session carts.
pub trait CartWriter {
    /// Add units of a product to a cart, merging into an existing line for the
    /// same `(session, product)` pair.
    fn add_cart_item(&self, item: &NewCartItem) -> RepositoryResult<CartItem>;
    /// Set the quantity of a line, deleting it when `quantity <= 0`.
    fn update_cart_item_quantity(
        &self,
        id: CartItemId,
        quantity: i32,
    ) -> RepositoryResult<QuantityUpdate>;
    /// Delete a line. Absent ids are not an error.
    fn remove_cart_item(&self, id: CartItemId) -> RepositoryResult<usize>;
    /// Delete every line of a session.
    fn clear_cart(&self, session_id: &SessionId) -> RepositoryResult<usize>;
    /// Read and delete every line of a session in one unit of work.
    fn take_cart_items(&self, session_id: &SessionId) -> RepositoryResult<Vec<CartItem>>;
}
