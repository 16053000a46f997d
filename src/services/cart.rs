use crate::domain::cart::{CartItem, CartLine, NewCartItem, QuantityUpdate};
use crate::domain::pricing::CartTotals;
use crate::domain::types::{CartItemId, SessionId};
use crate::dto::cart::{CartItemDto, CartSummaryDto};
use crate::forms::cart::{AddToCartForm, UpdateQuantityFormPayload};
use crate::repository::errors::RepositoryError;
use crate::repository::{CartReader, CartWriter, ProductReader};

use super::{ServiceError, ServiceResult};

/// Result of a quantity change that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum CartItemUpdate {
    Updated(CartItemDto),
    /// The quantity was zero or below and the line is gone.
    Removed,
}

/// Pair each item with its product when it resolves.
pub(crate) fn resolve_lines<R>(items: Vec<CartItem>, repo: &R) -> ServiceResult<Vec<CartLine>>
where
    R: ProductReader,
{
    items
        .into_iter()
        .map(|item| match repo.get_product_by_id(item.product_id) {
            Ok(product) => Ok(CartLine { item, product }),
            Err(e) => {
                log::error!("Failed to resolve cart product {}: {e}", item.product_id);
                Err(ServiceError::Internal)
            }
        })
        .collect()
}

fn load_cart_lines<R>(session_id: &SessionId, repo: &R) -> ServiceResult<Vec<CartLine>>
where
    R: CartReader + ProductReader,
{
    let items = repo.list_cart_items(session_id).map_err(|e| {
        log::error!("Failed to list cart items: {e}");
        ServiceError::Internal
    })?;

    resolve_lines(items, repo)
}

fn enrich<R>(item: CartItem, repo: &R) -> ServiceResult<CartItemDto>
where
    R: ProductReader,
{
    match repo.get_product_by_id(item.product_id) {
        Ok(product) => Ok(CartLine { item, product }.into()),
        Err(e) => {
            log::error!("Failed to resolve cart product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Every item in the session's cart, enriched with its product.
pub fn show_cart<R>(session_id: &str, repo: &R) -> ServiceResult<Vec<CartItemDto>>
where
    R: CartReader + ProductReader,
{
    let session_id = SessionId::new(session_id)?;
    let lines = load_cart_lines(&session_id, repo)?;
    Ok(lines.into_iter().map(CartItemDto::from).collect())
}

/// Item count, subtotal, shipping and total for the session's cart.
pub fn cart_summary<R>(session_id: &str, repo: &R) -> ServiceResult<CartSummaryDto>
where
    R: CartReader + ProductReader,
{
    let session_id = SessionId::new(session_id)?;
    let lines = load_cart_lines(&session_id, repo)?;
    let totals = CartTotals::from_lines(&lines);
    Ok(CartSummaryDto::new(session_id, totals))
}

/// Add a product to the cart, merging with an existing line for the same
/// product. Unknown products are rejected as not found.
pub fn add_to_cart<R>(form: AddToCartForm, repo: &R) -> ServiceResult<CartItemDto>
where
    R: CartWriter + ProductReader,
{
    let new_item: NewCartItem = form.try_into()?;

    let product = match repo.get_product_by_id(new_item.product_id) {
        Ok(Some(product)) => product,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match repo.add_cart_item(&new_item) {
        Ok(item) => Ok(CartLine {
            item,
            product: Some(product),
        }
        .into()),
        Err(RepositoryError::ValidationError(message)) => {
            Err(ServiceError::Form(message))
        }
        Err(e) => {
            log::error!("Failed to add item to cart: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Set a line's quantity; zero or below removes the line.
pub fn update_cart_item<R>(
    payload: UpdateQuantityFormPayload,
    repo: &R,
) -> ServiceResult<CartItemUpdate>
where
    R: CartWriter + ProductReader,
{
    match repo.update_cart_item_quantity(payload.item_id, payload.quantity) {
        Ok(QuantityUpdate::Updated(item)) => Ok(CartItemUpdate::Updated(enrich(item, repo)?)),
        Ok(QuantityUpdate::Removed) => Ok(CartItemUpdate::Removed),
        Ok(QuantityUpdate::NotFound) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update cart item: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Remove a line. Removing an absent line succeeds.
pub fn remove_cart_item<R>(item_id: &str, repo: &R) -> ServiceResult<()>
where
    R: CartWriter,
{
    let item_id = item_id
        .trim()
        .parse::<i32>()
        .map_err(|_| ServiceError::Form(format!("Invalid cart item id: {item_id}")))?;
    let item_id = CartItemId::new(item_id)?;

    match repo.remove_cart_item(item_id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to remove cart item: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Empty the session's cart. Other sessions are untouched.
pub fn clear_cart<R>(session_id: &str, repo: &R) -> ServiceResult<()>
where
    R: CartWriter,
{
    let session_id = SessionId::new(session_id)?;

    match repo.clear_cart(&session_id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to clear cart: {e}");
            Err(ServiceError::Internal)
        }
    }
}
