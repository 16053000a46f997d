use crate::domain::types::Slug;
use crate::dto::catalog::{CategoryDto, ProductDto};
use crate::repository::{CategoryReader, ProductListQuery, ProductReader};

use super::{ServiceError, ServiceResult};

fn products_for<R>(query: ProductListQuery, repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader,
{
    match repo.list_products(query) {
        Ok(products) => Ok(products.into_iter().map(ProductDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// All categories ordered by id.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// A single category by slug. Malformed slugs cannot exist and are reported
/// as not found.
pub fn show_category<R>(slug: &str, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader,
{
    let Ok(slug) = Slug::new(slug) else {
        return Err(ServiceError::NotFound);
    };

    match repo.get_category_by_slug(&slug) {
        Ok(Some(category)) => Ok(category.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader,
{
    products_for(ProductListQuery::default(), repo)
}

/// Products of the category with `slug`; an unknown category yields an empty
/// list rather than an error.
pub fn list_products_by_category<R>(slug: &str, repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader,
{
    let Ok(slug) = Slug::new(slug) else {
        return Ok(vec![]);
    };

    products_for(ProductListQuery::default().category(slug), repo)
}

/// Case-insensitive substring search over product names and descriptions.
pub fn search_products<R>(query: &str, repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader,
{
    products_for(ProductListQuery::default().search(query), repo)
}

pub fn show_product<R>(slug: &str, repo: &R) -> ServiceResult<ProductDto>
where
    R: ProductReader,
{
    let Ok(slug) = Slug::new(slug) else {
        return Err(ServiceError::NotFound);
    };

    match repo.get_product_by_slug(&slug) {
        Ok(Some(product)) => Ok(product.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn list_featured_products<R>(repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader,
{
    products_for(ProductListQuery::default().featured(), repo)
}

pub fn list_trending_products<R>(repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader,
{
    products_for(ProductListQuery::default().trending(), repo)
}
