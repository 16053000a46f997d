use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::catalog::{
    list_categories as list_categories_service,
    list_featured_products as list_featured_products_service,
    list_products as list_products_service,
    list_products_by_category as list_products_by_category_service,
    list_trending_products as list_trending_products_service,
    search_products as search_products_service, show_category as show_category_service,
    show_product as show_product_service,
};

#[get("/categories")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_categories_service(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response(err, "Category not found"),
    }
}

#[get("/categories/{slug}")]
pub async fn show_category(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_category_service(&slug, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(err, "Category not found"),
    }
}

#[get("/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_products_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(err, "Product not found"),
    }
}

#[get("/products/category/{slug}")]
pub async fn list_products_by_category(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_products_by_category_service(&slug, repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(err, "Category not found"),
    }
}

#[get("/products/search/{query}")]
pub async fn search_products(
    query: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match search_products_service(&query, repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(err, "Product not found"),
    }
}

#[get("/products/{slug}")]
pub async fn show_product(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_product_service(&slug, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err, "Product not found"),
    }
}

#[get("/featured-products")]
pub async fn list_featured_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_featured_products_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(err, "Product not found"),
    }
}

#[get("/trending-products")]
pub async fn list_trending_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_trending_products_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(err, "Product not found"),
    }
}
