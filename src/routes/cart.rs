use actix_web::{HttpResponse, Responder, delete, get, patch, post, web};

use crate::dto::MessageDto;
use crate::forms::cart::{AddToCartForm, UpdateQuantityForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::cart::{
    CartItemUpdate, add_to_cart as add_to_cart_service, cart_summary as cart_summary_service,
    clear_cart as clear_cart_service, remove_cart_item as remove_cart_item_service,
    show_cart as show_cart_service, update_cart_item as update_cart_item_service,
};

const ITEM_NOT_FOUND: &str = "Cart item not found";
const ITEM_REMOVED: &str = "Item removed from cart";

#[get("/cart/{session_id}/summary")]
pub async fn cart_summary(
    session_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match cart_summary_service(&session_id, repo.get_ref()) {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(err) => error_response(err, ITEM_NOT_FOUND),
    }
}

#[get("/cart/{session_id}")]
pub async fn show_cart(
    session_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_cart_service(&session_id, repo.get_ref()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, ITEM_NOT_FOUND),
    }
}

#[post("/cart")]
pub async fn add_to_cart(
    form: web::Json<AddToCartForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match add_to_cart_service(form.into_inner(), repo.get_ref()) {
        Ok(item) => HttpResponse::Created().json(item),
        Err(err) => error_response(err, "Product not found"),
    }
}

#[patch("/cart/{item_id}")]
pub async fn update_cart_item(
    item_id: web::Path<String>,
    form: web::Json<UpdateQuantityForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = match form.into_inner().into_payload(&item_id) {
        Ok(payload) => payload,
        Err(err) => return error_response(ServiceError::from(err), ITEM_NOT_FOUND),
    };

    match update_cart_item_service(payload, repo.get_ref()) {
        Ok(CartItemUpdate::Updated(item)) => HttpResponse::Ok().json(item),
        Ok(CartItemUpdate::Removed) => HttpResponse::Ok().json(MessageDto::new(ITEM_REMOVED)),
        Err(err) => error_response(err, ITEM_NOT_FOUND),
    }
}

#[delete("/cart/session/{session_id}")]
pub async fn clear_cart(
    session_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match clear_cart_service(&session_id, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(MessageDto::new("Cart cleared")),
        Err(err) => error_response(err, ITEM_NOT_FOUND),
    }
}

#[delete("/cart/{item_id}")]
pub async fn remove_cart_item(
    item_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match remove_cart_item_service(&item_id, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(MessageDto::new(ITEM_REMOVED)),
        Err(err) => error_response(err, ITEM_NOT_FOUND),
    }
}
