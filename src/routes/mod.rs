use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};

use crate::dto::{ErrorDetails, MessageDto};
use crate::services::ServiceError;

pub mod cart;
pub mod catalog;
pub mod checkout;

/// Translate a service failure into a JSON error response.
///
/// `not_found` is the message used for [`ServiceError::NotFound`]; internal
/// failures never expose their cause.
pub fn error_response(err: ServiceError, not_found: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(MessageDto::new(not_found)),
        ServiceError::Validation(errors) => HttpResponse::BadRequest().json(
            MessageDto::with_errors("Invalid request data", ErrorDetails::from(&errors)),
        ),
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().json(MessageDto::with_errors(
                "Invalid request data",
                ErrorDetails::Message(message),
            ))
        }
        ServiceError::Internal => {
            HttpResponse::InternalServerError().json(MessageDto::new("Internal server error"))
        }
    }
}

/// JSON extractor settings that answer malformed bodies with a 400 message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(MessageDto::with_errors(
            "Invalid request data",
            ErrorDetails::Message(err.to_string()),
        ));
        InternalError::from_response(err, response).into()
    })
}

/// Mount every storefront endpoint under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(catalog::list_categories)
            .service(catalog::show_category)
            .service(catalog::list_products_by_category)
            .service(catalog::search_products)
            .service(catalog::list_products)
            .service(catalog::show_product)
            .service(catalog::list_featured_products)
            .service(catalog::list_trending_products)
            .service(cart::cart_summary)
            .service(cart::show_cart)
            .service(cart::add_to_cart)
            .service(cart::update_cart_item)
            .service(cart::clear_cart)
            .service(cart::remove_cart_item)
            .service(checkout::place_order),
    );
}
