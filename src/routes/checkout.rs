use actix_web::{HttpResponse, Responder, post, web};

use crate::forms::checkout::CheckoutForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::checkout::place_order as place_order_service;

#[post("/checkout")]
pub async fn place_order(
    form: web::Json<CheckoutForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match place_order_service(form.into_inner(), repo.get_ref()) {
        Ok(confirmation) => HttpResponse::Created().json(confirmation),
        Err(err) => error_response(err, "Cart not found"),
    }
}
