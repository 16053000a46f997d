use chrono::Utc;
use uuid::Uuid;

use crate::domain::checkout::{CheckoutDetails, OrderConfirmation};
use crate::domain::pricing::CartTotals;
use crate::dto::checkout::OrderConfirmationDto;
use crate::forms::checkout::CheckoutForm;
use crate::repository::{CartWriter, ProductReader};

use super::cart::resolve_lines;
use super::{ServiceError, ServiceResult};

/// Validate the checkout form, then empty the session's cart and price the
/// lines that were in it.
///
/// Orders are not persisted; the confirmation is the only record returned to
/// the caller.
pub fn place_order<R>(form: CheckoutForm, repo: &R) -> ServiceResult<OrderConfirmationDto>
where
    R: CartWriter + ProductReader,
{
    let details: CheckoutDetails = form.try_into()?;

    let items = repo.take_cart_items(&details.session_id).map_err(|e| {
        log::error!("Failed to take cart items for checkout: {e}");
        ServiceError::Internal
    })?;
    if items.is_empty() {
        return Err(ServiceError::Form("Your cart is empty".to_string()));
    }

    let lines = resolve_lines(items, repo)?;
    let totals = CartTotals::from_lines(&lines);

    let confirmation = OrderConfirmation {
        order_number: Uuid::new_v4().to_string(),
        customer_name: details.customer_name(),
        email: details.email,
        payment_method: details.payment_method,
        session_id: details.session_id,
        totals,
        placed_at: Utc::now().naive_utc(),
    };

    log::info!(
        "Order {} placed for session {} ({} items, total {})",
        confirmation.order_number,
        confirmation.session_id,
        totals.item_count,
        totals.total
    );

    Ok(confirmation.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::cart::AddToCartForm;
    use crate::forms::checkout::tests::sample_form;
    use crate::repository::test::TestRepository;
    use crate::seed::seed_catalog;
    use crate::services::cart::{add_to_cart, show_cart};

    fn seeded_repo() -> TestRepository {
        let repo = TestRepository::default();
        seed_catalog(&repo).unwrap();
        repo
    }

    #[test]
    fn checkout_prices_and_clears_cart() {
        let repo = seeded_repo();
        let form = AddToCartForm {
            session_id: "s1".to_string(),
            product_id: 4,
            quantity: 1,
        };
        add_to_cart(form, &repo).unwrap();

        let confirmation = place_order(sample_form("s1"), &repo).unwrap();

        assert_eq!(confirmation.subtotal, 1499.0);
        assert_eq!(confirmation.shipping, 0.0);
        assert_eq!(confirmation.total, 1499.0);
        assert_eq!(confirmation.item_count, 1);
        assert_eq!(confirmation.payment_method, "upi");
        assert_eq!(confirmation.customer_name, "Asha Rao");
        assert!(show_cart("s1", &repo).unwrap().is_empty());
    }

    #[test]
    fn checkout_with_empty_cart_is_rejected() {
        let repo = seeded_repo();
        assert!(matches!(
            place_order(sample_form("s1"), &repo),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn invalid_form_leaves_cart_untouched() {
        let repo = seeded_repo();
        let form = AddToCartForm {
            session_id: "s1".to_string(),
            product_id: 1,
            quantity: 2,
        };
        add_to_cart(form, &repo).unwrap();

        let mut checkout = sample_form("s1");
        checkout.phone = "123".to_string();

        match place_order(checkout, &repo) {
            Err(ServiceError::Validation(errors)) => {
                assert!(errors.field_errors().contains_key("phone"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(show_cart("s1", &repo).unwrap().len(), 1);
    }
}
