use chrono::Utc;
use diesel::prelude::*;

use crate::domain::cart::{CartItem, NewCartItem, QuantityUpdate};
use crate::domain::types::{CartItemId, Quantity, SessionId};
use crate::models::cart_item::{CartItem as DbCartItem, NewCartItem as DbNewCartItem};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CartReader, CartWriter, DieselRepository};

impl CartReader for DieselRepository {
    fn list_cart_items(&self, session_id: &SessionId) -> RepositoryResult<Vec<CartItem>> {
        use crate::schema::cart_items;

        let mut conn = self.conn()?;

        let items = cart_items::table
            .filter(cart_items::session_id.eq(session_id.as_str()))
            .order(cart_items::id.asc())
            .load::<DbCartItem>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<CartItem>, _>>()?;

        Ok(items)
    }
}

impl CartWriter for DieselRepository {
    fn add_cart_item(&self, item: &NewCartItem) -> RepositoryResult<CartItem> {
        use crate::schema::cart_items;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let existing = cart_items::table
                .filter(cart_items::session_id.eq(item.session_id.as_str()))
                .filter(cart_items::product_id.eq(item.product_id.get()))
                .first::<DbCartItem>(conn)
                .optional()?;

            let row = match existing {
                Some(existing) => {
                    let merged = Quantity::new(existing.quantity)?.checked_add(item.quantity)?;
                    diesel::update(cart_items::table.find(existing.id))
                        .set(cart_items::quantity.eq(merged.get()))
                        .get_result::<DbCartItem>(conn)?
                }
                None => {
                    let new_item = DbNewCartItem {
                        session_id: item.session_id.as_str(),
                        product_id: item.product_id.get(),
                        quantity: item.quantity.get(),
                        created_at: Utc::now().naive_utc(),
                    };
                    diesel::insert_into(cart_items::table)
                        .values(&new_item)
                        .get_result::<DbCartItem>(conn)?
                }
            };

            let item: CartItem = row.try_into()?;
            Ok(item)
        })
    }

    fn update_cart_item_quantity(
        &self,
        id: CartItemId,
        quantity: i32,
    ) -> RepositoryResult<QuantityUpdate> {
        use crate::schema::cart_items;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let exists = cart_items::table
                .find(id.get())
                .select(cart_items::id)
                .first::<i32>(conn)
                .optional()?
                .is_some();

            if !exists {
                return Ok(QuantityUpdate::NotFound);
            }

            let Ok(quantity) = Quantity::new(quantity) else {
                diesel::delete(cart_items::table.find(id.get())).execute(conn)?;
                return Ok(QuantityUpdate::Removed);
            };

            let row = diesel::update(cart_items::table.find(id.get()))
                .set(cart_items::quantity.eq(quantity.get()))
                .get_result::<DbCartItem>(conn)?;

            let item: CartItem = row.try_into()?;
            Ok(QuantityUpdate::Updated(item))
        })
    }

    fn remove_cart_item(&self, id: CartItemId) -> RepositoryResult<usize> {
        use crate::schema::cart_items;

        let mut conn = self.conn()?;

        let affected = diesel::delete(cart_items::table.find(id.get())).execute(&mut conn)?;
        Ok(affected)
    }

    fn clear_cart(&self, session_id: &SessionId) -> RepositoryResult<usize> {
        use crate::schema::cart_items;

        let mut conn = self.conn()?;

        let affected = diesel::delete(
            cart_items::table.filter(cart_items::session_id.eq(session_id.as_str())),
        )
        .execute(&mut conn)?;

        Ok(affected)
    }

    fn take_cart_items(&self, session_id: &SessionId) -> RepositoryResult<Vec<CartItem>> {
        use crate::schema::cart_items;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let rows = cart_items::table
                .filter(cart_items::session_id.eq(session_id.as_str()))
                .order(cart_items::id.asc())
                .load::<DbCartItem>(conn)?;

            diesel::delete(cart_items::table.filter(cart_items::session_id.eq(session_id.as_str())))
                .execute(conn)?;

            let items = rows
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<Vec<CartItem>, _>>()?;
            Ok(items)
        })
    }
}
