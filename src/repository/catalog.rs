use diesel::prelude::*;

use crate::domain::category::{Category, NewCategory};
use crate::domain::product::NewProduct;
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::models::product::NewProduct as DbNewProduct;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CatalogWriter, DieselRepository};

impl CatalogWriter for DieselRepository {
    fn import_catalog<F>(&self, categories: &[NewCategory], products: F) -> RepositoryResult<bool>
    where
        F: FnOnce(&[Category]) -> RepositoryResult<Vec<NewProduct>>,
    {
        use crate::schema::{categories as categories_table, products as products_table};

        let mut conn = self.conn()?;

        conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let existing = categories_table::table
                .count()
                .get_result::<i64>(conn)?;
            if existing > 0 {
                return Ok(false);
            }

            let mut created = Vec::with_capacity(categories.len());
            for category in categories {
                let row = diesel::insert_into(categories_table::table)
                    .values(&DbNewCategory::from(category))
                    .get_result::<DbCategory>(conn)?;
                let category: Category = row.try_into()?;
                created.push(category);
            }

            for product in products(&created)? {
                diesel::insert_into(products_table::table)
                    .values(&DbNewProduct::from(&product))
                    .execute(conn)?;
            }

            Ok(true)
        })
    }
}
