use diesel::prelude::*;

use crate::domain::product::Product;
use crate::domain::types::{ProductId, Slug};
use crate::models::product::Product as DbProduct;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductListQuery, ProductReader};

impl ProductReader for DieselRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        use crate::schema::{categories, products};

        let mut conn = self.conn()?;

        let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(slug) = &query.category_slug {
            items = items.filter(
                products::category_id.eq_any(
                    categories::table
                        .filter(categories::slug.eq(slug.as_str()))
                        .select(categories::id),
                ),
            );
        }

        if query.featured {
            items = items.filter(products::is_featured.eq(true));
        }

        if query.trending {
            items = items.filter(products::is_trending.eq(true));
        }

        let mut items = items
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        // SQLite LIKE folds ASCII only, so text matching happens here.
        if let Some(search) = &query.search {
            let needle = search.to_lowercase();
            items.retain(|p| p.matches_search(&needle));
        }

        Ok(items)
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .find(id.get())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }

    fn get_product_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::slug.eq(slug.as_str()))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }
}
