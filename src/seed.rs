//! Festival catalog loaded into an empty store on first start.

use std::collections::HashMap;

use crate::domain::category::NewCategory;
use crate::domain::product::NewProduct;
use crate::domain::types::{
    BadgeLabel, CategoryId, CategoryName, Description, ImageUrl, ProductName, ProductPrice,
    Rating, ReviewCount, Slug, StockCount, TypeConstraintError,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::CatalogWriter;

struct CategorySeed {
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    image_url: &'static str,
}

struct ProductSeed {
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    price: f64,
    compare_at_price: Option<f64>,
    image_url: &'static str,
    category: &'static str,
    is_featured: bool,
    is_trending: bool,
    badge: Option<&'static str>,
    stock: i32,
    rating: f64,
    review_count: i32,
}

const CATEGORIES: &[CategorySeed] = &[
    CategorySeed {
        name: "Diyas & Candles",
        slug: "diyas-candles",
        description: "Traditional & Modern Designs",
        image_url: "https://images.unsplash.com/photo-1604422230737-a31c4523ea68?ixlib=rb-4.0.3",
    },
    CategorySeed {
        name: "Rangoli & Colors",
        slug: "rangoli-colors",
        description: "Beautiful Floor Decorations",
        image_url: "https://images.unsplash.com/photo-1598431429388-7a5dbb6c3c8a?ixlib=rb-4.0.3",
    },
    CategorySeed {
        name: "Home Decorations",
        slug: "home-decorations",
        description: "Lanterns, Lights & Hangings",
        image_url: "https://images.unsplash.com/photo-1605696005660-83852c140bde?ixlib=rb-4.0.3",
    },
    CategorySeed {
        name: "Gift Boxes",
        slug: "gift-boxes",
        description: "Premium Gift Collections",
        image_url: "https://images.unsplash.com/photo-1582584564635-0d92662810a5?ixlib=rb-4.0.3",
    },
];

const PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        name: "Handcrafted Clay Diyas (Set of 6)",
        slug: "handcrafted-clay-diyas",
        description: "Beautiful handcrafted clay diyas perfect for Diwali celebrations. Each diya is handmade by skilled artisans.",
        price: 349.0,
        compare_at_price: Some(410.0),
        image_url: "https://images.unsplash.com/photo-1604422744102-3b0c4e44b873?ixlib=rb-4.0.3",
        category: "diyas-candles",
        is_featured: true,
        is_trending: false,
        badge: Some("-15%"),
        stock: 50,
        rating: 4.5,
        review_count: 42,
    },
    ProductSeed {
        name: "Decorative LED String Lights (10m)",
        slug: "decorative-led-string-lights",
        description: "Add a festive glow to your home with these beautiful LED string lights. Perfect for Diwali decorations.",
        price: 599.0,
        compare_at_price: None,
        image_url: "https://images.unsplash.com/photo-1610848812882-784b7eb968ba?ixlib=rb-4.0.3",
        category: "home-decorations",
        is_featured: true,
        is_trending: false,
        badge: None,
        stock: 100,
        rating: 5.0,
        review_count: 87,
    },
    ProductSeed {
        name: "Reusable Rangoli Stencil Kit",
        slug: "reusable-rangoli-stencil-kit",
        description: "Create beautiful rangoli designs easily with these reusable stencils. Perfect for beginners and experts alike.",
        price: 249.0,
        compare_at_price: None,
        image_url: "https://images.unsplash.com/photo-1564941727588-d31f95e117d1?ixlib=rb-4.0.3",
        category: "rangoli-colors",
        is_featured: true,
        is_trending: false,
        badge: Some("New"),
        stock: 75,
        rating: 4.0,
        review_count: 23,
    },
    ProductSeed {
        name: "Premium Diwali Gift Hamper",
        slug: "premium-diwali-gift-hamper",
        description: "Luxury gift hamper containing assorted sweets, dry fruits, diyas, and decorative items. Perfect gift for family and friends.",
        price: 1499.0,
        compare_at_price: Some(1799.0),
        image_url: "https://images.unsplash.com/photo-1601286794092-d7e3215ba03d?ixlib=rb-4.0.3",
        category: "gift-boxes",
        is_featured: true,
        is_trending: false,
        badge: Some("Best Seller"),
        stock: 30,
        rating: 4.5,
        review_count: 143,
    },
    ProductSeed {
        name: "Decorative Brass Puja Thali Set",
        slug: "decorative-brass-puja-thali-set",
        description: "Elegant brass puja thali set complete with all the necessary items for Diwali puja rituals.",
        price: 1299.0,
        compare_at_price: Some(1499.0),
        image_url: "https://images.unsplash.com/photo-1605696612053-aa1b0e9d5167?ixlib=rb-4.0.3",
        category: "home-decorations",
        is_featured: false,
        is_trending: true,
        badge: None,
        stock: 25,
        rating: 4.5,
        review_count: 56,
    },
    ProductSeed {
        name: "Hanging Metal Lanterns (Set of 3)",
        slug: "hanging-metal-lanterns",
        description: "Beautiful metal lanterns that add an elegant touch to your Diwali decorations. Available in gold finish.",
        price: 899.0,
        compare_at_price: None,
        image_url: "https://images.unsplash.com/photo-1605696914456-e635610d3d20?ixlib=rb-4.0.3",
        category: "home-decorations",
        is_featured: false,
        is_trending: true,
        badge: None,
        stock: 40,
        rating: 4.0,
        review_count: 38,
    },
    ProductSeed {
        name: "Handmade Wall Decorations",
        slug: "handmade-wall-decorations",
        description: "Beautiful handcrafted wall hangings to add a festive touch to your home during Diwali celebrations.",
        price: 749.0,
        compare_at_price: Some(999.0),
        image_url: "https://images.unsplash.com/photo-1611464613261-5e7fef52fcbb?ixlib=rb-4.0.3",
        category: "home-decorations",
        is_featured: false,
        is_trending: true,
        badge: None,
        stock: 35,
        rating: 5.0,
        review_count: 72,
    },
    ProductSeed {
        name: "Colorful Rangoli Powder Set",
        slug: "colorful-rangoli-powder-set",
        description: "Set of 10 vibrant colors to create beautiful rangoli designs for Diwali celebrations.",
        price: 399.0,
        compare_at_price: Some(499.0),
        image_url: "https://images.unsplash.com/photo-1598431429388-7a5dbb6c3c8a?ixlib=rb-4.0.3",
        category: "rangoli-colors",
        is_featured: false,
        is_trending: false,
        badge: Some("-20%"),
        stock: 85,
        rating: 4.5,
        review_count: 63,
    },
    ProductSeed {
        name: "Traditional Silver Pooja Bells",
        slug: "traditional-silver-pooja-bells",
        description: "Beautifully crafted silver pooja bells with intricate designs, perfect for your Diwali rituals.",
        price: 799.0,
        compare_at_price: None,
        image_url: "https://images.unsplash.com/photo-1604422230737-a31c4523ea68?ixlib=rb-4.0.3",
        category: "diyas-candles",
        is_featured: false,
        is_trending: false,
        badge: None,
        stock: 20,
        rating: 4.0,
        review_count: 28,
    },
    ProductSeed {
        name: "Luxury Dry Fruits Gift Box",
        slug: "luxury-dry-fruits-gift-box",
        description: "Premium selection of dry fruits presented in an elegant gift box, perfect for Diwali gifting.",
        price: 1299.0,
        compare_at_price: None,
        image_url: "https://images.unsplash.com/photo-1582584564635-0d92662810a5?ixlib=rb-4.0.3",
        category: "gift-boxes",
        is_featured: false,
        is_trending: false,
        badge: Some("Premium"),
        stock: 15,
        rating: 4.5,
        review_count: 47,
    },
];

impl CategorySeed {
    fn to_new_category(&self) -> Result<NewCategory, TypeConstraintError> {
        Ok(NewCategory {
            name: CategoryName::new(self.name)?,
            slug: Slug::new(self.slug)?,
            description: Some(Description::new(self.description)?),
            image_url: Some(ImageUrl::new(self.image_url)?),
        })
    }
}

impl ProductSeed {
    fn to_new_product(&self, category_id: CategoryId) -> Result<NewProduct, TypeConstraintError> {
        Ok(NewProduct {
            name: ProductName::new(self.name)?,
            slug: Slug::new(self.slug)?,
            description: Some(Description::new(self.description)?),
            price: ProductPrice::new(self.price)?,
            compare_at_price: self.compare_at_price.map(ProductPrice::new).transpose()?,
            image_url: Some(ImageUrl::new(self.image_url)?),
            category_id,
            is_featured: self.is_featured,
            is_trending: self.is_trending,
            badge: self.badge.map(BadgeLabel::new).transpose()?,
            stock: StockCount::new(self.stock)?,
            rating: Rating::new(self.rating)?,
            review_count: ReviewCount::new(self.review_count)?,
        })
    }
}

/// Populate an empty catalog. Returns `false` when categories already exist
/// and nothing was written.
///
/// Categories and products are written together, so a failed seed leaves the
/// catalog empty and the next start tries again.
pub fn seed_catalog<R>(repo: &R) -> RepositoryResult<bool>
where
    R: CatalogWriter,
{
    let categories = CATEGORIES
        .iter()
        .map(CategorySeed::to_new_category)
        .collect::<Result<Vec<_>, _>>()?;

    let seeded = repo.import_catalog(&categories, |created| {
        let category_ids: HashMap<&str, CategoryId> = created
            .iter()
            .map(|category| (category.slug.as_str(), category.id))
            .collect();

        PRODUCTS
            .iter()
            .map(|seed| -> RepositoryResult<NewProduct> {
                let category_id = category_ids.get(seed.category).copied().ok_or_else(|| {
                    RepositoryError::ValidationError(format!(
                        "unknown seed category: {}",
                        seed.category
                    ))
                })?;
                Ok(seed.to_new_product(category_id)?)
            })
            .collect()
    })?;

    if seeded {
        log::info!(
            "Seeded catalog with {} categories and {} products",
            CATEGORIES.len(),
            PRODUCTS.len()
        );
    }

    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::TestRepository;
    use crate::repository::{CategoryReader, ProductListQuery, ProductReader};

    #[test]
    fn seeding_is_idempotent() {
        let repo = TestRepository::default();
        assert!(seed_catalog(&repo).unwrap());
        assert!(!seed_catalog(&repo).unwrap());

        assert_eq!(repo.list_categories().unwrap().len(), 4);
        assert_eq!(
            repo.list_products(ProductListQuery::default()).unwrap().len(),
            10
        );
    }

    #[test]
    fn seed_products_link_to_their_categories() {
        let repo = TestRepository::default();
        seed_catalog(&repo).unwrap();

        let gift_boxes = repo
            .list_products(ProductListQuery::default().category(Slug::new("gift-boxes").unwrap()))
            .unwrap();
        let slugs: Vec<&str> = gift_boxes.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec!["premium-diwali-gift-hamper", "luxury-dry-fruits-gift-box"]
        );
    }

    #[test]
    fn failed_product_build_keeps_catalog_empty() {
        let repo = TestRepository::default();
        let categories = vec![CATEGORIES[0].to_new_category().unwrap()];

        let result = repo.import_catalog(&categories, |_| {
            Err(RepositoryError::ValidationError("broken product".to_string()))
        });
        assert!(result.is_err());
        assert!(repo.list_categories().unwrap().is_empty());

        assert!(seed_catalog(&repo).unwrap());
        assert_eq!(repo.list_categories().unwrap().len(), 4);
    }
}
