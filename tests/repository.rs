use std::sync::Barrier;
use std::thread;

use festival_storefront::domain::cart::{NewCartItem, QuantityUpdate};
use festival_storefront::domain::category::NewCategory;
use festival_storefront::domain::product::NewProduct;
use festival_storefront::domain::types::{
    CategoryName, Description, ProductId, ProductName, ProductPrice, Quantity, Rating,
    ReviewCount, SessionId, Slug, StockCount,
};
use festival_storefront::repository::errors::RepositoryError;
use festival_storefront::repository::{
    CartReader, CartWriter, CatalogWriter, CategoryReader, DieselRepository, ProductListQuery,
    ProductReader,
};
use festival_storefront::seed::seed_catalog;

mod common;

fn new_item(session: &str, product_id: i32, quantity: i32) -> NewCartItem {
    NewCartItem {
        session_id: SessionId::new(session).expect("valid session id"),
        product_id: ProductId::new(product_id).expect("valid product id"),
        quantity: Quantity::new(quantity).expect("valid quantity"),
    }
}

#[test]
fn seeding_twice_keeps_a_single_catalog() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    assert!(seed_catalog(&repo).expect("first seed"));
    assert!(!seed_catalog(&repo).expect("second seed"));

    assert_eq!(repo.list_categories().unwrap().len(), 4);
    assert_eq!(
        repo.list_products(ProductListQuery::default()).unwrap().len(),
        10
    );
}

#[test]
fn product_is_found_by_its_slug() {
    let test_db = common::TestDb::new();
    let repo = test_db.seeded_repo();

    for product in repo.list_products(ProductListQuery::default()).unwrap() {
        let found = repo
            .get_product_by_slug(&product.slug)
            .unwrap()
            .expect("product should resolve by slug");
        assert_eq!(found, product);
    }
}

#[test]
fn category_filter_and_unknown_category() {
    let test_db = common::TestDb::new();
    let repo = test_db.seeded_repo();

    let rangoli = repo
        .list_products(ProductListQuery::default().category(Slug::new("rangoli-colors").unwrap()))
        .unwrap();
    let slugs: Vec<&str> = rangoli.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec!["reusable-rangoli-stencil-kit", "colorful-rangoli-powder-set"]
    );

    let none = repo
        .list_products(ProductListQuery::default().category(Slug::new("nonexistent").unwrap()))
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn search_matches_name_or_description_ignoring_case() {
    let test_db = common::TestDb::new();
    let repo = test_db.seeded_repo();

    let found = repo
        .list_products(ProductListQuery::default().search("DiYa"))
        .unwrap();
    let slugs: Vec<&str> = found.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec!["handcrafted-clay-diyas", "premium-diwali-gift-hamper"]
    );

    let literal = repo
        .list_products(ProductListQuery::default().search("100%"))
        .unwrap();
    assert!(literal.is_empty());
}

#[test]
fn adding_same_product_merges_into_one_line() {
    let test_db = common::TestDb::new();
    let repo = test_db.seeded_repo();

    let first = repo.add_cart_item(&new_item("s1", 1, 2)).unwrap();
    let second = repo.add_cart_item(&new_item("s1", 1, 3)).unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.quantity.get(), 5);

    let items = repo
        .list_cart_items(&SessionId::new("s1").unwrap())
        .unwrap();
    assert_eq!(items.len(), 1);
}

#[test]
fn quantity_update_outcomes() {
    let test_db = common::TestDb::new();
    let repo = test_db.seeded_repo();
    let item = repo.add_cart_item(&new_item("s1", 2, 1)).unwrap();

    match repo.update_cart_item_quantity(item.id, 6).unwrap() {
        QuantityUpdate::Updated(updated) => assert_eq!(updated.quantity.get(), 6),
        other => panic!("unexpected outcome: {other:?}"),
    }

    assert_eq!(
        repo.update_cart_item_quantity(item.id, 0).unwrap(),
        QuantityUpdate::Removed
    );
    assert!(
        repo.list_cart_items(&SessionId::new("s1").unwrap())
            .unwrap()
            .is_empty()
    );

    assert_eq!(
        repo.update_cart_item_quantity(item.id, 0).unwrap(),
        QuantityUpdate::NotFound
    );
}

#[test]
fn clearing_a_session_leaves_other_sessions() {
    let test_db = common::TestDb::new();
    let repo = test_db.seeded_repo();

    repo.add_cart_item(&new_item("s1", 1, 1)).unwrap();
    repo.add_cart_item(&new_item("s1", 3, 2)).unwrap();
    repo.add_cart_item(&new_item("s2", 1, 4)).unwrap();

    assert_eq!(repo.clear_cart(&SessionId::new("s1").unwrap()).unwrap(), 2);
    assert_eq!(repo.clear_cart(&SessionId::new("s1").unwrap()).unwrap(), 0);

    let remaining = repo
        .list_cart_items(&SessionId::new("s2").unwrap())
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].quantity.get(), 4);
}

#[test]
fn removing_absent_item_is_not_an_error() {
    let test_db = common::TestDb::new();
    let repo = test_db.seeded_repo();

    let item = repo.add_cart_item(&new_item("s1", 1, 1)).unwrap();
    assert_eq!(repo.remove_cart_item(item.id).unwrap(), 1);
    assert_eq!(repo.remove_cart_item(item.id).unwrap(), 0);
}

#[test]
fn failed_import_writes_nothing() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let categories = vec![NewCategory {
        name: CategoryName::new("Lamps").unwrap(),
        slug: Slug::new("lamps").unwrap(),
        description: None,
        image_url: None,
    }];
    let result = repo.import_catalog(&categories, |_| {
        Err(RepositoryError::ValidationError("broken product".to_string()))
    });
    assert!(result.is_err());
    assert!(repo.list_categories().unwrap().is_empty());

    assert!(seed_catalog(&repo).expect("seed after failed import"));
    assert_eq!(
        repo.list_products(ProductListQuery::default()).unwrap().len(),
        10
    );
}

#[test]
fn search_folds_non_ascii_case() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let categories = vec![NewCategory {
        name: CategoryName::new("Oils").unwrap(),
        slug: Slug::new("oils").unwrap(),
        description: None,
        image_url: None,
    }];
    repo.import_catalog(&categories, |created| {
        Ok(vec![NewProduct {
            name: ProductName::new("Ätherische Öl Diya").unwrap(),
            slug: Slug::new("aetherische-oel-diya").unwrap(),
            description: Some(Description::new("Duftlampe für Öle").unwrap()),
            price: ProductPrice::new(199.0).unwrap(),
            compare_at_price: None,
            image_url: None,
            category_id: created[0].id,
            is_featured: false,
            is_trending: false,
            badge: None,
            stock: StockCount::new(5).unwrap(),
            rating: Rating::default(),
            review_count: ReviewCount::new(0).unwrap(),
        }])
    })
    .expect("import");

    for term in ["ätherische", "ÄTHERISCHE", "öle"] {
        let found = repo
            .list_products(ProductListQuery::default().search(term))
            .unwrap();
        assert_eq!(found.len(), 1, "search for {term}");
    }
}

#[test]
fn concurrent_adds_all_succeed() {
    const THREADS: usize = 8;
    const ROUNDS: i32 = 10;

    let test_db = common::TestDb::new();
    let repo = test_db.seeded_repo();
    let barrier = Barrier::new(THREADS);

    thread::scope(|scope| {
        for thread_index in 0..THREADS {
            let repo = &repo;
            let barrier = &barrier;
            scope.spawn(move || {
                let own_session = format!("s{thread_index}");
                for _ in 0..ROUNDS {
                    barrier.wait();
                    repo.add_cart_item(&new_item("shared", 1, 1))
                        .expect("shared add should succeed");
                    repo.add_cart_item(&new_item(&own_session, 2, 1))
                        .expect("own add should succeed");
                }
            });
        }
    });

    let shared = repo
        .list_cart_items(&SessionId::new("shared").unwrap())
        .unwrap();
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].quantity.get(), THREADS as i32 * ROUNDS);

    for thread_index in 0..THREADS {
        let own = repo
            .list_cart_items(&SessionId::new(format!("s{thread_index}")).unwrap())
            .unwrap();
        assert_eq!(own[0].quantity.get(), ROUNDS);
    }
}

#[test]
fn taking_cart_items_empties_only_that_session() {
    let test_db = common::TestDb::new();
    let repo = test_db.seeded_repo();

    repo.add_cart_item(&new_item("s1", 1, 2)).unwrap();
    repo.add_cart_item(&new_item("s1", 4, 1)).unwrap();
    repo.add_cart_item(&new_item("s2", 1, 1)).unwrap();

    let taken = repo
        .take_cart_items(&SessionId::new("s1").unwrap())
        .unwrap();
    let products: Vec<i32> = taken.iter().map(|i| i.product_id.get()).collect();
    assert_eq!(products, vec![1, 4]);

    assert!(
        repo.list_cart_items(&SessionId::new("s1").unwrap())
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        repo.list_cart_items(&SessionId::new("s2").unwrap())
            .unwrap()
            .len(),
        1
    );
}
