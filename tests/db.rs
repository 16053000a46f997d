use diesel::prelude::*;
use festival_storefront::schema::{cart_items, categories, products};

mod common;

#[test]
fn migrations_create_empty_tables() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("connection");

    let counts: Vec<i64> = vec![
        categories::table.count().get_result(&mut conn).unwrap(),
        products::table.count().get_result(&mut conn).unwrap(),
        cart_items::table.count().get_result(&mut conn).unwrap(),
    ];
    assert_eq!(counts, vec![0, 0, 0]);
}

#[test]
fn duplicate_cart_line_violates_unique_index() {
    let test_db = common::TestDb::new();
    test_db.seeded_repo();
    let mut conn = test_db.pool().get().expect("connection");

    let insert = || {
        diesel::insert_into(cart_items::table).values((
            cart_items::session_id.eq("s1"),
            cart_items::product_id.eq(1),
            cart_items::quantity.eq(1),
            cart_items::created_at.eq(chrono::Utc::now().naive_utc()),
        ))
    };
    insert().execute(&mut conn).expect("first insert");
    assert!(insert().execute(&mut conn).is_err());
}
