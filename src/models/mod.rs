pub mod cart_item;
pub mod category;
pub mod config;
pub mod product;
