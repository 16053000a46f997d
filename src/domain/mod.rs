pub mod cart;
pub mod category;
pub mod checkout;
pub mod pricing;
pub mod product;
pub mod types;
