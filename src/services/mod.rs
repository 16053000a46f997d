pub use errors::{ServiceError, ServiceResult};

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod errors;
