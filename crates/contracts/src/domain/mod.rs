pub mod order;
pub mod payment;
pub mod platform;
pub mod product;
