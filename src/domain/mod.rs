pub mod customer;
pub mod error;
pub mod item;
pub mod mall;
pub mod shop;

// Re-export commonly used types
pub use customer::Customer;
pub use error::DomainError;
pub use item::Item;
pub use mall::{Mall, MallBuilder};
pub use shop::Shop;
