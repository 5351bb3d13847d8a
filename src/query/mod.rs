pub mod catalog;
pub mod error;
pub mod queries;
pub mod report;

// Re-export commonly used types
pub use catalog::{cheapest_prices, items_on_sale, shopping_cost};
pub use error::QueryError;
pub use queries::{
    WantedItems, WantedPairs, customer_names_csv, customers_by_wanted_item, customers_with_enough_money,
    items_not_on_sale, wanted_item_grouping,
};
pub use report::Report;
