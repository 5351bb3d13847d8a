use std::collections::BTreeSet;

use tracing::info;

use super::error::QueryError;
use super::queries::{
    WantedItems, customer_names_csv, customers_by_wanted_item, customers_with_enough_money,
    items_not_on_sale,
};
use crate::domain::Mall;
use crate::streaming::Execution;

/// Results of every query over one dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub customer_names: String,
    pub items_not_on_sale: BTreeSet<String>,
    pub customers_with_enough_money: Vec<String>,
    pub wanted_items: WantedItems,
}

impl Report {
    /// Run all queries, grouping with the given execution strategy
    pub fn build(mall: &Mall, execution: Execution) -> Result<Self, QueryError> {
        let report = Self {
            customer_names: customer_names_csv(mall)?,
            items_not_on_sale: items_not_on_sale(mall),
            customers_with_enough_money: customers_with_enough_money(mall)?,
            wanted_items: customers_by_wanted_item(mall, execution)?,
        };

        info!(
            customers = mall.customers().len(),
            shops = mall.shops().len(),
            not_on_sale = report.items_not_on_sale.len(),
            affordable = report.customers_with_enough_money.len(),
            "Report built"
        );
        Ok(report)
    }
}
