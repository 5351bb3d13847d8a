use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::catalog::{cheapest_prices, items_on_sale, shopping_cost};
use super::error::QueryError;
use crate::collector::{CollectError, GroupingSets, Joining};
use crate::domain::{Customer, Mall};
use crate::streaming::{Execution, collect_serial, collect_with};

/// Item name -> names of the customers wanting it
pub type WantedItems = BTreeMap<String, BTreeSet<String>>;

/// Pair extractor behind [`customers_by_wanted_item`]
pub type WantedPairs = fn(&&Customer) -> Vec<(String, String)>;

fn wanted_pairs(customer: &&Customer) -> Vec<(String, String)> {
    customer
        .wants()
        .iter()
        .map(|item| (item.name().to_string(), customer.name().to_string()))
        .collect()
}

/// Grouping collector keyed by wanted item name
pub fn wanted_item_grouping() -> GroupingSets<WantedPairs> {
    GroupingSets::new::<&Customer, String, String>(wanted_pairs as WantedPairs)
}

/// Customer names joined with commas, in dataset order
pub fn customer_names_csv(mall: &Mall) -> Result<String, CollectError> {
    collect_serial(
        mall.customers().iter().map(Customer::name),
        &Joining::comma(),
    )
}

/// Items some customer wants that no shop sells
pub fn items_not_on_sale(mall: &Mall) -> BTreeSet<String> {
    let on_sale = items_on_sale(mall.shops());
    mall.wanted_items()
        .map(|item| item.name())
        .filter(|name| !on_sale.contains(*name))
        .map(str::to_string)
        .collect()
}

/// Customers whose budget strictly exceeds the cheapest cost of their wishes
///
/// Wishes that are not on sale cost nothing. Names keep dataset order.
pub fn customers_with_enough_money(mall: &Mall) -> Result<Vec<String>, QueryError> {
    let prices = cheapest_prices(mall.shops())?;

    Ok(mall
        .customers()
        .iter()
        .filter(|customer| {
            let cost = shopping_cost(customer, &prices);
            debug!(customer = customer.name(), budget = customer.budget(), cost, "Checking budget");
            u64::from(customer.budget()) > cost
        })
        .map(|customer| customer.name().to_string())
        .collect())
}

/// Group customers by the items they want
pub fn customers_by_wanted_item(
    mall: &Mall,
    execution: Execution,
) -> Result<WantedItems, CollectError> {
    let customers: Vec<&Customer> = mall.customers().iter().collect();
    collect_with(customers, &wanted_item_grouping(), execution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, Shop};

    fn item(name: &str, price: u32) -> Item {
        Item::new(name, price).unwrap()
    }

    fn small_mall() -> Mall {
        Mall::new(
            vec![
                Customer::new("Ann", 20)
                    .unwrap()
                    .with_want(item("tea", 0))
                    .with_want(item("hat", 0)),
                Customer::new("Bob", 10)
                    .unwrap()
                    .with_want(item("tea", 0))
                    .with_want(item("kite", 0)),
                Customer::new("Cid", 5).unwrap(),
            ],
            vec![
                Shop::new("Corner")
                    .unwrap()
                    .with_item(item("tea", 5))
                    .with_item(item("kite", 9)),
                Shop::new("Market").unwrap().with_item(item("tea", 4)),
            ],
        )
    }

    #[test]
    fn names_are_joined_in_order() {
        assert_eq!(customer_names_csv(&small_mall()).unwrap(), "Ann,Bob,Cid");
    }

    #[test]
    fn unsold_wishes_are_reported_once() {
        let missing = items_not_on_sale(&small_mall());
        assert_eq!(missing, BTreeSet::from(["hat".to_string()]));
    }

    #[test]
    fn budget_must_strictly_exceed_cost() {
        // Ann: 4 < 20, Bob: 4 + 9 = 13 > 10, Cid: 0 < 5
        let names = customers_with_enough_money(&small_mall()).unwrap();
        assert_eq!(names, vec!["Ann", "Cid"]);

        let exact = Mall::new(
            vec![Customer::new("Eve", 4).unwrap().with_want(item("tea", 0))],
            small_mall().shops().to_vec(),
        );
        assert!(customers_with_enough_money(&exact).unwrap().is_empty());
    }

    #[test]
    fn zero_budget_with_nothing_on_sale_is_not_enough() {
        let mall = Mall::new(
            vec![Customer::new("Zed", 0).unwrap().with_want(item("hat", 0))],
            vec![],
        );
        assert!(customers_with_enough_money(&mall).unwrap().is_empty());
    }

    #[test]
    fn grouping_by_wanted_item() {
        let groups = customers_by_wanted_item(&small_mall(), Execution::Serial).unwrap();

        assert_eq!(groups.len(), 3);
        assert_eq!(
            groups["tea"],
            BTreeSet::from(["Ann".to_string(), "Bob".to_string()])
        );
        assert_eq!(groups["kite"], BTreeSet::from(["Bob".to_string()]));
    }

    #[test]
    fn grouping_is_the_same_for_every_execution() {
        let mall = small_mall();
        let serial = customers_by_wanted_item(&mall, Execution::Serial).unwrap();

        for execution in [
            Execution::Auto,
            Execution::WorkStealing,
            Execution::Partitioned(2),
            Execution::Partitioned(5),
        ] {
            assert_eq!(customers_by_wanted_item(&mall, execution).unwrap(), serial);
        }
    }

    #[test]
    fn empty_mall_yields_empty_results() {
        let mall = Mall::default();

        assert_eq!(customer_names_csv(&mall).unwrap(), "");
        assert!(items_not_on_sale(&mall).is_empty());
        assert!(customers_with_enough_money(&mall).unwrap().is_empty());
        assert!(customers_by_wanted_item(&mall, Execution::Auto).unwrap().is_empty());
    }
}
