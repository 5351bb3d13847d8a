use std::collections::{BTreeMap, BTreeSet};

use super::error::QueryError;
use crate::domain::{Customer, Item, Shop};

/// Names of every item listed by at least one shop
pub fn items_on_sale(shops: &[Shop]) -> BTreeSet<String> {
    shops
        .iter()
        .flat_map(|shop| shop.items().iter())
        .map(|item| item.name().to_string())
        .collect()
}

/// Lowest listed price of every on-sale item
///
/// Listings are grouped by item name and the cheapest listing of each group
/// wins.
pub fn cheapest_prices(shops: &[Shop]) -> Result<BTreeMap<String, u32>, QueryError> {
    let mut listings: BTreeMap<&str, Vec<&Item>> = BTreeMap::new();
    for item in shops.iter().flat_map(|shop| shop.items().iter()) {
        listings.entry(item.name()).or_default().push(item);
    }

    listings
        .into_iter()
        .map(|(name, group)| {
            group
                .iter()
                .map(|item| item.price())
                .min()
                .map(|price| (name.to_string(), price))
                .ok_or_else(|| QueryError::EmptyPriceGroup(name.to_string()))
        })
        .collect()
}

/// Cost of a customer's wish-list at the given prices
///
/// Items without a price (not on sale) cost nothing.
pub fn shopping_cost(customer: &Customer, prices: &BTreeMap<String, u32>) -> u64 {
    customer
        .wants()
        .iter()
        .map(|item| u64::from(prices.get(item.name()).copied().unwrap_or(0)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: u32) -> Item {
        Item::new(name, price).unwrap()
    }

    fn shops() -> Vec<Shop> {
        vec![
            Shop::new("Kitchen World")
                .unwrap()
                .with_item(item("plate", 12))
                .with_item(item("fork", 6)),
            Shop::new("Home Goods")
                .unwrap()
                .with_item(item("plate", 10))
                .with_item(item("fork", 7))
                .with_item(item("desk", 300)),
        ]
    }

    #[test]
    fn items_on_sale_are_distinct() {
        let names = items_on_sale(&shops());
        assert_eq!(names.len(), 3);
        assert!(names.contains("desk"));
    }

    #[test]
    fn cheapest_listing_wins() {
        let prices = cheapest_prices(&shops()).unwrap();

        assert_eq!(prices["plate"], 10);
        assert_eq!(prices["fork"], 6);
        assert_eq!(prices["desk"], 300);
    }

    #[test]
    fn no_shops_no_prices() {
        assert!(cheapest_prices(&[]).unwrap().is_empty());
    }

    #[test]
    fn unlisted_items_cost_nothing() {
        let prices = cheapest_prices(&shops()).unwrap();
        let customer = Customer::new("Joe", 100)
            .unwrap()
            .with_want(item("plate", 99))
            .with_want(item("bag", 50))
            .with_want(item("fork", 1));

        assert_eq!(shopping_cost(&customer, &prices), 16);
    }

    #[test]
    fn cost_does_not_overflow_u32() {
        let shop = Shop::new("Big").unwrap().with_item(item("gold", u32::MAX));
        let prices = cheapest_prices(&[shop]).unwrap();
        let customer = Customer::new("Rich", u32::MAX)
            .unwrap()
            .with_want(item("gold", 0))
            .with_want(item("gold", 0));

        assert_eq!(shopping_cost(&customer, &prices), 2 * u64::from(u32::MAX));
    }
}
