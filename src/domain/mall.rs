use std::collections::HashMap;

use super::customer::Customer;
use super::error::DomainError;
use super::item::Item;
use super::shop::Shop;

/// Read-only aggregate owning every customer and shop of a dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mall {
    customers: Vec<Customer>,
    shops: Vec<Shop>,
}

impl Mall {
    pub fn new(customers: Vec<Customer>, shops: Vec<Shop>) -> Self {
        Self { customers, shops }
    }

    /// Customers in dataset order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    /// Every item listed by any shop, shop by shop
    pub fn listings(&self) -> impl Iterator<Item = &Item> + '_ {
        self.shops.iter().flat_map(|shop| shop.items().iter())
    }

    /// Every wished item of every customer, customer by customer
    pub fn wanted_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.customers.iter().flat_map(|customer| customer.wants().iter())
    }
}

/// Incremental builder used by dataset loaders
///
/// Customers must be declared before their wishes; shops are created on
/// their first listing. Both keep first-appearance order.
#[derive(Debug, Default)]
pub struct MallBuilder {
    customers: Vec<Customer>,
    customer_index: HashMap<String, usize>,
    shops: Vec<Shop>,
    shop_index: HashMap<String, usize>,
}

impl MallBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_customer(&mut self, name: &str, budget: u32) -> Result<(), DomainError> {
        if self.customer_index.contains_key(name) {
            return Err(DomainError::DuplicateCustomer(name.to_string()));
        }
        let customer = Customer::new(name, budget)?;
        self.customer_index
            .insert(name.to_string(), self.customers.len());
        self.customers.push(customer);
        Ok(())
    }

    pub fn add_want(&mut self, customer: &str, item: Item) -> Result<(), DomainError> {
        let idx = *self
            .customer_index
            .get(customer)
            .ok_or_else(|| DomainError::UnknownCustomer(customer.to_string()))?;
        self.customers[idx].push_want(item);
        Ok(())
    }

    pub fn add_listing(&mut self, shop: &str, item: Item) -> Result<(), DomainError> {
        let idx = match self.shop_index.get(shop) {
            Some(idx) => *idx,
            None => {
                self.shops.push(Shop::new(shop)?);
                let idx = self.shops.len() - 1;
                self.shop_index.insert(shop.to_string(), idx);
                idx
            }
        };
        self.shops[idx].push_item(item);
        Ok(())
    }

    pub fn build(self) -> Mall {
        Mall::new(self.customers, self.shops)
    }
}
