use super::error::DomainError;
use super::item::Item;

/// Customer with a budget and an ordered wish-list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    budget: u32,
    wants: Vec<Item>,
}

impl Customer {
    /// Create a customer with an empty wish-list
    pub fn new(name: impl Into<String>, budget: u32) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName("customer"));
        }
        Ok(Self {
            name,
            budget,
            wants: Vec::new(),
        })
    }

    /// Append an item to the wish-list (fluent interface)
    pub fn with_want(mut self, item: Item) -> Self {
        self.wants.push(item);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Items this customer wants to buy, in wish-list order
    pub fn wants(&self) -> &[Item] {
        &self.wants
    }

    pub(crate) fn push_want(&mut self, item: Item) {
        self.wants.push(item);
    }
}
