use super::error::DomainError;
use super::item::Item;

/// Shop with an ordered inventory of items for sale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shop {
    name: String,
    items: Vec<Item>,
}

impl Shop {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName("shop"));
        }
        Ok(Self {
            name,
            items: Vec::new(),
        })
    }

    /// Add an item to the inventory (fluent interface)
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn push_item(&mut self, item: Item) {
        self.items.push(item);
    }
}
