use super::error::DomainError;

/// A named item with an integer price
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    name: String,
    price: u32,
}

impl Item {
    /// Create a new item, rejecting blank names
    pub fn new(name: impl Into<String>, price: u32) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName("item"));
        }
        Ok(Self { name, price })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}
