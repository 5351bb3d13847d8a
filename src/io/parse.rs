use serde::Deserialize;

use super::error::IoError;
use crate::domain::{DomainError, Item, MallBuilder};

/// Raw CSV record as read from a fixture file
#[derive(Debug, Deserialize)]
pub struct RawFixtureRecord {
    pub kind: String,
    pub owner: String,
    pub budget: Option<String>,
    pub item: Option<String>,
    pub price: Option<String>,
}

/// One parsed line of a fixture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureRecord {
    Customer { name: String, budget: u32 },
    Want { customer: String, item: Item },
    Listing { shop: String, item: Item },
}

impl RawFixtureRecord {
    /// Parse this raw record into a strongly-typed FixtureRecord
    pub fn parse(self) -> Result<FixtureRecord, IoError> {
        let kind = self.kind.trim().to_lowercase();
        let owner = self.owner.trim().to_string();

        match kind.as_str() {
            "customer" => {
                let budget = required(self.budget, "budget required for customer")?;
                Ok(FixtureRecord::Customer {
                    name: owner,
                    budget: parse_number("budget", budget)?,
                })
            }
            "want" => Ok(FixtureRecord::Want {
                customer: owner,
                item: parse_item(self.item, self.price, "want")?,
            }),
            "shop" => Ok(FixtureRecord::Listing {
                shop: owner,
                item: parse_item(self.item, self.price, "shop")?,
            }),
            _ => Err(IoError::InvalidRecordKind(self.kind)),
        }
    }
}

impl FixtureRecord {
    /// Apply this record to a dataset under construction
    pub fn apply(self, builder: &mut MallBuilder) -> Result<(), DomainError> {
        match self {
            Self::Customer { name, budget } => builder.add_customer(&name, budget),
            Self::Want { customer, item } => builder.add_want(&customer, item),
            Self::Listing { shop, item } => builder.add_listing(&shop, item),
        }
    }
}

fn required(value: Option<String>, message: &str) -> Result<String, IoError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| IoError::MissingField(message.to_string()))
}

fn parse_number(field: &'static str, value: String) -> Result<u32, IoError> {
    value
        .parse()
        .map_err(|_| IoError::InvalidNumber { field, value })
}

fn parse_item(name: Option<String>, price: Option<String>, kind: &str) -> Result<Item, IoError> {
    let name = required(name, &format!("item required for {kind}"))?;
    let price = required(price, &format!("price required for {kind}"))?;
    Ok(Item::new(name, parse_number("price", price)?)?)
}
