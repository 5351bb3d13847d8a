use super::collector::Collector;
use super::error::CollectError;

/// Joins strings with a separator, keeping encounter order
///
/// Order-sensitive: partitions must be contiguous and merged left to right.
#[derive(Debug, Clone)]
pub struct Joining {
    separator: String,
}

impl Joining {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn comma() -> Self {
        Self::new(",")
    }
}

impl<T: Into<String>> Collector<T> for Joining {
    type Acc = Vec<String>;
    type Output = String;

    fn supply(&self) -> Vec<String> {
        Vec::new()
    }

    fn accumulate(&self, acc: &mut Vec<String>, item: T) -> Result<(), CollectError> {
        acc.push(item.into());
        Ok(())
    }

    fn combine(&self, mut left: Vec<String>, right: Vec<String>) -> Vec<String> {
        left.extend(right);
        left
    }

    fn finish(&self, acc: Vec<String>) -> Result<String, CollectError> {
        Ok(acc.join(&self.separator))
    }
}
