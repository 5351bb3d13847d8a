use std::collections::{BTreeMap, BTreeSet};

use super::characteristics::Characteristics;
use super::collector::Collector;
use super::error::CollectError;

/// Groups values into sets keyed by a derived key
///
/// Each element may contribute any number of `(key, value)` pairs. Partial
/// maps are merged by set union, so the result does not depend on how the
/// input was partitioned or in which order partials are combined.
pub struct GroupingSets<F> {
    key_values: F,
}

impl<F> GroupingSets<F> {
    /// Create a grouping collector from a pair extractor
    ///
    /// # Example
    /// ```rust,ignore
    /// // item name -> customers wanting it
    /// let by_item = GroupingSets::new(|c: &&Customer| {
    ///     c.wants().iter().map(|i| (i.name().to_string(), c.name().to_string())).collect()
    /// });
    /// ```
    pub fn new<T, K, V>(key_values: F) -> Self
    where
        F: Fn(&T) -> Vec<(K, V)>,
    {
        Self { key_values }
    }
}

impl<T, K, V, F> Collector<T> for GroupingSets<F>
where
    F: Fn(&T) -> Vec<(K, V)> + Send + Sync,
    K: Ord + Send,
    V: Ord + Send,
{
    type Acc = BTreeMap<K, BTreeSet<V>>;
    type Output = BTreeMap<K, BTreeSet<V>>;

    fn supply(&self) -> Self::Acc {
        BTreeMap::new()
    }

    fn accumulate(&self, acc: &mut Self::Acc, item: T) -> Result<(), CollectError> {
        for (key, value) in (self.key_values)(&item) {
            acc.entry(key).or_default().insert(value);
        }
        Ok(())
    }

    fn combine(&self, mut left: Self::Acc, right: Self::Acc) -> Self::Acc {
        for (key, values) in right {
            left.entry(key).or_default().extend(values);
        }
        left
    }

    fn finish(&self, acc: Self::Acc) -> Result<Self::Output, CollectError> {
        Ok(acc)
    }

    fn characteristics(&self) -> Characteristics {
        Characteristics::NONE
            .with_unordered()
            .with_identity_finish()
    }
}
