use tracing::debug;

use super::processor::{PartitionedCollect, collect_work_stealing};
use super::single::collect_serial;
use crate::collector::{Characteristics, CollectError, Collector};

/// Strategy used to run a collector over an in-memory sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// One accumulator, input order
    Serial,

    /// Fixed number of contiguous partitions merged left to right
    Partitioned(usize),

    /// Rayon work-stealing splits
    WorkStealing,

    /// Parallel for `unordered` collectors, serial otherwise - DEFAULT
    #[default]
    Auto,
}

impl Execution {
    /// Resolve `Auto` against a collector's declared characteristics
    pub fn resolve(self, characteristics: Characteristics) -> Self {
        match self {
            Self::Auto if characteristics.is_unordered() => Self::WorkStealing,
            Self::Auto => Self::Serial,
            other => other,
        }
    }
}

/// Run `collector` over `items` with the given strategy
pub fn collect_with<T, C>(
    items: Vec<T>,
    collector: &C,
    execution: Execution,
) -> Result<C::Output, CollectError>
where
    C: Collector<T>,
    T: Send,
{
    let resolved = execution.resolve(collector.characteristics());
    debug!(requested = ?execution, ?resolved, items = items.len(), "Running collector");

    match resolved {
        Execution::Serial | Execution::Auto => collect_serial(items, collector),
        Execution::Partitioned(partitions) => PartitionedCollect::new(collector)
            .with_partitions(partitions)
            .collect(items),
        Execution::WorkStealing => collect_work_stealing(items, collector),
    }
}
