use rayon::prelude::*;
use tracing::debug;

use crate::collector::{CollectError, Collector};

/// Partitioned parallel execution of a collector
///
/// Items are split into partitions, each partition is accumulated on the
/// rayon pool with its own accumulator, and the partial accumulators are
/// merged before finishing.
pub struct PartitionedCollect<'c, C> {
    collector: &'c C,
    num_partitions: usize,
    assignment: PartitionAssignment,
    merge_order: MergeOrder,
}

/// How to assign items to partitions
pub enum PartitionAssignment {
    /// Contiguous chunks: first N/P items→Partition 0, next N/P→Partition 1, ... (default)
    Sequential,

    /// Item 0→Partition 0, Item 1→Partition 1, ..., Item P→Partition 0, ...
    RoundRobin,

    /// Custom assignment function: item_index -> partition_index
    Custom(Box<dyn Fn(usize) -> usize + Send + Sync>),
}

/// How partial accumulators are merged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeOrder {
    /// Fold partitions left to right - DEFAULT
    #[default]
    LeftToRight,

    /// Merge adjacent pairs level by level
    Tree,

    /// Fold partitions right to left
    /// Only honored for collectors declaring `unordered`
    Reversed,
}

impl<'c, C> PartitionedCollect<'c, C> {
    /// Create a partitioned run over a single partition
    ///
    /// # Example
    /// ```rust,ignore
    /// let groups = PartitionedCollect::new(&by_item)
    ///     .with_partitions(4)
    ///     .with_assignment(PartitionAssignment::RoundRobin)
    ///     .with_merge_order(MergeOrder::Tree)
    ///     .collect(mall.customers())?;
    /// ```
    pub fn new(collector: &'c C) -> Self {
        Self {
            collector,
            num_partitions: 1,
            assignment: PartitionAssignment::Sequential,
            merge_order: MergeOrder::LeftToRight,
        }
    }

    /// Set number of partitions (defaults to 1)
    pub fn with_partitions(mut self, num: usize) -> Self {
        self.num_partitions = num.max(1);
        self
    }

    /// Set how items are assigned to partitions (defaults to Sequential)
    pub fn with_assignment(mut self, assignment: PartitionAssignment) -> Self {
        self.assignment = assignment;
        self
    }

    /// Set how partials are merged (defaults to LeftToRight)
    pub fn with_merge_order(mut self, merge_order: MergeOrder) -> Self {
        self.merge_order = merge_order;
        self
    }

    /// Run the collector over `items`
    ///
    /// Collectors that do not declare `unordered` always get contiguous
    /// partitions and an order-preserving merge, whatever was configured.
    pub fn collect<T, I>(self, items: I) -> Result<C::Output, CollectError>
    where
        C: Collector<T>,
        T: Send,
        I: IntoIterator<Item = T>,
    {
        let PartitionedCollect {
            collector,
            num_partitions,
            mut assignment,
            mut merge_order,
        } = self;

        if !collector.characteristics().is_unordered() {
            if !matches!(assignment, PartitionAssignment::Sequential) {
                debug!("Ordered collector, using sequential partition assignment");
                assignment = PartitionAssignment::Sequential;
            }
            if merge_order == MergeOrder::Reversed {
                debug!("Ordered collector, merging left to right");
                merge_order = MergeOrder::LeftToRight;
            }
        }

        let items: Vec<T> = items.into_iter().collect();
        let total_items = items.len();

        // Assign items to partitions
        let mut partitions: Vec<Vec<T>> = (0..num_partitions).map(|_| Vec::new()).collect();
        let chunk_size = total_items.div_ceil(num_partitions).max(1);
        for (item_idx, item) in items.into_iter().enumerate() {
            let partition_idx = match &assignment {
                PartitionAssignment::Sequential => (item_idx / chunk_size).min(num_partitions - 1),
                PartitionAssignment::RoundRobin => item_idx % num_partitions,
                PartitionAssignment::Custom(f) => f(item_idx) % num_partitions,
            };
            partitions[partition_idx].push(item);
        }

        debug!(
            partitions = num_partitions,
            items = total_items,
            ?merge_order,
            "Collecting partitions"
        );

        // One accumulator per partition
        let partials = partitions
            .into_par_iter()
            .enumerate()
            .map(|(partition_id, partition)| -> Result<C::Acc, CollectError> {
                let size = partition.len();
                let mut acc = collector.supply();
                for item in partition {
                    collector.accumulate(&mut acc, item)?;
                }
                debug!(partition_id, size, "Partition accumulated");
                Ok(acc)
            })
            .collect::<Result<Vec<_>, CollectError>>()?;

        let merged = merge_partials::<T, C>(collector, partials, merge_order);
        collector.finish(merged)
    }
}

fn merge_partials<T, C>(collector: &C, partials: Vec<C::Acc>, merge_order: MergeOrder) -> C::Acc
where
    C: Collector<T>,
{
    let merged = match merge_order {
        MergeOrder::LeftToRight => partials
            .into_iter()
            .reduce(|left, right| collector.combine(left, right)),
        MergeOrder::Reversed => partials
            .into_iter()
            .rev()
            .reduce(|left, right| collector.combine(left, right)),
        MergeOrder::Tree => {
            let mut level = partials;
            while level.len() > 1 {
                let mut next = Vec::with_capacity(level.len().div_ceil(2));
                let mut pairs = level.into_iter();
                while let Some(left) = pairs.next() {
                    match pairs.next() {
                        Some(right) => next.push(collector.combine(left, right)),
                        None => next.push(left),
                    }
                }
                level = next;
            }
            level.into_iter().next()
        }
    };

    merged.unwrap_or_else(|| collector.supply())
}

/// Collect on the rayon pool with work-stealing splits
///
/// Splits are merged in input order, so order-sensitive collectors are safe.
pub fn collect_work_stealing<T, C>(items: Vec<T>, collector: &C) -> Result<C::Output, CollectError>
where
    C: Collector<T>,
    T: Send,
{
    let acc = items
        .into_par_iter()
        .try_fold(
            || collector.supply(),
            |mut acc, item| {
                collector.accumulate(&mut acc, item)?;
                Ok::<_, CollectError>(acc)
            },
        )
        .try_reduce(
            || collector.supply(),
            |left, right| Ok(collector.combine(left, right)),
        )?;

    collector.finish(acc)
}
