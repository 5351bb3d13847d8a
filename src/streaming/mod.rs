pub mod execution;
pub mod processor;
pub mod single;

// Re-export commonly used types
pub use execution::{Execution, collect_with};
pub use processor::{MergeOrder, PartitionAssignment, PartitionedCollect, collect_work_stealing};
pub use single::{CollectSession, collect_serial, collect_stream};
