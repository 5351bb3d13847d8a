pub mod bits;
pub mod characteristics;
#[allow(clippy::module_inception)]
pub mod collector;
pub mod error;
pub mod grouping;
pub mod joining;

// Re-export commonly used types
pub use bits::{BitString, BitToken, MAX_BIT_INDEX, indices_of};
pub use characteristics::Characteristics;
pub use collector::{Collector, FnCollector, IdentityFinish};
pub use error::CollectError;
pub use grouping::GroupingSets;
pub use joining::Joining;
