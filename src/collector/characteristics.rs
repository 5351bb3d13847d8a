/// Behavioral flags a collector declares about itself
///
/// The flags are promises made by the collector author. Nothing checks them;
/// the execution layer reads them to choose a strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Characteristics {
    unordered: bool,
    identity_finish: bool,
}

impl Characteristics {
    /// No flags set: order-sensitive, finisher does real work
    pub const NONE: Self = Self {
        unordered: false,
        identity_finish: false,
    };

    /// Combiner is associative and commutative; any partitioning and any
    /// merge order produce the same result
    pub const fn with_unordered(mut self) -> Self {
        self.unordered = true;
        self
    }

    /// Finisher returns the accumulator unchanged
    pub const fn with_identity_finish(mut self) -> Self {
        self.identity_finish = true;
        self
    }

    pub const fn is_unordered(&self) -> bool {
        self.unordered
    }

    pub const fn is_identity_finish(&self) -> bool {
        self.identity_finish
    }
}
