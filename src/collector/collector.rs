use super::characteristics::Characteristics;
use super::error::CollectError;

/// Mergeable reduction of `T` values into an output
///
/// A collector is run in four stages: `supply` creates an empty accumulator,
/// `accumulate` folds one element into it, `combine` merges two accumulators
/// built from disjoint sub-sequences (left before right) and `finish` turns
/// the final accumulator into the output.
///
/// `combine` must be associative. Collectors declaring
/// [`Characteristics::with_unordered`] must also have a commutative `combine`.
pub trait Collector<T>: Send + Sync {
    type Acc: Send;
    type Output;

    /// Produce a fresh accumulator, independent of every other one
    fn supply(&self) -> Self::Acc;

    /// Fold one element into the accumulator
    fn accumulate(&self, acc: &mut Self::Acc, item: T) -> Result<(), CollectError>;

    /// Merge `right` into `left`
    fn combine(&self, left: Self::Acc, right: Self::Acc) -> Self::Acc;

    fn finish(&self, acc: Self::Acc) -> Result<Self::Output, CollectError>;

    fn characteristics(&self) -> Characteristics {
        Characteristics::NONE
    }
}

/// Type of the finisher installed by [`FnCollector::identity`]
pub type IdentityFinish<A> = fn(A) -> Result<A, CollectError>;

/// Collector assembled from four stage closures
///
/// # Example
/// ```rust,ignore
/// let to_csv = FnCollector::new(
///     Vec::new,
///     |acc: &mut Vec<String>, name: String| {
///         acc.push(name);
///         Ok(())
///     },
///     |mut left: Vec<String>, right: Vec<String>| {
///         left.extend(right);
///         left
///     },
///     |acc: Vec<String>| Ok(acc.join(",")),
/// );
/// ```
pub struct FnCollector<S, Ac, Co, F> {
    supplier: S,
    accumulator: Ac,
    combiner: Co,
    finisher: F,
    characteristics: Characteristics,
}

impl<S, Ac, Co, F> FnCollector<S, Ac, Co, F> {
    pub fn new<T, A, R>(supplier: S, accumulator: Ac, combiner: Co, finisher: F) -> Self
    where
        S: Fn() -> A,
        Ac: Fn(&mut A, T) -> Result<(), CollectError>,
        Co: Fn(A, A) -> A,
        F: Fn(A) -> Result<R, CollectError>,
    {
        Self {
            supplier,
            accumulator,
            combiner,
            finisher,
            characteristics: Characteristics::NONE,
        }
    }

    /// Replace the declared characteristics (fluent interface)
    pub fn with_characteristics(mut self, characteristics: Characteristics) -> Self {
        self.characteristics = characteristics;
        self
    }
}

impl<S, Ac, Co, A> FnCollector<S, Ac, Co, IdentityFinish<A>> {
    /// Collector whose accumulator is its output
    pub fn identity<T>(supplier: S, accumulator: Ac, combiner: Co) -> Self
    where
        S: Fn() -> A,
        Ac: Fn(&mut A, T) -> Result<(), CollectError>,
        Co: Fn(A, A) -> A,
    {
        Self {
            supplier,
            accumulator,
            combiner,
            finisher: Ok,
            characteristics: Characteristics::NONE.with_identity_finish(),
        }
    }
}

impl<T, A, R, S, Ac, Co, F> Collector<T> for FnCollector<S, Ac, Co, F>
where
    A: Send,
    S: Fn() -> A + Send + Sync,
    Ac: Fn(&mut A, T) -> Result<(), CollectError> + Send + Sync,
    Co: Fn(A, A) -> A + Send + Sync,
    F: Fn(A) -> Result<R, CollectError> + Send + Sync,
{
    type Acc = A;
    type Output = R;

    fn supply(&self) -> A {
        (self.supplier)()
    }

    fn accumulate(&self, acc: &mut A, item: T) -> Result<(), CollectError> {
        (self.accumulator)(acc, item)
    }

    fn combine(&self, left: A, right: A) -> A {
        (self.combiner)(left, right)
    }

    fn finish(&self, acc: A) -> Result<R, CollectError> {
        (self.finisher)(acc)
    }

    fn characteristics(&self) -> Characteristics {
        self.characteristics
    }
}
