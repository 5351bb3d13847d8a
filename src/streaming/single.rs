use std::marker::PhantomData;

use futures::{Stream, StreamExt};

use crate::collector::{CollectError, Collector};

/// Single-worker collection session owning one accumulator
pub struct CollectSession<'c, T, C>
where
    C: Collector<T>,
{
    collector: &'c C,
    acc: C::Acc,
    accepted: usize,
    _phantom: PhantomData<fn(T)>,
}

impl<'c, T, C> CollectSession<'c, T, C>
where
    C: Collector<T>,
{
    /// Create a new session with a freshly supplied accumulator
    pub fn new(collector: &'c C) -> Self {
        Self {
            collector,
            acc: collector.supply(),
            accepted: 0,
            _phantom: PhantomData,
        }
    }

    /// Fold one element into the session
    pub fn accumulate(&mut self, item: T) -> Result<(), CollectError> {
        self.collector.accumulate(&mut self.acc, item)?;
        self.accepted += 1;
        Ok(())
    }

    /// Fold every element of an iterator, stopping at the first error
    pub fn extend<I>(&mut self, items: I) -> Result<(), CollectError>
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.accumulate(item)?;
        }
        Ok(())
    }

    /// Fold every element of an async stream, stopping at the first error
    pub async fn process_stream<S>(&mut self, mut stream: S) -> Result<(), CollectError>
    where
        S: Stream<Item = T> + Unpin,
    {
        while let Some(item) = stream.next().await {
            self.accumulate(item)?;
        }
        Ok(())
    }

    /// Absorb a session that saw the elements following this one's
    pub fn merge(mut self, later: Self) -> Self {
        self.acc = self.collector.combine(self.acc, later.acc);
        self.accepted += later.accepted;
        self
    }

    /// Number of elements accumulated so far
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    pub fn finish(self) -> Result<C::Output, CollectError> {
        self.collector.finish(self.acc)
    }
}

/// Collect items on the calling thread, in order
pub fn collect_serial<T, C, I>(items: I, collector: &C) -> Result<C::Output, CollectError>
where
    C: Collector<T>,
    I: IntoIterator<Item = T>,
{
    let mut session = CollectSession::new(collector);
    session.extend(items)?;
    session.finish()
}

/// Collect the items of an async stream, in arrival order
pub async fn collect_stream<T, C, S>(stream: S, collector: &C) -> Result<C::Output, CollectError>
where
    C: Collector<T>,
    S: Stream<Item = T> + Unpin,
{
    let mut session = CollectSession::new(collector);
    session.process_stream(stream).await?;
    session.finish()
}
