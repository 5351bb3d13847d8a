use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::{Stream, StreamExt};
use tokio::fs::File;
use tokio_util::compat::TokioAsyncReadCompatExt;
use tracing::debug;

use super::error::IoError;
use super::parse::{FixtureRecord, RawFixtureRecord};
use crate::domain::{Mall, MallBuilder};

/// Async stream of fixture records from CSV input
pub struct CsvFixtureStream {
    inner: Pin<Box<dyn Stream<Item = Result<FixtureRecord, IoError>> + Send>>,
}

impl CsvFixtureStream {
    /// Create a new record stream from an async reader
    pub fn new<R>(reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let csv_reader = AsyncReaderBuilder::new()
            .trim(csv_async::Trim::All)
            .flexible(true)
            .create_deserializer(reader);

        let stream = csv_reader
            .into_deserialize::<RawFixtureRecord>()
            .map(|result| result.map_err(IoError::from).and_then(RawFixtureRecord::parse));

        Self {
            inner: Box::pin(stream),
        }
    }

    /// Create a new record stream from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let records = CsvFixtureStream::from_file("fixtures/classic_online_store.csv").await?;
    /// ```
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file = File::open(path.as_ref()).await?;
        Ok(Self::new(file.compat()))
    }

    /// Drain the stream into a dataset, failing on the first bad record
    pub async fn into_mall(mut self) -> Result<Mall, IoError> {
        let mut builder = MallBuilder::new();
        let mut records = 0usize;

        while let Some(record) = self.next().await {
            record?.apply(&mut builder)?;
            records += 1;
        }

        let mall = builder.build();
        debug!(
            records,
            customers = mall.customers().len(),
            shops = mall.shops().len(),
            "Fixture loaded"
        );
        Ok(mall)
    }
}

impl Stream for CsvFixtureStream {
    type Item = Result<FixtureRecord, IoError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}
