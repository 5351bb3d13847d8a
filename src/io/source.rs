use std::path::PathBuf;

use async_trait::async_trait;
use futures::io::Cursor;
use tracing::info;

use super::csv_reader::CsvFixtureStream;
use super::error::IoError;
use crate::domain::Mall;

/// Fixture shipped with the crate: ten customers and seven shops
pub const CLASSIC_ONLINE_STORE_CSV: &str =
    include_str!("../../fixtures/classic_online_store.csv");

/// Supplies a read-only dataset to queries and collectors
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn load(&self) -> Result<Mall, IoError>;
}

/// Dataset read from a fixture CSV file
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for CsvFileSource {
    async fn load(&self) -> Result<Mall, IoError> {
        info!(path = %self.path.display(), "Loading fixture file");
        CsvFixtureStream::from_file(&self.path)
            .await?
            .into_mall()
            .await
    }
}

/// The embedded classic online store fixture
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicOnlineStore;

#[async_trait]
impl DatasetSource for ClassicOnlineStore {
    async fn load(&self) -> Result<Mall, IoError> {
        CsvFixtureStream::new(Cursor::new(CLASSIC_ONLINE_STORE_CSV.as_bytes()))
            .into_mall()
            .await
    }
}

/// Dataset built in memory, handed out as a copy on each load
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    mall: Mall,
}

impl InMemorySource {
    pub fn new(mall: Mall) -> Self {
        Self { mall }
    }
}

#[async_trait]
impl DatasetSource for InMemorySource {
    async fn load(&self) -> Result<Mall, IoError> {
        Ok(self.mall.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Customer, Item};
    use std::io::Write;

    #[tokio::test]
    async fn classic_store_has_ten_customers() {
        let mall = ClassicOnlineStore.load().await.unwrap();

        assert_eq!(mall.customers().len(), 10);
        assert_eq!(mall.shops().len(), 7);
        assert_eq!(mall.customers()[0].name(), "Joe");
    }

    #[tokio::test]
    async fn file_source_reads_fixture() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "kind,owner,budget,item,price").unwrap();
        writeln!(file, "customer,Kathy,40,,").unwrap();
        writeln!(file, "want,Kathy,,kite,15").unwrap();
        writeln!(file, "shop,Sky Toys,,kite,15").unwrap();
        file.flush().unwrap();

        let mall = CsvFileSource::new(file.path()).load().await.unwrap();
        assert_eq!(mall.customers()[0].wants()[0].name(), "kite");
        assert_eq!(mall.shops()[0].name(), "Sky Toys");
    }

    #[tokio::test]
    async fn file_source_missing_file() {
        let result = CsvFileSource::new("/nonexistent/store.csv").load().await;
        assert!(matches!(result, Err(IoError::Io(_))));
    }

    #[tokio::test]
    async fn in_memory_source_returns_its_mall() {
        let mall = Mall::new(
            vec![
                Customer::new("Ann", 1)
                    .unwrap()
                    .with_want(Item::new("hat", 2).unwrap()),
            ],
            vec![],
        );
        let source = InMemorySource::new(mall.clone());

        assert_eq!(source.load().await.unwrap(), mall);
    }

    #[tokio::test]
    async fn sources_are_object_safe() {
        let sources: Vec<Box<dyn DatasetSource>> = vec![
            Box::new(ClassicOnlineStore),
            Box::new(InMemorySource::default()),
        ];

        let mut customer_counts = Vec::new();
        for source in &sources {
            customer_counts.push(source.load().await.unwrap().customers().len());
        }
        assert_eq!(customer_counts, vec![10, 0]);
    }
}
