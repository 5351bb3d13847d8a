pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod parse;
pub mod source;

// Re-export commonly used types
pub use csv_reader::CsvFixtureStream;
pub use csv_writer::{NAME_SEPARATOR, write_report, write_wanted_items};
pub use error::IoError;
pub use parse::{FixtureRecord, RawFixtureRecord};
pub use source::{
    CLASSIC_ONLINE_STORE_CSV, ClassicOnlineStore, CsvFileSource, DatasetSource, InMemorySource,
};
