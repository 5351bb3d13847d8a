//! Prelude module for convenient imports
//!
//! Import everything you need with: `use mall::prelude::*;`

// Domain types
pub use crate::domain::{Customer, DomainError, Item, Mall, MallBuilder, Shop};

// Collector types
pub use crate::collector::{
    BitString, BitToken, Characteristics, CollectError, Collector, FnCollector, GroupingSets,
    Joining, indices_of,
};

// Execution types
pub use crate::streaming::{
    CollectSession, Execution, MergeOrder, PartitionAssignment, PartitionedCollect,
    collect_serial, collect_stream, collect_with, collect_work_stealing,
};

// Query types
pub use crate::query::{
    QueryError, Report, WantedItems, cheapest_prices, customer_names_csv,
    customers_by_wanted_item, customers_with_enough_money, items_not_on_sale,
};

// IO types
pub use crate::io::{
    ClassicOnlineStore, CsvFileSource, CsvFixtureStream, DatasetSource, InMemorySource, IoError,
    write_report, write_wanted_items,
};

// App types
pub use crate::app::{AppError, CliApp, ReportWriter, init_logger};
