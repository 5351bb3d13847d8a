//! Mergeable collectors and read-only queries over a small shopping-mall dataset.
//!
//! The [`collector::Collector`] trait describes a four-stage reduction
//! (supply, accumulate, combine, finish). The [`streaming`] module runs
//! collectors serially, over explicit partitions, or on the rayon pool, and
//! [`query`] answers questions about a [`domain::Mall`] loaded through an
//! [`io::DatasetSource`].

pub mod app;
pub mod collector;
pub mod domain;
pub mod io;
pub mod prelude;
pub mod query;
pub mod streaming;
