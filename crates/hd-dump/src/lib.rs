//! hd-dump - Dump orchestration for hivedump
//!
//! Drives a [`hd_db::Warehouse`] through one database at a time: list the
//! tables, fetch their DDL, run the text pipeline from `hd-core` and
//! append partition statements. Fetch failures are collected rather than
//! raised so one broken table never stops a dump.

pub mod enrich;
pub mod error;
pub mod report;
pub mod runner;

#[cfg(test)]
mod fake;

pub use enrich::enrich_partitions;
pub use error::{DumpError, DumpResult};
pub use report::{DatabaseDump, DumpSummary, FetchFailure, FetchStage};
pub use runner::{DumpRunner, DumpSettings};
