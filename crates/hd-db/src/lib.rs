//! hd-db - Warehouse abstraction layer for hivedump
//!
//! This crate provides the `Warehouse` trait (the external collaborator
//! the dump pipeline calls out to) and a backend that drives the
//! warehouse's command-line query tool.

pub mod error;
pub mod hive;
pub mod traits;

pub use error::{DbError, DbResult};
pub use hive::HiveCliBackend;
pub use traits::Warehouse;
