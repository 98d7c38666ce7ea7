//! hd-core - Core library for hivedump
//!
//! This crate provides the DDL transformation pipeline (statement
//! splitting, clause suppression, column escaping, header rewriting,
//! partition statement rendering) together with the dump options and
//! configuration shared by the other hivedump crates. Every stage is a
//! pure function over text.

pub mod config;
pub mod error;
pub mod escape;
pub mod lines;
pub mod options;
pub mod partition;
pub mod pipeline;
pub mod rewrite;
pub mod sql_utils;
pub mod statement;
pub mod suppress;

pub use config::{Config, HiveConfig};
pub use error::{CoreError, CoreResult};
pub use escape::escape_columns;
pub use options::DumpOptions;
pub use partition::{partitioned_tables, render_add_partition, render_partition_rows, Partition};
pub use pipeline::{check_strict, render_script, terminate_statement, transform_ddl};
pub use rewrite::rewrite_headers;
pub use statement::{parse_statements, split_statements, Statement, StatementKind};
pub use suppress::{suppress, suppress_clauses, Clause};
