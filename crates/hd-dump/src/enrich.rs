//! Partition enrichment
//!
//! Finds partitioned tables in rewritten DDL, asks the warehouse for their
//! partition listings, and renders one `ALTER TABLE ... ADD PARTITION`
//! statement per listed partition.

use crate::report::{FetchFailure, FetchStage};
use futures::stream::{self, StreamExt};
use hd_core::partition::{partitioned_tables, render_partition_rows};
use hd_db::Warehouse;

/// Statements for every partition of every partitioned table in `ddl`.
///
/// Listings are fetched with at most `jobs` requests in flight and the
/// statements come back in table order. A failed listing is recorded in
/// `failures` and contributes no statements; so does an empty one.
pub async fn enrich_partitions(
    warehouse: &dyn Warehouse,
    database: &str,
    ddl: &str,
    jobs: usize,
    failures: &mut Vec<FetchFailure>,
) -> Vec<String> {
    let tables = partitioned_tables(ddl);
    if tables.is_empty() {
        return Vec::new();
    }
    log::debug!(
        "Listing partitions of {} table(s) in {}",
        tables.len(),
        database
    );

    let listings: Vec<_> = stream::iter(tables.iter())
        .map(|name| async move {
            // Headers may carry a qualified name; the listing wants the table alone
            let table = name.rsplit('.').next().unwrap_or(name.as_str());
            (name, table, warehouse.list_partitions(database, table).await)
        })
        .buffered(jobs.max(1))
        .collect()
        .await;

    let mut statements = Vec::new();
    for (name, table, listing) in listings {
        match listing {
            Ok(rows) => statements.extend(render_partition_rows(name, &rows)),
            Err(e) => {
                log::warn!("Partition listing failed for {}.{}: {}", database, table, e);
                failures.push(FetchFailure::new(
                    database,
                    Some(table),
                    FetchStage::Partitions,
                    &e,
                ));
            }
        }
    }
    statements
}

#[cfg(test)]
#[path = "enrich_test.rs"]
mod tests;
