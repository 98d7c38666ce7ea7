//! Partition discovery and `ADD PARTITION` rendering
//!
//! The pure half of partition enrichment: finding partitioned tables in
//! rewritten DDL, parsing partition listing rows, and rendering the
//! `ALTER TABLE ... ADD PARTITION` statements. Fetching the listings is
//! left to the caller.

use crate::statement::parse_statements;

/// One partition instance: ordered `(key, value)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub pairs: Vec<(String, String)>,
}

/// Split one `key=value` token at its first `=`.
fn split_pair(token: &str) -> Option<(String, String)> {
    let (key, value) = token.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.trim().to_string()))
}

impl Partition {
    /// Parse one row of a partition listing, e.g. `ds=2020-01-01/hr=00`.
    ///
    /// Pairs are separated by `/`. A segment is further split on
    /// whitespace only when every whitespace-separated piece is itself a
    /// `key=value` pair, so values containing spaces survive. Returns
    /// `None` for rows without any pair.
    pub fn parse(row: &str) -> Option<Self> {
        let mut pairs = Vec::new();
        for segment in row.split('/').map(str::trim).filter(|s| !s.is_empty()) {
            let pieces: Vec<&str> = segment.split_whitespace().collect();
            if pieces.len() > 1 && pieces.iter().all(|p| p.contains('=')) {
                pairs.extend(pieces.into_iter().filter_map(split_pair));
            } else if let Some(pair) = split_pair(segment) {
                pairs.push(pair);
            }
        }
        if pairs.is_empty() {
            None
        } else {
            Some(Self { pairs })
        }
    }

    /// Render the partition spec: `k1='v1', k2='v2'`.
    pub fn spec(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{key}='{value}'"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Render `ALTER TABLE <table> ADD PARTITION (<spec>);`.
pub fn render_add_partition(table: &str, partition: &Partition) -> String {
    format!("ALTER TABLE {table} ADD PARTITION ({});", partition.spec())
}

/// Render one `ADD PARTITION` statement per parseable listing row.
pub fn render_partition_rows(table: &str, rows: &[String]) -> Vec<String> {
    rows.iter()
        .filter_map(|row| Partition::parse(row))
        .map(|partition| render_add_partition(table, &partition))
        .collect()
}

/// Names (backtick quoting removed) of the partitioned tables in `ddl`,
/// in statement order.
pub fn partitioned_tables(ddl: &str) -> Vec<String> {
    parse_statements(ddl)
        .iter()
        .filter(|stmt| stmt.is_partitioned_table())
        .filter_map(|stmt| stmt.bare_name())
        .collect()
}

#[cfg(test)]
#[path = "partition_test.rs"]
mod tests;
