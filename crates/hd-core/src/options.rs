//! Dump options threaded through every pipeline stage

use crate::suppress::Clause;
use serde::{Deserialize, Serialize};

/// Immutable per-run configuration of the DDL transformation pipeline.
///
/// Resolved once (config file, then CLI flags) and passed by reference
/// into every stage. All options default to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DumpOptions {
    /// Insert `IF NOT EXISTS` after `CREATE [EXTERNAL] TABLE|VIEW`
    pub if_not_exists: bool,

    /// Prepend `DROP TABLE|VIEW <name>;` before each `CREATE`
    pub drop_table: bool,

    /// Remove `LOCATION` clauses
    pub suppress_location: bool,

    /// Skip the partition enrichment stage
    pub suppress_partition_info: bool,

    /// Remove `TBLPROPERTIES` clauses
    pub suppress_tbl_properties: bool,

    /// Remove `STORED AS`, `INPUTFORMAT` and `OUTPUTFORMAT` clauses
    pub suppress_stored_as: bool,

    /// Remove `ROW FORMAT` (and `WITH SERDEPROPERTIES`) clauses
    pub suppress_row_format: bool,
}

impl DumpOptions {
    /// Clauses to strip, in the order the suppressor applies them.
    pub fn suppressed_clauses(&self) -> Vec<Clause> {
        let mut clauses = Vec::new();
        if self.suppress_location {
            clauses.push(Clause::Location);
        }
        if self.suppress_tbl_properties {
            clauses.push(Clause::TblProperties);
        }
        if self.suppress_stored_as {
            clauses.extend([Clause::StoredAs, Clause::InputFormat, Clause::OutputFormat]);
        }
        if self.suppress_row_format {
            clauses.extend([Clause::RowFormat, Clause::SerdeProperties]);
        }
        clauses
    }

    /// Whether the header rewriter has anything to do
    pub fn rewrites_headers(&self) -> bool {
        self.if_not_exists || self.drop_table
    }

    /// Merge another set of options, turning on everything enabled in either.
    pub fn union(self, other: DumpOptions) -> DumpOptions {
        DumpOptions {
            if_not_exists: self.if_not_exists || other.if_not_exists,
            drop_table: self.drop_table || other.drop_table,
            suppress_location: self.suppress_location || other.suppress_location,
            suppress_partition_info: self.suppress_partition_info
                || other.suppress_partition_info,
            suppress_tbl_properties: self.suppress_tbl_properties
                || other.suppress_tbl_properties,
            suppress_stored_as: self.suppress_stored_as || other.suppress_stored_as,
            suppress_row_format: self.suppress_row_format || other.suppress_row_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suppresses_nothing() {
        let options = DumpOptions::default();
        assert!(options.suppressed_clauses().is_empty());
        assert!(!options.rewrites_headers());
    }

    #[test]
    fn test_stored_as_expands_to_format_clauses() {
        let options = DumpOptions {
            suppress_stored_as: true,
            ..Default::default()
        };
        assert_eq!(
            options.suppressed_clauses(),
            vec![Clause::StoredAs, Clause::InputFormat, Clause::OutputFormat]
        );
    }

    #[test]
    fn test_clause_order_is_fixed() {
        let options = DumpOptions {
            suppress_location: true,
            suppress_tbl_properties: true,
            suppress_row_format: true,
            ..Default::default()
        };
        assert_eq!(
            options.suppressed_clauses(),
            vec![
                Clause::Location,
                Clause::TblProperties,
                Clause::RowFormat,
                Clause::SerdeProperties
            ]
        );
    }

    #[test]
    fn test_union_keeps_enabled_flags() {
        let from_config = DumpOptions {
            drop_table: true,
            ..Default::default()
        };
        let from_flags = DumpOptions {
            suppress_location: true,
            ..Default::default()
        };
        let merged = from_config.union(from_flags);
        assert!(merged.drop_table);
        assert!(merged.suppress_location);
        assert!(!merged.if_not_exists);
    }

    #[test]
    fn test_deserialize_partial_yaml() {
        let options: DumpOptions = serde_yaml::from_str("if_not_exists: true").unwrap();
        assert!(options.if_not_exists);
        assert!(!options.suppress_location);
    }
}
