//! Transformation pipeline composition
//!
//! Fixed stage order: header rewrite, clause suppression, column escaping.
//! Partition enrichment needs the warehouse and runs afterwards in
//! `hd-dump`.

use crate::error::{CoreError, CoreResult};
use crate::escape::escape_columns;
use crate::options::DumpOptions;
use crate::rewrite::rewrite_headers;
use crate::statement::parse_statements;
use crate::suppress::suppress_clauses;

/// Run the text-only stages over a DDL blob.
pub fn transform_ddl(ddl: &str, options: &DumpOptions) -> String {
    let rewritten = rewrite_headers(ddl, options);
    let suppressed = suppress_clauses(&rewritten, &options.suppressed_clauses());
    escape_columns(&suppressed)
}

/// Make sure one table's DDL ends with `;` and a newline.
///
/// The warehouse prints `SHOW CREATE TABLE` output without a terminator.
/// Trailing whitespace after an inserted `;` is kept as is.
pub fn terminate_statement(ddl: &str) -> String {
    let body = ddl.trim_end();
    if body.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(ddl.len() + 2);
    out.push_str(body);
    if !body.ends_with(';') {
        out.push(';');
    }
    out.push_str(&ddl[body.len()..]);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Wrap a database's DDL in the `use <db>;` preamble.
pub fn render_script(database: &str, body: &str) -> String {
    format!("use {database};\n\n{body}\n")
}

/// Fail on statements that start with `CREATE` but match no known header.
pub fn check_strict(ddl: &str) -> CoreResult<()> {
    match parse_statements(ddl)
        .into_iter()
        .find(|stmt| stmt.is_unrecognized_create())
    {
        Some(stmt) => Err(CoreError::UnrecognizedCreate {
            statement: stmt.text.trim().to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
