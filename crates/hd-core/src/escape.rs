//! Column identifier escaping
//!
//! Column names may collide with reserved words on the target warehouse,
//! so the first identifier on each column line of a `CREATE TABLE` column
//! list or a `PARTITIONED BY` key list is wrapped in backticks.

use crate::lines::{Line, LineCursor};
use crate::sql_utils::{is_ident_char, quote_ident};
use regex::Regex;
use std::sync::OnceLock;

fn trigger_re() -> &'static Regex {
    static TRIGGER: OnceLock<Regex> = OnceLock::new();
    TRIGGER.get_or_init(|| {
        Regex::new(r"^[ \t]*(?:CREATE\s+(?:EXTERNAL\s+)?TABLE\b|PARTITIONED\s+BY\b)")
            .expect("valid regex literal")
    })
}

/// Scanner state between lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    /// Not inside a column block
    Outside,
    /// Directly below a trigger line or a column line
    Columns,
}

/// Quote the leading identifier of a column line.
///
/// Already-quoted names and lines that do not start with an identifier
/// character are returned unchanged.
fn escape_column_line(line: &Line<'_>) -> String {
    let body = line.body();
    let name_len = body
        .find(|c: char| !is_ident_char(c))
        .unwrap_or(body.len());
    if name_len == 0 {
        return line.text.to_string();
    }
    format!(
        "{}{}{}",
        line.indent(),
        quote_ident(&body[..name_len]),
        &body[name_len..]
    )
}

/// Backtick-quote column names in every column block of `text`.
///
/// A block opens on a line matching `CREATE [EXTERNAL] TABLE` or
/// `PARTITIONED BY` and covers the following lines that begin with
/// whitespace. The first line without leading whitespace closes it. A
/// trigger line is never itself treated as a column line, even when
/// indented.
pub fn escape_columns(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut region = Region::Outside;

    for line in LineCursor::new(text) {
        if trigger_re().is_match(line.text) {
            line.write_to(&mut out);
            region = Region::Columns;
        } else if region == Region::Columns && line.is_continuation() {
            out.push_str(&escape_column_line(&line));
            out.push_str(line.terminator);
        } else {
            line.write_to(&mut out);
            region = Region::Outside;
        }
    }

    out
}

#[cfg(test)]
#[path = "escape_test.rs"]
mod tests;
