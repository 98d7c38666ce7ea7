//! Clause suppression
//!
//! A clause starts on a line that begins (at column zero) with the clause
//! keyword and extends over every immediately following line that starts
//! with whitespace. Suppression drops those lines and copies everything
//! else through verbatim.

use crate::lines::LineCursor;
use crate::sql_utils::is_ident_char;

/// Clauses the pipeline knows how to strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Location,
    TblProperties,
    StoredAs,
    InputFormat,
    OutputFormat,
    RowFormat,
    SerdeProperties,
}

impl Clause {
    /// Keyword prefix that opens the clause
    pub fn keyword(&self) -> &'static str {
        match self {
            Clause::Location => "LOCATION",
            Clause::TblProperties => "TBLPROPERTIES",
            Clause::StoredAs => "STORED AS",
            Clause::InputFormat => "INPUTFORMAT",
            Clause::OutputFormat => "OUTPUTFORMAT",
            Clause::RowFormat => "ROW FORMAT",
            Clause::SerdeProperties => "WITH SERDEPROPERTIES",
        }
    }
}

/// True when `line` starts with `keyword` as a whole word.
fn starts_clause(line: &str, keyword: &str) -> bool {
    match line.strip_prefix(keyword) {
        Some(rest) => !rest.starts_with(is_ident_char),
        None => false,
    }
}

/// Remove every clause opened by `keyword` from `text`.
///
/// The opening line must start with the keyword at column zero. When the
/// removed lines carried the statement's terminating `;`, the terminator
/// is moved to the end of the last retained non-blank line so the
/// statement stays terminated.
pub fn suppress(keyword: &str, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Byte offset just past the text of the last retained line
    let mut last_text_end: Option<usize> = None;
    let mut cursor = LineCursor::new(text);

    while let Some(line) = cursor.next() {
        if !starts_clause(line.text, keyword) {
            let start = out.len();
            line.write_to(&mut out);
            if !line.text.trim().is_empty() {
                last_text_end = Some(start + line.text.trim_end().len());
            }
            continue;
        }

        let mut terminated = line.ends_statement();
        for continuation in cursor.take_continuations() {
            terminated |= continuation.ends_statement();
        }

        if terminated {
            if let Some(end) = last_text_end {
                if !out[..end].ends_with(';') {
                    out.insert(end, ';');
                    last_text_end = Some(end + 1);
                }
            }
        }
    }

    out
}

/// Apply [`suppress`] for each clause in order.
pub fn suppress_clauses(text: &str, clauses: &[Clause]) -> String {
    clauses
        .iter()
        .fold(text.to_string(), |acc, clause| suppress(clause.keyword(), &acc))
}

#[cfg(test)]
#[path = "suppress_test.rs"]
mod tests;
