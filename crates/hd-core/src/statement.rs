//! Statement splitting and classification
//!
//! DDL coming back from the warehouse has no grammar guarantee, so a
//! statement is whatever lies between two `;` separators, and its kind is
//! inferred by matching the header. Anything that does not look like a
//! recognized `CREATE` header is `StatementKind::Other` and flows through
//! the pipeline untouched.

use crate::sql_utils::unquote_ident;
use regex::Regex;
use std::sync::OnceLock;

/// Split a DDL blob into `;`-separated statements.
///
/// Newlines are normalized to single spaces, since one statement usually
/// spans many physical lines. Separators inside `'...'`, `"..."` or
/// `` `...` `` are not split on, and a backslash escapes the next character
/// inside string literals. A `--` comment outside quotes is dropped up to
/// the end of its line, so quotes inside it never open a literal.
/// Statements are returned in order and may be empty or whitespace-only
/// (e.g. after a trailing `;`); callers skip those. Input without any
/// separator yields a single statement.
pub fn split_statements(ddl: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = ddl.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' && chars.peek() == Some(&'\n') {
            continue;
        }
        let c = normalize_newline(c);
        match quote {
            Some(q) => {
                current.push(c);
                if c == '\\' && q != '`' {
                    if let Some(escaped) = chars.next() {
                        current.push(normalize_newline(escaped));
                    }
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                ';' => statements.push(std::mem::take(&mut current)),
                '\'' | '"' | '`' => {
                    quote = Some(c);
                    current.push(c);
                }
                '-' if chars.peek() == Some(&'-') => {
                    for skipped in chars.by_ref() {
                        if skipped == '\n' {
                            break;
                        }
                    }
                    current.push(' ');
                }
                _ => current.push(c),
            },
        }
    }
    statements.push(current);
    statements
}

fn normalize_newline(c: char) -> char {
    if c == '\n' {
        ' '
    } else {
        c
    }
}

/// `text` with the contents of `'...'` and `"..."` literals removed.
///
/// The quotes themselves and backtick-quoted identifiers are kept, so
/// keyword matching on the result only sees SQL outside of literals.
fn strip_string_literals(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut quote: Option<char> = None;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some('`') => {
                out.push(c);
                if c == '`' {
                    quote = None;
                }
            }
            Some(q) => {
                if c == '\\' {
                    chars.next();
                } else if c == q {
                    quote = None;
                    out.push(c);
                }
            }
            None => {
                if matches!(c, '\'' | '"' | '`') {
                    quote = Some(c);
                }
                out.push(c);
            }
        }
    }
    out
}

/// Inferred kind of a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// `CREATE [EXTERNAL] TABLE`
    CreateTable,
    /// `CREATE VIEW`
    CreateView,
    /// Anything else
    Other,
}

/// A single DDL statement with its inferred header attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Statement text, without the separator
    pub text: String,

    /// Inferred statement kind
    pub kind: StatementKind,

    /// Object name as written in the header (quoting kept)
    pub name: Option<String>,

    /// Whether the header carried `EXTERNAL`
    pub is_external: bool,
}

fn create_header_re() -> &'static Regex {
    static CREATE_HEADER: OnceLock<Regex> = OnceLock::new();
    CREATE_HEADER.get_or_init(|| {
        Regex::new(
            r"^CREATE\s+(EXTERNAL\s+)?(TABLE|VIEW)\s+(?:IF\s+NOT\s+EXISTS\s+)?([^\s(;]+)",
        )
        .expect("valid regex literal")
    })
}

fn partitioned_by_re() -> &'static Regex {
    static PARTITIONED_BY: OnceLock<Regex> = OnceLock::new();
    PARTITIONED_BY
        .get_or_init(|| Regex::new(r"\bPARTITIONED\s+BY\b").expect("valid regex literal"))
}

impl Statement {
    /// Classify a single statement's text.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim_start();
        match create_header_re().captures(trimmed) {
            Some(caps) => {
                let kind = if &caps[2] == "TABLE" {
                    StatementKind::CreateTable
                } else {
                    StatementKind::CreateView
                };
                Self {
                    text: text.to_string(),
                    kind,
                    name: Some(caps[3].to_string()),
                    is_external: caps.get(1).is_some(),
                }
            }
            None => Self {
                text: text.to_string(),
                kind: StatementKind::Other,
                name: None,
                is_external: false,
            },
        }
    }

    /// Object name with backtick quoting removed
    pub fn bare_name(&self) -> Option<String> {
        self.name.as_deref().map(unquote_ident)
    }

    /// True for a `CREATE [EXTERNAL] TABLE ... PARTITIONED BY` statement.
    ///
    /// `PARTITIONED BY` inside a string literal, e.g. a column comment,
    /// does not count.
    pub fn is_partitioned_table(&self) -> bool {
        self.kind == StatementKind::CreateTable
            && partitioned_by_re().is_match(&strip_string_literals(&self.text))
    }

    /// True when the statement starts with `CREATE` but matched no header.
    pub fn is_unrecognized_create(&self) -> bool {
        self.kind == StatementKind::Other && self.text.trim_start().starts_with("CREATE")
    }

    /// True for empty or whitespace-only statements
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Split and classify a DDL blob, skipping blank statements.
pub fn parse_statements(ddl: &str) -> Vec<Statement> {
    split_statements(ddl)
        .iter()
        .map(|text| Statement::parse(text))
        .filter(|stmt| !stmt.is_blank())
        .collect()
}

#[cfg(test)]
#[path = "statement_test.rs"]
mod tests;
