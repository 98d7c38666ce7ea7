//! `CREATE` header rewriting
//!
//! Injects `DROP <kind> <name>;` before and/or `IF NOT EXISTS` inside every
//! `CREATE [EXTERNAL] TABLE|VIEW <name>` header of a DDL blob. Runs on the
//! whole blob before suppression and escaping so those stages see the
//! final header form.

use crate::options::DumpOptions;
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn header_re() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| {
        Regex::new(
            r"(?m)^([ \t]*)CREATE(?:\s+EXTERNAL)?\s+(TABLE|VIEW)\s+(IF\s+NOT\s+EXISTS\s+)?([^\s(;]+)",
        )
        .expect("valid regex literal")
    })
}

fn rewrite_header(caps: &Captures<'_>, options: &DumpOptions) -> String {
    let whole = &caps[0];
    let indent = &caps[1];
    let kind = &caps[2];
    let name = &caps[4];
    // Everything from the line start up to the IF NOT EXISTS clause or the name
    let start = caps.get(0).map_or(0, |m| m.start());
    let head_end = caps
        .get(3)
        .or_else(|| caps.get(4))
        .map_or(whole.len(), |m| m.start() - start);

    let mut rewritten = String::with_capacity(whole.len() + 32);
    if options.drop_table {
        rewritten.push_str(&format!("{indent}DROP {kind} {name};\n\n"));
    }
    rewritten.push_str(&whole[..head_end]);
    if options.if_not_exists && caps.get(3).is_none() {
        rewritten.push_str("IF NOT EXISTS ");
    }
    rewritten.push_str(&whole[head_end..]);
    rewritten
}

/// Apply the `drop_table` and `if_not_exists` header rewrites to `ddl`.
///
/// A header must start its line, optionally indented, so `CREATE TABLE`
/// inside a string literal or a view body is left alone. Text without a
/// recognizable header, or with both options off, is returned unchanged. A header that already says `IF NOT EXISTS` does
/// not get a second one.
pub fn rewrite_headers(ddl: &str, options: &DumpOptions) -> String {
    if !options.rewrites_headers() {
        return ddl.to_string();
    }
    header_re()
        .replace_all(ddl, |caps: &Captures<'_>| rewrite_header(caps, options))
        .into_owned()
}

#[cfg(test)]
#[path = "rewrite_test.rs"]
mod tests;
