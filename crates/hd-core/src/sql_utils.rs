//! Identifier quoting utilities
//!
//! The warehouse quotes identifiers with backticks and escapes an embedded
//! backtick by doubling it.

/// Quote an identifier with backticks.
///
/// # Examples
/// ```
/// use hd_core::sql_utils::quote_ident;
/// assert_eq!(quote_ident("ds"), "`ds`");
/// assert_eq!(quote_ident("we`ird"), "`we``ird`");
/// ```
pub fn quote_ident(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

/// Remove backtick quoting from a possibly qualified name.
///
/// Handles both `` `db`.`t` `` and `` `db.t` `` forms.
///
/// # Examples
/// ```
/// use hd_core::sql_utils::unquote_ident;
/// assert_eq!(unquote_ident("`t`"), "t");
/// assert_eq!(unquote_ident("`db`.`t`"), "db.t");
/// assert_eq!(unquote_ident("plain"), "plain");
/// ```
pub fn unquote_ident(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    let mut quoted = false;
    while let Some(c) = chars.next() {
        if c != '`' {
            out.push(c);
        } else if quoted && chars.peek() == Some(&'`') {
            chars.next();
            out.push('`');
        } else {
            quoted = !quoted;
        }
    }
    out
}

/// True for characters that may start or continue a bare identifier.
pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
