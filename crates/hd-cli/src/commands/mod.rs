//! CLI command implementations

pub(crate) mod common;
pub(crate) mod dump;
pub(crate) mod rewrite;
