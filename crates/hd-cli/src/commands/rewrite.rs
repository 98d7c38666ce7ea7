//! Rewrite command implementation
//!
//! Runs the text-only pipeline over DDL that was dumped earlier. Partition
//! statements need the warehouse and are never added here.

use anyhow::{Context, Result};
use hd_core::{check_strict, parse_statements, render_script, transform_ddl};

use crate::cli::{GlobalArgs, RewriteArgs};
use crate::commands::common::{load_config, read_input, write_output};

/// Execute the rewrite command
pub async fn execute(args: &RewriteArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let options = config.options.union(args.options.to_options());

    let ddl = read_input(args.input.as_deref())?;
    let body = transform_ddl(&ddl, &options);
    if args.strict || config.strict {
        check_strict(&body).context("Rewrite rejected")?;
    }

    if global.verbose {
        eprintln!(
            "[verbose] Rewrote {} statement(s)",
            parse_statements(&body).len()
        );
    }

    let script = match &args.database {
        Some(database) => render_script(database, &body),
        None => body,
    };
    write_output(args.output.as_deref(), &script)
}
