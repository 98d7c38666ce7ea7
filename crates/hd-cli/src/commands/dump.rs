//! Dump command implementation

use anyhow::{Context, Result};
use hd_core::Config;
use hd_db::{HiveCliBackend, Warehouse};
use hd_dump::{DatabaseDump, DumpRunner, DumpSettings, DumpSummary};
use std::fs;
use std::path::Path;

use crate::cli::{DumpArgs, GlobalArgs};
use crate::commands::common::{load_config, write_output, ExitCode};

/// Execute the dump command
pub async fn execute(args: &DumpArgs, global: &GlobalArgs) -> Result<()> {
    let config = resolve_config(load_config(global)?, args)?;

    let warehouse = HiveCliBackend::from_config(&config.hive);
    let settings = DumpSettings {
        options: config.options,
        jobs: config.jobs,
        strict: config.strict,
        tables: args.tables.clone(),
    };
    let runner = DumpRunner::new(&warehouse, &settings);

    if global.verbose {
        eprintln!(
            "[verbose] Using {} backend '{}' with {} job(s)",
            warehouse.backend_name(),
            config.hive.command,
            config.jobs
        );
    }

    let databases = runner
        .resolve_databases(&args.databases, args.all_databases)
        .await?;
    eprintln!("Dumping {} database(s)...", databases.len());

    let dumps = runner.dump_all(&databases).await?;
    for dump in &dumps {
        eprintln!(
            "  {}: {} table(s), {} partition statement(s)",
            dump.database,
            dump.tables.len(),
            dump.partition_statements
        );
        if global.verbose {
            for table in &dump.tables {
                eprintln!("[verbose]   {}.{}", dump.database, table);
            }
        }
    }

    write_dumps(args, &dumps)?;

    let summary = DumpSummary::from_dumps(&dumps);
    for failure in dumps.iter().flat_map(|d| &d.failures) {
        eprintln!("  Warning: {}", failure);
    }
    eprintln!(
        "\nDumped {} table(s) from {} database(s)",
        summary.tables, summary.databases
    );

    if !summary.is_complete() {
        eprintln!("{} fetch(es) failed, output is incomplete", summary.failures);
        return Err(ExitCode(1).into());
    }
    Ok(())
}

/// Apply the command-line overrides on top of the loaded config.
fn resolve_config(mut config: Config, args: &DumpArgs) -> Result<Config> {
    if let Some(hive) = &args.hive {
        config.hive.command = hive.clone();
    }
    if let Some(jobs) = args.jobs {
        config.jobs = jobs;
    }
    config.strict |= args.strict;
    config.options = config.options.union(args.options.to_options());
    config.validate().context("Invalid command-line options")?;
    Ok(config)
}

/// Write scripts to the output directory, the output file or stdout.
fn write_dumps(args: &DumpArgs, dumps: &[DatabaseDump]) -> Result<()> {
    if let Some(dir) = &args.output_dir {
        let dir = Path::new(dir);
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        for dump in dumps {
            let path = dir.join(format!("{}.sql", dump.database));
            fs::write(&path, &dump.script)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        return Ok(());
    }

    let combined: String = dumps.iter().map(|d| d.script.as_str()).collect();
    write_output(args.output.as_deref(), &combined)
}

#[cfg(test)]
#[path = "dump_test.rs"]
mod tests;
