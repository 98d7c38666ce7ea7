//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};
use hd_core::DumpOptions;

/// hivedump - dump Hive table DDL as replayable scripts
#[derive(Parser, Debug)]
#[command(name = "hivedump")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: hivedump.yml in the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dump the DDL of one or more databases from the warehouse
    Dump(DumpArgs),

    /// Rewrite an existing DDL file without contacting the warehouse
    Rewrite(RewriteArgs),
}

/// DDL transformation flags shared by `dump` and `rewrite`.
///
/// Each flag switches an option on; options already enabled in the
/// config file stay on.
#[derive(Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// Add IF NOT EXISTS to every CREATE TABLE/VIEW
    #[arg(long)]
    pub if_not_exists: bool,

    /// Emit DROP TABLE/VIEW before every CREATE
    #[arg(long)]
    pub drop_table: bool,

    /// Strip LOCATION clauses
    #[arg(long)]
    pub no_location: bool,

    /// Do not append ALTER TABLE ... ADD PARTITION statements
    #[arg(long)]
    pub no_partitions: bool,

    /// Strip TBLPROPERTIES clauses
    #[arg(long)]
    pub no_tblproperties: bool,

    /// Strip STORED AS, INPUTFORMAT and OUTPUTFORMAT clauses
    #[arg(long)]
    pub no_stored_as: bool,

    /// Strip ROW FORMAT and WITH SERDEPROPERTIES clauses
    #[arg(long)]
    pub no_row_format: bool,
}

impl OptionArgs {
    /// Options switched on by these flags
    pub fn to_options(&self) -> DumpOptions {
        DumpOptions {
            if_not_exists: self.if_not_exists,
            drop_table: self.drop_table,
            suppress_location: self.no_location,
            suppress_partition_info: self.no_partitions,
            suppress_tbl_properties: self.no_tblproperties,
            suppress_stored_as: self.no_stored_as,
            suppress_row_format: self.no_row_format,
        }
    }
}

/// Arguments for the dump command
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Databases to dump, in order
    #[arg(required_unless_present = "all_databases")]
    pub databases: Vec<String>,

    /// Dump every database the warehouse lists
    #[arg(long, conflicts_with = "databases")]
    pub all_databases: bool,

    /// Only dump these tables (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tables: Option<Vec<String>>,

    /// Write all scripts to this file instead of stdout
    #[arg(short, long, conflicts_with = "output_dir")]
    pub output: Option<String>,

    /// Write one <database>.sql per database into this directory
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Query tool executable
    #[arg(long, env = "HIVEDUMP_HIVE")]
    pub hive: Option<String>,

    /// Maximum concurrent fetches per database
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Fail on CREATE statements that match no recognized header
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub options: OptionArgs,
}

/// Arguments for the rewrite command
#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// DDL file to rewrite (stdin when omitted or "-")
    pub input: Option<String>,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Prefix the result with `use <database>;`
    #[arg(short, long)]
    pub database: Option<String>,

    /// Fail on CREATE statements that match no recognized header
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub options: OptionArgs,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
