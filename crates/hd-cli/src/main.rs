//! hivedump CLI - dump Hive table DDL as replayable scripts

use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::common::ExitCode;
use commands::{dump, rewrite};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let result = match &cli.command {
        cli::Commands::Dump(args) => dump::execute(args, &cli.global).await,
        cli::Commands::Rewrite(args) => rewrite::execute(args, &cli.global).await,
    };

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ExitCode>() {
            Some(ec) => std::process::ExitCode::from(u8::try_from(ec.0).unwrap_or(1)),
            None => {
                eprintln!("Error: {:#}", err);
                std::process::ExitCode::FAILURE
            }
        },
    }
}
