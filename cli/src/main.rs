//! # TArchiver Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the TArchiver CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and building the runner and reporter
//! - Routing execution to the `create` / `extract` / `list` handlers
//! - Turning the outcome into the process exit code
//!
//! ## Examples
//!
//! ```bash
//! tarchiver create backup.tar.gz src Cargo.toml
//! tarchiver extract backup.tar.gz ./restore
//! tarchiver list backup.tar.gz
//!
//! # Show which command line is executed
//! tarchiver -v list backup.tar.gz
//!
//! # Give up if the tool takes longer than a minute
//! tarchiver --timeout 60 extract huge.7z ./out
//! ```
//!
use clap::{Parser, Subcommand};
use std::{path::PathBuf, time::Duration};
use tracing_subscriber::{fmt, EnvFilter};

use crate::commands::dispatch::Dispatcher;
use crate::common::{process::TokioRunner, ui::ConsoleReporter};
use crate::core::config;

mod commands; // Subcommand handlers and the shared dispatcher
mod common; // Archive table, filesystem checks, process execution, UI
mod core; // Configuration and error types

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "tarchiver",
    about = "TArchiver: create, extract and list archives with the tools you already have",
    long_about = "Create, extract and list zip, tar, tar.gz, gz, 7z, rar and xz archives.\n\
                  The archive's suffix decides which external tool (zip, tar, gzip, 7z, rar, xz) is run.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Kill the external tool after this many seconds.
    #[arg(long, global = true, env = "TARCHIVER_TIMEOUT", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Create an archive from files and directories.
    Create(commands::create::CreateArgs),
    /// Extract an archive into a destination.
    Extract(commands::extract::ExtractArgs),
    /// List the contents of an archive.
    List(commands::list::ListArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let cfg = match config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {:?}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let timeout = cli
        .timeout
        .or(cfg.execution.timeout_secs)
        .map(Duration::from_secs);
    let working_dir = cfg.execution.working_dir.as_ref().map(PathBuf::from);
    let runner = TokioRunner::new(timeout, working_dir.clone());
    let mut reporter = ConsoleReporter::new(cfg.reporting.color());
    let mut dispatcher = Dispatcher::new(&runner, &mut reporter, working_dir);

    let outcome = match cli.command {
        Commands::Create(args) => commands::create::handle_create(args, &mut dispatcher).await,
        Commands::Extract(args) => commands::extract::handle_extract(args, &mut dispatcher).await,
        Commands::List(args) => commands::list::handle_list(args, &mut dispatcher).await,
    };

    tracing::debug!("Finished with outcome {:?}", outcome);
    let code = outcome.exit_code(cfg.reporting.exit_zero_on_failure());
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
