//! # Filesmith Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! Entry point of the `filesmith` binary. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers in `commands`
//!
//! ## Architecture
//!
//! The binary is a thin front end over the `filesmith` library:
//! - Each subcommand (`create`, `copy`) is a variant of the `Commands` enum
//! - Each variant carries its own `clap` argument struct and maps to a
//!   `handle_*` function in `commands`
//! - All errors propagate to `main`, which prints them once and exits with status 1
//!
//! ## Examples
//!
//! ```bash
//! # Create the files described by a manifest, logging each one
//! filesmith -v create scaffold.toml
//!
//! # Copy one file to several places
//! filesmith copy LICENSE a/LICENSE b/LICENSE
//! ```
//!
//! Per-file log lines are emitted at `info` level, so they appear with `-v`
//! (or `RUST_LOG=info`). Errors are always shown.
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "filesmith",
    about = "Create files from a declarative manifest and copy files into place",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// All available commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "c")]
    Create(commands::create::CreateArgs),
    #[command(alias = "cp")]
    Copy(commands::copy::CopyArgs),
}

/// Parses arguments, installs the `tracing` subscriber and runs the command.
///
/// # Returns
///
/// * `anyhow::Result<()>` - `Ok(())` on success. Command failures do not return:
///   they are printed to stderr and the process exits with status 1.
fn main() -> anyhow::Result<()> {
    // Parse command-line arguments; clap exits on its own for --help/--version.
    let cli = Cli::parse();

    // Map the `-v` count to a default filter level. Per-file messages from the
    // library are logged at `info`, so they only show from `-v` upwards.
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // `RUST_LOG` wins over the `-v` flags when it is set.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    // Dispatch to the handler of the chosen subcommand.
    let command_result = match cli.command {
        Commands::Create(args) => commands::create::handle_create(args),
        Commands::Copy(args) => commands::copy::handle_copy(args),
    };

    // Report the error chain once, in `{:#}` form, and fail the process.
    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
