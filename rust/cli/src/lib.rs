//! # crib CLI Library
//!
//! Command-line front end for the crib scoring engine: score hands, find the
//! best cards to keep, deal seeded hands, and walk every deal of a deck.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = crib_cli::run(["crib", "score", "5H", "5C", "5D", "JS"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Total: 14"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `score`: Score a hand (pairs, fifteens, runs)
//! - `best`: Find the highest scoring keep of a hand
//! - `deal`: Shuffle with a seed, deal a hand and advise the keep
//! - `enumerate`: Walk deals of an unshuffled deck in index order
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, CribCli};
use commands::{
    handle_best_command, handle_cfg_command, handle_deal_command, handle_enumerate_command,
    handle_score_command,
};
pub use error::CliError;
use tracing::info;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments, resolves configuration, installs logging
/// and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["score", "best", "deal", "enumerate", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CribCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "Usage: crib <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    let _ = writeln!(err, "\nFor full help, run: crib --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let resolved = match config::load_with_sources() {
        Ok(resolved) => resolved,
        Err(e) => {
            let _ = ui::write_error(err, &CliError::Config(e.to_string()).to_string());
            return exit_code::ERROR;
        }
    };
    logging::init(&resolved.config.log_level);
    info!(command = cli.cmd.name(), "running command");

    let config = &resolved.config;
    let result = match cli.cmd {
        Commands::Score { cards, json } => handle_score_command(&cards, json, out),
        Commands::Best { cards, keep } => handle_best_command(&cards, keep, config, out, err),
        Commands::Deal { seed, size, keep } => handle_deal_command(seed, size, keep, config, out),
        Commands::Enumerate {
            size,
            keep,
            limit,
            output,
        } => handle_enumerate_command(size, keep, limit, output.as_deref(), config, out),
        Commands::Cfg => handle_cfg_command(&resolved, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
