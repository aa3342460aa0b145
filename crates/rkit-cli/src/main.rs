//! # rkit CLI
//!
//! Interactive React project generator.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Run the generation command (or emit completions).
//! 6. Translate any [`CliError`] into a user-facing message.
//!
//! ## Exit codes
//!
//! | Code | Meaning              |
//! |------|----------------------|
//! |  0   | Success              |
//! |  1   | Any failure          |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
#[cfg(feature = "interactive")]
mod prompts;

fn main() -> ExitCode {
    // Load .env before anything else — including tracing init.
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    // `try_parse` reports --help and --version as errors too; those are
    // successful runs that print to stdout, not parse failures.
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            use clap::error::ErrorKind;
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    print!("{}", e.render().ansi());
                    ExitCode::SUCCESS
                }
                _ => {
                    // Render clap's own error (already user-friendly).
                    eprintln!("{}", e.render().ansi());
                    ExitCode::from(1)
                }
            };
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&args.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = args.global.verbose,
        quiet = args.global.quiet,
        no_color = args.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(args.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, args.global.verbose > 0),
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&args.global, &config);

    // ── 5. Run + 6. Error handling ────────────────────────────────────────
    let verbose = args.global.verbose > 0;
    match run(args, config, output) {
        Ok(()) => {
            info!("rkit completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

#[instrument(skip_all)]
fn run(args: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if let Some(shell) = args.completions {
        return commands::completions::execute(shell);
    }
    commands::generate::execute(args, config, output)
}

/// Translate a `CliError` into a user message.
///
/// This is the single place where structured errors become human-readable
/// output — the format/suggestion machinery in `CliError` is all exercised
/// here. Everything exits 1.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    // 1. Emit a structured log event at the right severity.
    err.log();

    // 2. Print a user-friendly message.  We write directly to stderr so the
    //    message appears even when stdout is redirected.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(1)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        // Clap's internal consistency check — catches missing values, conflicts, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
