//! Shell completion generation via `--completions <SHELL>`.

use clap::CommandFactory;

use crate::cli::{Cli, Shell};
use crate::error::CliResult;

/// Write a completion script for the requested shell to stdout.
pub fn execute(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(
        clap_complete::Shell::from(shell),
        &mut cmd,
        bin_name,
        &mut std::io::stdout(),
    );
    Ok(())
}
