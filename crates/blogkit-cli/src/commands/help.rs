//! Implementation of `blogkit help` (and of every invocation that resolves to it).

use crate::{cli::Cli, error::CliResult, output::OutputManager};

pub fn execute(output: &OutputManager) -> CliResult<()> {
    output.help(&Cli::help_text())?;
    Ok(())
}
