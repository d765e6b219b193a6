use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io;

/// Print a completion script for `fireprofile` and its subcommands
pub fn execute(shell: Shell, cli: &mut Command) -> Result<()> {
    let name = cli.get_name().to_string();
    generate(shell, cli, name, &mut io::stdout());
    Ok(())
}
