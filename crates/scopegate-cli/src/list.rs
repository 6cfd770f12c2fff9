//! # List Subcommand
//!
//! Prints the allowed scopes, one per line, in configured order.

use std::io::Write;

use clap::Args;

use crate::config::ConfigArgs;

/// Arguments for the list subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Write the configured scopes to `out`.
pub fn run_list(args: &ListArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let config = args.config.load()?;
    for scope in config.allowed() {
        writeln!(out, "{scope}")?;
    }
    Ok(())
}
