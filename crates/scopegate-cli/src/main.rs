//! # scopegate CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;

/// scopegate — commit scope policy checker.
///
/// Checks the scope of a conventional commit header against the
/// configured `scope-enum` rule.
#[derive(Parser, Debug)]
#[command(name = "scopegate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Check one commit scope against the policy.
    Check(scopegate_cli::check::CheckArgs),
    /// List the allowed scopes.
    List(scopegate_cli::list::ListArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Check(args) => {
            if scopegate_cli::check::run_check(&args, &mut stdout)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::List(args) => {
            scopegate_cli::list::run_list(&args, &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
