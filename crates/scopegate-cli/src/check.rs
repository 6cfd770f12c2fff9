//! # Check Subcommand
//!
//! Evaluates the `scope-enum` policy for one scope and reports the outcome.
//! The process exits non-zero only when the policy fails at error level;
//! warnings are printed but let the commit through.

use std::io::Write;

use clap::{Args, ValueEnum};
use scopegate_core::Outcome;
use serde::Serialize;

use crate::config::ConfigArgs;

/// Report format.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Arguments for the check subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Scope extracted from the commit header. Omit when the header has none.
    pub scope: Option<String>,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    scope: Option<&'a str>,
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    allowed: Vec<&'a str>,
}

/// Evaluate the policy and write the report to `out`.
///
/// Returns `true` when the commit may proceed (pass or warning).
pub fn run_check(args: &CheckArgs, out: &mut impl Write) -> anyhow::Result<bool> {
    let config = args.config.load()?;
    let scope = args.scope.as_deref();
    let outcome = config.policy().evaluate(scope);

    let (label, message) = match &outcome {
        Outcome::Pass => ("pass", None),
        Outcome::Warn(err) => ("warn", Some(err.to_string())),
        Outcome::Fail(err) => ("fail", Some(err.to_string())),
    };
    tracing::info!(scope = ?scope, outcome = label, "scope checked");

    match args.format {
        OutputFormat::Text => match &message {
            None => writeln!(out, "{label}: {}", scope.unwrap_or("<none>"))?,
            Some(msg) => writeln!(out, "{label}: {msg}")?,
        },
        OutputFormat::Json => {
            let report = Report {
                scope,
                outcome: label,
                message,
                allowed: config.allowed().as_strs(),
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(!outcome.is_blocking())
}
