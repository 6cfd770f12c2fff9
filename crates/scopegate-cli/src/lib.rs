//! # scopegate-cli — Commit Scope Checker
//!
//! A clap-based front end over `scopegate-core` for use from git hooks and
//! CI steps. The scope token is expected to be already extracted from the
//! commit header by the caller.
//!
//! ## Subcommands
//!
//! - `check` — evaluate the `scope-enum` policy for one scope
//! - `list` — print the allowed scopes in configured order
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handlers; handlers write to any
//!   `io::Write` so they can be tested without a process.
//! - No business logic here; everything delegates to `scopegate-core`.
//! - Reports go to stdout, tracing output to stderr.

pub mod check;
pub mod config;
pub mod list;
