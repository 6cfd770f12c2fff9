//! # scopegate-core — Commit Scope Policy
//!
//! The `scope-enum` rule of a conventional-commit linting pipeline. An
//! upstream parser extracts the scope token from a commit header
//! (`feat(auth): ...` yields `auth`); this crate answers whether that token
//! belongs to the configured allowed set.
//!
//! ## Key Design Principles
//!
//! 1. **Validated newtypes.** `ScopeId` and `RuleSet` can only be built
//!    through checking constructors, including when deserialized. A
//!    `RuleSet` in hand is always unique, non-empty, lower-case tokens.
//!
//! 2. **Exact matching.** Membership is byte-for-byte. No trimming, case
//!    folding or fuzzy matching. `"Auth"` is not `"auth"`.
//!
//! 3. **Errors carry context.** A rejection carries the candidate and the
//!    full allowed list so the caller can render a useful message.
//!
//! 4. **Pure evaluation.** Validation has no side effects beyond `tracing`
//!    events; every public type is `Send + Sync`.
//!
//! ## Crate Policy
//!
//! - No I/O. Configuration is parsed from documents already in memory.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod error;
pub mod policy;
pub mod scope;
pub mod validator;

// Re-export primary types for ergonomic imports.
pub use config::{LintConfig, SCOPE_ENUM_RULE};
pub use error::{ConfigError, ScopeError};
pub use policy::{Applicability, Outcome, ScopePolicy, Severity};
pub use scope::{RuleSet, ScopeId, DEFAULT_SCOPES, SCOPE_DELIMITERS};
pub use validator::{scope_segments, validate, validate_each, ScopeValidator, ValidationResult};
