//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! - Scope rejections carry the candidate and the allowed (or forbidden)
//!   list, so the linting pipeline can tell the user what would have passed.
//! - Configuration errors wrap the underlying parser error unchanged, or
//!   name the rule check that failed after parsing.

use thiserror::Error;

use crate::scope::RuleSet;

/// Errors produced while building a [`RuleSet`] or checking a scope against it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// The candidate is not a member of the allowed set.
    ///
    /// `candidate` is `None` when the commit header carried no scope at all.
    #[error("{}", describe_invalid(.candidate, .allowed))]
    InvalidScope {
        /// The rejected value, exactly as supplied.
        candidate: Option<String>,
        /// The full allowed set, in configured order.
        allowed: RuleSet,
    },

    /// Every scope in the candidate belongs to a set the policy forbids.
    #[error("scope {candidate:?} is forbidden; must not be one of {forbidden}")]
    ForbiddenScope {
        /// The rejected scope field, exactly as supplied.
        candidate: String,
        /// The forbidden set, in configured order.
        forbidden: RuleSet,
    },

    /// A scope token or rule set violates its construction invariants.
    #[error("invalid rule set: {0}")]
    InvalidRuleSet(String),
}

fn describe_invalid(candidate: &Option<String>, allowed: &RuleSet) -> String {
    match candidate.as_deref() {
        None | Some("") => format!("scope is required; expected one of {allowed}"),
        Some(c) => format!("scope {c:?} is not allowed; expected one of {allowed}"),
    }
}

/// Errors loading a lint configuration document.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed or did not match the schema.
    #[error("json config error: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML document could not be parsed or did not match the schema.
    #[error("yaml config error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A required rule is absent from `rules`.
    #[error("missing required rule {0:?}")]
    MissingRule(&'static str),

    /// Rule severity outside 0 (disabled), 1 (warning), 2 (error).
    #[error("invalid rule severity {0}; expected 0, 1 or 2")]
    InvalidSeverity(u8),

    /// The rule's scope list violates [`RuleSet`] invariants.
    #[error("invalid scope-enum value: {0}")]
    Scope(#[from] ScopeError),
}
