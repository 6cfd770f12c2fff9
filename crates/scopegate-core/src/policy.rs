//! # Scope Policy
//!
//! The `scope-enum` rule as a lint configuration declares it: the tuple
//! `[severity, applicability, scopes]`, e.g. `[2, "always", [...]]`.
//!
//! | Severity | Applicability | Candidate in set | Outcome |
//! |----------|---------------|------------------|---------|
//! | 0        | any           | any              | `Pass`  |
//! | 1 / 2    | `always`      | yes              | `Pass`  |
//! | 1 / 2    | `always`      | no or absent     | `Warn` / `Fail` |
//! | 1 / 2    | `never`       | every segment    | `Warn` / `Fail` |
//! | 1 / 2    | `never`       | some segment not, or absent | `Pass` |
//!
//! A field naming several scopes (`auth/users`, `auth, users`) is split by
//! [`scope_segments`]. `always` needs every segment listed; `never` is its
//! negation and fails only when every segment is listed, the same reading
//! commitlint gives the rule.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ScopeError};
use crate::scope::RuleSet;
use crate::validator::{scope_segments, validate_each};

/// How loudly a rule violation is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    /// Rule is not evaluated.
    Disabled,
    /// Violation is reported but does not reject the commit.
    Warning,
    /// Violation rejects the commit.
    Error,
}

impl Severity {
    /// Lower-case label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = ConfigError;

    fn try_from(level: u8) -> Result<Self, ConfigError> {
        match level {
            0 => Ok(Severity::Disabled),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(ConfigError::InvalidSeverity(other)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> u8 {
        match severity {
            Severity::Disabled => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the listed scopes are required or forbidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    /// The scope must be one of the listed values.
    Always,
    /// The scope must not be any of the listed values.
    Never,
}

/// Result of evaluating a [`ScopePolicy`] against one commit's scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No violation, or the rule is disabled.
    Pass,
    /// Violation at [`Severity::Warning`].
    Warn(ScopeError),
    /// Violation at [`Severity::Error`]; the commit is rejected.
    Fail(ScopeError),
}

impl Outcome {
    /// True when there is nothing to report.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// True when the commit must be rejected.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// The violation, if any, regardless of severity.
    pub fn violation(&self) -> Option<&ScopeError> {
        match self {
            Self::Pass => None,
            Self::Warn(err) | Self::Fail(err) => Some(err),
        }
    }

    /// Collapse to a `Result`; warnings count as success.
    ///
    /// # Errors
    ///
    /// Returns the violation carried by [`Outcome::Fail`].
    pub fn into_result(self) -> Result<(), ScopeError> {
        match self {
            Self::Fail(err) => Err(err),
            Self::Pass | Self::Warn(_) => Ok(()),
        }
    }
}

/// The `scope-enum` rule: severity, applicability, and the scope list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopePolicy {
    /// How a violation is reported.
    pub severity: Severity,
    /// Whether `allowed` is required or forbidden.
    pub applicability: Applicability,
    /// The configured scope list.
    pub allowed: RuleSet,
}

impl Default for ScopePolicy {
    /// Error-level, `always`, over the default scopes.
    fn default() -> Self {
        Self {
            severity: Severity::Error,
            applicability: Applicability::Always,
            allowed: RuleSet::default(),
        }
    }
}

impl ScopePolicy {
    /// An error-level `always` policy over the given scopes.
    pub fn always(allowed: RuleSet) -> Self {
        Self {
            severity: Severity::Error,
            applicability: Applicability::Always,
            allowed,
        }
    }

    /// Evaluate the scope field of one commit header.
    pub fn evaluate(&self, candidate: Option<&str>) -> Outcome {
        if self.severity == Severity::Disabled {
            return Outcome::Pass;
        }

        let violation = match self.applicability {
            Applicability::Always => validate_each(candidate, &self.allowed).err(),
            Applicability::Never => self.forbidden_field(candidate),
        };

        match violation {
            None => Outcome::Pass,
            Some(err) => {
                tracing::debug!(
                    severity = %self.severity,
                    applicability = ?self.applicability,
                    error = %err,
                    "scope-enum violation"
                );
                match self.severity {
                    Severity::Warning => Outcome::Warn(err),
                    _ => Outcome::Fail(err),
                }
            }
        }
    }

    fn forbidden_field(&self, candidate: Option<&str>) -> Option<ScopeError> {
        let field = candidate.filter(|c| !c.is_empty())?;
        scope_segments(field)
            .all(|segment| self.allowed.contains(segment))
            .then(|| ScopeError::ForbiddenScope {
                candidate: field.to_string(),
                forbidden: self.allowed.clone(),
            })
    }
}
