//! # Scope Validator
//!
//! The membership check at the heart of the `scope-enum` rule. Given the
//! scope token an upstream commit parser extracted, decide whether it is one
//! of the allowed scopes.
//!
//! ## Semantics
//!
//! - Exact, case-sensitive equality against one entry of the [`RuleSet`].
//! - No trimming or normalization: `" auth"` and `"Auth"` are rejected.
//! - An absent scope (`None`) and an empty one (`Some("")`) are both
//!   "no scope supplied" and are always rejected.
//!
//! Validation is a pure function of its inputs. Repeated calls with the same
//! candidate and set return equal results.

use crate::error::ScopeError;
use crate::scope::{RuleSet, SCOPE_DELIMITERS};

/// `Ok(())` if the candidate is allowed, otherwise the rejection with context.
pub type ValidationResult = Result<(), ScopeError>;

/// Check a single candidate scope against the allowed set.
///
/// # Errors
///
/// Returns [`ScopeError::InvalidScope`] carrying the candidate and the full
/// allowed set when the candidate is absent, empty, or not a member.
pub fn validate(candidate: Option<&str>, allowed: &RuleSet) -> ValidationResult {
    match candidate {
        Some(c) if !c.is_empty() && allowed.contains(c) => {
            tracing::trace!(scope = c, "scope accepted");
            Ok(())
        }
        _ => {
            tracing::debug!(
                scope = ?candidate,
                allowed = %allowed,
                "scope rejected"
            );
            Err(ScopeError::InvalidScope {
                candidate: candidate.map(str::to_string),
                allowed: allowed.clone(),
            })
        }
    }
}

/// Split a scope field into its scopes.
///
/// Delimiters are `/`, `\` and `,`; a comma may be followed by one space,
/// so `auth, users` and `auth,users` both yield `auth` and `users`. Any
/// other whitespace stays part of the segment.
pub fn scope_segments(field: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(field);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(SCOPE_DELIMITERS) {
            None => {
                rest = None;
                Some(current)
            }
            Some(i) => {
                // Delimiters are ASCII, so `i + 1` is a char boundary.
                let next = &current[i + 1..];
                rest = Some(if current.as_bytes()[i] == b',' {
                    next.strip_prefix(' ').unwrap_or(next)
                } else {
                    next
                });
                Some(&current[..i])
            }
        }
    })
}

/// Check a scope field that may name several scopes, e.g. `auth/users`.
///
/// The field is split by [`scope_segments`]; every segment must pass
/// [`validate`]. Without a delimiter this is identical to [`validate`].
///
/// # Errors
///
/// Returns the [`ScopeError::InvalidScope`] of the first failing segment.
/// An empty segment (`auth/` or `auth,,users`) fails like an absent scope.
pub fn validate_each(candidate: Option<&str>, allowed: &RuleSet) -> ValidationResult {
    match candidate {
        Some(field) if !field.is_empty() => {
            scope_segments(field).try_for_each(|segment| validate(Some(segment), allowed))
        }
        _ => validate(candidate, allowed),
    }
}

/// A validator bound to one allowed set.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeValidator {
    allowed: RuleSet,
}

impl ScopeValidator {
    /// Bind a validator to an allowed set.
    pub fn new(allowed: RuleSet) -> Self {
        Self { allowed }
    }

    /// The allowed set this validator checks against.
    pub fn allowed(&self) -> &RuleSet {
        &self.allowed
    }

    /// See [`validate`].
    pub fn validate(&self, candidate: Option<&str>) -> ValidationResult {
        validate(candidate, &self.allowed)
    }

    /// See [`validate_each`].
    pub fn validate_each(&self, candidate: Option<&str>) -> ValidationResult {
        validate_each(candidate, &self.allowed)
    }
}
