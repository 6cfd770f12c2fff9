//! # Scope Identifiers and the Allowed Set
//!
//! `ScopeId` is a single permitted scope token; `RuleSet` is the ordered,
//! duplicate-free list of them. Both validate at construction and on
//! deserialization, so a value of either type is always well-formed.
//!
//! A `RuleSet` has no mutating methods. It is built once when the
//! configuration loads and shared read-only afterwards.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ScopeError;

/// Scopes permitted by the default configuration, in canonical order.
pub const DEFAULT_SCOPES: [&str; 8] = [
    "auth",
    "users",
    "media",
    "chats",
    "notifications",
    "messages",
    "posts",
    "infra",
];

/// Characters that join several scopes in one header, e.g. `auth/users`.
pub const SCOPE_DELIMITERS: [char; 3] = ['/', '\\', ','];

/// A single allowed scope token.
///
/// # Validation
///
/// - Must be non-empty
/// - Must not contain upper-case characters
/// - Must not contain whitespace or a scope delimiter (`/`, `\`, `,`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ScopeId(String);

impl<'de> Deserialize<'de> for ScopeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl ScopeId {
    /// Create a scope identifier, validating the token format.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::InvalidRuleSet`] if the token is empty, has
    /// upper-case characters, whitespace, or a delimiter.
    pub fn new(value: impl Into<String>) -> Result<Self, ScopeError> {
        let s = value.into();
        if s.is_empty() {
            return Err(ScopeError::InvalidRuleSet(
                "scope token must not be empty".to_string(),
            ));
        }
        if s.chars().any(char::is_uppercase) {
            return Err(ScopeError::InvalidRuleSet(format!(
                "scope token {s:?} must be lower-case"
            )));
        }
        if s.chars()
            .any(|c| c.is_whitespace() || SCOPE_DELIMITERS.contains(&c))
        {
            return Err(ScopeError::InvalidRuleSet(format!(
                "scope token {s:?} must not contain whitespace or delimiters"
            )));
        }
        Ok(Self(s))
    }

    /// Access the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ScopeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ScopeId {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// The ordered set of allowed scope identifiers.
///
/// Invariant: at least one entry, no duplicates, every entry a valid
/// [`ScopeId`]. Order is the configured order and is preserved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleSet(Vec<ScopeId>);

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl RuleSet {
    /// Build a rule set from scope tokens, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::InvalidRuleSet`] if the list is empty, contains
    /// a duplicate, or any token fails [`ScopeId::new`].
    pub fn new<I, S>(scopes: I) -> Result<Self, ScopeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<ScopeId> = Vec::new();
        for raw in scopes {
            let id = ScopeId::new(raw)?;
            if entries.contains(&id) {
                return Err(ScopeError::InvalidRuleSet(format!(
                    "duplicate scope token {:?}",
                    id.as_str()
                )));
            }
            entries.push(id);
        }
        if entries.is_empty() {
            return Err(ScopeError::InvalidRuleSet(
                "rule set must list at least one scope".to_string(),
            ));
        }
        Ok(Self(entries))
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, candidate: &str) -> bool {
        self.0.iter().any(|id| id.as_str() == candidate)
    }

    /// Iterate entries in configured order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScopeId> {
        self.0.iter()
    }

    /// Entries as string slices, in configured order.
    pub fn as_strs(&self) -> Vec<&str> {
        self.0.iter().map(ScopeId::as_str).collect()
    }

    /// Number of entries. Never zero.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: [`RuleSet::new`] rejects an empty list.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for RuleSet {
    /// The project's allowed scopes: [`DEFAULT_SCOPES`].
    fn default() -> Self {
        Self(
            DEFAULT_SCOPES
                .iter()
                .map(|s| ScopeId((*s).to_string()))
                .collect(),
        )
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.as_strs().join(", "))
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a ScopeId;
    type IntoIter = std::slice::Iter<'a, ScopeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constant() {
        let set = RuleSet::default();
        assert_eq!(set.len(), 8);
        assert_eq!(set.as_strs(), DEFAULT_SCOPES.to_vec());
    }

    #[test]
    fn test_default_passes_validating_constructor() {
        // Guards the unchecked construction in `Default`.
        let checked = RuleSet::new(DEFAULT_SCOPES).expect("default scopes are valid");
        assert_eq!(checked, RuleSet::default());
    }

    #[test]
    fn test_rejects_empty_set() {
        let err = RuleSet::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, ScopeError::InvalidRuleSet(_)));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = RuleSet::new(["auth", "users", "auth"]).unwrap_err();
        assert!(err.to_string().contains("duplicate"), "{err}");
    }

    #[test]
    fn test_rejects_bad_tokens() {
        assert!(ScopeId::new("").is_err());
        assert!(ScopeId::new("Auth").is_err());
        assert!(ScopeId::new("two words").is_err());
        assert!(ScopeId::new(" auth").is_err());
        assert!(ScopeId::new("auth/users").is_err());
        assert!(ScopeId::new("auth,users").is_err());
        assert!(ScopeId::new("auth\\users").is_err());
    }

    #[test]
    fn test_accepts_lowercase_tokens() {
        for token in ["auth", "ci-cd", "v2", "deps_dev", "api.v1"] {
            assert!(ScopeId::new(token).is_ok(), "{token} should be valid");
        }
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let set = RuleSet::default();
        assert!(set.contains("auth"));
        assert!(!set.contains("Auth"));
        assert!(!set.contains("AUTH"));
        assert!(!set.contains(" auth"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_preserves_order() {
        let set = RuleSet::new(["posts", "auth", "infra"]).unwrap();
        assert_eq!(set.as_strs(), vec!["posts", "auth", "infra"]);
        assert_eq!(set.to_string(), "[posts, auth, infra]");
    }

    #[test]
    fn test_serde_list_form() {
        let set: RuleSet = serde_json::from_str(r#"["auth","users"]"#).unwrap();
        assert_eq!(set.as_strs(), vec!["auth", "users"]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["auth","users"]"#);
    }

    #[test]
    fn test_deserialize_enforces_invariants() {
        assert!(serde_json::from_str::<RuleSet>(r#"["auth","auth"]"#).is_err());
        assert!(serde_json::from_str::<RuleSet>(r#"[]"#).is_err());
        assert!(serde_json::from_str::<RuleSet>(r#"["Media"]"#).is_err());
        assert!(serde_json::from_str::<ScopeId>(r#""""#).is_err());
    }

    #[test]
    fn test_scope_id_from_str() {
        let id: ScopeId = "chats".parse().unwrap();
        assert_eq!(id.as_str(), "chats");
        assert_eq!(id.to_string(), "chats");
        assert!("Chats".parse::<ScopeId>().is_err());
    }

    #[test]
    fn test_never_empty() {
        assert!(!RuleSet::default().is_empty());
        assert!(!RuleSet::new(["infra"]).unwrap().is_empty());
    }

    #[test]
    fn test_rule_set_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleSet>();
        assert_send_sync::<ScopeId>();
    }
}
