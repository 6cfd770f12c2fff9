//! # Lint Configuration
//!
//! Parses the commit-lint configuration document that declares the
//! `scope-enum` rule. JSON and YAML are both accepted; the document must
//! already be in memory.
//!
//! ```yaml
//! extends: ["@commitlint/config-conventional"]
//! rules:
//!   scope-enum: [2, always, [auth, users, media, chats, notifications, messages, posts, infra]]
//! ```
//!
//! `extends` is recorded but not interpreted. Rules other than `scope-enum`
//! are ignored. The rule's level and scope list are checked once the
//! document has parsed, so a loaded configuration never holds an invalid
//! [`RuleSet`], and each kind of bad rule has its own [`ConfigError`].

use serde::Deserialize;

use crate::error::ConfigError;
use crate::policy::{Applicability, ScopePolicy, Severity};
use crate::scope::RuleSet;

/// Name of the rule this crate enforces.
pub const SCOPE_ENUM_RULE: &str = "scope-enum";

/// Preset the default configuration extends.
pub const CONVENTIONAL_PRESET: &str = "@commitlint/config-conventional";

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    extends: Vec<String>,
    #[serde(default)]
    rules: RawRules,
}

/// Level and scope list stay raw here so their checks surface as typed
/// [`ConfigError`] variants rather than parser messages.
#[derive(Debug, Default, Deserialize)]
struct RawRules {
    #[serde(rename = "scope-enum")]
    scope_enum: Option<(u8, Applicability, Vec<String>)>,
}

/// A loaded lint configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintConfig {
    extends: Vec<String>,
    policy: ScopePolicy,
}

impl TryFrom<RawConfig> for LintConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let (level, applicability, scopes) = raw
            .rules
            .scope_enum
            .ok_or(ConfigError::MissingRule(SCOPE_ENUM_RULE))?;
        Ok(Self {
            extends: raw.extends,
            policy: ScopePolicy {
                severity: Severity::try_from(level)?,
                applicability,
                allowed: RuleSet::new(scopes)?,
            },
        })
    }
}

impl Default for LintConfig {
    /// The project configuration: conventional preset, error-level
    /// `always` over [`crate::scope::DEFAULT_SCOPES`].
    fn default() -> Self {
        Self {
            extends: vec![CONVENTIONAL_PRESET.to_string()],
            policy: ScopePolicy::default(),
        }
    }
}

impl LintConfig {
    /// Build a configuration from a policy, with no presets.
    pub fn new(policy: ScopePolicy) -> Self {
        Self {
            extends: Vec::new(),
            policy,
        }
    }

    /// Parse a JSON configuration document.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Json`] on malformed JSON or a mistyped field
    /// - [`ConfigError::MissingRule`] without `rules.scope-enum`
    /// - [`ConfigError::InvalidSeverity`] for a level other than 0, 1, 2
    /// - [`ConfigError::Scope`] for an empty, duplicated or malformed scope list
    pub fn from_json_str(doc: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(doc)?;
        let config = Self::try_from(raw)?;
        tracing::debug!(scopes = %config.policy.allowed, "loaded json config");
        Ok(config)
    }

    /// Parse a YAML configuration document. YAML being a superset of JSON,
    /// this also accepts JSON input.
    ///
    /// # Errors
    ///
    /// As [`LintConfig::from_json_str`], with [`ConfigError::Yaml`] for
    /// parse failures.
    pub fn from_yaml_str(doc: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_yaml::from_str(doc)?;
        let config = Self::try_from(raw)?;
        tracing::debug!(scopes = %config.policy.allowed, "loaded yaml config");
        Ok(config)
    }

    /// Presets named under `extends`, in document order.
    pub fn extends(&self) -> &[String] {
        &self.extends
    }

    /// The configured `scope-enum` policy.
    pub fn policy(&self) -> &ScopePolicy {
        &self.policy
    }

    /// The configured scope list.
    pub fn allowed(&self) -> &RuleSet {
        &self.policy.allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScopeError;
    use crate::scope::DEFAULT_SCOPES;

    const PROJECT_JSON: &str = r#"{
        "extends": ["@commitlint/config-conventional"],
        "rules": {
            "scope-enum": [2, "always", [
                "auth", "users", "media", "chats",
                "notifications", "messages", "posts", "infra"
            ]]
        }
    }"#;

    const PROJECT_YAML: &str = "\
extends:
  - '@commitlint/config-conventional'
rules:
  scope-enum:
    - 2
    - always
    - [auth, users, media, chats, notifications, messages, posts, infra]
";

    #[test]
    fn test_json_matches_default() {
        let config = LintConfig::from_json_str(PROJECT_JSON).unwrap();
        assert_eq!(config, LintConfig::default());
        assert_eq!(config.allowed().as_strs(), DEFAULT_SCOPES.to_vec());
    }

    #[test]
    fn test_yaml_matches_default() {
        let config = LintConfig::from_yaml_str(PROJECT_YAML).unwrap();
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn test_yaml_accepts_json() {
        let config = LintConfig::from_yaml_str(PROJECT_JSON).unwrap();
        assert_eq!(config.extends(), &[CONVENTIONAL_PRESET.to_string()]);
    }

    #[test]
    fn test_extends_optional_and_other_rules_ignored() {
        let doc = r#"{
            "rules": {
                "type-enum": [2, "always", ["feat", "fix"]],
                "scope-enum": [1, "never", ["wip"]]
            }
        }"#;
        let config = LintConfig::from_json_str(doc).unwrap();
        assert!(config.extends().is_empty());
        assert_eq!(config.policy().severity, Severity::Warning);
        assert_eq!(config.policy().applicability, Applicability::Never);
        assert_eq!(config.allowed().as_strs(), vec!["wip"]);
    }

    #[test]
    fn test_missing_scope_enum_rejected() {
        for doc in [r#"{"rules": {}}"#, r#"{}"#] {
            let err = LintConfig::from_json_str(doc).unwrap_err();
            assert!(
                matches!(err, ConfigError::MissingRule("scope-enum")),
                "{doc}: {err:?}"
            );
        }
        let err = LintConfig::from_yaml_str("extends: []\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingRule(SCOPE_ENUM_RULE)), "{err:?}");
    }

    #[test]
    fn test_bad_severity_rejected() {
        let err = LintConfig::from_json_str(r#"{"rules": {"scope-enum": [5, "always", ["auth"]]}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeverity(5)), "{err:?}");
        let err = LintConfig::from_yaml_str("rules:\n  scope-enum: [3, never, [auth]]\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeverity(3)), "{err:?}");
    }

    #[test]
    fn test_bad_applicability_rejected() {
        assert!(matches!(
            LintConfig::from_json_str(r#"{"rules": {"scope-enum": [2, "sometimes", ["auth"]]}}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_invalid_scope_list_rejected() {
        for list in [r#"[]"#, r#"["auth","auth"]"#, r#"["Auth"]"#, r#"[""]"#] {
            let doc = format!(r#"{{"rules": {{"scope-enum": [2, "always", {list}]}}}}"#);
            let err = LintConfig::from_json_str(&doc).unwrap_err();
            assert!(
                matches!(err, ConfigError::Scope(ScopeError::InvalidRuleSet(_))),
                "{list}: {err:?}"
            );
        }
        let err = LintConfig::from_yaml_str("rules:\n  scope-enum: [2, always, [posts, posts]]\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Scope(_)), "{err:?}");
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(
            LintConfig::from_json_str("{not json"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            LintConfig::from_yaml_str("rules: [unclosed"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_new_has_no_presets() {
        let config = LintConfig::new(ScopePolicy::default());
        assert!(config.extends().is_empty());
        assert_eq!(config.policy(), &ScopePolicy::default());
    }
}
