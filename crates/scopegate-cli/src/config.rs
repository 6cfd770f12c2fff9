//! # Configuration Arguments
//!
//! Shared `--config` flag. The document is passed inline (JSON or YAML);
//! without it the built-in project configuration applies.

use anyhow::Context;
use clap::Args;
use scopegate_core::LintConfig;

/// Arguments selecting the lint configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Inline lint configuration document (YAML or JSON) declaring
    /// `rules.scope-enum`. Defaults to the built-in project scopes.
    #[arg(long, value_name = "DOC")]
    pub config: Option<String>,
}

impl ConfigArgs {
    /// Resolve the configuration these arguments select.
    pub fn load(&self) -> anyhow::Result<LintConfig> {
        match &self.config {
            Some(doc) => {
                LintConfig::from_yaml_str(doc).context("failed to parse --config document")
            }
            None => {
                tracing::debug!("no --config given; using built-in configuration");
                Ok(LintConfig::default())
            }
        }
    }
}
