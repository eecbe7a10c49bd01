//! Case command configuration.
//!
//! ```toml
//! overlap = "merge"               # or "as-given"
//! empty-selection = "whole-buffer" # or "ignore"
//! ```
//!
//! Missing keys fall back to [`CaseConfig::default`]; unknown keys are an
//! error.

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
  #[error("failed to parse case config: {0}")]
  Parse(#[from] toml::de::Error),
  #[error("failed to serialize case config: {0}")]
  Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// How the resolver treats overlapping or unsorted selection regions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
  /// Sort regions and merge the ones that overlap, so no codepoint is
  /// transformed twice.
  #[default]
  Merge,
  /// Visit regions exactly as supplied. Overlapping regions are transformed
  /// once per region that covers them.
  AsGiven,
}

/// What a command does when the host selection has no regions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptySelectionPolicy {
  #[default]
  WholeBuffer,
  /// Leave the buffer untouched.
  Ignore,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CaseConfig {
  pub overlap:         OverlapPolicy,
  pub empty_selection: EmptySelectionPolicy,
}

impl CaseConfig {
  pub fn from_toml_str(source: &str) -> Result<Self> {
    Ok(toml::from_str(source)?)
  }

  pub fn to_toml_string(&self) -> Result<String> {
    Ok(toml::to_string(self)?)
  }
}
