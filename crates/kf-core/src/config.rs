//! Processor configuration
//!
//! Everything except the dictionary itself can be described by a
//! [`ProcessorConfig`], typically deserialized from JSON.

use serde::{Deserialize, Serialize};

use crate::types::MatchOptions;

/// Error type for configuration parsing.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Boundary entry must be a single character: {0:?}")]
    MultiCharBoundary(String),
}

/// Configuration for a [`KeywordProcessor`](crate::KeywordProcessor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Match keywords with exact case
    pub case_sensitive: bool,
    /// Default policy returned by [`ProcessorConfig::match_options`]
    pub longest_match: bool,
    /// Characters added to the default boundary set
    pub extra_boundary_chars: Vec<String>,
    /// Characters removed from the default boundary set
    pub removed_boundary_chars: Vec<String>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            longest_match: true,
            extra_boundary_chars: Vec::new(),
            removed_boundary_chars: Vec::new(),
        }
    }
}

impl ProcessorConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.extra_boundary()?;
        config.removed_boundary()?;
        Ok(config)
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            longest_match: self.longest_match,
        }
    }

    /// Extra boundary entries as codepoints.
    pub fn extra_boundary(&self) -> Result<Vec<char>, ConfigError> {
        single_chars(&self.extra_boundary_chars)
    }

    /// Removed boundary entries as codepoints.
    pub fn removed_boundary(&self) -> Result<Vec<char>, ConfigError> {
        single_chars(&self.removed_boundary_chars)
    }
}

fn single_chars(entries: &[String]) -> Result<Vec<char>, ConfigError> {
    entries
        .iter()
        .map(|entry| {
            let mut chars = entry.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(ConfigError::MultiCharBoundary(entry.clone())),
            }
        })
        .collect()
}
