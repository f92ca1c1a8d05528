//! Analysis configuration

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::engine::constants::*;

/// Caller-supplied limits and labels; every field has a default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub max_tokens: usize,
    pub max_sentences: usize,
    pub morph_token_limit: usize,
    pub core_label: String,
    pub similarity_top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            max_sentences: DEFAULT_MAX_SENTENCES,
            morph_token_limit: DEFAULT_MORPH_TOKEN_LIMIT,
            core_label: CORE_SPAN_LABEL.to_string(),
            similarity_top_n: DEFAULT_SIMILARITY_TOP_N,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(anyhow!("Config file not found: {}", path.display()));
        }

        let yaml_str = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config = Self::from_yaml_str(&yaml_str)
            .map_err(|e| anyhow!("Invalid config in {}: {}", path.display(), e))?;

        log::info!("Loaded analysis config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(yaml_str: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml_str)?;
        Ok(config)
    }

    /// Number of similar words to return, clamped to `1..=MAX_SIMILARITY_TOP_N`
    pub fn top_n(&self) -> usize {
        self.similarity_top_n.clamp(1, MAX_SIMILARITY_TOP_N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.max_tokens, 100);
        assert_eq!(config.max_sentences, 10);
        assert_eq!(config.morph_token_limit, 200);
        assert_eq!(config.core_label, "CORE");
        assert_eq!(config.top_n(), 3);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AnalysisConfig::from_yaml_str("max_tokens: 25\ncore_label: DCC\n").unwrap();
        assert_eq!(config.max_tokens, 25);
        assert_eq!(config.core_label, "DCC");
        assert_eq!(config.max_sentences, 10);
    }

    #[test]
    fn test_top_n_clamped() {
        let mut config = AnalysisConfig::default();
        config.similarity_top_n = 0;
        assert_eq!(config.top_n(), 1);
        config.similarity_top_n = 50;
        assert_eq!(config.top_n(), 10);
    }

    #[test]
    fn test_missing_file() {
        let err = AnalysisConfig::from_yaml("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
