//! High-level configuration API
//!
//! Configuration is read from TOML with `[tags]` and `[tokenizer]` sections.
//! Missing keys fall back to the embedded default file.

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use versalign_core::{TokenizerConfig, MILESTONE_TAG, WORD_TAG};
use versalign_engine::EngineConfig;

static DEFAULT_CONFIG: OnceLock<Config> = OnceLock::new();

const DEFAULT_TOML: &str = include_str!("../configs/default.toml");

/// Markup tags written by merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    /// Word node tag
    pub word: String,
    /// Milestone tag
    pub milestone: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            word: WORD_TAG.to_string(),
            milestone: MILESTONE_TAG.to_string(),
        }
    }
}

/// High-level configuration for the aligner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Markup tags
    #[serde(default)]
    pub tags: TagConfig,
    /// Tokenizer settings
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

impl Default for Config {
    fn default() -> Self {
        DEFAULT_CONFIG
            .get_or_init(|| {
                Self::from_toml_str(DEFAULT_TOML).expect("embedded default config is valid")
            })
            .clone()
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| ApiError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ApiError::Config(msg) => {
                ApiError::Config(format!("{}: {msg}", path.as_ref().display()))
            }
            other => other,
        })
    }

    /// Engine settings for this configuration
    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig {
            word_tag: self.tags.word.clone(),
            milestone_tag: self.tags.milestone.clone(),
            tokenizer: self.tokenizer.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.tags.word.is_empty() || self.tags.milestone.is_empty() {
            return Err(ApiError::Config("tags must not be empty".to_string()));
        }
        if self.tags.word == self.tags.milestone {
            return Err(ApiError::Config(format!(
                "word and milestone tags must differ, both are \"{}\"",
                self.tags.word
            )));
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the word tag
    pub fn word_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.tags.word = tag.into();
        self
    }

    /// Set the milestone tag
    pub fn milestone_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.tags.milestone = tag.into();
        self
    }

    /// Set the note markers kept as footnotes
    pub fn note_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.tokenizer.note_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the characters joining word parts
    pub fn word_joiners(mut self, joiners: impl IntoIterator<Item = char>) -> Self {
        self.config.tokenizer.word_joiners = joiners.into_iter().collect();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
