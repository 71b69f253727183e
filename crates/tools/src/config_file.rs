//! Optional TOML run configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use wasteland_core::{GenerationConfig, TraversalConfig};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct RunConfigFile {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub traversal: TraversalConfig,
}

impl RunConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.generation.validate()?;
        config.traversal.validate()?;
        Ok(config)
    }
}
