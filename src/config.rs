use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::format::DEFAULT_FORMAT;
use crate::git::DEFAULT_PATTERN;
use crate::timestamp::DEFAULT_TIMESTAMP;

pub const DEFAULT_VERSION: &str = "0.0.1";
pub const CONFIG_FILE: &str = "vermouth.yml";

/// Effective settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub timestamp: String,
    pub metadata: String,
    #[serde(rename = "default")]
    pub default_version: String,
    pub pattern: String,
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timestamp: DEFAULT_TIMESTAMP.to_string(),
            metadata: String::new(),
            default_version: DEFAULT_VERSION.to_string(),
            pattern: DEFAULT_PATTERN.to_string(),
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>, work_dir: &Path) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // The working tree's own file wins over the user-level one
        let mut candidates = vec![work_dir.join(CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("vermouth").join(CONFIG_FILE));
        }

        for candidate in candidates.iter().filter(|path| path.exists()) {
            match Self::load_from_file(candidate) {
                Ok(config) => return Ok(config),
                Err(e) => log::warn!("Failed to load config from {}: {:#}", candidate.display(), e),
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Overlay the options given on the command line.
    pub fn apply(mut self, cli: &Cli) -> Self {
        let overrides = [
            (&mut self.timestamp, &cli.timestamp),
            (&mut self.metadata, &cli.metadata),
            (&mut self.default_version, &cli.default_version),
            (&mut self.pattern, &cli.pattern),
            (&mut self.format, &cli.format),
        ];

        for (field, value) in overrides {
            if let Some(value) = value {
                field.clone_from(value);
            }
        }

        self
    }
}
