//! Configuration file handling for Respecc++ projects.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file
pub const CONFIG_FILE: &str = "respecc.toml";

/// Represents the respecc.toml configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub package: PackageConfig,
    #[serde(default)]
    pub optimizer: OptimizerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageConfig {
    pub name: String,
    pub version: String,
    #[serde(default = "default_edition")]
    pub edition: String,
}

/// The `[optimizer]` section.
///
/// Every pass is enabled unless switched off; a missing section means the
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub enabled: bool,
    /// Upper bound on fixed-point rounds over all passes
    pub max_iterations: usize,
    pub constant_folding: bool,
    pub dead_code: bool,
    pub branch_pruning: bool,
    pub unused_functions: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_iterations: 10,
            constant_folding: true,
            dead_code: true,
            branch_pruning: true,
            unused_functions: true,
        }
    }
}

fn default_edition() -> String {
    "2024".to_string()
}

impl Config {
    /// Creates a new default configuration with the given project name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            package: PackageConfig {
                name: name.into(),
                version: "0.1.0".to_string(),
                edition: default_edition(),
            },
            optimizer: OptimizerConfig::default(),
        }
    }

    /// Loads configuration from a respecc.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::parse(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text is not a valid configuration.
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid configuration")
    }

    /// Saves configuration to a respecc.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path.as_ref(), contents)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))
    }

    /// Finds the respecc.toml file starting from the current directory.
    ///
    /// # Errors
    /// Returns an error if no respecc.toml is found in the current or parent directories.
    pub fn find() -> Result<(Self, PathBuf)> {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Self::find_from(current_dir)
    }

    /// Finds the respecc.toml file starting from `start` and walking upward.
    ///
    /// Returns the configuration together with the directory holding it.
    ///
    /// # Errors
    /// Returns an error if no directory on the way up holds a respecc.toml.
    pub fn find_from(start: impl Into<PathBuf>) -> Result<(Self, PathBuf)> {
        let mut current_dir = start.into();

        loop {
            let config_path = current_dir.join(CONFIG_FILE);
            if config_path.exists() {
                let config = Self::load(&config_path)?;
                return Ok((config, current_dir));
            }

            if !current_dir.pop() {
                anyhow::bail!(
                    "Could not find {CONFIG_FILE} in current directory or any parent directory"
                );
            }
        }
    }
}
