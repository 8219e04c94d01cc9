//! Analyzer configuration.
//!
//! Configuration is a small YAML file; every field is optional and falls
//! back to the built-in default.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::labels::{Labels, Language};
use crate::tree::DEFAULT_MAX_DEPTH;

/// Config file names searched in the current directory.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["sintaxis.yaml", ".sintaxis.yaml"];

/// Contents written by `sintaxis init`.
pub const DEFAULT_TEMPLATE: &str = include_str!("templates/default.yaml");

/// Upper bound accepted for `max_depth`.
pub use crate::tree::MAX_DEPTH_LIMIT;

/// Upper bound accepted for `indent_width`.
pub const MAX_INDENT_WIDTH: usize = 8;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Label set for rendered output.
    pub language: Language,
    /// Maximum nesting depth of the derivation tree.
    pub max_depth: usize,
    /// Spaces per tree level.
    pub indent_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            indent_width: 2,
        }
    }
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse_str(&content)
    }

    /// Parse a config from YAML text. Empty text yields the defaults.
    pub fn parse_str(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load the explicit config if given, else a discovered one, else defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => discover(),
        };

        match path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "loading config");
                Self::parse_file(&p).with_context(|| format!("parsing config {}", p.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Label table for the configured language.
    pub fn labels(&self) -> &'static Labels {
        self.language.labels()
    }

    /// Indentation prefix for one tree level.
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

/// Find a config file: current directory first, then the user config
/// directory.
pub fn discover() -> Option<PathBuf> {
    for name in DEFAULT_CONFIG_NAMES {
        let path = PathBuf::from(name);
        if path.exists() {
            return Some(path);
        }
    }

    let user_config = directories::ProjectDirs::from("", "", "sintaxis")
        .map(|dirs| dirs.config_dir().join("config.yaml"))?;
    if user_config.exists() {
        Some(user_config)
    } else {
        None
    }
}

/// Validate a config.
pub fn validate(config: &Config) -> anyhow::Result<()> {
    if config.max_depth == 0 {
        anyhow::bail!("max_depth must be at least 1");
    }
    if config.max_depth > MAX_DEPTH_LIMIT {
        anyhow::bail!(
            "max_depth {} exceeds the limit of {}",
            config.max_depth,
            MAX_DEPTH_LIMIT
        );
    }
    if config.indent_width > MAX_INDENT_WIDTH {
        anyhow::bail!(
            "indent_width {} exceeds the limit of {}",
            config.indent_width,
            MAX_INDENT_WIDTH
        );
    }
    Ok(())
}
