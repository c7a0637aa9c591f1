//! Optional defaults loaded from ~/.structogram/config.yaml.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dsl::{BlockStart, ParseOptions};
use crate::error::{Error, Result};
use crate::export::{OutputFormat, DEFAULT_INDENT};

/// Settings read from YAML. Command-line flags take precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Document format written by `parse`.
    #[serde(default)]
    pub format: OutputFormat,
    /// JSON indent width; 0 for compact output.
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Which keywords may open a block.
    #[serde(default)]
    pub block_start: BlockStart,
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            indent: default_indent(),
            block_start: BlockStart::default(),
        }
    }
}

impl Config {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            block_start: self.block_start,
        }
    }
}

/// Standard config location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".structogram").join("config.yaml"))
}

/// Load config from an explicit file. The file must exist.
pub fn load_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(&content).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Load config from `explicit` if given, otherwise from the standard
/// location. A missing standard file yields the defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    match default_config_path() {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "loading config");
            load_from(&path)
        }
        _ => Ok(Config::default()),
    }
}
