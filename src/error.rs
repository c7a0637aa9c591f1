//! Application error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::dsl::SyntaxError;

/// Errors surfaced by the command-line pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The source or configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source text is not a valid structogram.
    #[error("{}:{source}", path.display())]
    Syntax {
        path: PathBuf,
        #[source]
        source: SyntaxError,
    },

    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A configuration file exists but is malformed.
    #[error("invalid configuration {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
