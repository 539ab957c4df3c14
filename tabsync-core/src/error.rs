//! Error types for tabsync-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading a schema file.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema file did not exist at the configured path.
    #[error("schema file not found at path: {path}")]
    NotFound { path: PathBuf },

    /// Underlying I/O failure other than "not found" (permission denied, etc.).
    #[error("failed to read schema at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error — includes file path and line context from serde_yaml.
    #[error("failed to parse schema at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Two entries under `tabs` share a name.
    #[error("duplicate tab name '{name}' in schema")]
    DuplicateTab { name: String },
}

/// Errors raised while resolving run configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A mandatory value was supplied neither as a flag nor via the environment.
    #[error("{name} is not set; pass {flag} or set environment variable {env}")]
    Missing {
        name: &'static str,
        flag: &'static str,
        env: &'static str,
    },

    /// A `.env` file exists but could not be read or parsed.
    #[error("failed to load {path}: {reason}")]
    Dotenv { path: PathBuf, reason: String },
}
