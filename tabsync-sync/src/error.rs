//! Error types for tabsync-sync.
//!
//! Only startup-phase failures appear here. Per-tab gateway failures are
//! folded into [`crate::Outcome::SkippedError`] and never abort a run.

use thiserror::Error;

use tabsync_core::{ConfigError, SchemaError};
use tabsync_gateway::AuthError;

/// All errors that abort a sync run.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// `--tab` named a tab the schema does not declare.
    #[error("tab '{name}' is not declared in the schema")]
    UnknownTab { name: String },
}
