//! YAML schema loading.
//!
//! # File shape
//!
//! ```yaml
//! tabs:
//!   - name: Users
//!     columns: [id, email, created_at]
//! ```
//!
//! Loading is a pure function of file content: read → parse → validate.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::SchemaError;
use crate::types::Schema;

// ---------------------------------------------------------------------------
// 1. Load
// ---------------------------------------------------------------------------

/// Load and validate the schema at `path`.
///
/// Returns `SchemaError::NotFound` if absent, `SchemaError::Parse` (with path +
/// line context) if the document does not describe a `tabs` sequence, and
/// `DuplicateTab` if two entries share a name.
pub fn load(path: &Path) -> Result<Schema, SchemaError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(SchemaError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(SchemaError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };
    let schema: Schema = serde_yaml::from_str(&contents).map_err(|e| SchemaError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate(&schema)?;
    Ok(schema)
}

/// Parse and validate a schema held in memory. Parse errors report `<inline>`
/// as their path.
pub fn from_yaml_str(contents: &str) -> Result<Schema, SchemaError> {
    let schema: Schema = serde_yaml::from_str(contents).map_err(|e| SchemaError::Parse {
        path: "<inline>".into(),
        source: e,
    })?;
    validate(&schema)?;
    Ok(schema)
}

// ---------------------------------------------------------------------------
// 2. Validate
// ---------------------------------------------------------------------------

/// Reject duplicate tab names.
///
/// Entries that parse but cannot be applied (an empty column list, say) are
/// left to the reconciler so they only affect their own tab.
pub fn validate(schema: &Schema) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for tab in &schema.tabs {
        if !seen.insert(&tab.name) {
            return Err(SchemaError::DuplicateTab {
                name: tab.name.0.clone(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
