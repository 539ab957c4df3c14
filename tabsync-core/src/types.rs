//! Domain types for the tab schema and observed remote state.
//!
//! The schema types deserialize directly from the YAML document via serde +
//! serde_yaml. [`RemoteTabState`] is never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a tab (worksheet) in the target spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabName(pub String);

impl TabName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TabName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TabName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Expected header row for one tab. Column identity is positional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TabSpec {
    pub name: TabName,
    pub columns: Vec<String>,
}

impl TabSpec {
    pub fn new<I, S>(name: impl Into<TabName>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

/// Root of the schema YAML document: an ordered list of tab definitions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    pub tabs: Vec<TabSpec>,
}

impl Schema {
    /// Look up a tab definition by name.
    pub fn find(&self, name: &TabName) -> Option<&TabSpec> {
        self.tabs.iter().find(|t| &t.name == name)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Remote state
// ---------------------------------------------------------------------------

/// First-row state of a tab as observed on the remote spreadsheet.
///
/// `header_row` holds cell text in column order, `""` for blank cells, and is
/// exactly as wide as the remote row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemoteTabState {
    pub exists: bool,
    pub header_row: Vec<String>,
}

impl RemoteTabState {
    pub fn missing() -> Self {
        Self {
            exists: false,
            header_row: Vec::new(),
        }
    }

    pub fn with_header<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exists: true,
            header_row: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Ordered, element-wise, case-sensitive equality against `expected`.
    pub fn matches(&self, expected: &[String]) -> bool {
        self.header_row.as_slice() == expected
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
