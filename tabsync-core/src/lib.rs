//! tabsync core library — domain types, schema loading, configuration, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and schema structs
//! - [`error`] — [`SchemaError`], [`ConfigError`]
//! - [`schema`] — load / parse / validate the YAML schema
//! - [`config`] — resolve run configuration from flags and environment

pub mod config;
pub mod error;
pub mod schema;
pub mod types;

pub use config::{Config, ConfigOverrides};
pub use error::{ConfigError, SchemaError};
pub use types::{RemoteTabState, Schema, TabName, TabSpec};
