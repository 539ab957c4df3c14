//! Run configuration.
//!
//! Every value can come from a CLI flag or an environment variable; flags
//! win. Empty strings count as unset. A `.env` file in the working directory
//! is honoured via [`load_dotenv`].

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const CREDENTIALS_ENV: &str = "GDRIVE_CREDENTIALS_PATH";
pub const SCHEMA_ENV: &str = "SCHEMA_FILE_PATH";
pub const SHEET_ID_ENV: &str = "GSHEET_ID";

/// Values supplied explicitly on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub credentials_path: Option<PathBuf>,
    pub schema_path: Option<PathBuf>,
    pub spreadsheet_id: Option<String>,
}

/// Fully resolved configuration for a `sync` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub credentials_path: PathBuf,
    pub schema_path: PathBuf,
    pub spreadsheet_id: String,
}

impl Config {
    /// Resolve against the process environment.
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` for environment access.
    ///
    /// Checked in order: schema path, spreadsheet id, credentials path.
    pub fn resolve<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let schema_path = schema_path(overrides.schema_path, &lookup)?;
        let spreadsheet_id = pick(overrides.spreadsheet_id, SHEET_ID_ENV, &lookup).ok_or(
            ConfigError::Missing {
                name: "spreadsheet id",
                flag: "--sheet-id",
                env: SHEET_ID_ENV,
            },
        )?;
        let credentials_path = pick(
            overrides.credentials_path.map(path_string),
            CREDENTIALS_ENV,
            &lookup,
        )
        .map(PathBuf::from)
        .ok_or(ConfigError::Missing {
            name: "credentials path",
            flag: "--credentials",
            env: CREDENTIALS_ENV,
        })?;

        Ok(Self {
            credentials_path,
            schema_path,
            spreadsheet_id,
        })
    }
}

/// Resolve only the schema path (used by commands that never go remote).
pub fn resolve_schema_path<F>(flag: Option<PathBuf>, lookup: F) -> Result<PathBuf, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    schema_path(flag, &lookup)
}

/// Load `.env` from the working directory (or a parent) if present.
///
/// A missing file is not an error; a malformed one is.
pub fn load_dotenv() -> Result<(), ConfigError> {
    dotenv_result(Path::new(".env"), dotenvy::dotenv().map(|_| ()))
}

/// [`load_dotenv`] for an explicit file.
pub fn load_dotenv_from(path: &Path) -> Result<(), ConfigError> {
    dotenv_result(path, dotenvy::from_path(path))
}

fn dotenv_result(path: &Path, result: Result<(), dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(ConfigError::Dotenv {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

fn schema_path<F>(flag: Option<PathBuf>, lookup: &F) -> Result<PathBuf, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    pick(flag.map(path_string), SCHEMA_ENV, lookup)
        .map(PathBuf::from)
        .ok_or(ConfigError::Missing {
            name: "schema path",
            flag: "--schema",
            env: SCHEMA_ENV,
        })
}

fn pick<F>(flag: Option<String>, env: &str, lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    flag.filter(|v| !v.trim().is_empty())
        .or_else(|| lookup(env).filter(|v| !v.trim().is_empty()))
}

fn path_string(p: PathBuf) -> String {
    p.to_string_lossy().into_owned()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
