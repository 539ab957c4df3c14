//! Error types for tabsync-gateway.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while obtaining an access token. All of these are fatal for a run.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credentials path was supplied.
    #[error(
        "credentials path is not set; set environment variable {}",
        tabsync_core::config::CREDENTIALS_ENV
    )]
    Config,

    /// The credentials file is missing, unreadable, or not a service-account key.
    #[error("invalid credentials at {path}: {reason}")]
    Credentials { path: PathBuf, reason: String },

    /// The signed assertion could not be produced.
    #[error("failed to sign token assertion: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// The identity provider answered with a non-2xx status.
    #[error("token endpoint rejected credentials (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    /// The identity provider could not be reached, or answered garbage.
    #[error("token request failed: {0}")]
    Transport(String),
}

/// Per-tab remote failure. Recovered by the reconciler, never fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Connection, DNS, TLS, or timeout failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a non-2xx status.
    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },

    /// The API answered 2xx with a body we could not interpret.
    #[error("unexpected response: {0}")]
    Decode(String),
}
