//! Service-account authentication via the OAuth 2.0 JWT-bearer grant.
//!
//! ## Flow
//!
//! 1. Load `client_email` / `private_key` from the key file.
//! 2. Sign an RS256 assertion scoped to the spreadsheets API.
//! 3. POST it to the token endpoint as a form.
//! 4. Hold the returned bearer token for the rest of the run (no renewal).

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::credentials::{self, ServiceAccountKey};
use crate::error::AuthError;
use crate::http;

pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

const ASSERTION_LIFETIME_SECS: i64 = 3600;

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A bearer token for the spreadsheets scope.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    pub fn secret(&self) -> &str {
        &self.value
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.value)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub(crate) struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    ASSERTION_LIFETIME_SECS
}

// ---------------------------------------------------------------------------
// Authenticator
// ---------------------------------------------------------------------------

/// Exchanges service-account keys for access tokens.
#[derive(Debug, Clone)]
pub struct Authenticator {
    agent: ureq::Agent,
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new(http::agent())
    }
}

impl Authenticator {
    pub fn new(agent: ureq::Agent) -> Self {
        Self { agent }
    }

    /// Load the key at `credentials_path` and exchange it for a token.
    pub fn authorize(&self, credentials_path: Option<&Path>) -> Result<AccessToken, AuthError> {
        let path = credentials_path.ok_or(AuthError::Config)?;
        let key = credentials::load(path)?;
        self.exchange(&key)
    }

    /// Sign an assertion for `key` and trade it at the token endpoint.
    pub fn exchange(&self, key: &ServiceAccountKey) -> Result<AccessToken, AuthError> {
        let token_uri = key.token_uri.as_deref().unwrap_or(DEFAULT_TOKEN_URI);
        let now = Utc::now();
        let assertion = sign_assertion(key, token_uri, now)?;

        tracing::debug!("requesting access token for {} from {}", key.client_email, token_uri);
        let response = self
            .agent
            .post(token_uri)
            .send_form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())]);

        let response = match response {
            Ok(r) => r,
            Err(ureq::Error::Status(status, r)) => {
                return Err(AuthError::Rejected {
                    status,
                    message: http::error_message(r),
                })
            }
            Err(ureq::Error::Transport(t)) => return Err(AuthError::Transport(t.to_string())),
        };

        let body: TokenResponse = response
            .into_json()
            .map_err(|e| AuthError::Transport(format!("malformed token response: {e}")))?;
        tracing::info!("authenticated as {}", key.client_email);
        Ok(AccessToken::new(
            body.access_token,
            now + Duration::seconds(body.expires_in),
        ))
    }
}

/// [`Authenticator::authorize`] with a default agent.
pub fn authorize(credentials_path: Option<&Path>) -> Result<AccessToken, AuthError> {
    Authenticator::default().authorize(credentials_path)
}

pub(crate) fn sign_assertion(
    key: &ServiceAccountKey,
    audience: &str,
    now: DateTime<Utc>,
) -> Result<String, AuthError> {
    let encoding_key =
        EncodingKey::from_rsa_pem(key.private_key.as_bytes()).map_err(|e| {
            AuthError::Credentials {
                path: key.source.clone(),
                reason: format!("private_key is not a valid RSA PEM key: {e}"),
            }
        })?;
    let iat = now.timestamp();
    let claims = Claims {
        iss: key.client_email.clone(),
        scope: SPREADSHEETS_SCOPE.to_string(),
        aud: audience.to_string(),
        iat,
        exp: iat + ASSERTION_LIFETIME_SECS,
    };
    Ok(jsonwebtoken::encode(
        &Header::new(Algorithm::RS256),
        &claims,
        &encoding_key,
    )?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
