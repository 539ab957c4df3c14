//! Shared ureq plumbing.

use std::time::Duration;

use serde::Deserialize;

use crate::error::GatewayError;

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn agent() -> ureq::Agent {
    ureq::AgentBuilder::new().timeout(DEFAULT_TIMEOUT).build()
}

/// Google error envelope: `{"error": {"code": 400, "message": "...", "status": "..."}}`.
/// The OAuth endpoint instead returns `{"error": "...", "error_description": "..."}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Api { error: ApiError },
    OAuth {
        error: String,
        #[serde(default)]
        error_description: Option<String>,
    },
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

/// Best-effort human-readable message from an error response body.
pub(crate) fn error_message(response: ureq::Response) -> String {
    let status_text = response.status_text().to_string();
    let body = response.into_string().unwrap_or_default();
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody::Api { error }) if !error.message.is_empty() => error.message,
        Ok(ErrorBody::OAuth {
            error,
            error_description: Some(desc),
        }) => format!("{error}: {desc}"),
        Ok(ErrorBody::OAuth { error, .. }) => error,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => status_text,
    }
}

pub(crate) fn gateway_error(err: ureq::Error) -> GatewayError {
    match err {
        ureq::Error::Status(code, response) => GatewayError::Status {
            code,
            message: error_message(response),
        },
        ureq::Error::Transport(t) => GatewayError::Transport(t.to_string()),
    }
}
