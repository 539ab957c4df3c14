//! # tabsync-gateway
//!
//! Service-account authentication and the spreadsheet capability the
//! reconciler drives.
//!
//! - [`auth::authorize`] exchanges a credentials file for an [`AccessToken`].
//! - [`SheetGateway`] is the two-operation capability (fetch / write header row).
//! - [`GoogleSheets`] implements it over the Sheets v4 REST API.
//! - [`RecordingGateway`] implements it in memory.

pub mod auth;
pub mod credentials;
pub mod error;
pub mod gateway;
mod http;
pub mod memory;
pub mod range;
pub mod sheets;

pub use auth::{authorize, AccessToken, Authenticator};
pub use error::{AuthError, GatewayError};
pub use gateway::SheetGateway;
pub use memory::RecordingGateway;
pub use sheets::GoogleSheets;
