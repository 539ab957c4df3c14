//! # tabsync-sync
//!
//! Header-row reconciliation and run orchestration.
//!
//! Call [`reconcile`] to bring every tab of a schema in line through any
//! [`tabsync_gateway::SheetGateway`], or [`pipeline::run`] to load config,
//! schema and credentials and reconcile against Google Sheets.

pub mod error;
pub mod pipeline;
pub mod reconcile;

pub use error::SyncError;
pub use reconcile::{
    reconcile, reconcile_specs, reconcile_tab, summarize, Outcome, ReconcileOptions, Summary, TabReport,
};
