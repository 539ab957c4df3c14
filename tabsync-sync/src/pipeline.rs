//! Run orchestration shared by every `tabsync sync` invocation.
//!
//! Startup order: schema → scope selection → credentials → reconcile. Every
//! step before reconciliation is fatal and happens before any header fetch.

use tabsync_core::{schema, Config, Schema, TabName, TabSpec};
use tabsync_gateway::{auth, GoogleSheets, SheetGateway};

use crate::reconcile::{reconcile_specs, summarize, ReconcileOptions, Summary, TabReport};
use crate::SyncError;

/// Which tabs of the schema a run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncScope {
    /// Every tab, in schema order.
    All,
    /// A single named tab.
    Tab(TabName),
}

/// Per-tab reports for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub spreadsheet_id: String,
    pub reports: Vec<TabReport>,
}

impl RunReport {
    pub fn summary(&self) -> Summary {
        summarize(&self.reports)
    }
}

/// Load the schema, authenticate, and reconcile against Google Sheets.
pub fn run(
    config: &Config,
    scope: SyncScope,
    options: ReconcileOptions,
) -> Result<RunReport, SyncError> {
    let schema = schema::load(&config.schema_path)?;
    let specs = select(&schema, &scope)?;
    let token = auth::authorize(Some(&config.credentials_path))?;
    let gateway = GoogleSheets::new(token);
    Ok(reconcile_selected(config, &specs, &gateway, options))
}

/// Like [`run`], but against an already-authenticated gateway.
pub fn run_with_gateway<G>(
    config: &Config,
    scope: SyncScope,
    options: ReconcileOptions,
    gateway: &G,
) -> Result<RunReport, SyncError>
where
    G: SheetGateway + ?Sized,
{
    let schema = schema::load(&config.schema_path)?;
    let specs = select(&schema, &scope)?;
    Ok(reconcile_selected(config, &specs, gateway, options))
}

fn select<'a>(schema: &'a Schema, scope: &SyncScope) -> Result<Vec<&'a TabSpec>, SyncError> {
    match scope {
        SyncScope::All => Ok(schema.tabs.iter().collect()),
        SyncScope::Tab(name) => schema
            .find(name)
            .map(|spec| vec![spec])
            .ok_or_else(|| SyncError::UnknownTab {
                name: name.0.clone(),
            }),
    }
}

fn reconcile_selected<G>(
    config: &Config,
    specs: &[&TabSpec],
    gateway: &G,
    options: ReconcileOptions,
) -> RunReport
where
    G: SheetGateway + ?Sized,
{
    tracing::debug!(
        "reconciling {} tab(s) in {}",
        specs.len(),
        config.spreadsheet_id
    );
    RunReport {
        spreadsheet_id: config.spreadsheet_id.clone(),
        reports: reconcile_specs(
            &config.spreadsheet_id,
            specs.iter().copied(),
            gateway,
            options,
        ),
    }
}
