//! Header-row reconciliation.
//!
//! ## Per-tab protocol
//!
//! 1. Fetch the remote first row.
//! 2. Missing tab → `SkippedNotFound`; fetch failure → `SkippedError`.
//! 3. Compare against the schema columns (ordered, exact, case-sensitive).
//! 4. Equal → `Unchanged`, no write.
//! 5. A tab declaring no columns is never written: a blank remote row is
//!    `Unchanged`, anything else is `SkippedError`.
//! 6. Different → write exactly the schema columns → `Updated`
//!    (or `WouldUpdate` in dry-run; `SkippedError` if the write fails).
//!
//! Tabs are processed in schema order. One tab's failure never stops the rest.

use tabsync_core::{Schema, TabName, TabSpec};
use tabsync_gateway::SheetGateway;

const NO_COLUMNS: &str = "schema declares no columns";

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Result of reconciling a single tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Remote header already equals the schema; nothing written.
    Unchanged,
    /// Remote header differed and was overwritten with `columns`.
    Updated { columns: Vec<String> },
    /// Dry-run: the header differs and *would* be overwritten.
    WouldUpdate {
        current: Vec<String>,
        columns: Vec<String>,
    },
    /// The tab does not exist in the spreadsheet.
    SkippedNotFound,
    /// A fetch or write failed for this tab only.
    SkippedError { reason: String },
}

/// Outcome of one tab, tagged with its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabReport {
    pub tab: TabName,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Compare only; never call `write_header_row`.
    pub dry_run: bool,
}

// ---------------------------------------------------------------------------
// reconcile_tab
// ---------------------------------------------------------------------------

/// Reconcile one tab. Never fails: gateway errors become `SkippedError`.
pub fn reconcile_tab<G>(
    spreadsheet_id: &str,
    spec: &TabSpec,
    gateway: &G,
    options: ReconcileOptions,
) -> Outcome
where
    G: SheetGateway + ?Sized,
{
    let outcome = match gateway.fetch_header_row(spreadsheet_id, &spec.name) {
        Err(e) => Outcome::SkippedError {
            reason: e.to_string(),
        },
        Ok(remote) if !remote.exists => Outcome::SkippedNotFound,
        Ok(remote) if remote.matches(&spec.columns) => Outcome::Unchanged,
        Ok(remote) if spec.columns.is_empty() => {
            if remote.header_row.iter().all(|cell| cell.is_empty()) {
                Outcome::Unchanged
            } else {
                Outcome::SkippedError {
                    reason: NO_COLUMNS.to_string(),
                }
            }
        }
        Ok(remote) if options.dry_run => Outcome::WouldUpdate {
            current: remote.header_row,
            columns: spec.columns.clone(),
        },
        Ok(_) => match gateway.write_header_row(spreadsheet_id, &spec.name, &spec.columns) {
            Ok(()) => Outcome::Updated {
                columns: spec.columns.clone(),
            },
            Err(e) => Outcome::SkippedError {
                reason: e.to_string(),
            },
        },
    };
    log_outcome(&spec.name, &outcome);
    outcome
}

// ---------------------------------------------------------------------------
// reconcile
// ---------------------------------------------------------------------------

/// Reconcile every tab of `schema`, one report per tab, in schema order.
pub fn reconcile<G>(
    spreadsheet_id: &str,
    schema: &Schema,
    gateway: &G,
    options: ReconcileOptions,
) -> Vec<TabReport>
where
    G: SheetGateway + ?Sized,
{
    reconcile_specs(spreadsheet_id, schema.tabs.iter(), gateway, options)
}

/// [`reconcile`] over an arbitrary selection of tab specs.
pub fn reconcile_specs<'a, I, G>(
    spreadsheet_id: &str,
    specs: I,
    gateway: &G,
    options: ReconcileOptions,
) -> Vec<TabReport>
where
    I: IntoIterator<Item = &'a TabSpec>,
    G: SheetGateway + ?Sized,
{
    specs
        .into_iter()
        .map(|spec| TabReport {
            tab: spec.name.clone(),
            outcome: reconcile_tab(spreadsheet_id, spec, gateway, options),
        })
        .collect()
}

fn log_outcome(tab: &TabName, outcome: &Outcome) {
    match outcome {
        Outcome::Unchanged => tracing::info!("Tab \"{tab}\" is already up-to-date."),
        Outcome::Updated { columns } => {
            tracing::info!("Columns updated for tab \"{tab}\": {}", columns.join(", "))
        }
        Outcome::WouldUpdate { columns, .. } => {
            tracing::info!("[dry-run] Tab \"{tab}\" would be updated: {}", columns.join(", "))
        }
        Outcome::SkippedNotFound => tracing::warn!("Tab \"{tab}\" does not exist."),
        Outcome::SkippedError { reason } => {
            tracing::warn!("Error processing tab \"{tab}\": {reason}")
        }
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Outcome counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub unchanged: usize,
    pub updated: usize,
    pub would_update: usize,
    pub not_found: usize,
    pub errors: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.unchanged + self.updated + self.would_update + self.not_found + self.errors
    }
}

pub fn summarize(reports: &[TabReport]) -> Summary {
    reports.iter().fold(Summary::default(), |mut s, r| {
        match r.outcome {
            Outcome::Unchanged => s.unchanged += 1,
            Outcome::Updated { .. } => s.updated += 1,
            Outcome::WouldUpdate { .. } => s.would_update += 1,
            Outcome::SkippedNotFound => s.not_found += 1,
            Outcome::SkippedError { .. } => s.errors += 1,
        }
        s
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tabsync_gateway::{GatewayError, RecordingGateway};

    fn users() -> TabSpec {
        TabSpec::new("Users", ["id", "email", "created_at"])
    }

    #[test]
    fn dry_run_reports_current_header_without_writing() {
        let gw = RecordingGateway::new().with_tab("Users", ["id", "email"]);
        let outcome = reconcile_tab("s", &users(), &gw, ReconcileOptions { dry_run: true });
        assert_eq!(
            outcome,
            Outcome::WouldUpdate {
                current: vec!["id".into(), "email".into()],
                columns: users().columns,
            }
        );
        assert!(gw.writes().is_empty());
        assert_eq!(gw.header("Users").unwrap(), ["id", "email"]);
    }

    #[test]
    fn dry_run_still_reports_unchanged_and_missing() {
        let gw = RecordingGateway::new().with_tab("Users", ["id", "email", "created_at"]);
        let opts = ReconcileOptions { dry_run: true };
        assert_eq!(reconcile_tab("s", &users(), &gw, opts), Outcome::Unchanged);
        assert_eq!(
            reconcile_tab("s", &TabSpec::new("Archive", ["id"]), &gw, opts),
            Outcome::SkippedNotFound
        );
    }

    #[test]
    fn write_failure_becomes_skipped_error() {
        let gw = RecordingGateway::new()
            .with_tab("Users", ["id"])
            .failing_write(
                "Users",
                GatewayError::Status {
                    code: 429,
                    message: "Quota exceeded".into(),
                },
            );
        let outcome = reconcile_tab("s", &users(), &gw, ReconcileOptions::default());
        assert_eq!(
            outcome,
            Outcome::SkippedError {
                reason: "HTTP 429: Quota exceeded".into()
            }
        );
        assert_eq!(gw.writes().len(), 1, "exactly one write attempt");
    }

    #[test]
    fn tab_without_columns_is_never_written() {
        let gw = RecordingGateway::new()
            .with_tab("Scratch", ["notes"])
            .with_tab("Blank", Vec::<String>::new());
        let opts = ReconcileOptions::default();

        assert_eq!(
            reconcile_tab("s", &TabSpec::new("Scratch", Vec::<String>::new()), &gw, opts),
            Outcome::SkippedError {
                reason: "schema declares no columns".into()
            }
        );
        assert_eq!(
            reconcile_tab("s", &TabSpec::new("Blank", Vec::<String>::new()), &gw, opts),
            Outcome::Unchanged
        );
        assert!(gw.writes().is_empty());
        assert_eq!(gw.header("Scratch").unwrap(), ["notes"]);
    }

    #[test]
    fn summary_counts_each_class() {
        let reports = vec![
            TabReport { tab: "a".into(), outcome: Outcome::Unchanged },
            TabReport { tab: "b".into(), outcome: Outcome::Updated { columns: vec![] } },
            TabReport { tab: "c".into(), outcome: Outcome::SkippedNotFound },
            TabReport { tab: "d".into(), outcome: Outcome::SkippedError { reason: "x".into() } },
            TabReport { tab: "e".into(), outcome: Outcome::Unchanged },
        ];
        let s = summarize(&reports);
        assert_eq!(s.unchanged, 2);
        assert_eq!(s.updated, 1);
        assert_eq!(s.not_found, 1);
        assert_eq!(s.errors, 1);
        assert_eq!(s.total(), 5);
    }
}
