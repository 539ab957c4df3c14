//! `tabsync sync` — reconcile header rows against the schema.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use tabsync_core::{Config, ConfigOverrides, TabName};
use tabsync_sync::{
    pipeline::{self, RunReport, SyncScope},
    Outcome, ReconcileOptions, TabReport,
};

/// Arguments for `tabsync sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Schema YAML file (default: $SCHEMA_FILE_PATH).
    #[arg(long, value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Service-account JSON key (default: $GDRIVE_CREDENTIALS_PATH).
    #[arg(long, value_name = "PATH")]
    pub credentials: Option<PathBuf>,

    /// Target spreadsheet id (default: $GSHEET_ID).
    #[arg(long = "sheet-id", value_name = "ID")]
    pub sheet_id: Option<String>,

    /// Reconcile only this tab.
    #[arg(long, value_name = "NAME")]
    pub tab: Option<String>,

    /// Compare headers without writing anything.
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let config = Config::from_env(ConfigOverrides {
            credentials_path: self.credentials,
            schema_path: self.schema,
            spreadsheet_id: self.sheet_id,
        })
        .context("incomplete configuration")?;

        let scope = match self.tab {
            Some(name) => SyncScope::Tab(TabName::from(name)),
            None => SyncScope::All,
        };
        let options = ReconcileOptions {
            dry_run: self.dry_run,
        };

        let report = pipeline::run(&config, scope, options).with_context(|| {
            format!("error updating schema from '{}'", config.schema_path.display())
        })?;

        print_report(&report, self.dry_run);
        println!("Schema validation and updates completed!");
        Ok(())
    }
}

fn print_report(report: &RunReport, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };

    for r in &report.reports {
        let line = describe(r);
        match r.outcome {
            Outcome::Unchanged => println!("  {}  {line}", "·".dimmed()),
            Outcome::Updated { .. } => println!("  {}  {line}", "✎".green()),
            Outcome::WouldUpdate { .. } => println!("  {}  {line}", "~".cyan()),
            Outcome::SkippedNotFound => println!("  {}  {}", "?".yellow(), line.yellow()),
            Outcome::SkippedError { .. } => eprintln!("  {}  {}", "✗".red(), line.red()),
        }
    }

    let s = report.summary();
    if s.total() == 0 {
        println!("{prefix}✓ '{}' — schema declares no tabs", report.spreadsheet_id);
        return;
    }
    let changed = if dry_run {
        format!("{} would update", s.would_update)
    } else {
        format!("{} updated", s.updated)
    };
    println!(
        "{prefix}✓ '{}' reconciled ({changed}, {} unchanged, {} not found, {} errors)",
        report.spreadsheet_id, s.unchanged, s.not_found, s.errors
    );
}

/// One human-readable line per tab.
fn describe(report: &TabReport) -> String {
    let tab = &report.tab;
    match &report.outcome {
        Outcome::Unchanged => format!("Tab \"{tab}\" is already up-to-date."),
        Outcome::Updated { columns } => {
            format!("Columns updated for tab \"{tab}\": {}", columns.join(", "))
        }
        Outcome::WouldUpdate { current, columns } => format!(
            "[dry-run] Tab \"{tab}\" would be updated: {} (currently: {})",
            columns.join(", "),
            if current.is_empty() {
                "<empty>".to_string()
            } else {
                current.join(", ")
            }
        ),
        Outcome::SkippedNotFound => format!("Tab \"{tab}\" does not exist."),
        Outcome::SkippedError { reason } => format!("Error processing tab \"{tab}\": {reason}"),
    }
}
