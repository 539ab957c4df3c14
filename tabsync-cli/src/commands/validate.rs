//! `tabsync validate` — offline schema check.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use tabsync_core::{config, schema, Schema};

/// Arguments for `tabsync validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Schema YAML file (default: $SCHEMA_FILE_PATH).
    #[arg(long, value_name = "PATH")]
    pub schema: Option<PathBuf>,
}

#[derive(Tabled)]
struct TabRow {
    #[tabled(rename = "tab")]
    tab: String,
    #[tabled(rename = "columns")]
    count: usize,
    #[tabled(rename = "header")]
    header: String,
}

impl ValidateArgs {
    pub fn run(self) -> Result<()> {
        let path = config::resolve_schema_path(self.schema, |k| std::env::var(k).ok())
            .context("incomplete configuration")?;
        let schema = schema::load(&path)
            .with_context(|| format!("schema '{}' is not valid", path.display()))?;

        if schema.is_empty() {
            println!("✓ '{}' is valid but declares no tabs", path.display());
            return Ok(());
        }

        println!("{}", render_table(&schema));
        println!("✓ '{}' is valid ({} tabs)", path.display(), schema.len());
        Ok(())
    }
}

fn render_table(schema: &Schema) -> String {
    let rows: Vec<TabRow> = schema
        .tabs
        .iter()
        .map(|t| TabRow {
            tab: t.name.0.clone(),
            count: t.columns.len(),
            header: t.columns.join(", "),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}
