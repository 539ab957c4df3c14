//! tabsync — keep spreadsheet header rows in line with a YAML schema.
//!
//! # Usage
//!
//! ```text
//! tabsync sync [--schema <path>] [--credentials <path>] [--sheet-id <id>] [--tab <name>] [--dry-run]
//! tabsync validate [--schema <path>]
//! ```
//!
//! Unset flags fall back to `SCHEMA_FILE_PATH`, `GDRIVE_CREDENTIALS_PATH` and
//! `GSHEET_ID`, which may also come from a `.env` file.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use commands::{sync::SyncArgs, validate::ValidateArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "tabsync",
    version,
    about = "Reconcile spreadsheet tab headers against a YAML schema",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare every tab's header row with the schema and rewrite the ones that differ.
    Sync(SyncArgs),

    /// Load and check the schema file without contacting the spreadsheet.
    Validate(ValidateArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    tabsync_core::config::load_dotenv().context("invalid .env file")?;
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Sync(args) => args.run(),
        Commands::Validate(args) => args.run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_sync_flags() {
        let cli = Cli::try_parse_from([
            "tabsync", "sync", "--sheet-id", "abc", "--tab", "Users", "--dry-run",
        ])
        .expect("parse");
        let Commands::Sync(args) = cli.command else {
            panic!("expected sync");
        };
        assert_eq!(args.sheet_id.as_deref(), Some("abc"));
        assert_eq!(args.tab.as_deref(), Some("Users"));
        assert!(args.dry_run);
    }
}
