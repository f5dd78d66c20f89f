//! CLI for champsync.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use champsync_core::config;
use std::path::PathBuf;

use commands::{
    run_check, run_completions, run_import, run_list, run_man, run_names, run_random, run_reset,
    run_setup, run_show, run_sync, SyncOverrides,
};

/// Top-level CLI for champsync.
#[derive(Debug, Parser)]
#[command(name = "champsync")]
#[command(about = "champsync: champion icon downloader and champion catalog loader", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every champion icon listed in the manifest.
    Sync {
        /// Directory to write `<Name>.png` files to (default from config: champion_icons).
        #[arg(long, short = 'o', value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Override the manifest URL from the config file.
        #[arg(long, value_name = "URL")]
        manifest_url: Option<String>,
        /// Override the icon base URL; icons are fetched from `<URL><id>.png`.
        #[arg(long, value_name = "URL")]
        asset_base_url: Option<String>,
    },

    /// Create the champion table if missing and report how many rows it holds.
    Setup,

    /// Bulk-import a champion CSV file into the champion table.
    Import {
        /// Path to the CSV file (header row required).
        path: PathBuf,
    },

    /// Print a few rows from the champion table.
    List {
        /// Number of rows to print.
        #[arg(long, short = 'n', default_value = "5", value_name = "N")]
        limit: i64,
    },

    /// Print one champion's full row; the name is matched case-insensitively.
    Show {
        /// Champion name, e.g. `ahri` or "Dr. Mundo".
        name: String,
    },

    /// Print every champion name in alphabetical order.
    Names,

    /// Print a champion picked at random.
    Random,

    /// Report whether the champion table exists, its columns, primary key and row count.
    Check,

    /// Drop the champion table, recreate it, and import the CSV again.
    Reset {
        /// Path to the CSV file to import after recreating the table.
        path: PathBuf,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Print shell completions to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Sync {
                output_dir,
                manifest_url,
                asset_base_url,
            } => {
                let overrides = SyncOverrides {
                    output_dir,
                    manifest_url,
                    asset_base_url,
                };
                run_sync(&cfg, overrides).await?;
            }
            CliCommand::Setup => run_setup(&cfg.database).await?,
            CliCommand::Import { path } => run_import(&cfg.database, &path).await?,
            CliCommand::List { limit } => run_list(&cfg.database, limit).await?,
            CliCommand::Show { name } => run_show(&cfg.database, &name).await?,
            CliCommand::Names => run_names(&cfg.database).await?,
            CliCommand::Random => run_random(&cfg.database).await?,
            CliCommand::Check => run_check(&cfg.database).await?,
            CliCommand::Reset { path, yes } => run_reset(&cfg.database, &path, yes).await?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
