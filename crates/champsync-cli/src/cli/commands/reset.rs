//! `champsync reset <csv>` – drop, recreate, and reload the champion table.

use anyhow::{Context, Result};
use champsync_core::catalog::Catalog;
use champsync_core::config::DatabaseConfig;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// True only for an explicit "yes" (any case, surrounding whitespace ignored).
pub(crate) fn is_confirmation(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

fn confirm() -> Result<bool> {
    print!("This deletes every row in the champion table. Type 'yes' to continue: ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_confirmation(&answer))
}

pub async fn run_reset(db_cfg: &DatabaseConfig, path: &Path, yes: bool) -> Result<()> {
    if !path.is_file() {
        anyhow::bail!("CSV file not found: {}", path.display());
    }
    if !yes && !confirm()? {
        println!("Reset cancelled.");
        return Ok(());
    }

    let catalog = Catalog::connect(db_cfg).await?;
    catalog.drop_table().await?;
    catalog.ensure_table().await?;
    let rows = catalog
        .import_csv(path)
        .await
        .with_context(|| format!("import {}", path.display()))?;
    println!("Reset complete: {rows} rows imported.");
    catalog.close().await;
    Ok(())
}
