//! `champsync import <csv>` – bulk-load champions with COPY.

use anyhow::{Context, Result};
use champsync_core::catalog::Catalog;
use champsync_core::config::DatabaseConfig;
use std::path::Path;

pub async fn run_import(db_cfg: &DatabaseConfig, path: &Path) -> Result<()> {
    if !path.is_file() {
        anyhow::bail!("CSV file not found: {}", path.display());
    }
    let catalog = Catalog::connect(db_cfg).await?;
    let rows = catalog
        .import_csv(path)
        .await
        .with_context(|| format!("import {}", path.display()))?;
    println!("Import complete: {rows} rows.");
    catalog.close().await;
    Ok(())
}
