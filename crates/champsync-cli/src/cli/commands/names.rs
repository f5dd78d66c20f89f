//! `champsync names` – every champion name, one per line.

use anyhow::Result;
use champsync_core::catalog::Catalog;
use champsync_core::config::DatabaseConfig;

pub async fn run_names(db_cfg: &DatabaseConfig) -> Result<()> {
    let catalog = Catalog::connect(db_cfg).await?;
    let names = catalog.all_names().await?;
    if names.is_empty() {
        println!("No champions in database.");
    }
    for name in names {
        println!("{name}");
    }
    catalog.close().await;
    Ok(())
}
