//! `champsync list` – print a few champions.

use anyhow::Result;
use champsync_core::catalog::Catalog;
use champsync_core::config::DatabaseConfig;

pub async fn run_list(db_cfg: &DatabaseConfig, limit: i64) -> Result<()> {
    if limit < 0 {
        anyhow::bail!("--limit must not be negative");
    }
    let catalog = Catalog::connect(db_cfg).await?;
    let champions = catalog.list_champions(limit).await?;
    if champions.is_empty() {
        println!("No champions in database.");
    }
    for c in champions {
        println!("{c}");
    }
    catalog.close().await;
    Ok(())
}
