//! `champsync setup` – create the champion table.

use anyhow::Result;
use champsync_core::catalog::Catalog;
use champsync_core::config::DatabaseConfig;

pub async fn run_setup(db_cfg: &DatabaseConfig) -> Result<()> {
    let catalog = Catalog::connect(db_cfg).await?;
    catalog.ensure_table().await?;
    let count = catalog.count().await?;
    println!("Champion table ready with {count} rows.");
    if count == 0 {
        println!("The table is empty; run `champsync import <CSV>` to load it.");
    }
    catalog.close().await;
    Ok(())
}
