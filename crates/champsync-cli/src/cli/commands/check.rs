//! `champsync check` – describe the champion table.

use anyhow::Result;
use champsync_core::catalog::Catalog;
use champsync_core::config::DatabaseConfig;

pub async fn run_check(db_cfg: &DatabaseConfig) -> Result<()> {
    let catalog = Catalog::connect(db_cfg).await?;
    println!("Connected to {}:{}/{}", db_cfg.host, db_cfg.port, db_cfg.database);
    let report = catalog.check().await?;
    println!("{report}");
    if report.table_exists && report.row_count == 0 {
        println!("The table is empty; run `champsync import <CSV>` to load it.");
    }
    catalog.close().await;
    Ok(())
}
