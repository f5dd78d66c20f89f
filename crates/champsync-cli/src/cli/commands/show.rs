//! `champsync show <name>` – print one champion, matched case-insensitively.

use anyhow::Result;
use champsync_core::catalog::Catalog;
use champsync_core::config::DatabaseConfig;

pub async fn run_show(db_cfg: &DatabaseConfig, name: &str) -> Result<()> {
    let catalog = Catalog::connect(db_cfg).await?;
    let found = catalog.find_by_name(name).await;
    catalog.close().await;
    match found? {
        Some(champion) => println!("{champion}"),
        None => anyhow::bail!("champion not found: {name}"),
    }
    Ok(())
}
