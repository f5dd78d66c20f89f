//! `champsync random` – print a champion picked at random.

use anyhow::Result;
use champsync_core::catalog::Catalog;
use champsync_core::config::DatabaseConfig;

pub async fn run_random(db_cfg: &DatabaseConfig) -> Result<()> {
    let catalog = Catalog::connect(db_cfg).await?;
    let picked = catalog.random().await;
    catalog.close().await;
    match picked? {
        Some(champion) => println!("{champion}"),
        None => anyhow::bail!("no champions in database; run `champsync import <CSV>` first"),
    }
    Ok(())
}
