//! Bulk CSV import through `COPY ... FROM STDIN`.

use anyhow::{Context, Result};
use std::path::Path;

use super::db::Catalog;
use super::types::CSV_COLUMNS;

pub const COPY_STATEMENT: &str = "COPY champion(championName, role, genre, espece, ressource, range, regions, releaseDate, iconUrl) FROM STDIN WITH CSV HEADER";

/// Verify the CSV header row names exactly the columns of the champion table, in order.
///
/// Accepts a UTF-8 BOM, surrounding whitespace, quoted names, and any letter case.
pub fn check_csv_header(line: &str) -> Result<()> {
    let line = line.trim_start_matches('\u{feff}').trim_end_matches(['\r', '\n']);
    let found: Vec<String> = line
        .split(',')
        .map(|c| c.trim().trim_matches('"').to_string())
        .collect();
    let matches = found.len() == CSV_COLUMNS.len()
        && found
            .iter()
            .zip(CSV_COLUMNS)
            .all(|(got, want)| got.eq_ignore_ascii_case(want));
    if !matches {
        anyhow::bail!(
            "unexpected CSV header: expected `{}`, found `{}`",
            CSV_COLUMNS.join(","),
            found.join(",")
        );
    }
    Ok(())
}

impl Catalog {
    /// Copy every row of the CSV at `path` into the champion table. Returns the row count.
    ///
    /// The header is checked before any data is sent; the COPY itself is atomic.
    pub async fn import_csv(&self, path: &Path) -> Result<u64> {
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("read {}", path.display()))?;
        let text = std::str::from_utf8(&data)
            .with_context(|| format!("{} is not UTF-8", path.display()))?;
        let header = text.lines().next().unwrap_or("");
        check_csv_header(header).with_context(|| format!("check {}", path.display()))?;

        let mut conn = self.pool.acquire().await?;
        let mut copy = conn
            .copy_in_raw(COPY_STATEMENT)
            .await
            .context("start COPY into champion")?;
        let sent = copy.send(data.as_slice()).await.map(|_| ());
        if let Err(e) = sent {
            let _ = copy.abort(e.to_string()).await;
            return Err(e).context("send CSV rows");
        }
        let rows = copy.finish().await.context("finish COPY into champion")?;
        tracing::info!(rows, path = %path.display(), "champion CSV imported");
        Ok(rows)
    }
}
