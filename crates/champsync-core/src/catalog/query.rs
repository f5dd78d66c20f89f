//! Read-side queries on the champion table.

use anyhow::{Context, Result};
use sqlx::postgres::PgRow;
use sqlx::Row;

use super::db::Catalog;
use super::types::{Champion, ChampionSummary};

const CHAMPION_COLUMNS: &str = "championName, role, genre, espece, ressource, range, regions, \
     releaseDate::text AS releasedate, iconUrl";

/// Escape `%`, `_` and `\` so `ILIKE` compares the name literally.
pub fn escape_like(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn champion_from_row(row: &PgRow) -> Result<Champion> {
    Ok(Champion {
        champion_name: row.try_get("championname")?,
        role: row.try_get("role")?,
        genre: row.try_get("genre")?,
        espece: row.try_get("espece")?,
        ressource: row.try_get("ressource")?,
        range: row.try_get("range")?,
        regions: row.try_get("regions")?,
        release_date: row.try_get("releasedate")?,
        icon_url: row.try_get("iconurl")?,
    })
}

impl Catalog {
    /// First `limit` champions by name, with the columns the report prints.
    pub async fn list_champions(&self, limit: i64) -> Result<Vec<ChampionSummary>> {
        let rows = sqlx::query(
            r#"
            SELECT championName, role, regions, iconUrl
            FROM champion
            ORDER BY championName
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(ChampionSummary {
                champion_name: row.try_get("championname")?,
                role: row.try_get("role")?,
                regions: row.try_get("regions")?,
                icon_url: row.try_get("iconurl")?,
            });
        }
        Ok(out)
    }

    /// Full row for `name`, matched case-insensitively. `None` when no champion matches.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Champion>> {
        let sql = format!(
            "SELECT {CHAMPION_COLUMNS} FROM champion WHERE championName ILIKE $1 \
             ORDER BY championName LIMIT 1"
        );
        let row = sqlx::query(&sql)
            .bind(escape_like(name.trim()))
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("look up champion {name:?}"))?;
        row.as_ref().map(champion_from_row).transpose()
    }

    /// Every champion name, ascending.
    pub async fn all_names(&self) -> Result<Vec<String>> {
        let rows = sqlx::query("SELECT championName FROM champion ORDER BY championName ASC")
            .fetch_all(&self.pool)
            .await
            .context("list champion names")?;
        rows.iter()
            .map(|r| r.try_get::<String, _>("championname").map_err(anyhow::Error::from))
            .collect()
    }

    /// One champion picked at random, or `None` for an empty table.
    pub async fn random(&self) -> Result<Option<Champion>> {
        let sql = format!("SELECT {CHAMPION_COLUMNS} FROM champion ORDER BY random() LIMIT 1");
        let row = sqlx::query(&sql)
            .fetch_optional(&self.pool)
            .await
            .context("pick random champion")?;
        row.as_ref().map(champion_from_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_leaves_plain_names() {
        assert_eq!(escape_like("Kai'Sa"), "Kai'Sa");
        assert_eq!(escape_like("Dr. Mundo"), "Dr. Mundo");
    }

    #[test]
    fn escape_like_quotes_wildcards() {
        assert_eq!(escape_like("%"), "\\%");
        assert_eq!(escape_like("A_ri"), "A\\_ri");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
