//! Inspection of the champion table: existence, columns, primary key, row count.

use anyhow::{Context, Result};
use sqlx::Row;

use super::db::Catalog;
use super::types::{ColumnInfo, SchemaReport};

impl Catalog {
    /// Describe the champion table as the database sees it.
    ///
    /// A missing table is not an error; the report says so and the other fields stay empty.
    pub async fn check(&self) -> Result<SchemaReport> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = current_schema()
                AND table_name = 'champion'
            )
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .context("check champion table exists")?;
        if !exists {
            tracing::warn!("champion table does not exist");
            return Ok(SchemaReport::default());
        }

        let rows = sqlx::query(
            r#"
            SELECT column_name::text AS name, data_type::text AS data_type,
                   is_nullable::text AS is_nullable
            FROM information_schema.columns
            WHERE table_schema = current_schema() AND table_name = 'champion'
            ORDER BY ordinal_position
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("read champion columns")?;
        let mut columns = Vec::with_capacity(rows.len());
        for row in rows {
            let is_nullable: String = row.try_get("is_nullable")?;
            columns.push(ColumnInfo {
                name: row.try_get("name")?,
                data_type: row.try_get("data_type")?,
                nullable: is_nullable == "YES",
            });
        }

        let primary_key: Option<String> = sqlx::query_scalar(
            r#"
            SELECT a.attname::text
            FROM pg_index i
            JOIN pg_attribute a ON a.attrelid = i.indrelid AND a.attnum = ANY(i.indkey)
            WHERE i.indrelid = 'champion'::regclass AND i.indisprimary
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .context("read champion primary key")?;

        let row_count = self.count().await?;
        Ok(SchemaReport {
            table_exists: true,
            columns,
            primary_key,
            row_count,
        })
    }
}
