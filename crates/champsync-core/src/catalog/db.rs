//! Connection handling and schema for the champion catalog.

use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{PgPool, Row};

use crate::config::DatabaseConfig;

/// Handle to the champion catalog.
#[derive(Clone)]
pub struct Catalog {
    pub(crate) pool: PgPool,
}

/// Build connection options from config plus a password obtained out of band.
pub fn connect_options(cfg: &DatabaseConfig, password: &str) -> PgConnectOptions {
    let ssl_mode = if cfg.require_tls {
        PgSslMode::Require
    } else {
        PgSslMode::Prefer
    };
    PgConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .database(&cfg.database)
        .username(&cfg.user)
        .password(password)
        .ssl_mode(ssl_mode)
        .application_name("champsync")
}

impl Catalog {
    /// Connect using `cfg`, reading the password from its environment variable.
    pub async fn connect(cfg: &DatabaseConfig) -> Result<Self> {
        let password = cfg.password()?;
        let options = connect_options(cfg, &password);
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect_with(options)
            .await
            .with_context(|| {
                format!(
                    "cannot connect to postgres at {}:{}/{}",
                    cfg.host, cfg.port, cfg.database
                )
            })?;
        tracing::debug!(host = %cfg.host, database = %cfg.database, "catalog connected");
        Ok(Catalog { pool })
    }

    /// Connect with a full `postgres://` URL. Used by tests against a scratch database.
    pub async fn connect_url(url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(url)
            .await
            .context("cannot connect to postgres")?;
        Ok(Catalog { pool })
    }

    /// Create the `champion` table if it does not exist yet.
    pub async fn ensure_table(&self) -> Result<()> {
        // Unquoted identifiers: Postgres stores them lowercase, which is what
        // the CSV header names fold to as well.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS champion (
                championName VARCHAR(50) PRIMARY KEY,
                role VARCHAR(20),
                genre VARCHAR(20),
                espece VARCHAR(50),
                ressource VARCHAR(30),
                range VARCHAR(10),
                regions VARCHAR(50),
                releaseDate DATE,
                iconUrl TEXT
            );
            "#,
        )
        .execute(&self.pool)
        .await
        .context("create champion table")?;
        Ok(())
    }

    /// Drop the `champion` table and all its rows. No-op if it does not exist.
    pub async fn drop_table(&self) -> Result<()> {
        sqlx::query("DROP TABLE IF EXISTS champion")
            .execute(&self.pool)
            .await
            .context("drop champion table")?;
        tracing::warn!("champion table dropped");
        Ok(())
    }

    /// Number of rows in the champion table.
    pub async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM champion")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("n")?)
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}
