//! `champsync sync` – download champion icons.

use anyhow::{Context, Result};
use champsync_core::config::ChampsyncConfig;
use champsync_core::fetch::{CurlFetcher, HttpFetcher};
use champsync_core::sync::{self, SyncTarget};
use std::path::PathBuf;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct SyncOverrides {
    pub output_dir: Option<PathBuf>,
    pub manifest_url: Option<String>,
    pub asset_base_url: Option<String>,
}

/// Config with the command-line overrides applied, validated.
pub(crate) fn effective_config(
    cfg: &ChampsyncConfig,
    overrides: SyncOverrides,
) -> Result<ChampsyncConfig> {
    let mut cfg = cfg.clone();
    if let Some(dir) = overrides.output_dir {
        cfg.output_dir = dir;
    }
    if let Some(url) = overrides.manifest_url {
        cfg.manifest_url = url;
    }
    if let Some(url) = overrides.asset_base_url {
        cfg.asset_base_url = url;
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Runs the sync on a blocking thread and prints one line per champion, then a summary.
/// Per-icon failures are reported but do not fail the command.
pub async fn run_sync(cfg: &ChampsyncConfig, overrides: SyncOverrides) -> Result<()> {
    let cfg = effective_config(cfg, overrides)?;
    let fetcher = CurlFetcher::new(cfg.fetch_options());
    run_sync_with(fetcher, cfg).await
}

/// `Ok` once every entry has been processed; `Err` only for a fatal `SyncError`.
pub(crate) async fn run_sync_with<F>(fetcher: F, cfg: ChampsyncConfig) -> Result<()>
where
    F: HttpFetcher + Send + 'static,
{
    let target = SyncTarget {
        manifest_url: cfg.manifest_url,
        asset_base_url: cfg.asset_base_url,
        output_dir: cfg.output_dir,
    };

    println!("Fetching champion list from {}", target.manifest_url);
    let log = tokio::task::spawn_blocking(move || {
        sync::synchronize_with(&fetcher, &target, |outcome| println!("{}", outcome))
    })
    .await
    .context("sync task join")??;

    println!();
    println!("{}", log.summary());
    Ok(())
}
