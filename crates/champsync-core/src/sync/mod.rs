//! Champion icon synchronization.
//!
//! One sequential pass: prepare the output directory, fetch and parse the
//! manifest, then for every entry with an icon fetch `<base><id>.png` and save
//! it as `<SafeName>.png`. Only the output directory and the manifest can fail
//! the run; every per-icon failure becomes an [`Outcome`] and the pass goes on.

mod error;
mod outcome;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::fetch::{CurlFetcher, HttpFetcher};
use crate::manifest::{self, ManifestEntry};
use crate::safe_name::{clean_filename, ICON_EXTENSION};
use crate::storage;

pub use error::{ManifestFailure, SyncError};
pub use outcome::{Outcome, OutcomeLog};

/// Where to read the manifest and icons from, and where to write icons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTarget {
    pub manifest_url: String,
    /// Prefix the champion id and `.png` are appended to.
    pub asset_base_url: String,
    pub output_dir: PathBuf,
}

/// URL of the icon for champion `id`: `<base><id>.png`.
pub fn asset_url(asset_base_url: &str, id: i64) -> String {
    format!("{}{}.{}", asset_base_url, id, ICON_EXTENSION)
}

/// Sync with the default curl fetcher, discarding per-outcome notifications.
pub fn synchronize(
    manifest_url: &str,
    asset_base_url: &str,
    output_dir: &Path,
) -> Result<OutcomeLog, SyncError> {
    let target = SyncTarget {
        manifest_url: manifest_url.to_string(),
        asset_base_url: asset_base_url.to_string(),
        output_dir: output_dir.to_path_buf(),
    };
    synchronize_with(&CurlFetcher::default(), &target, |_| {})
}

/// Sync using `fetcher`, calling `on_outcome` as soon as each entry is done.
pub fn synchronize_with<F, C>(
    fetcher: &F,
    target: &SyncTarget,
    mut on_outcome: C,
) -> Result<OutcomeLog, SyncError>
where
    F: HttpFetcher + ?Sized,
    C: FnMut(&Outcome),
{
    let output_dir = &target.output_dir;
    storage::prepare_dir(output_dir).map_err(|source| SyncError::OutputDir {
        path: output_dir.clone(),
        source,
    })?;

    let entries = fetch_manifest(fetcher, &target.manifest_url)?;
    tracing::info!(
        url = %target.manifest_url,
        entries = entries.len(),
        "manifest loaded"
    );

    let mut log = OutcomeLog::new(output_dir.clone());
    let mut written: HashSet<String> = HashSet::new();

    let skipped = entries.len() - manifest::downloadable(&entries).count();
    if skipped > 0 {
        tracing::debug!(skipped, "skipping entries without an icon");
    }

    for entry in manifest::downloadable(&entries) {
        let outcome = sync_entry(fetcher, target, entry, &mut written);
        match &outcome {
            Outcome::Saved { path, .. } => {
                tracing::debug!(name = %entry.name, path = %path.display(), "icon saved")
            }
            Outcome::NotFound { status, .. } => {
                tracing::warn!(name = %entry.name, id = entry.id, status, "icon not found")
            }
            Outcome::TransportError { message, .. } => {
                tracing::warn!(name = %entry.name, id = entry.id, "icon download failed: {}", message)
            }
        }
        on_outcome(&outcome);
        log.push(outcome);
    }

    tracing::info!(
        saved = log.saved(),
        not_found = log.not_found(),
        failed = log.failed(),
        dir = %output_dir.display(),
        "sync finished"
    );
    Ok(log)
}

fn fetch_manifest<F>(fetcher: &F, url: &str) -> Result<Vec<ManifestEntry>, SyncError>
where
    F: HttpFetcher + ?Sized,
{
    let unavailable = |reason| SyncError::ManifestUnavailable {
        url: url.to_string(),
        reason,
    };
    let response = fetcher
        .get(url)
        .map_err(|e| unavailable(ManifestFailure::Transport(e)))?;
    if !response.is_success() {
        return Err(unavailable(ManifestFailure::Status(response.status)));
    }
    manifest::parse_manifest(&response.body).map_err(|e| unavailable(e.into()))
}

fn sync_entry<F>(
    fetcher: &F,
    target: &SyncTarget,
    entry: &ManifestEntry,
    written: &mut HashSet<String>,
) -> Outcome
where
    F: HttpFetcher + ?Sized,
{
    let safe_name = clean_filename(&entry.name);
    let url = asset_url(&target.asset_base_url, entry.id);

    let response = match fetcher.get(&url) {
        Ok(r) => r,
        Err(e) => {
            return Outcome::TransportError {
                name: entry.name.clone(),
                message: e.to_string(),
            }
        }
    };
    if response.status != 200 {
        return Outcome::NotFound {
            name: entry.name.clone(),
            id: entry.id,
            status: response.status,
        };
    }

    if !written.insert(safe_name.clone()) {
        tracing::warn!(
            name = %entry.name,
            safe_name = %safe_name,
            "file name already written this run; overwriting"
        );
    }
    match storage::save_icon(&target.output_dir, &safe_name, &response.body) {
        Ok(path) => Outcome::Saved {
            name: entry.name.clone(),
            safe_name,
            path,
        },
        Err(e) => Outcome::TransportError {
            name: entry.name.clone(),
            message: format!("{:#}", e),
        },
    }
}
