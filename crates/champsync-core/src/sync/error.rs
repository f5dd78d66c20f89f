//! Run-level failures of a sync. Per-icon failures are outcomes, not errors.

use std::path::PathBuf;

use crate::fetch::FetchError;
use crate::manifest::ManifestError;

/// Why the manifest could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ManifestFailure {
    #[error("request failed")]
    Transport(#[source] FetchError),
    #[error("server returned HTTP {0}")]
    Status(u32),
    #[error(transparent)]
    Parse(#[from] ManifestError),
}

/// A sync that could not run at all. Nothing is downloaded when this is returned.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("cannot create output directory {}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("manifest unavailable from {url}")]
    ManifestUnavailable {
        url: String,
        #[source]
        reason: ManifestFailure,
    },
}
