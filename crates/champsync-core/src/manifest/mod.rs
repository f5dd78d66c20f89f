//! Champion manifest: the list of champions published by the asset server.
//!
//! The manifest is a JSON array of objects with at least `id` and `name`.
//! Extra fields (`alias`, `squarePortraitPath`, `roles`, ...) are ignored.

mod parse;

use serde::Deserialize;

pub use parse::{parse_manifest, ManifestError};

/// Identifier the manifest uses for its placeholder entry ("None"), which has no icon.
pub const NO_ASSET_ID: i64 = -1;

/// One champion listed in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    /// Numeric champion id; the icon lives at `<base><id>.png`.
    pub id: i64,
    /// Display name, e.g. `"Bel'Veth"`.
    pub name: String,
}

impl ManifestEntry {
    /// False for the placeholder entry that has no icon.
    pub fn has_asset(&self) -> bool {
        self.id != NO_ASSET_ID
    }
}

/// Entries that have an icon to download, in manifest order.
pub fn downloadable(entries: &[ManifestEntry]) -> impl Iterator<Item = &ManifestEntry> {
    entries.iter().filter(|e| e.has_asset())
}
