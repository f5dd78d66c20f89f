//! Parse a manifest response body into entries.

use super::ManifestEntry;

/// Body could not be read as a champion manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("manifest is not valid JSON for a champion list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a JSON array of `{ "id": <int>, "name": <string>, ... }` objects.
pub fn parse_manifest(body: &[u8]) -> Result<Vec<ManifestEntry>, ManifestError> {
    let entries: Vec<ManifestEntry> = serde_json::from_slice(body)?;
    Ok(entries)
}
