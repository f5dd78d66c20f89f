//! Writing icons to the output directory.
//!
//! Each icon is written to `<name>.png.part` and then renamed onto
//! `<name>.png`, so an interrupted run never leaves a truncated icon behind
//! and re-runs overwrite in place.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::safe_name::icon_file_name;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `Ahri.png` → `Ahri.png.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Create the output directory (and parents) if missing. No-op when it exists.
pub fn prepare_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}

/// Write `bytes` to `<dir>/<safe_name>.png`, replacing any existing file.
/// Returns the final path. On failure the `.part` file is removed again.
pub fn save_icon(dir: &Path, safe_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let final_path = dir.join(icon_file_name(safe_name));
    let tp = temp_path(&final_path);

    let file = fs::File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&tp)
        .with_context(|| format!("failed to create temp file: {}", tp.display()))?;

    if let Err(e) = write_and_rename(file, &tp, &final_path, bytes) {
        let _ = fs::remove_file(&tp);
        return Err(e);
    }
    Ok(final_path)
}

fn write_and_rename(mut file: fs::File, tp: &Path, final_path: &Path, bytes: &[u8]) -> Result<()> {
    file.write_all(bytes)
        .with_context(|| format!("failed to write {}", tp.display()))?;
    file.sync_all().context("storage sync failed")?;
    drop(file);

    fs::rename(tp, final_path).with_context(|| {
        format!(
            "failed to rename {} to {}",
            tp.display(),
            final_path.display()
        )
    })
}
