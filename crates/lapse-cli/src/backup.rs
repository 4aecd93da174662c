use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use crate::scan::SequenceScan;

/// Copy every existing profile into a timestamped subdirectory before the
/// run touches anything. Returns the backup directory, or `None` when there
/// was nothing to back up.
pub fn backup_profiles(dir: &Path, scan: &SequenceScan) -> Result<Option<PathBuf>> {
    let profiles: Vec<&PathBuf> = scan
        .frames
        .iter()
        .filter(|f| f.has_profile)
        .map(|f| &f.profile_path)
        .collect();

    if profiles.is_empty() {
        return Ok(None);
    }

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let backup_dir = dir.join(format!("lapse-backup_{stamp}"));
    fs::create_dir_all(&backup_dir)
        .with_context(|| format!("Cannot create backup directory {}", backup_dir.display()))?;

    for path in &profiles {
        let name = path
            .file_name()
            .with_context(|| format!("No file name in profile path {}", path.display()))?;
        fs::copy(path, backup_dir.join(name))
            .with_context(|| format!("Cannot back up {}", path.display()))?;
    }

    info!(
        count = profiles.len(),
        "backed up existing profiles to {}",
        backup_dir.display()
    );
    Ok(Some(backup_dir))
}
