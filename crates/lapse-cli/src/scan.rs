use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lapse_core::consts::{FALLBACK_SOURCE_HEIGHT, FALLBACK_SOURCE_WIDTH};
use lapse_core::keyframe::Keyframe;
use lapse_core::settings::SettingsDoc;
use tracing::{debug, warn};

/// Raw frame file extension, matched case-insensitively.
pub const RAW_EXTENSION: &str = "NEF";

/// Settings profile extension, appended to the full raw filename
/// (RawTherapee sidecar naming: `IMG_0001.NEF` -> `IMG_0001.NEF.pp3`).
pub const PROFILE_EXTENSION: &str = "pp3";

/// One raw frame of the sequence and its (possibly absent) sidecar profile.
pub struct Frame {
    pub index: usize,
    pub raw_path: PathBuf,
    pub profile_path: PathBuf,
    pub has_profile: bool,
}

pub struct SequenceScan {
    /// All raw frames in name order; the position in this list is the frame
    /// index.
    pub frames: Vec<Frame>,
    pub keyframe_count: usize,
}

pub fn scan_directory(dir: &Path) -> Result<SequenceScan> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Cannot read directory {}", dir.display()))?;

    let mut raw_files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(RAW_EXTENSION))
        })
        .collect();
    raw_files.sort();

    let frames: Vec<Frame> = raw_files
        .into_iter()
        .enumerate()
        .map(|(index, raw_path)| {
            let profile_path = profile_path_for(&raw_path);
            let has_profile = profile_path.is_file();
            Frame {
                index,
                raw_path,
                profile_path,
                has_profile,
            }
        })
        .collect();

    let keyframe_count = frames.iter().filter(|f| f.has_profile).count();
    debug!(
        frames = frames.len(),
        keyframes = keyframe_count,
        "scanned {}",
        dir.display()
    );

    Ok(SequenceScan {
        frames,
        keyframe_count,
    })
}

fn profile_path_for(raw: &Path) -> PathBuf {
    let mut name = raw.as_os_str().to_owned();
    name.push(".");
    name.push(PROFILE_EXTENSION);
    PathBuf::from(name)
}

/// Parse every discovered profile into a keyframe, in frame order.
pub fn load_keyframes(scan: &SequenceScan) -> Result<Vec<Keyframe>> {
    let mut keyframes = Vec::with_capacity(scan.keyframe_count);

    for frame in scan.frames.iter().filter(|f| f.has_profile) {
        let text = fs::read_to_string(&frame.profile_path)
            .with_context(|| format!("Cannot read {}", frame.profile_path.display()))?;
        let doc = SettingsDoc::parse(&text)
            .with_context(|| format!("Cannot parse {}", frame.profile_path.display()))?;
        keyframes.push(Keyframe::from_doc(frame.index, doc)?);
    }

    Ok(keyframes)
}

/// Source dimensions probed from the first keyframe's profile. A keyframe
/// that already crops cannot tell us the full-frame size; fall back to the
/// default and warn, like the renderer would.
pub fn source_dimensions(keyframes: &[Keyframe]) -> (u32, u32) {
    match keyframes.first().and_then(|kf| kf.source_dimensions()) {
        Some(dims) => dims,
        None => {
            warn!(
                "cannot read source dimensions from the first keyframe, assuming {}x{} \
                 (disable crop in the first keyframe for exact results)",
                FALLBACK_SOURCE_WIDTH, FALLBACK_SOURCE_HEIGHT
            );
            (FALLBACK_SOURCE_WIDTH, FALLBACK_SOURCE_HEIGHT)
        }
    }
}
