use serde::{Deserialize, Serialize};

use crate::error::{LapseError, Result};

/// Output resolution tags and their exact 16:9 pixel dimensions.
pub const RESOLUTIONS: &[(&str, u32, u32)] = &[
    ("1080p", 1920, 1080),
    ("2k", 2048, 1152),
    ("4k", 3840, 2160),
    ("5k", 5120, 2880),
    ("6k", 6144, 3456),
    ("8k", 7680, 4320),
];

/// Target output dimensions for the resize step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Default for Resolution {
    /// 4K UHD.
    fn default() -> Self {
        Resolution {
            width: 3840,
            height: 2160,
        }
    }
}

/// Resolve a resolution tag (case-insensitive) to pixel dimensions.
pub fn lookup(tag: &str) -> Result<Resolution> {
    RESOLUTIONS
        .iter()
        .find(|(name, _, _)| name.eq_ignore_ascii_case(tag))
        .map(|&(_, width, height)| Resolution { width, height })
        .ok_or_else(|| LapseError::UnknownResolutionTag(tag.to_string()))
}
