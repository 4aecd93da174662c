use std::fmt;

use serde::{Deserialize, Serialize};

/// Vertical placement of the 16:9 crop, fixed or drifting linearly across
/// the sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriftMode {
    /// Crop equally from top and bottom.
    #[default]
    Center,
    /// Keep the top, crop the bottom only.
    Top,
    /// Keep the bottom, crop the top only.
    Bottom,
    /// Start top-pinned, drift to bottom-pinned.
    TopToBottom,
    /// Start bottom-pinned, drift to top-pinned.
    BottomToTop,
}

impl DriftMode {
    /// Vertical offset of a crop of height `crop_height` at `progress`
    /// through the sequence. The static modes ignore `progress`.
    pub fn offset(self, src_height: u32, crop_height: u32, progress: f64) -> u32 {
        let available = src_height.saturating_sub(crop_height) as f64;

        let y = match self {
            DriftMode::Center => available / 2.0,
            DriftMode::Top => 0.0,
            DriftMode::Bottom => available,
            DriftMode::TopToBottom => available * progress,
            DriftMode::BottomToTop => available * (1.0 - progress),
        };

        y.round() as u32
    }
}

impl fmt::Display for DriftMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DriftMode::Center => "center",
            DriftMode::Top => "top",
            DriftMode::Bottom => "bottom",
            DriftMode::TopToBottom => "top-to-bottom",
            DriftMode::BottomToTop => "bottom-to-top",
        };
        f.write_str(name)
    }
}
