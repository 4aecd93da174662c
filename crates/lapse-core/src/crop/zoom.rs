use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{ASPECT_H, ASPECT_W, CROP_WIDTH_ALIGNMENT, MAX_FOV};
use crate::easing::Easing;
use crate::error::{LapseError, Result};

use super::CropRect;

/// The edge or point of the crop held fixed while zooming.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoomAnchor {
    #[default]
    Center,
    Top,
    Bottom,
}

impl fmt::Display for ZoomAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ZoomAnchor::Center => "center",
            ZoomAnchor::Top => "top",
            ZoomAnchor::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// Field-of-view motion across the sequence. FOV is the percentage of the
/// base crop retained: 100 = full view, lower = zoomed in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    pub start_fov: f64,
    pub end_fov: f64,
    #[serde(default)]
    pub anchor: ZoomAnchor,
    #[serde(default)]
    pub easing: Easing,
}

impl ZoomConfig {
    pub fn new(start_fov: f64, end_fov: f64, anchor: ZoomAnchor, easing: Easing) -> Result<ZoomConfig> {
        for fov in [start_fov, end_fov] {
            if !fov.is_finite() || fov <= 0.0 || fov > MAX_FOV {
                return Err(LapseError::InvalidZoomRange(format!(
                    "field of view {fov} outside (0, {MAX_FOV}]"
                )));
            }
        }
        Ok(ZoomConfig {
            start_fov,
            end_fov,
            anchor,
            easing,
        })
    }

    /// Parse a `START-END` percentage range like `100-70`. A single value
    /// means equal endpoints (no motion).
    pub fn parse_range(spec: &str) -> Result<(f64, f64)> {
        let malformed =
            || LapseError::InvalidZoomRange(format!("{spec:?} is not a START-END percentage range"));
        let parse = |part: &str| part.trim().parse::<f64>().map_err(|_| malformed());

        match spec.split('-').collect::<Vec<_>>().as_slice() {
            [single] => {
                let fov = parse(single)?;
                Ok((fov, fov))
            }
            [start, end] => Ok((parse(start)?, parse(end)?)),
            _ => Err(malformed()),
        }
    }

    /// Field of view at `progress` through the sequence; exactly `start_fov`
    /// at 0 and `end_fov` at 1 for every easing curve.
    pub fn fov_at(&self, progress: f64) -> f64 {
        let eased = self.easing.apply(progress);
        self.start_fov + (self.end_fov - self.start_fov) * eased
    }
}

/// Shrink `rect` by the zoom factor about the configured anchor. The new
/// width re-snaps to the aspect alignment; the rect re-centers horizontally.
pub fn apply(rect: CropRect, config: &ZoomConfig, progress: f64) -> CropRect {
    let factor = config.fov_at(progress) / MAX_FOV;

    let width =
        ((rect.width as f64 * factor).floor() as u32) / CROP_WIDTH_ALIGNMENT * CROP_WIDTH_ALIGNMENT;
    let height = width / ASPECT_W * ASPECT_H;

    let x = rect.x as i64 + (rect.width as i64 - width as i64) / 2;
    let y = match config.anchor {
        ZoomAnchor::Top => rect.y as i64,
        ZoomAnchor::Bottom => rect.y as i64 + (rect.height as i64 - height as i64),
        ZoomAnchor::Center => rect.y as i64 + (rect.height as i64 - height as i64) / 2,
    };

    // A factor above 1 produces an oversized rect; keep its size so the
    // bounds check downstream reports it instead of clamping it away.
    CropRect {
        x: x.max(0) as u32,
        y: y.max(0) as u32,
        width,
        height,
    }
}
