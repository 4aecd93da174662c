pub mod drift;
pub mod zoom;

use crate::consts::{ASPECT_H, ASPECT_W, CROP_WIDTH_ALIGNMENT};
use crate::error::{LapseError, Result};

pub use drift::DriftMode;
pub use zoom::{ZoomAnchor, ZoomConfig};

/// A rectangle in source-pixel coordinates for cropping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Check the rect fits inside the source frame. A rect that does not
    /// fit is an error, never silently clamped to a smaller field of view.
    pub fn validated(&self, src_width: u32, src_height: u32) -> Result<CropRect> {
        let out_of_bounds = self.width == 0
            || self.height == 0
            || self.x as u64 + self.width as u64 > src_width as u64
            || self.y as u64 + self.height as u64 > src_height as u64;

        if out_of_bounds {
            return Err(LapseError::CropOutOfBounds {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
                src_width,
                src_height,
            });
        }

        Ok(*self)
    }
}

/// Compute the crop rectangle for one frame of the sequence.
///
/// The base rect is the largest centered 16:9 region of the source; the
/// drift mode moves it vertically across the sequence, and the optional zoom
/// shrinks it about its own anchor. Drift and zoom anchors are independent.
pub fn compute_crop(
    frame: usize,
    total_frames: usize,
    src_width: u32,
    src_height: u32,
    drift: DriftMode,
    zoom: Option<&ZoomConfig>,
) -> Result<CropRect> {
    let progress = sequence_progress(frame, total_frames);

    let base = base_rect(src_width, src_height);
    let rect = CropRect {
        y: drift.offset(src_height, base.height, progress),
        ..base
    };

    let rect = match zoom {
        Some(config) => zoom::apply(rect, config, progress),
        None => rect,
    };

    rect.validated(src_width, src_height)
}

/// Position of `frame` within the sequence as a fraction in `[0, 1]`.
pub fn sequence_progress(frame: usize, total_frames: usize) -> f64 {
    if total_frames < 2 {
        return 0.0;
    }
    (frame.min(total_frames - 1)) as f64 / (total_frames - 1) as f64
}

/// Largest 16:9 region of the source, centered. The width snaps down to a
/// multiple of 16 so the height is integral and `width*9 == height*16`
/// holds exactly.
fn base_rect(src_width: u32, src_height: u32) -> CropRect {
    let fit_width = src_width.min((src_height as u64 * ASPECT_W as u64 / ASPECT_H as u64) as u32);
    let width = fit_width / CROP_WIDTH_ALIGNMENT * CROP_WIDTH_ALIGNMENT;
    let height = width / ASPECT_W * ASPECT_H;

    CropRect {
        x: (src_width.saturating_sub(width)) / 2,
        y: (src_height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
