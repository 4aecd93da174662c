use tracing::debug;

use crate::crop::{compute_crop, CropRect};
use crate::error::{LapseError, Result};
use crate::interpolate::interpolate;
use crate::keyframe::{Keyframe, KeyframeStore, ScalarSettings};
use crate::resolution::Resolution;
use crate::settings::SettingsDoc;

use super::config::RenderConfig;

/// One fully-resolved set of processing settings for a single frame.
#[derive(Clone, Debug)]
pub struct FrameSettings {
    pub index: usize,
    pub scalars: ScalarSettings,
    pub crop: CropRect,
    pub resize: Resolution,
    /// The nearer bracketing keyframe's document; carries every field not
    /// subject to interpolation.
    pub base: SettingsDoc,
}

impl FrameSettings {
    /// Render the final profile: the inherited document with the blended
    /// scalars and the crop/resize sections applied on top.
    pub fn to_document(&self) -> SettingsDoc {
        let mut doc = self.base.clone();

        if let Some(t) = self.scalars.temperature {
            doc.set("White Balance", "Temperature", format!("{}", t.round() as i64));
        }
        if let Some(g) = self.scalars.green {
            doc.set("White Balance", "Green", format!("{g:.3}"));
        }
        if let Some(c) = self.scalars.exposure {
            doc.set("Exposure", "Compensation", format!("{c:.3}"));
        }

        doc.set("Crop", "Enabled", "true");
        doc.set("Crop", "X", self.crop.x.to_string());
        doc.set("Crop", "Y", self.crop.y.to_string());
        doc.set("Crop", "W", self.crop.width.to_string());
        doc.set("Crop", "H", self.crop.height.to_string());
        doc.set("Crop", "FixedRatio", "true");
        doc.set("Crop", "Ratio", "16:9");
        doc.set("Crop", "Orientation", "As Image");
        doc.set("Crop", "Guide", "Frame");

        doc.set("Resize", "Enabled", "true");
        doc.set("Resize", "Scale", "1");
        doc.set("Resize", "AppliesTo", "Cropped area");
        doc.set("Resize", "Method", "Lanczos");
        doc.set("Resize", "DataSpecified", "3");
        doc.set("Resize", "Width", self.resize.width.to_string());
        doc.set("Resize", "Height", self.resize.height.to_string());
        doc.set(
            "Resize",
            "LongEdge",
            self.resize.width.max(self.resize.height).to_string(),
        );
        doc.set(
            "Resize",
            "ShortEdge",
            self.resize.width.min(self.resize.height).to_string(),
        );

        doc
    }
}

/// Builds one [`FrameSettings`] per frame index from the validated keyframe
/// set and a fixed configuration. Stateless across frames; frames may be
/// built concurrently in any order.
#[derive(Debug)]
pub struct FrameSettingsBuilder<'a> {
    store: &'a KeyframeStore,
    config: &'a RenderConfig,
    source_width: u32,
    source_height: u32,
    total_frames: usize,
}

impl<'a> FrameSettingsBuilder<'a> {
    /// The sequence must extend at least as far as the last keyframe.
    pub fn new(
        store: &'a KeyframeStore,
        config: &'a RenderConfig,
        source_width: u32,
        source_height: u32,
        total_frames: usize,
    ) -> Result<FrameSettingsBuilder<'a>> {
        if total_frames <= store.max_index() {
            return Err(LapseError::FrameIndexOutOfRange {
                index: store.max_index(),
                total: total_frames,
            });
        }

        debug!(
            total_frames,
            keyframes = store.len(),
            source_width,
            source_height,
            "frame settings builder ready"
        );

        Ok(FrameSettingsBuilder {
            store,
            config,
            source_width,
            source_height,
            total_frames,
        })
    }

    pub fn total_frames(&self) -> usize {
        self.total_frames
    }

    pub fn build(&self, frame: usize) -> Result<FrameSettings> {
        if frame >= self.total_frames {
            return Err(LapseError::FrameIndexOutOfRange {
                index: frame,
                total: self.total_frames,
            });
        }

        let (prev, next) = self.store.bracket(frame);
        let scalars = interpolate(prev, next, frame);

        let crop = compute_crop(
            frame,
            self.total_frames,
            self.source_width,
            self.source_height,
            self.config.drift,
            self.config.zoom.as_ref(),
        )?;

        Ok(FrameSettings {
            index: frame,
            scalars,
            crop,
            resize: self.config.output,
            base: nearer(prev, next, frame).doc.clone(),
        })
    }
}

/// The bracketing keyframe nearer in index, ties toward the earlier one.
fn nearer<'a>(prev: &'a Keyframe, next: &'a Keyframe, frame: usize) -> &'a Keyframe {
    let frame = frame.clamp(prev.index, next.index);
    if frame - prev.index <= next.index - frame {
        prev
    } else {
        next
    }
}
