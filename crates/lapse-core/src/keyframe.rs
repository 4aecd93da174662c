use tracing::warn;

use crate::consts::{COMPENSATION_RANGE, GREEN_RANGE, TEMPERATURE_RANGE};
use crate::error::{LapseError, Result};
use crate::settings::SettingsDoc;

/// The scalar settings subject to interpolation. `None` means the field was
/// absent from the authoring keyframe and is left untouched downstream.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScalarSettings {
    /// White balance temperature in Kelvin.
    pub temperature: Option<f64>,
    /// White balance green/tint multiplier.
    pub green: Option<f64>,
    /// Exposure compensation in EV stops.
    pub exposure: Option<f64>,
}

/// An authored settings record at a specific frame index, used as an
/// interpolation anchor.
#[derive(Clone, Debug)]
pub struct Keyframe {
    pub index: usize,
    pub scalars: ScalarSettings,
    /// The full authored document; everything not in `scalars` passes
    /// through to inheriting frames verbatim.
    pub doc: SettingsDoc,
}

impl Keyframe {
    /// Build a keyframe from a parsed profile, extracting the interpolated
    /// scalar fields. Out-of-range values are warned about but kept as
    /// authored.
    pub fn from_doc(index: usize, doc: SettingsDoc) -> Result<Keyframe> {
        let temperature = doc.get_f64("White Balance", "Temperature")?;
        let green = doc.get_f64("White Balance", "Green")?;
        let exposure = doc.get_f64("Exposure", "Compensation")?;

        warn_outside(index, "Temperature", temperature, TEMPERATURE_RANGE);
        warn_outside(index, "Green", green, GREEN_RANGE);
        warn_outside(index, "Compensation", exposure, COMPENSATION_RANGE);

        Ok(Keyframe {
            index,
            scalars: ScalarSettings {
                temperature,
                green,
                exposure,
            },
            doc,
        })
    }

    /// Full-frame dimensions recovered from the profile: when cropping is
    /// not enabled (or the key is absent), `[Crop] W/H` hold the source size.
    pub fn source_dimensions(&self) -> Option<(u32, u32)> {
        let cropped = match self.doc.get_bool("Crop", "Enabled") {
            Ok(enabled) => enabled.unwrap_or(false),
            Err(_) => return None,
        };
        if cropped {
            return None;
        }
        let w = self.doc.get_u32("Crop", "W").ok()??;
        let h = self.doc.get_u32("Crop", "H").ok()??;
        Some((w, h))
    }
}

fn warn_outside(index: usize, field: &str, value: Option<f64>, range: (f64, f64)) {
    if let Some(v) = value {
        if v < range.0 || v > range.1 {
            warn!(
                frame = index,
                field,
                value = v,
                "keyframe value outside typical range"
            );
        }
    }
}

/// The ordered, validated set of authored keyframes.
#[derive(Debug)]
pub struct KeyframeStore {
    keyframes: Vec<Keyframe>,
}

impl KeyframeStore {
    /// Validate a keyframe list supplied in frame order. Fails when fewer
    /// than two keyframes exist or the indices are not strictly increasing.
    pub fn new(keyframes: Vec<Keyframe>) -> Result<KeyframeStore> {
        if keyframes.len() < 2 {
            return Err(LapseError::MissingKeyframes {
                found: keyframes.len(),
            });
        }

        for pair in keyframes.windows(2) {
            if pair[1].index == pair[0].index {
                return Err(LapseError::DuplicateIndex {
                    index: pair[1].index,
                });
            }
            if pair[1].index < pair[0].index {
                return Err(LapseError::NonMonotonicIndex {
                    prev: pair[0].index,
                    index: pair[1].index,
                });
            }
        }

        Ok(KeyframeStore { keyframes })
    }

    /// The two keyframes straddling `frame`. A frame at a keyframe index, or
    /// before the first / after the last keyframe, returns the same keyframe
    /// twice.
    pub fn bracket(&self, frame: usize) -> (&Keyframe, &Keyframe) {
        // Index of the first keyframe with index >= frame.
        let at = self.keyframes.partition_point(|k| k.index < frame);

        match self.keyframes.get(at) {
            None => {
                let last = self.keyframes.last().unwrap();
                (last, last)
            }
            Some(next) if next.index == frame || at == 0 => (next, next),
            Some(next) => (&self.keyframes[at - 1], next),
        }
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyframe> {
        self.keyframes.iter()
    }

    /// Highest authored frame index; the sequence must extend at least this
    /// far.
    pub fn max_index(&self) -> usize {
        self.keyframes.last().map(|k| k.index).unwrap_or(0)
    }
}
