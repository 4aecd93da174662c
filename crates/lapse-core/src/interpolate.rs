use crate::easing::smoothstep;
use crate::keyframe::{Keyframe, ScalarSettings};

/// Blend the scalar settings of two bracketing keyframes at `frame`.
///
/// Frames at or outside the bracket clamp to the nearest keyframe's values
/// unchanged: there is no extrapolation, and a frame sitting exactly on a
/// keyframe reproduces that keyframe's values exactly. Between keyframes the
/// raw fraction is eased through smoothstep before the linear blend.
pub fn interpolate(prev: &Keyframe, next: &Keyframe, frame: usize) -> ScalarSettings {
    if frame <= prev.index {
        return prev.scalars;
    }
    if frame >= next.index {
        return next.scalars;
    }

    let span = (next.index - prev.index) as f64;
    let t = smoothstep((frame - prev.index) as f64 / span);

    ScalarSettings {
        temperature: blend(prev.scalars.temperature, next.scalars.temperature, t),
        green: blend(prev.scalars.green, next.scalars.green, t),
        exposure: blend(prev.scalars.exposure, next.scalars.exposure, t),
    }
}

/// A scalar present in only one keyframe carries through unchanged from
/// whichever has it; absent in both stays absent.
fn blend(prev: Option<f64>, next: Option<f64>, t: f64) -> Option<f64> {
    match (prev, next) {
        (Some(a), Some(b)) => Some(a + (b - a) * t),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
