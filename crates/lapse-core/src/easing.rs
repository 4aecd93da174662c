use std::fmt;

use serde::{Deserialize, Serialize};

/// An easing curve mapping a progress fraction in `[0, 1]` onto an eased
/// fraction in `[0, 1]`. Every curve fixes both endpoints exactly and is
/// monotonic non-decreasing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic ease-in (slow start).
    EaseIn,
    /// Quadratic ease-out (slow end).
    EaseOut,
    /// Cubic smoothstep.
    EaseInOut,
    /// Normalized exponential ramp `(2^(10t) - 1) / (2^10 - 1)`.
    Exponential,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => smoothstep(t),
            Easing::Exponential => ((10.0 * t).exp2() - 1.0) / (1024.0 - 1.0),
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Exponential => "exponential",
        };
        f.write_str(name)
    }
}

/// Cubic smoothstep `3t^2 - 2t^3`, the fixed curve for scalar setting
/// interpolation between keyframes.
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}
