use serde::{Deserialize, Serialize};

use crate::crop::{DriftMode, ZoomConfig};
use crate::resolution::Resolution;

/// Everything the per-frame builder needs besides the keyframes themselves:
/// the crop motion model and the output resolution. This is also the on-disk
/// TOML render profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub drift: DriftMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<ZoomConfig>,
    #[serde(default)]
    pub output: Resolution,
}
