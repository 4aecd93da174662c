/// Horizontal units of the output aspect ratio (16:9).
pub const ASPECT_W: u32 = 16;

/// Vertical units of the output aspect ratio (16:9).
pub const ASPECT_H: u32 = 9;

/// Crop widths are snapped down to a multiple of this so that
/// `height = width / 16 * 9` stays integral and `width*9 == height*16`
/// holds exactly on integer rectangles.
pub const CROP_WIDTH_ALIGNMENT: u32 = ASPECT_W;

/// Typical white balance temperature range in Kelvin. Values outside only
/// produce a warning; they are never clamped.
pub const TEMPERATURE_RANGE: (f64, f64) = (2000.0, 10000.0);

/// Typical green/tint multiplier range.
pub const GREEN_RANGE: (f64, f64) = (0.1, 2.0);

/// Typical exposure compensation range in EV stops.
pub const COMPENSATION_RANGE: (f64, f64) = (-5.0, 5.0);

/// Full field of view in percent. FOV values must be in `(0, MAX_FOV]`.
pub const MAX_FOV: f64 = 100.0;

/// Field of view the `--zoom in`/`--zoom out` shorthands move to/from when
/// no explicit range is given.
pub const DEFAULT_ZOOM_NEAR_FOV: f64 = 80.0;

/// Fallback source width when the first keyframe already has cropping
/// enabled and the full-frame size cannot be recovered (Nikon Z6 raw).
pub const FALLBACK_SOURCE_WIDTH: u32 = 6056;

/// Fallback source height, see [`FALLBACK_SOURCE_WIDTH`].
pub const FALLBACK_SOURCE_HEIGHT: u32 = 4032;
