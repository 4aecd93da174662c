use thiserror::Error;

#[derive(Error, Debug)]
pub enum LapseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Need at least 2 keyframes to interpolate, found {found}")]
    MissingKeyframes { found: usize },

    #[error("Keyframe indices not strictly increasing: frame {index} follows frame {prev}")]
    NonMonotonicIndex { prev: usize, index: usize },

    #[error("Duplicate keyframe at frame {index}")]
    DuplicateIndex { index: usize },

    #[error("Malformed value for [{section}] {key}: {value:?}")]
    MalformedField {
        section: String,
        key: String,
        value: String,
    },

    #[error("Malformed settings file: {0}")]
    MalformedSettings(String),

    #[error("Invalid zoom range: {0}")]
    InvalidZoomRange(String),

    #[error("Unknown output resolution tag: {0}")]
    UnknownResolutionTag(String),

    #[error(
        "Crop region ({x},{y} {width}x{height}) exceeds source dimensions ({src_width}x{src_height})"
    )]
    CropOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        src_width: u32,
        src_height: u32,
    },

    #[error("Frame index {index} out of range (total: {total})")]
    FrameIndexOutOfRange { index: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, LapseError>;
