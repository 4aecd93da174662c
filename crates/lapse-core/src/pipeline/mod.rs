pub mod builder;
pub mod config;

pub use builder::{FrameSettings, FrameSettingsBuilder};
pub use config::RenderConfig;
