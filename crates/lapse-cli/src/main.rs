mod backup;
mod process;
mod scan;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lapse_core::consts::{DEFAULT_ZOOM_NEAR_FOV, MAX_FOV};
use lapse_core::crop::{DriftMode, ZoomAnchor, ZoomConfig};
use lapse_core::easing::Easing;
use lapse_core::pipeline::RenderConfig;
use lapse_core::resolution;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lapse",
    about = "Interpolate RawTherapee profiles across a timelapse sequence, \
             with 16:9 crop drift and zoom effects"
)]
#[command(version)]
struct Cli {
    /// Directory containing the raw sequence and its keyframe profiles
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Compute every frame but write nothing; print one line per frame
    #[arg(short, long)]
    dry_run: bool,

    /// Skip backing up existing profiles
    #[arg(long)]
    no_backup: bool,

    /// Regenerate frames that already have a profile (keyframes included)
    #[arg(long)]
    force: bool,

    /// Vertical placement of the 16:9 crop across the sequence
    #[arg(long, value_enum, default_value = "center")]
    aspect_drift: DriftArg,

    /// Zoom direction; uses the default 100-80 span unless --zoom-level is given
    #[arg(long, value_enum)]
    zoom: Option<ZoomDirection>,

    /// Field-of-view percentage range, e.g. "100-70" (100 = full view)
    #[arg(long, value_name = "START-END")]
    zoom_level: Option<String>,

    /// Edge of the crop held fixed while zooming
    #[arg(long, value_enum, default_value = "center")]
    zoom_anchor: AnchorArg,

    /// Easing curve for the zoom motion
    #[arg(long, value_enum, default_value = "linear")]
    zoom_easing: EasingArg,

    /// Output resolution: 1080p, 2k, 4k, 5k, 6k or 8k (all 16:9)
    #[arg(long, default_value = "4k")]
    output: String,

    /// Load the render profile from a TOML file instead of the flags above
    #[arg(long, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Write the effective render profile as TOML and exit
    #[arg(long, value_name = "FILE")]
    save_profile: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DriftArg {
    Center,
    Top,
    Bottom,
    TopToBottom,
    BottomToTop,
}

#[derive(Clone, Copy, ValueEnum)]
enum ZoomDirection {
    /// Narrow the field of view over the sequence
    In,
    /// Widen the field of view over the sequence
    Out,
}

#[derive(Clone, Copy, ValueEnum)]
enum AnchorArg {
    Center,
    Top,
    Bottom,
}

#[derive(Clone, Copy, ValueEnum)]
enum EasingArg {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Exponential,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = resolve_config(&cli)?;

    if let Some(ref path) = cli.save_profile {
        let text = toml::to_string_pretty(&config)?;
        std::fs::write(path, &text)
            .with_context(|| format!("Failed to write profile to {}", path.display()))?;
        println!("Render profile saved to {}", path.display());
        return Ok(());
    }

    process::run(
        &cli.directory,
        &config,
        &process::RunOptions {
            dry_run: cli.dry_run,
            backup: !cli.no_backup,
            force: cli.force,
        },
    )
}

/// Assemble the render configuration from a TOML profile or the flags.
fn resolve_config(cli: &Cli) -> Result<RenderConfig> {
    if let Some(ref path) = cli.profile {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile {}", path.display()))?;
        let config: RenderConfig = toml::from_str(&text)
            .with_context(|| format!("Failed to parse profile {}", path.display()))?;

        // Profiles are hand-editable; re-run the range validation.
        if let Some(ref zoom) = config.zoom {
            ZoomConfig::new(zoom.start_fov, zoom.end_fov, zoom.anchor, zoom.easing)?;
        }
        return Ok(config);
    }

    Ok(RenderConfig {
        drift: drift_mode(cli.aspect_drift),
        zoom: resolve_zoom(cli)?,
        output: resolution::lookup(&cli.output)?,
    })
}

/// Combine `--zoom` and `--zoom-level` into a zoom configuration.
///
/// An explicit range wins; `--zoom` alone uses the default span, and next to
/// a range it only orients it (in = descending FOV, out = ascending). Equal
/// endpoints mean no zoom at all.
fn resolve_zoom(cli: &Cli) -> Result<Option<ZoomConfig>> {
    let (start, end) = match (cli.zoom, cli.zoom_level.as_deref()) {
        (None, None) => return Ok(None),
        (direction, Some(spec)) => {
            let (a, b) = ZoomConfig::parse_range(spec)?;
            match direction {
                Some(ZoomDirection::In) => (a.max(b), a.min(b)),
                Some(ZoomDirection::Out) => (a.min(b), a.max(b)),
                None => (a, b),
            }
        }
        (Some(ZoomDirection::In), None) => (MAX_FOV, DEFAULT_ZOOM_NEAR_FOV),
        (Some(ZoomDirection::Out), None) => (DEFAULT_ZOOM_NEAR_FOV, MAX_FOV),
    };

    if start == end {
        return Ok(None);
    }

    let config = ZoomConfig::new(
        start,
        end,
        zoom_anchor(cli.zoom_anchor),
        easing(cli.zoom_easing),
    )?;
    Ok(Some(config))
}

fn drift_mode(arg: DriftArg) -> DriftMode {
    match arg {
        DriftArg::Center => DriftMode::Center,
        DriftArg::Top => DriftMode::Top,
        DriftArg::Bottom => DriftMode::Bottom,
        DriftArg::TopToBottom => DriftMode::TopToBottom,
        DriftArg::BottomToTop => DriftMode::BottomToTop,
    }
}

fn zoom_anchor(arg: AnchorArg) -> ZoomAnchor {
    match arg {
        AnchorArg::Center => ZoomAnchor::Center,
        AnchorArg::Top => ZoomAnchor::Top,
        AnchorArg::Bottom => ZoomAnchor::Bottom,
    }
}

fn easing(arg: EasingArg) -> Easing {
    match arg {
        EasingArg::Linear => Easing::Linear,
        EasingArg::EaseIn => Easing::EaseIn,
        EasingArg::EaseOut => Easing::EaseOut,
        EasingArg::EaseInOut => Easing::EaseInOut,
        EasingArg::Exponential => Easing::Exponential,
    }
}
