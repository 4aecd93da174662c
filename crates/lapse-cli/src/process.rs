use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use lapse_core::crop::sequence_progress;
use lapse_core::keyframe::KeyframeStore;
use lapse_core::pipeline::{FrameSettings, FrameSettingsBuilder, RenderConfig};
use rayon::prelude::*;
use tracing::error;

use crate::backup;
use crate::scan::{self, Frame, RAW_EXTENSION};
use crate::summary;

pub struct RunOptions {
    pub dry_run: bool,
    pub backup: bool,
    pub force: bool,
}

pub fn run(dir: &Path, config: &RenderConfig, options: &RunOptions) -> Result<()> {
    let scan = scan::scan_directory(dir)?;
    if scan.frames.is_empty() {
        bail!("No {} files found in {}", RAW_EXTENSION, dir.display());
    }

    let keyframes = scan::load_keyframes(&scan)?;
    let (source_width, source_height) = scan::source_dimensions(&keyframes);
    let store = KeyframeStore::new(keyframes)?;

    // All validation happens here, before any frame work: a bad keyframe set
    // or configuration aborts the whole run.
    let total_frames = scan.frames.len();
    let builder =
        FrameSettingsBuilder::new(&store, config, source_width, source_height, total_frames)?;

    summary::print_run_summary(dir, &scan, &store, config, source_width, source_height);

    let targets: Vec<&Frame> = scan
        .frames
        .iter()
        .filter(|frame| options.force || !frame.has_profile)
        .collect();

    if targets.is_empty() {
        println!("Nothing to do: every frame already has a profile.");
        return Ok(());
    }

    if options.dry_run {
        return dry_run(&builder, &targets, config);
    }

    if options.backup {
        backup::backup_profiles(dir, &scan)?;
    }

    write_frames(&builder, &targets)
}

/// Run the full computation for every target frame, print the results and
/// write nothing.
fn dry_run(builder: &FrameSettingsBuilder, targets: &[&Frame], config: &RenderConfig) -> Result<()> {
    println!(
        "Dry run: computing {} of {} frames, writing nothing",
        targets.len(),
        builder.total_frames()
    );

    let settings = targets
        .par_iter()
        .map(|frame| builder.build(frame.index))
        .collect::<lapse_core::error::Result<Vec<_>>>()?;

    for (frame, settings) in targets.iter().zip(&settings) {
        println!(
            "  {} {}",
            style("[DRY]").yellow(),
            describe_frame(frame, settings, config, builder.total_frames())
        );
    }
    Ok(())
}

fn describe_frame(
    frame: &Frame,
    settings: &FrameSettings,
    config: &RenderConfig,
    total_frames: usize,
) -> String {
    let name = frame
        .profile_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("?");

    let mut line = format!("{name}:");
    if let Some(t) = settings.scalars.temperature {
        line.push_str(&format!(" T={}", t.round() as i64));
    }
    if let Some(g) = settings.scalars.green {
        line.push_str(&format!(" G={g:.3}"));
    }
    if let Some(c) = settings.scalars.exposure {
        line.push_str(&format!(" C={c:+.2}"));
    }

    let crop = &settings.crop;
    line.push_str(&format!(
        " Crop=[{},{} {}x{}]",
        crop.x, crop.y, crop.width, crop.height
    ));

    if let Some(ref zoom) = config.zoom {
        let fov = zoom.fov_at(sequence_progress(settings.index, total_frames));
        line.push_str(&format!(" FOV={fov:.0}%"));
    }

    line
}

/// Build and write all target frames in parallel. Write failures are
/// reported per frame and do not stop the rest of the batch.
fn write_frames(builder: &FrameSettingsBuilder, targets: &[&Frame]) -> Result<()> {
    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Writing [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let failures: Vec<(usize, String)> = targets
        .par_iter()
        .filter_map(|frame| {
            let result = builder
                .build(frame.index)
                .map_err(anyhow::Error::from)
                .and_then(|settings| {
                    fs::write(&frame.profile_path, settings.to_document().to_string())
                        .with_context(|| format!("Cannot write {}", frame.profile_path.display()))
                });
            pb.inc(1);

            match result {
                Ok(()) => None,
                Err(err) => Some((frame.index, format!("{err:#}"))),
            }
        })
        .collect();
    pb.finish();

    let written = targets.len() - failures.len();
    println!("Done: {written} profiles written");

    if !failures.is_empty() {
        for (index, message) in &failures {
            error!(frame = *index, "{message}");
        }
        bail!("{} of {} frames failed to write", failures.len(), targets.len());
    }
    Ok(())
}
