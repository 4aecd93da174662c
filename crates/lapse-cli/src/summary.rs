use std::path::Path;

use console::Style;
use lapse_core::crop::{compute_crop, DriftMode};
use lapse_core::keyframe::KeyframeStore;
use lapse_core::pipeline::RenderConfig;

use crate::scan::SequenceScan;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_run_summary(
    dir: &Path,
    scan: &SequenceScan,
    store: &KeyframeStore,
    config: &RenderConfig,
    source_width: u32,
    source_height: u32,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Lapse"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Directory"),
        s.path.apply_to(dir.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Frames"),
        s.value.apply_to(scan.frames.len())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Keyframes"),
        s.value.apply_to(store.len())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Source"),
        s.value.apply_to(format!("{source_width}x{source_height}"))
    );

    // The static 16:9 geometry every frame starts from.
    if let Ok(base) = compute_crop(
        0,
        scan.frames.len(),
        source_width,
        source_height,
        DriftMode::Center,
        None,
    ) {
        println!(
            "  {:<14}{} {}",
            s.label.apply_to("16:9 crop"),
            s.value.apply_to(format!("{}x{}", base.width, base.height)),
            s.label
                .apply_to(format!("(losing {}px height)", source_height - base.height))
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Crop Motion"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Drift"),
        s.method.apply_to(config.drift)
    );
    match config.zoom {
        Some(ref zoom) => {
            println!(
                "    {:<12}{}",
                s.label.apply_to("Zoom"),
                s.value.apply_to(format!(
                    "{:.0}% -> {:.0}%",
                    zoom.start_fov, zoom.end_fov
                ))
            );
            println!(
                "    {:<12}{}",
                s.label.apply_to("Anchor"),
                s.method.apply_to(zoom.anchor)
            );
            println!(
                "    {:<12}{}",
                s.label.apply_to("Easing"),
                s.method.apply_to(zoom.easing)
            );
        }
        None => {
            println!(
                "    {:<12}{}",
                s.label.apply_to("Zoom"),
                s.disabled.apply_to("disabled")
            );
        }
    }
    println!();

    println!("  {}", s.header.apply_to("Output"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Resize"),
        s.value
            .apply_to(format!("{}x{}", config.output.width, config.output.height))
    );
    println!();

    println!("  {}", s.header.apply_to("Keyframes"));
    for kf in store.iter() {
        let mut fields = String::new();
        if let Some(t) = kf.scalars.temperature {
            fields.push_str(&format!("  T={}", t.round() as i64));
        }
        if let Some(g) = kf.scalars.green {
            fields.push_str(&format!("  G={g:.3}"));
        }
        if let Some(c) = kf.scalars.exposure {
            fields.push_str(&format!("  C={c:+.2}"));
        }
        println!(
            "    {:<12}{}",
            s.label.apply_to(format!("Frame {:4}", kf.index)),
            s.value.apply_to(fields.trim_start())
        );
    }
    println!();
}
