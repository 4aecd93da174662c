mod common;

use common::{keyframe, keyframe_with_dims};
use lapse_core::crop::{DriftMode, ZoomAnchor, ZoomConfig};
use lapse_core::easing::Easing;
use lapse_core::error::LapseError;
use lapse_core::keyframe::KeyframeStore;
use lapse_core::pipeline::{FrameSettingsBuilder, RenderConfig};
use lapse_core::resolution;

fn store() -> KeyframeStore {
    KeyframeStore::new(vec![
        keyframe_with_dims(0, 5000.0, 1.0, 0.0, 6016, 4032),
        keyframe(10, 6000.0, 1.5, 1.0),
    ])
    .unwrap()
}

#[test]
fn test_sequence_must_cover_last_keyframe() {
    let store = store();
    let config = RenderConfig::default();

    let err = FrameSettingsBuilder::new(&store, &config, 6016, 4032, 10).unwrap_err();
    assert!(matches!(
        err,
        LapseError::FrameIndexOutOfRange { index: 10, total: 10 }
    ));

    assert!(FrameSettingsBuilder::new(&store, &config, 6016, 4032, 11).is_ok());
}

#[test]
fn test_build_rejects_frame_past_sequence() {
    let store = store();
    let config = RenderConfig::default();
    let builder = FrameSettingsBuilder::new(&store, &config, 6016, 4032, 11).unwrap();

    let err = builder.build(11).unwrap_err();
    assert!(matches!(
        err,
        LapseError::FrameIndexOutOfRange { index: 11, total: 11 }
    ));
}

#[test]
fn test_keyframe_frames_reproduce_their_values() {
    let store = store();
    let config = RenderConfig::default();
    let builder = FrameSettingsBuilder::new(&store, &config, 6016, 4032, 11).unwrap();

    let first = builder.build(0).unwrap();
    assert_eq!(first.scalars.temperature, Some(5000.0));
    assert_eq!(first.scalars.green, Some(1.0));

    let last = builder.build(10).unwrap();
    assert_eq!(last.scalars.temperature, Some(6000.0));
    assert_eq!(last.scalars.exposure, Some(1.0));
}

#[test]
fn test_midpoint_temperature() {
    let store = store();
    let config = RenderConfig::default();
    let builder = FrameSettingsBuilder::new(&store, &config, 6016, 4032, 11).unwrap();

    let mid = builder.build(5).unwrap();
    assert_eq!(mid.scalars.temperature, Some(5500.0));
}

#[test]
fn test_passthrough_inherited_from_nearer_keyframe() {
    let mut early = keyframe_with_dims(0, 5000.0, 1.0, 0.0, 6016, 4032);
    early.doc.set("Vignetting Correction", "Amount", "-30");
    let late = keyframe(10, 6000.0, 1.5, 1.0);

    let store = KeyframeStore::new(vec![early, late]).unwrap();
    let config = RenderConfig::default();
    let builder = FrameSettingsBuilder::new(&store, &config, 6016, 4032, 11).unwrap();

    // Nearer to the first keyframe, including the equidistant tie at 5.
    for frame in [1, 4, 5] {
        let doc = builder.build(frame).unwrap().to_document();
        assert_eq!(
            doc.get("Vignetting Correction", "Amount"),
            Some("-30"),
            "frame {frame}"
        );
    }

    // Nearer to the second keyframe, which never had the field.
    for frame in [6, 9] {
        let doc = builder.build(frame).unwrap().to_document();
        assert_eq!(doc.get("Vignetting Correction", "Amount"), None, "frame {frame}");
    }
}

#[test]
fn test_to_document_sections() {
    let store = store();
    let config = RenderConfig {
        drift: DriftMode::Center,
        zoom: None,
        output: resolution::lookup("1080p").unwrap(),
    };
    let builder = FrameSettingsBuilder::new(&store, &config, 6016, 4032, 11).unwrap();

    let doc = builder.build(5).unwrap().to_document();

    assert_eq!(doc.get("White Balance", "Temperature"), Some("5500"));
    assert_eq!(doc.get("White Balance", "Green"), Some("1.250"));
    assert_eq!(doc.get("Exposure", "Compensation"), Some("0.500"));

    assert_eq!(doc.get("Crop", "Enabled"), Some("true"));
    assert_eq!(doc.get("Crop", "X"), Some("0"));
    assert_eq!(doc.get("Crop", "Y"), Some("324"));
    assert_eq!(doc.get("Crop", "W"), Some("6016"));
    assert_eq!(doc.get("Crop", "H"), Some("3384"));
    assert_eq!(doc.get("Crop", "FixedRatio"), Some("true"));
    assert_eq!(doc.get("Crop", "Ratio"), Some("16:9"));

    assert_eq!(doc.get("Resize", "Enabled"), Some("true"));
    assert_eq!(doc.get("Resize", "Width"), Some("1920"));
    assert_eq!(doc.get("Resize", "Height"), Some("1080"));
    assert_eq!(doc.get("Resize", "LongEdge"), Some("1920"));
    assert_eq!(doc.get("Resize", "ShortEdge"), Some("1080"));
    assert_eq!(doc.get("Resize", "Method"), Some("Lanczos"));
}

#[test]
fn test_zoomed_run_end_to_end() {
    let store = store();
    let config = RenderConfig {
        drift: DriftMode::BottomToTop,
        zoom: Some(ZoomConfig::new(100.0, 80.0, ZoomAnchor::Top, Easing::EaseInOut).unwrap()),
        output: resolution::lookup("4k").unwrap(),
    };
    let builder = FrameSettingsBuilder::new(&store, &config, 6016, 4032, 11).unwrap();

    let mut widths = Vec::new();
    for frame in 0..11 {
        let settings = builder.build(frame).unwrap();
        assert_eq!(settings.crop.width * 9, settings.crop.height * 16);
        widths.push(settings.crop.width);
    }

    // Zooming in: the crop never grows, and ends at 80% of the start.
    assert!(widths.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(widths[0], 6016);
    assert_eq!(*widths.last().unwrap(), 4800);
}
