use lapse_core::crop::{compute_crop, sequence_progress, CropRect, DriftMode};
use lapse_core::error::LapseError;

// Nikon Z6 full frame (3:2). Largest aligned 16:9 region: 6048x3402 with
// 630 rows of vertical slack.
const SRC_W: u32 = 6056;
const SRC_H: u32 = 4032;

fn crop(frame: usize, total: usize, drift: DriftMode) -> CropRect {
    compute_crop(frame, total, SRC_W, SRC_H, drift, None).unwrap()
}

#[test]
fn test_base_rect_is_largest_aligned_16_9() {
    let rect = crop(0, 100, DriftMode::Center);
    assert_eq!(rect.width, 6048);
    assert_eq!(rect.height, 3402);
    assert_eq!(rect.x, 4);
    assert_eq!(rect.width * 9, rect.height * 16);
}

#[test]
fn test_wide_source_crops_width_instead() {
    // Ultrawide source: height is the limit, width shrinks around center.
    let rect = compute_crop(0, 10, 5120, 1440, DriftMode::Center, None).unwrap();
    assert_eq!(rect.height, 1440);
    assert_eq!(rect.width, 2560);
    assert_eq!(rect.x, (5120 - 2560) / 2);
    assert_eq!(rect.y, 0);
    assert_eq!(rect.width * 9, rect.height * 16);
}

#[test]
fn test_exact_16_9_source_keeps_full_frame() {
    let rect = compute_crop(0, 10, 1920, 1080, DriftMode::Center, None).unwrap();
    assert_eq!(rect, CropRect { x: 0, y: 0, width: 1920, height: 1080 });
}

#[test]
fn test_center_drift_is_constant() {
    let reference = crop(0, 50, DriftMode::Center);
    for frame in 1..50 {
        assert_eq!(crop(frame, 50, DriftMode::Center), reference);
    }
    assert_eq!(reference.y, (SRC_H - reference.height) / 2);
}

#[test]
fn test_static_pins() {
    assert_eq!(crop(7, 50, DriftMode::Top).y, 0);
    let bottom = crop(7, 50, DriftMode::Bottom);
    assert_eq!(bottom.y + bottom.height, SRC_H);
}

#[test]
fn test_top_to_bottom_boundaries_and_monotonic() {
    let n = 24;
    let first = crop(0, n, DriftMode::TopToBottom);
    let last = crop(n - 1, n, DriftMode::TopToBottom);

    assert_eq!(first.y, crop(0, n, DriftMode::Top).y);
    assert_eq!(last.y, crop(n - 1, n, DriftMode::Bottom).y);

    let mut previous = first.y;
    for frame in 1..n {
        let y = crop(frame, n, DriftMode::TopToBottom).y;
        assert!(y >= previous, "offset decreased at frame {frame}");
        previous = y;
    }
}

#[test]
fn test_bottom_to_top_midpoint() {
    // 6016x4032 leaves 648 rows of slack, so the 3-frame midpoint is exact.
    let n = 3;
    let at = |frame| {
        compute_crop(frame, n, 6016, 4032, DriftMode::BottomToTop, None)
            .unwrap()
            .y
    };

    assert_eq!(at(0), 648);
    assert_eq!(at(1), 324);
    assert_eq!(at(2), 0);
}

#[test]
fn test_sequence_progress() {
    assert_eq!(sequence_progress(0, 5), 0.0);
    assert_eq!(sequence_progress(2, 5), 0.5);
    assert_eq!(sequence_progress(4, 5), 1.0);
    // Degenerate single-frame sequence.
    assert_eq!(sequence_progress(0, 1), 0.0);
}

#[test]
fn test_validated_rejects_out_of_bounds() {
    let rect = CropRect { x: 0, y: 0, width: SRC_W + 16, height: 9 * (SRC_W + 16) / 16 };
    let err = rect.validated(SRC_W, SRC_H).unwrap_err();
    assert!(matches!(err, LapseError::CropOutOfBounds { .. }));

    // Fits by size but not at this position.
    let rect = CropRect { x: 100, y: 700, width: 6048, height: 3402 };
    assert!(rect.validated(SRC_W, SRC_H).is_err());

    let rect = CropRect { x: 4, y: 315, width: 6048, height: 3402 };
    assert!(rect.validated(SRC_W, SRC_H).is_ok());
}
