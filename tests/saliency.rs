mod common;

use common::synthetic::{bright_square_gray, uniform_image};
use dirt_detector::saliency::{SaliencyEngine, SaliencyParams};
use dirt_detector::{DirtDetector, DirtParams};

#[test]
fn uniform_color_image_maps_to_all_zero_saliency() {
    let image = uniform_image(100, 75, [90, 140, 200]);
    let engine = SaliencyEngine::new(SaliencyParams::default());
    let map = engine.saliency_color(&image, None);
    assert_eq!((map.w, map.h), (100, 75));
    assert!(map.data.iter().all(|&v| v == 0.0));
}

#[test]
fn bright_square_round_trip_peaks_inside_the_square() {
    // 12x12 bright square centered in a 64x64 frame, single-channel path.
    let square = (26usize, 26usize, 12usize);
    let gray = bright_square_gray(64, square.0, square.1, square.2);
    let engine = SaliencyEngine::new(SaliencyParams::default());
    let map = engine.saliency_gray(&gray);

    let mut best = f32::NEG_INFINITY;
    let mut best_xy = (0usize, 0usize);
    for y in 0..map.h {
        for x in 0..map.w {
            let v = map.get(x, y);
            if v > best {
                best = v;
                best_xy = (x, y);
            }
        }
    }
    assert!(best > 0.0, "map must not be degenerate");
    let (x, y) = best_xy;
    assert!(
        (square.0..square.0 + square.2).contains(&x)
            && (square.1..square.1 + square.2).contains(&y),
        "saliency maximum at ({x},{y}) lies outside the square"
    );
}

#[test]
fn non_degenerate_map_is_normalized_to_unit_range() {
    let gray = bright_square_gray(64, 26, 26, 12);
    let engine = SaliencyEngine::new(SaliencyParams::default());
    let map = engine.saliency_gray(&gray);

    let (lo, hi) = map.min_max().unwrap();
    assert_eq!(lo, 0.0);
    assert!((hi - 1.0).abs() < 1e-5, "max is {hi}");
}

#[test]
fn border_margin_is_suppressed_on_every_side() {
    let gray = bright_square_gray(64, 26, 26, 12);
    let engine = SaliencyEngine::new(SaliencyParams::default());
    let map = engine.saliency_gray(&gray);

    let bx = map.w / 20;
    let by = map.h / 20;
    assert!(bx > 0 && by > 0);
    for y in 0..map.h {
        for x in 0..map.w {
            if x < bx || x >= map.w - bx || y < by || y >= map.h - by {
                assert_eq!(map.get(x, y), 0.0, "border pixel ({x},{y}) not zero");
            }
        }
    }
}

#[test]
fn analyze_image_matches_the_image_pipeline_map_shape() {
    let image = uniform_image(120, 90, [128, 128, 128]);
    let detector = DirtDetector::new(DirtParams::default());
    let map = detector.analyze_image(&image);
    assert_eq!((map.w, map.h), (120, 90));
}
