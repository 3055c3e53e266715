//! Thresholding and blob extraction over the normalized saliency map.

mod contours;
mod rotrect;

pub use contours::{contour_area, find_external_contours, Contour};
pub use rotrect::{min_area_rect, RotatedRect};

use crate::image::{ImageF32, Mask};
use crate::types::DirtRegion;
use log::debug;
use serde::{Deserialize, Serialize};

/// Knobs for region extraction.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegionParams {
    /// Saliency binarization threshold; a pixel is dirt when its value is
    /// greater than or equal to this.
    pub threshold: f32,
    /// Minimum contour area in pixels; `0.0` keeps everything, including
    /// single-pixel blobs.
    pub min_area: f64,
}

impl Default for RegionParams {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            min_area: 0.0,
        }
    }
}

/// Binarize the map and emit one region per external contour. Deterministic
/// for identical inputs: contours come out in scan order.
pub fn extract_regions(map: &ImageF32, params: &RegionParams) -> Vec<DirtRegion> {
    if map.is_empty() {
        return Vec::new();
    }

    let mut binary = Mask::new(map.w, map.h);
    for (b, &v) in binary.data.iter_mut().zip(&map.data) {
        *b = (v >= params.threshold) as u8;
    }

    let contours = find_external_contours(&binary);
    let mut regions = Vec::with_capacity(contours.len());
    for contour in &contours {
        if params.min_area > 0.0 && contour_area(contour) < params.min_area {
            continue;
        }
        if let Some(rect) = min_area_rect(&contour.points) {
            regions.push(DirtRegion {
                center: rect.center,
                size: rect.size,
                angle_deg: rect.angle_deg,
            });
        }
    }
    debug!(
        "extract_regions: {} contours, {} regions emitted",
        contours.len(),
        regions.len()
    );
    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_with_block(w: usize, h: usize, x0: usize, y0: usize, bw: usize, bh: usize) -> ImageF32 {
        let mut m = ImageF32::new(w, h);
        for y in y0..y0 + bh {
            for x in x0..x0 + bw {
                m.set(x, y, 0.9);
            }
        }
        m
    }

    #[test]
    fn single_blob_yields_single_region_at_its_center() {
        let map = map_with_block(64, 48, 20, 10, 10, 8);
        let regions = extract_regions(&map, &RegionParams::default());
        assert_eq!(regions.len(), 1);
        let r = &regions[0];
        assert!((r.center[0] - 24.5).abs() < 1e-3);
        assert!((r.center[1] - 13.5).abs() < 1e-3);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut map = ImageF32::new(8, 8);
        map.set(4, 4, 0.5);
        let regions = extract_regions(&map, &RegionParams::default());
        assert_eq!(regions.len(), 1);
    }

    #[test]
    fn below_threshold_map_yields_nothing() {
        let mut map = ImageF32::new(16, 16);
        map.data.fill(0.49);
        assert!(extract_regions(&map, &RegionParams::default()).is_empty());
    }

    #[test]
    fn min_area_filter_drops_single_pixels_when_enabled() {
        let mut map = map_with_block(32, 32, 4, 4, 6, 6);
        map.set(20, 20, 1.0); // isolated pixel
        let keep_all = extract_regions(&map, &RegionParams::default());
        assert_eq!(keep_all.len(), 2);
        let filtered = extract_regions(
            &map,
            &RegionParams {
                min_area: 4.0,
                ..Default::default()
            },
        );
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn blob_with_hole_yields_one_region() {
        let mut map = map_with_block(32, 32, 8, 8, 10, 10);
        for y in 12..14 {
            for x in 12..14 {
                map.set(x, y, 0.0);
            }
        }
        let regions = extract_regions(&map, &RegionParams::default());
        assert_eq!(regions.len(), 1);
        let r = &regions[0];
        assert!((r.center[0] - 12.5).abs() < 1e-3);
        assert!((r.center[1] - 12.5).abs() < 1e-3);
    }

    #[test]
    fn diagonal_blob_area_stays_usable_for_the_min_area_filter() {
        let mut map = ImageF32::new(64, 64);
        for i in 20..26 {
            map.set(i, i, 1.0);
        }
        // A thin diagonal has near-zero enclosed area; a sound trace must not
        // inflate it past a small cutoff.
        let filtered = extract_regions(
            &map,
            &RegionParams {
                min_area: 4.0,
                ..Default::default()
            },
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let map = map_with_block(40, 40, 8, 8, 5, 9);
        let params = RegionParams::default();
        let a = extract_regions(&map, &params);
        let b = extract_regions(&map, &params);
        assert_eq!(a.len(), b.len());
        for (ra, rb) in a.iter().zip(&b) {
            assert_eq!(ra.center, rb.center);
            assert_eq!(ra.size, rb.size);
            assert_eq!(ra.angle_deg, rb.angle_deg);
        }
    }
}
