//! Organized colored point cloud delivered by the sensor layer.
//!
//! Samples are arranged in a fixed width × height grid mirroring the sensor's
//! raster layout, so a flat sample index maps back to an image pixel:
//! `row = index / width`, `column = index - row * width`. Samples without a
//! depth return carry no position but still carry a color.

use crate::error::{DetectError, Result};
use nalgebra::Point3;

#[derive(Clone, Debug)]
pub struct OrganizedPointCloud {
    width: usize,
    height: usize,
    positions: Vec<Option<Point3<f32>>>,
    colors: Vec<[u8; 3]>,
}

impl OrganizedPointCloud {
    /// Build a cloud from parallel position/color buffers in row-major order.
    pub fn new(
        width: usize,
        height: usize,
        positions: Vec<Option<Point3<f32>>>,
        colors: Vec<[u8; 3]>,
    ) -> Result<Self> {
        let n = width * height;
        if positions.len() != n || colors.len() != n {
            return Err(DetectError::DimensionMismatch(format!(
                "cloud buffers have {}/{} samples, expected {} for {}x{}",
                positions.len(),
                colors.len(),
                n,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            positions,
            colors,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of grid cells (valid or not).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn position(&self, index: usize) -> Option<Point3<f32>> {
        self.positions[index]
    }

    #[inline]
    pub fn color(&self, index: usize) -> [u8; 3] {
        self.colors[index]
    }

    /// Grid coordinates of a flat sample index. Floor division by width;
    /// anything else silently misplaces pixels during reconstruction.
    #[inline]
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        let row = index / self.width;
        (row, index - row * self.width)
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Iterator over samples that have a depth return.
    pub fn valid_points(&self) -> impl Iterator<Item = (usize, Point3<f32>)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|p| (i, p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_col_round_trips_flat_indices() {
        let w = 7;
        let h = 3;
        let cloud = OrganizedPointCloud::new(
            w,
            h,
            vec![None; w * h],
            vec![[0, 0, 0]; w * h],
        )
        .unwrap();
        for i in 0..w * h {
            let (r, c) = cloud.row_col(i);
            assert!(r < h && c < w);
            assert_eq!(cloud.index(r, c), i);
        }
    }

    #[test]
    fn mismatched_buffers_are_rejected() {
        let err = OrganizedPointCloud::new(4, 4, vec![None; 15], vec![[0, 0, 0]; 16]);
        assert!(err.is_err());
    }

    #[test]
    fn valid_points_skips_missing_returns() {
        let mut positions = vec![None; 6];
        positions[2] = Some(Point3::new(0.0, 0.0, 1.0));
        positions[5] = Some(Point3::new(0.1, 0.0, 1.0));
        let cloud = OrganizedPointCloud::new(3, 2, positions, vec![[9, 9, 9]; 6]).unwrap();
        let ids: Vec<usize> = cloud.valid_points().map(|(i, _)| i).collect();
        assert_eq!(ids, vec![2, 5]);
    }
}
