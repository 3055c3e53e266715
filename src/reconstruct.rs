//! Rasterization of cloud samples back into dense 2D images.
//!
//! The cloud's organized layout makes this a direct index-to-pixel copy; the
//! floor-restricted variant additionally produces the membership mask consumed
//! by the saliency engine.

use crate::cloud::OrganizedPointCloud;
use crate::image::{ImageRgb8, Mask};

/// Copy every grid cell's color into the matching raster pixel. Samples
/// without a depth return keep their color too; this variant feeds debug
/// display, not the detection path.
pub fn reconstruct_full(cloud: &OrganizedPointCloud) -> ImageRgb8 {
    let mut image = ImageRgb8::new(cloud.width(), cloud.height());
    for index in 0..cloud.len() {
        let (row, col) = cloud.row_col(index);
        image.set(col, row, cloud.color(index));
    }
    image
}

/// Rasterize only the plane inliers; everything else stays black with a zero
/// mask bit.
pub fn reconstruct_floor(
    cloud: &OrganizedPointCloud,
    inliers: &[usize],
) -> (ImageRgb8, Mask) {
    let mut image = ImageRgb8::new(cloud.width(), cloud.height());
    let mut mask = Mask::new(cloud.width(), cloud.height());
    for &index in inliers {
        let (row, col) = cloud.row_col(index);
        image.set(col, row, cloud.color(index));
        mask.set(col, row, 1);
    }
    (image, mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn checker_cloud(w: usize, h: usize) -> OrganizedPointCloud {
        let mut colors = Vec::with_capacity(w * h);
        let mut positions = Vec::with_capacity(w * h);
        for i in 0..w * h {
            let v = if i % 2 == 0 { 200 } else { 40 };
            colors.push([v, v / 2, i as u8]);
            positions.push(Some(Point3::new(0.0, 0.0, 1.0)));
        }
        OrganizedPointCloud::new(w, h, positions, colors).unwrap()
    }

    #[test]
    fn full_reconstruction_copies_every_cell() {
        let cloud = checker_cloud(9, 4);
        let image = reconstruct_full(&cloud);
        for i in 0..cloud.len() {
            let (r, c) = cloud.row_col(i);
            assert_eq!(image.get(c, r), cloud.color(i));
        }
    }

    #[test]
    fn floor_reconstruction_matches_inlier_set_exactly() {
        let cloud = checker_cloud(10, 6);
        let inliers = vec![0, 9, 17, 33, 59];
        let (image, mask) = reconstruct_floor(&cloud, &inliers);
        for i in 0..cloud.len() {
            let (r, c) = cloud.row_col(i);
            if inliers.contains(&i) {
                assert_eq!(mask.get(c, r), 1);
                assert_eq!(image.get(c, r), cloud.color(i));
            } else {
                assert_eq!(mask.get(c, r), 0);
                assert_eq!(image.get(c, r), [0, 0, 0]);
            }
        }
    }

    #[test]
    fn last_index_lands_on_bottom_right_pixel() {
        let cloud = checker_cloud(5, 3);
        let (_, mask) = reconstruct_floor(&cloud, &[14]);
        assert_eq!(mask.get(4, 2), 1);
        assert_eq!(mask.count_nonzero(), 1);
    }
}
