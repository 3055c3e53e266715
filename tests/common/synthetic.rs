//! Synthetic frame builders shared by the integration tests.

use dirt_detector::cloud::OrganizedPointCloud;
use dirt_detector::image::{ImageF32, ImageRgb8};
use nalgebra::Point3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Organized cloud whose samples all lie exactly on the plane `z = depth`,
/// uniformly colored.
pub fn flat_floor_cloud(width: usize, height: usize, depth: f32, color: [u8; 3]) -> OrganizedPointCloud {
    let mut positions = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            positions.push(Some(Point3::new(
                col as f32 * 0.01,
                row as f32 * 0.01,
                depth,
            )));
        }
    }
    OrganizedPointCloud::new(width, height, positions, vec![color; width * height])
        .expect("buffer sizes match")
}

/// Cloud where `off_fraction` of the samples are displaced off the `z = depth`
/// plane by at least `min_offset`. Returns the cloud and the indices of the
/// on-plane subset. Deterministic for a given seed.
pub fn perturbed_floor_cloud(
    width: usize,
    height: usize,
    depth: f32,
    off_fraction: f64,
    min_offset: f32,
    seed: u64,
) -> (OrganizedPointCloud, Vec<usize>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = Vec::with_capacity(width * height);
    let mut on_plane = Vec::new();
    for row in 0..height {
        for col in 0..width {
            let index = row * width + col;
            let x = col as f32 * 0.01;
            let y = row as f32 * 0.01;
            if rng.gen_bool(off_fraction) {
                let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                let offset = sign * (min_offset + rng.gen_range(0.0..0.2f32));
                positions.push(Some(Point3::new(x, y, depth + offset)));
            } else {
                positions.push(Some(Point3::new(x, y, depth)));
                on_plane.push(index);
            }
        }
    }
    let cloud = OrganizedPointCloud::new(
        width,
        height,
        positions,
        vec![[128, 128, 128]; width * height],
    )
    .expect("buffer sizes match");
    (cloud, on_plane)
}

/// Uniform color image.
pub fn uniform_image(width: usize, height: usize, color: [u8; 3]) -> ImageRgb8 {
    let mut image = ImageRgb8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            image.set(x, y, color);
        }
    }
    image
}

/// Single-channel image with a bright square (value 1.0) on a dark
/// background (value 0.0).
pub fn bright_square_gray(
    size: usize,
    square_x: usize,
    square_y: usize,
    square_side: usize,
) -> ImageF32 {
    let mut gray = ImageF32::new(size, size);
    for y in square_y..square_y + square_side {
        for x in square_x..square_x + square_side {
            gray.set(x, y, 1.0);
        }
    }
    gray
}
