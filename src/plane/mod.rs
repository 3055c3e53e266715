//! Dominant-plane extraction from an organized point cloud.
//!
//! A RANSAC fit over the valid samples selects the best-supported plane; the
//! returned inlier indices address the cloud's flat grid layout so downstream
//! stages can rasterize the floor subset back into an image.

mod ransac;

use crate::cloud::OrganizedPointCloud;
use log::debug;

/// Knobs for the consensus plane fit.
#[derive(Clone, Debug)]
pub struct PlaneParams {
    /// Maximum perpendicular distance for a point to support a model, in the
    /// cloud's length units.
    pub distance_threshold: f32,
    /// Number of sampling rounds.
    pub max_iterations: usize,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            distance_threshold: 0.02,
            max_iterations: 100,
        }
    }
}

/// Fitted plane plus the cloud indices supporting it.
#[derive(Clone, Debug)]
pub struct PlaneModel {
    /// `[a, b, c, d]` with unit normal: `a·x + b·y + c·z + d = 0`.
    pub coefficients: [f32; 4],
    /// Flat indices into the organized cloud, subset of the valid samples.
    pub inliers: Vec<usize>,
}

/// Fit the dominant plane. `None` means no floor in this frame, which is a
/// valid terminal outcome rather than an error.
pub fn extract_plane(cloud: &OrganizedPointCloud, params: &PlaneParams) -> Option<PlaneModel> {
    let points: Vec<_> = cloud.valid_points().collect();
    let (coefficients, inliers) = ransac::ransac_plane(&points, params)?;
    debug!(
        "extract_plane: {} inliers of {} valid points, coefficients {:?}",
        inliers.len(),
        points.len(),
        coefficients
    );
    Some(PlaneModel {
        coefficients,
        inliers,
    })
}
