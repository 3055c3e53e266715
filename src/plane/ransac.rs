//! Consensus-sampling plane fit over indexed 3D points.
//!
//! Minimal three-point hypotheses are scored by perpendicular-distance support;
//! the winning model is refit by least squares over its inliers and the inlier
//! set is re-evaluated against the refined coefficients.

use nalgebra::{Matrix3, Point3, SymmetricEigen, Vector3};
use rand::seq::SliceRandom;

use super::PlaneParams;

/// Plane coefficients `[a, b, c, d]` with unit normal: `a·x + b·y + c·z + d = 0`.
pub(super) fn ransac_plane(
    points: &[(usize, Point3<f32>)],
    params: &PlaneParams,
) -> Option<([f32; 4], Vec<usize>)> {
    let n = points.len();
    if n < 3 {
        return None;
    }

    let mut rng = rand::thread_rng();
    let mut order: Vec<usize> = (0..n).collect();

    let mut best_coeffs: Option<[f32; 4]> = None;
    let mut best_support = 0usize;

    for _ in 0..params.max_iterations {
        order.shuffle(&mut rng);
        let coeffs = match plane_from_three(
            &points[order[0]].1,
            &points[order[1]].1,
            &points[order[2]].1,
        ) {
            Some(c) => c,
            None => continue, // collinear sample
        };

        let support = points
            .iter()
            .filter(|(_, p)| point_distance(&coeffs, p) < params.distance_threshold)
            .count();

        if support > best_support {
            best_support = support;
            best_coeffs = Some(coeffs);
        }
    }

    let coarse = best_coeffs?;
    if best_support == 0 {
        return None;
    }

    // Least-squares refit over the coarse support, then final inlier selection
    // against the refined coefficients.
    let support_points: Vec<Point3<f32>> = points
        .iter()
        .filter(|(_, p)| point_distance(&coarse, p) < params.distance_threshold)
        .map(|(_, p)| *p)
        .collect();
    let refined = least_squares_plane(&support_points).unwrap_or(coarse);

    let inliers: Vec<usize> = points
        .iter()
        .filter(|(_, p)| point_distance(&refined, p) < params.distance_threshold)
        .map(|(idx, _)| *idx)
        .collect();

    if inliers.is_empty() {
        return None;
    }
    Some((refined, inliers))
}

#[inline]
pub(super) fn point_distance(coeffs: &[f32; 4], p: &Point3<f32>) -> f32 {
    (coeffs[0] * p.x + coeffs[1] * p.y + coeffs[2] * p.z + coeffs[3]).abs()
}

fn plane_from_three(a: &Point3<f32>, b: &Point3<f32>, c: &Point3<f32>) -> Option<[f32; 4]> {
    let normal = (b - a).cross(&(c - a));
    let norm = normal.norm();
    if !norm.is_finite() || norm < 1e-9 {
        return None;
    }
    let n = normal / norm;
    let d = -n.dot(&a.coords);
    Some([n.x, n.y, n.z, d])
}

/// Orthogonal-regression plane: centroid plus the covariance eigenvector of
/// the smallest eigenvalue.
fn least_squares_plane(points: &[Point3<f32>]) -> Option<[f32; 4]> {
    if points.len() < 3 {
        return None;
    }
    let count = points.len() as f32;
    let mut centroid = Vector3::zeros();
    for p in points {
        centroid += p.coords;
    }
    centroid /= count;

    let mut cov = Matrix3::zeros();
    for p in points {
        let d = p.coords - centroid;
        cov += d * d.transpose();
    }
    cov /= count;

    let eig = SymmetricEigen::new(cov);
    let mut min_idx = 0;
    for i in 1..3 {
        if eig.eigenvalues[i] < eig.eigenvalues[min_idx] {
            min_idx = i;
        }
    }
    let normal = eig.eigenvectors.column(min_idx);
    let norm = normal.norm();
    if !norm.is_finite() || norm < 1e-9 {
        return None;
    }
    let n = normal / norm;
    let d = -n.dot(&centroid);
    Some([n.x, n.y, n.z, d])
}
