//! Minimum-area rotated rectangle around a point set.
//!
//! Convex hull (monotonic chain) followed by rotating calipers: the minimum
//! rectangle has one side collinear with a hull edge, so scanning the hull
//! edges is exhaustive.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatedRect {
    /// Rectangle center in image coordinates.
    pub center: [f32; 2],
    /// Extent along the rectangle axes, `[width, height]`.
    pub size: [f32; 2],
    /// Orientation of the width axis, degrees, counter-clockwise from +x.
    pub angle_deg: f32,
}

fn cross(o: (i32, i32), a: (i32, i32), b: (i32, i32)) -> i64 {
    (a.0 - o.0) as i64 * (b.1 - o.1) as i64 - (a.1 - o.1) as i64 * (b.0 - o.0) as i64
}

/// Monotonic chain convex hull; collinear points are dropped.
fn convex_hull(points: &[(i32, i32)]) -> Vec<(i32, i32)> {
    let mut pts: Vec<(i32, i32)> = points.to_vec();
    pts.sort_unstable();
    pts.dedup();
    if pts.len() <= 2 {
        return pts;
    }

    let mut lower = Vec::new();
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper = Vec::new();
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0 {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Minimum-area enclosing rotated rectangle. Degenerate inputs collapse
/// gracefully: one point gives a zero-size rect at that point, collinear
/// points a zero-height rect along the segment.
pub fn min_area_rect(points: &[(i32, i32)]) -> Option<RotatedRect> {
    if points.is_empty() {
        return None;
    }
    let hull = convex_hull(points);

    if hull.len() == 1 {
        let (x, y) = hull[0];
        return Some(RotatedRect {
            center: [x as f32, y as f32],
            size: [0.0, 0.0],
            angle_deg: 0.0,
        });
    }
    if hull.len() == 2 {
        return Some(segment_rect(hull[0], hull[1]));
    }

    let mut best: Option<RotatedRect> = None;
    let mut best_area = f32::INFINITY;
    let n = hull.len();
    for i in 0..n {
        let (x0, y0) = hull[i];
        let (x1, y1) = hull[(i + 1) % n];
        let ex = (x1 - x0) as f32;
        let ey = (y1 - y0) as f32;
        let len = (ex * ex + ey * ey).sqrt();
        if len < 1e-6 {
            continue;
        }
        let ux = ex / len;
        let uy = ey / len;
        // Axis projections of the whole hull onto the edge frame.
        let (mut umin, mut umax) = (f32::INFINITY, f32::NEG_INFINITY);
        let (mut vmin, mut vmax) = (f32::INFINITY, f32::NEG_INFINITY);
        for &(px, py) in &hull {
            let u = px as f32 * ux + py as f32 * uy;
            let v = -(px as f32) * uy + py as f32 * ux;
            umin = umin.min(u);
            umax = umax.max(u);
            vmin = vmin.min(v);
            vmax = vmax.max(v);
        }
        let w = umax - umin;
        let h = vmax - vmin;
        let area = w * h;
        if area < best_area {
            best_area = area;
            let uc = 0.5 * (umin + umax);
            let vc = 0.5 * (vmin + vmax);
            best = Some(RotatedRect {
                center: [uc * ux - vc * uy, uc * uy + vc * ux],
                size: [w, h],
                angle_deg: uy.atan2(ux).to_degrees(),
            });
        }
    }
    best
}

fn segment_rect(a: (i32, i32), b: (i32, i32)) -> RotatedRect {
    let ex = (b.0 - a.0) as f32;
    let ey = (b.1 - a.1) as f32;
    RotatedRect {
        center: [
            0.5 * (a.0 + b.0) as f32,
            0.5 * (a.1 + b.1) as f32,
        ],
        size: [(ex * ex + ey * ey).sqrt(), 0.0],
        angle_deg: ey.atan2(ex).to_degrees(),
    }
}
