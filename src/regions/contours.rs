//! External contour extraction from a binary mask.
//!
//! Moore boundary tracing with 8-connectivity. Every connected foreground
//! group yields exactly one outer contour: the group is flood-filled from its
//! first pixel in scan order, which necessarily lies on the outer boundary,
//! and traced once from there. Inner (hole) boundaries are never emitted.
//! Single-pixel groups yield a one-point contour rather than being dropped,
//! since the postprocessor emits regions regardless of size.

use crate::image::Mask;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    pub points: Vec<(i32, i32)>,
}

const DIRS_8: [(i32, i32); 8] = [
    (1, 0),   // E
    (1, 1),   // SE
    (0, 1),   // S
    (-1, 1),  // SW
    (-1, 0),  // W
    (-1, -1), // NW
    (0, -1),  // N
    (1, -1),  // NE
];

#[inline]
fn in_bounds(x: i32, y: i32, w: i32, h: i32) -> bool {
    x >= 0 && y >= 0 && x < w && y < h
}

#[inline]
fn is_foreground(data: &[u8], w: i32, h: i32, x: i32, y: i32) -> bool {
    in_bounds(x, y, w, h) && data[(y * w + x) as usize] > 0
}

/// First foreground neighbor of `from`, scanning clockwise starting just past
/// the backtrack direction.
fn next_clockwise(
    data: &[u8],
    w: i32,
    h: i32,
    from: (i32, i32),
    backtrack: usize,
) -> Option<usize> {
    for step in 1..=8 {
        let k = (backtrack + step) % 8;
        if is_foreground(data, w, h, from.0 + DIRS_8[k].0, from.1 + DIRS_8[k].1) {
            return Some(k);
        }
    }
    None
}

fn trace_boundary(data: &[u8], w: i32, h: i32, sx: i32, sy: i32) -> Vec<(i32, i32)> {
    let start = (sx, sy);
    // Scan-order seeds have background to the west, so the initial backtrack
    // direction is west.
    let Some(first_dir) = next_clockwise(data, w, h, start, 4) else {
        return vec![start]; // isolated pixel
    };

    let mut contour = Vec::new();
    let mut pixel = start;
    let mut dir = first_dir;
    let max_steps = (w as usize * h as usize).saturating_mul(8).max(8);

    for _ in 0..max_steps {
        contour.push(pixel);
        pixel = (pixel.0 + DIRS_8[dir].0, pixel.1 + DIRS_8[dir].1);
        let backtrack = (dir + 4) % 8;
        let Some(next_dir) = next_clockwise(data, w, h, pixel, backtrack) else {
            break;
        };
        dir = next_dir;
        // The cycle is closed once the start pixel is left along the same
        // edge as the very first move.
        if pixel == start && dir == first_dir {
            break;
        }
    }
    contour
}

/// Mark every pixel 8-connected to `seed` as labeled.
fn fill_component(
    data: &[u8],
    w: i32,
    h: i32,
    seed: (i32, i32),
    labeled: &mut [bool],
    stack: &mut Vec<(i32, i32)>,
) {
    stack.clear();
    stack.push(seed);
    labeled[(seed.1 * w + seed.0) as usize] = true;
    while let Some((x, y)) = stack.pop() {
        for (dx, dy) in DIRS_8 {
            let nx = x + dx;
            let ny = y + dy;
            if is_foreground(data, w, h, nx, ny) {
                let idx = (ny * w + nx) as usize;
                if !labeled[idx] {
                    labeled[idx] = true;
                    stack.push((nx, ny));
                }
            }
        }
    }
}

/// Outer boundaries of all connected foreground groups, in scan order of
/// their topmost-leftmost pixel.
pub fn find_external_contours(mask: &Mask) -> Vec<Contour> {
    let w = mask.w as i32;
    let h = mask.h as i32;
    let data = &mask.data;
    let mut labeled = vec![false; data.len()];
    let mut stack = Vec::new();
    let mut contours = Vec::new();

    for y in 0..h {
        for x in 0..w {
            let idx = (y * w + x) as usize;
            if labeled[idx] || data[idx] == 0 {
                continue;
            }
            let points = trace_boundary(data, w, h, x, y);
            fill_component(data, w, h, (x, y), &mut labeled, &mut stack);
            contours.push(Contour { points });
        }
    }

    contours
}

/// Polygon area via the shoelace formula; zero for fewer than three points.
pub fn contour_area(contour: &Contour) -> f64 {
    let n = contour.points.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0f64;
    for i in 0..n {
        let (x0, y0) = contour.points[i];
        let (x1, y1) = contour.points[(i + 1) % n];
        area += x0 as f64 * y1 as f64 - x1 as f64 * y0 as f64;
    }
    area.abs() * 0.5
}
