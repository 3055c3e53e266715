//! Binary morphology on membership masks.
//!
//! A 3×3 rectangular structuring element, applied iteratively. Out-of-bounds
//! neighbors do not constrain the result, so erosion does not eat the mask
//! from the image border inwards.

use crate::image::Mask;

const KERNEL_3X3: [(i32, i32); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub fn dilate(mask: &Mask, iterations: usize) -> Mask {
    apply(mask, iterations, |acc, v| acc.max(v))
}

pub fn erode(mask: &Mask, iterations: usize) -> Mask {
    apply(mask, iterations, |acc, v| acc.min(v))
}

fn apply(mask: &Mask, iterations: usize, fold: impl Fn(u8, u8) -> u8 + Copy) -> Mask {
    let mut current = mask.clone();
    if mask.is_empty() {
        return current;
    }
    let w = mask.w as i32;
    let h = mask.h as i32;
    let mut next = Mask::new(mask.w, mask.h);
    for _ in 0..iterations {
        for y in 0..h {
            for x in 0..w {
                let mut acc = current.get(x as usize, y as usize);
                for (kx, ky) in KERNEL_3X3 {
                    let px = x + kx;
                    let py = y + ky;
                    if px >= 0 && px < w && py >= 0 && py < h {
                        acc = fold(acc, current.get(px as usize, py as usize));
                    }
                }
                next.set(x as usize, y as usize, acc);
            }
        }
        std::mem::swap(&mut current, &mut next);
    }
    current
}
