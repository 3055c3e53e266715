//! Small fixed-kernel filters used by the spectral pipeline.
//!
//! Borders are handled by clamping sample coordinates (replicate).

use crate::image::ImageF32;

/// 3×3 uniform mean filter, used to smooth the log-magnitude spectrum.
pub fn box_filter_3x3(src: &ImageF32) -> ImageF32 {
    convolve_3x3(src, &[[1.0 / 9.0; 3]; 3])
}

/// 3×3 Gaussian, taps `[1, 2, 1] / 4` in each direction.
pub fn gaussian_3x3(src: &ImageF32) -> ImageF32 {
    convolve_3x3(
        src,
        &[
            [0.0625, 0.125, 0.0625],
            [0.125, 0.25, 0.125],
            [0.0625, 0.125, 0.0625],
        ],
    )
}

fn convolve_3x3(src: &ImageF32, kernel: &[[f32; 3]; 3]) -> ImageF32 {
    let w = src.w;
    let h = src.h;
    let mut dst = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return dst;
    }
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for (ky, row) in kernel.iter().enumerate() {
                let sy = clamp_coord(y as isize + ky as isize - 1, h);
                for (kx, &k) in row.iter().enumerate() {
                    let sx = clamp_coord(x as isize + kx as isize - 1, w);
                    acc += k * src.get(sx, sy);
                }
            }
            dst.set(x, y, acc);
        }
    }
    dst
}

#[inline]
fn clamp_coord(v: isize, len: usize) -> usize {
    v.clamp(0, len as isize - 1) as usize
}
