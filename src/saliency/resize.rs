//! Bilinear resampling between the sensor resolution and the fixed square
//! working resolution of the spectral transform.

use crate::image::{ImageF32, ImageView};

/// Resample `src` to `dst_w × dst_h` with bilinear interpolation, clamping
/// sample coordinates at the borders. Zero-sized inputs or outputs yield a
/// zero-filled buffer.
pub fn resize_bilinear<V>(src: &V, dst_w: usize, dst_h: usize) -> ImageF32
where
    V: ImageView<Pixel = f32>,
{
    let sw = src.width();
    let sh = src.height();
    let mut dst = ImageF32::new(dst_w, dst_h);
    if sw == 0 || sh == 0 || dst_w == 0 || dst_h == 0 {
        return dst;
    }

    let scale_x = sw as f32 / dst_w as f32;
    let scale_y = sh as f32 / dst_h as f32;

    for y in 0..dst_h {
        let sy = ((y as f32 + 0.5) * scale_y - 0.5).max(0.0);
        let y0 = (sy as usize).min(sh - 1);
        let y1 = (y0 + 1).min(sh - 1);
        let fy = sy - y0 as f32;
        for x in 0..dst_w {
            let sx = ((x as f32 + 0.5) * scale_x - 0.5).max(0.0);
            let x0 = (sx as usize).min(sw - 1);
            let x1 = (x0 + 1).min(sw - 1);
            let fx = sx - x0 as f32;

            let top = src.get(x0, y0) * (1.0 - fx) + src.get(x1, y0) * fx;
            let bottom = src.get(x0, y1) * (1.0 - fx) + src.get(x1, y1) * fx;
            dst.set(x, y, top * (1.0 - fy) + bottom * fy);
        }
    }
    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_image_stays_constant() {
        let mut src = ImageF32::new(17, 11);
        src.data.fill(0.375);
        let dst = resize_bilinear(&src, 64, 64);
        assert!(dst.data.iter().all(|&v| (v - 0.375).abs() < 1e-6));
    }

    #[test]
    fn identity_resize_is_exact() {
        let mut src = ImageF32::new(8, 8);
        for (i, v) in src.data.iter_mut().enumerate() {
            *v = i as f32;
        }
        let dst = resize_bilinear(&src, 8, 8);
        assert_eq!(src.data, dst.data);
    }

    #[test]
    fn zero_sized_source_yields_zeros() {
        let src = ImageF32::new(0, 0);
        let dst = resize_bilinear(&src, 4, 4);
        assert!(dst.data.iter().all(|&v| v == 0.0));
    }
}
