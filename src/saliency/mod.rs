//! Spectral-residual saliency over reconstructed floor images.
//!
//! Overview
//! - Each color channel is resampled to a fixed square working resolution
//!   (`2^scale`), pushed through the spectral-residual transform and fused by
//!   averaging.
//! - The fused map is smoothed twice with a small Gaussian, resampled back to
//!   the input resolution and restricted to the (dilated-then-eroded) plane
//!   mask, discarding responses near segmentation edges where reconstruction
//!   artifacts concentrate.
//! - An affine min/max normalization maps the result to `[0, 1]`; a uniform
//!   map is defined as all-zero rather than dividing by zero.
//! - Finally a border margin of `dim / border_divisor` is zeroed on every
//!   side: the periodic assumption of the transform manufactures saliency at
//!   image edges that is not real signal.

mod filters;
mod morph;
mod resize;
mod spectral;

pub use filters::gaussian_3x3;
pub use morph::{dilate, erode};
pub use resize::resize_bilinear;

use crate::image::{ImageF32, ImageRgb8, Mask};
use log::debug;

/// Knobs for the saliency engine.
#[derive(Clone, Debug)]
pub struct SaliencyParams {
    /// Working resolution exponent; the transform runs at `2^scale` square.
    pub scale: u32,
    /// Sequential Gaussian passes over the fused map. Two passes compound
    /// into stronger noise reduction than one.
    pub blur_passes: usize,
    /// Mask dilation iterations before the erosion.
    pub mask_dilate_iterations: usize,
    /// Mask erosion iterations; larger than the dilation on purpose, so the
    /// usable region shrinks well inside the plane boundary.
    pub mask_erode_iterations: usize,
    /// Border margin denominator: `width / border_divisor` columns and
    /// `height / border_divisor` rows are zeroed on each side.
    pub border_divisor: usize,
}

impl Default for SaliencyParams {
    fn default() -> Self {
        Self {
            scale: 6,
            blur_passes: 2,
            mask_dilate_iterations: 2,
            mask_erode_iterations: 25,
            border_divisor: 20,
        }
    }
}

/// Per-frame saliency computation; holds only read-only parameters.
#[derive(Clone, Debug)]
pub struct SaliencyEngine {
    params: SaliencyParams,
}

impl SaliencyEngine {
    pub fn new(params: SaliencyParams) -> Self {
        Self { params }
    }

    /// Side length of the square working image.
    pub fn working_size(&self) -> usize {
        1usize << self.params.scale
    }

    /// Saliency of a single-channel image with intensities in `[0, 1]`.
    pub fn saliency_gray(&self, gray: &ImageF32) -> ImageF32 {
        if gray.is_empty() {
            return ImageF32::new(gray.w, gray.h);
        }
        let size = self.working_size();
        let working = resize_bilinear(gray, size, size);
        let response = spectral::spectral_residual(&working);
        self.finalize(response, gray.w, gray.h, None)
    }

    /// Saliency of a color image, fused over the three channels. When a plane
    /// membership mask is supplied, responses outside the eroded mask are
    /// zeroed before normalization.
    pub fn saliency_color(&self, image: &ImageRgb8, mask: Option<&Mask>) -> ImageF32 {
        if image.is_empty() {
            return ImageF32::new(image.w, image.h);
        }
        let size = self.working_size();
        let mut fused = ImageF32::new(size, size);
        for channel in 0..3 {
            let mut working = resize_bilinear(&image.channel_view(channel), size, size);
            for v in &mut working.data {
                *v /= 255.0;
            }
            let response = spectral::spectral_residual(&working);
            for (acc, v) in fused.data.iter_mut().zip(&response.data) {
                *acc += v / 3.0;
            }
        }
        self.finalize(fused, image.w, image.h, mask)
    }

    fn finalize(
        &self,
        mut map: ImageF32,
        out_w: usize,
        out_h: usize,
        mask: Option<&Mask>,
    ) -> ImageF32 {
        for _ in 0..self.params.blur_passes {
            map = gaussian_3x3(&map);
        }
        let mut map = resize_bilinear(&map, out_w, out_h);

        if let Some(mask) = mask {
            let shrunk = erode(
                &dilate(mask, self.params.mask_dilate_iterations),
                self.params.mask_erode_iterations,
            );
            let kept = shrunk.count_nonzero();
            debug!("saliency mask: {kept} of {} pixels usable after erosion", mask.data.len());
            for (v, &m) in map.data.iter_mut().zip(&shrunk.data) {
                if m == 0 {
                    *v = 0.0;
                }
            }
        }

        normalize(&mut map);
        suppress_border(&mut map, self.params.border_divisor);
        map
    }
}

/// Affine rescale so the minimum maps to 0 and the maximum to 1. A uniform
/// map (max == min) becomes all-zero.
pub fn normalize(map: &mut ImageF32) {
    let Some((lo, hi)) = map.min_max() else {
        return;
    };
    let range = hi - lo;
    if range <= f32::EPSILON {
        map.data.fill(0.0);
        return;
    }
    for v in &mut map.data {
        *v = (*v - lo) / range;
    }
}

/// Zero a margin of `dim / divisor` pixels on every side.
pub fn suppress_border(map: &mut ImageF32, divisor: usize) {
    if divisor == 0 || map.is_empty() {
        return;
    }
    let bx = map.w / divisor;
    let by = map.h / divisor;
    if bx == 0 || by == 0 {
        return;
    }
    let (w, h) = (map.w, map.h);
    for y in 0..h {
        for x in 0..w {
            if x < bx || x >= w - bx || y < by || y >= h - by {
                map.set(x, y, 0.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_hits_exact_unit_range() {
        let mut map = ImageF32::from_vec(2, 2, vec![0.2, 0.9, 0.4, 0.7]);
        normalize(&mut map);
        let (lo, hi) = map.min_max().unwrap();
        assert_eq!(lo, 0.0);
        assert!((hi - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_defines_uniform_map_as_zero() {
        let mut map = ImageF32::from_vec(3, 1, vec![0.42; 3]);
        normalize(&mut map);
        assert!(map.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn border_margin_is_exactly_zero() {
        let mut map = ImageF32::new(40, 40);
        map.data.fill(1.0);
        suppress_border(&mut map, 20);
        for y in 0..40 {
            for x in 0..40 {
                let in_margin = x < 2 || x >= 38 || y < 2 || y >= 38;
                assert_eq!(map.get(x, y) == 0.0, in_margin, "at ({x},{y})");
            }
        }
    }

    #[test]
    fn tiny_images_skip_border_suppression() {
        let mut map = ImageF32::new(10, 10);
        map.data.fill(1.0);
        suppress_border(&mut map, 20);
        assert!(map.data.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn uniform_color_image_yields_all_zero_map() {
        let mut image = ImageRgb8::new(80, 60);
        image.data.fill(128);
        let engine = SaliencyEngine::new(SaliencyParams::default());
        let map = engine.saliency_color(&image, None);
        assert_eq!(map.w, 80);
        assert_eq!(map.h, 60);
        assert!(map.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn empty_eroded_mask_short_circuits_to_zero() {
        // 32x32 mask fully disappears after 25 erosions of its interior block.
        let mut image = ImageRgb8::new(32, 32);
        for i in 0..image.data.len() {
            image.data[i] = (i % 251) as u8;
        }
        let mut mask = Mask::new(32, 32);
        for y in 8..24 {
            for x in 8..24 {
                mask.set(x, y, 1);
            }
        }
        let engine = SaliencyEngine::new(SaliencyParams::default());
        let map = engine.saliency_color(&image, Some(&mask));
        assert!(map.data.iter().all(|&v| v == 0.0));
    }
}
