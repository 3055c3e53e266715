//! Spectral-residual transform of a single channel.
//!
//! The channel is assumed to already sit at the square working resolution
//! with intensities in `[0, 1]`. The residual between the log-magnitude
//! spectrum and its 3×3-mean-smoothed version captures the "unexpected"
//! frequency content; transformed back to the spatial domain it serves as a
//! per-channel saliency response.

use rustfft::num_complex::Complex;
use rustfft::{FftDirection, FftPlanner};

use super::filters::box_filter_3x3;
use crate::image::ImageF32;

// Magnitudes are clamped here before the logarithm so exactly-zero frequency
// bins stay finite.
const LOG_FLOOR: f32 = 1e-12;

/// Raw (unnormalized) saliency response of one channel at working resolution.
pub(super) fn spectral_residual(channel: &ImageF32) -> ImageF32 {
    let size = channel.w;
    debug_assert_eq!(channel.w, channel.h, "working image must be square");
    if size == 0 {
        return ImageF32::new(0, 0);
    }

    // A constant channel has no residual spectrum; its response is zero by
    // definition, which also keeps uniform frames on the degenerate path.
    if let Some((lo, hi)) = channel.min_max() {
        if hi - lo <= f32::EPSILON {
            return ImageF32::new(size, size);
        }
    }

    let mut spectrum: Vec<Complex<f32>> = channel
        .data
        .iter()
        .map(|&v| Complex::new(v, 0.0))
        .collect();
    fft2d(&mut spectrum, size, FftDirection::Forward);

    // Polar split.
    let magnitude: Vec<f32> = spectrum.iter().map(|c| c.norm()).collect();
    let phase: Vec<f32> = spectrum.iter().map(|c| c.arg()).collect();

    let log_mag = ImageF32::from_vec(
        size,
        size,
        magnitude.iter().map(|&m| m.max(LOG_FLOOR).ln()).collect(),
    );
    let smoothed = box_filter_3x3(&log_mag);

    // Residual back to linear magnitude, recombined with the original phase.
    for (i, c) in spectrum.iter_mut().enumerate() {
        let residual = log_mag.data[i] - smoothed.data[i];
        *c = Complex::from_polar(residual.exp(), phase[i]);
    }
    fft2d(&mut spectrum, size, FftDirection::Inverse);

    // Squared real component; the global scale is removed later by the
    // min/max normalization.
    ImageF32::from_vec(
        size,
        size,
        spectrum.iter().map(|c| c.re * c.re).collect(),
    )
}

/// In-place 2D transform via row-column decomposition on a square buffer.
fn fft2d(buffer: &mut [Complex<f32>], size: usize, direction: FftDirection) {
    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft(size, direction);
    fft.process(buffer); // all rows in one pass
    transpose_square(buffer, size);
    fft.process(buffer);
    transpose_square(buffer, size);
}

fn transpose_square(buffer: &mut [Complex<f32>], size: usize) {
    for y in 0..size {
        for x in (y + 1)..size {
            buffer.swap(y * size + x, x * size + y);
        }
    }
}
