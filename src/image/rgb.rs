//! Owned interleaved RGB image plus a borrowed per-channel float view.

use super::traits::ImageView;
use crate::error::{DetectError, Result};

#[derive(Clone, Debug)]
pub struct ImageRgb8 {
    pub w: usize,
    pub h: usize,
    /// Interleaved RGB storage in row-major order, `3 * w * h` bytes
    pub data: Vec<u8>,
}

impl ImageRgb8 {
    /// Construct a black image of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0u8; 3 * w * h],
        }
    }

    /// Wrap an interleaved RGB buffer.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != 3 * w * h {
            return Err(DetectError::DimensionMismatch(format!(
                "rgb buffer has {} bytes, expected {} for {}x{}",
                data.len(),
                3 * w * h,
                w,
                h
            )));
        }
        Ok(Self { w, h, data })
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = 3 * (y * self.w + x);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let i = 3 * (y * self.w + x);
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    /// Borrowed float view over one channel (0 = R, 1 = G, 2 = B), values
    /// in `0.0..=255.0`.
    pub fn channel_view(&self, channel: usize) -> ChannelView<'_> {
        assert!(channel < 3, "rgb image has 3 channels");
        ChannelView {
            image: self,
            channel,
        }
    }
}

/// Zero-copy single-channel view used to feed the resampler.
#[derive(Clone, Copy, Debug)]
pub struct ChannelView<'a> {
    image: &'a ImageRgb8,
    channel: usize,
}

impl ImageView for ChannelView<'_> {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.image.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.image.h
    }
    #[inline]
    fn get(&self, x: usize, y: usize) -> f32 {
        self.image.data[3 * (y * self.image.w + x) + self.channel] as f32
    }
}
