/// Read-only view over a 2D raster.
///
/// Implemented by the owned buffer types and by the borrowed per-channel view
/// of an RGB image, so the resize routines can consume either without copies.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Pixel value at (x, y). Callers guarantee in-bounds coordinates.
    fn get(&self, x: usize, y: usize) -> Self::Pixel;
}
