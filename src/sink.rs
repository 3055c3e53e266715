//! Optional visualization sink.
//!
//! The detector publishes intermediate artifacts through this capability when
//! one is attached; producing them never alters the numeric results, and the
//! pipeline is fully functional with no sink at all.

use crate::image::{ImageF32, ImageRgb8};
use crate::types::DirtRegion;

/// Intermediate artifact offered to an external rendering surface. Borrowed
/// views only; the sink must copy anything it wants to keep.
#[derive(Debug)]
pub enum Artifact<'a> {
    /// Full-cloud color reconstruction (debug view of the raw frame).
    FullImage(&'a ImageRgb8),
    /// Floor-restricted reconstruction.
    FloorImage(&'a ImageRgb8),
    /// Normalized saliency map.
    SaliencyMap(&'a ImageF32),
    /// Final regions over the frame they were extracted from.
    Regions {
        width: usize,
        height: usize,
        regions: &'a [DirtRegion],
    },
}

/// Rendering surface the detector may hand artifacts to.
pub trait ArtifactSink {
    fn publish(&mut self, artifact: Artifact<'_>);
}
