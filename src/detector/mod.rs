//! Dirt detector orchestrating the plane → image → saliency → regions
//! pipeline.
//!
//! Overview
//! - Fits the dominant floor plane of an organized RGB-D cloud by consensus
//!   sampling and keeps the inlier grid indices.
//! - Rasterizes the inlier subset back into a dense color image plus a
//!   membership mask, exploiting the cloud's row-major grid layout.
//! - Computes a spectral-residual saliency map over the floor image, fused
//!   across channels, masked well inside the plane boundary, normalized and
//!   border-trimmed.
//! - Thresholds the map and emits one minimum-area rotated rectangle per
//!   connected blob.
//!
//! Modules
//! - [`params`] – configuration grouped per stage.
//! - `pipeline` – the main [`DirtDetector`] implementation.
//!
//! Frames flow strictly forward; nothing survives a frame except the
//! parameters, and a frame with no detectable floor simply yields an empty
//! region list.

pub mod params;
mod pipeline;

pub use params::DirtParams;
pub use pipeline::DirtDetector;
