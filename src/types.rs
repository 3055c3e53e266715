use serde::Serialize;

/// One candidate dirt blob: the minimum-area rotated rectangle around a
/// contiguous group of above-threshold saliency pixels. Regions carry no
/// identity and are recomputed fresh each frame.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirtRegion {
    /// Rectangle center in image pixel coordinates.
    pub center: [f32; 2],
    /// Extent along the rectangle axes, `[width, height]`.
    pub size: [f32; 2],
    /// Orientation of the width axis, degrees, counter-clockwise from +x.
    pub angle_deg: f32,
}

/// Per-frame detection outcome.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// Whether a floor plane was found. Always true in the direct image mode,
    /// where the whole frame is treated as floor.
    pub floor_found: bool,
    pub regions: Vec<DirtRegion>,
    pub latency_ms: f64,
}
