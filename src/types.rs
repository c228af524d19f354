//! Result types returned by the analyzer.
use serde::Serialize;

/// Outcome of a placement analysis.
///
/// Coordinates are percentages of image width/height, so callers can place
/// the overlay without knowing the raster's pixel dimensions. A fallback
/// result uses the same coordinate contract; `confidence == 0` always means
/// "uninformed guess".
#[derive(Clone, Debug, Serialize)]
pub struct PlacementResult {
    /// Horizontal position in [0, 100].
    pub x: f32,
    /// Vertical position in [0, 100].
    pub y: f32,
    /// `1 − normalized density` of the chosen cell, clamped to [0, 1].
    pub confidence: f32,
    /// True when analysis did not run and the randomized fallback was used.
    pub fallback: bool,
    /// Density grid snapshot, present only when
    /// [`crate::PlacementOptions::include_density`] is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density_grid: Option<Vec<Vec<f32>>>,
    /// Wall-clock duration of the analysis call.
    pub latency_ms: f64,
}
