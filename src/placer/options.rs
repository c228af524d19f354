//! Caller-facing analyzer configuration.
//!
//! Defaults favor a lower-center placement with strong busy-region
//! avoidance. The candidate-pool size, center bias, and roulette epsilon are
//! internal constants of [`super::selector`] and [`super::sampling`], not
//! knobs.
use serde::Deserialize;

/// Options controlling a placement analysis.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PlacementOptions {
    /// Weight on avoiding dense regions vs. honoring the preferred anchor,
    /// in [0, 1]. 0 is pure anchor-seeking, 1 pure density-avoidance.
    pub sensitivity: f32,
    /// Side length of the density grid.
    pub grid_size: usize,
    /// Preferred anchor X in percent of image width.
    pub preferred_x: f32,
    /// Preferred anchor Y in percent of image height (75 = lower third).
    pub preferred_y: f32,
    /// Overlay footprint in percent of image size; half of it becomes the
    /// safety margin keeping the overlay inside the image.
    pub overlay_size_percent: f32,
    /// Attach the density grid snapshot to the result (debug heat-maps).
    pub include_density: bool,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            sensitivity: 0.7,
            grid_size: 4,
            preferred_x: 50.0,
            preferred_y: 75.0,
            overlay_size_percent: 20.0,
            include_density: false,
        }
    }
}
