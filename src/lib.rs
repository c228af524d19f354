#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod density;
pub mod edges;
pub mod image;
pub mod integral;
pub mod loader;
pub mod placer;
pub mod types;

// --- High-level re-exports -------------------------------------------------

// Main entry points: analyzer + result.
pub use crate::placer::{PlacementAnalyzer, PlacementOptions};
pub use crate::types::PlacementResult;

// Async adapter for remote thumbnails.
pub use crate::loader::{fetch_and_analyze, LoaderOptions};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use overlay_placement::prelude::*;
///
/// # fn main() {
/// let (w, h) = (128usize, 72usize);
/// let pixels = vec![0u8; w * h * 4];
/// let img = RgbaImageU8 { w, h, stride: w, data: &pixels };
///
/// let analyzer = PlacementAnalyzer::new(PlacementOptions::default());
/// let res = analyzer.analyze_with_thread_rng(&img);
/// println!("x={:.1} y={:.1} confidence={:.3}", res.x, res.y, res.confidence);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::RgbaImageU8;
    pub use crate::{PlacementAnalyzer, PlacementOptions, PlacementResult};
}
