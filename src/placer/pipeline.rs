//! Placement analysis façade.
//!
//! [`PlacementAnalyzer`] runs the full synchronous pipeline — edge field,
//! integral image, density grid, cell selection, sub-cell sampling — and
//! guarantees it never surfaces an error: degenerate input is caught up
//! front and any panic inside the pipeline is absorbed at this boundary,
//! both routing to the randomized fallback with zero confidence.
use super::fallback::random_fallback_position;
use super::options::PlacementOptions;
use super::sampling::sample_within_cell;
use super::selector::select_cell;
use crate::density::DensityGrid;
use crate::edges::sobel_edge_field;
use crate::image::RgbaImageU8;
use crate::integral::IntegralImage;
use crate::types::PlacementResult;
use log::debug;
use rand::Rng;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

/// Stateless analyzer; each call allocates its own working buffers and
/// discards them on return.
pub struct PlacementAnalyzer {
    options: PlacementOptions,
}

impl PlacementAnalyzer {
    /// Create an analyzer with the supplied options.
    pub fn new(options: PlacementOptions) -> Self {
        Self { options }
    }

    /// Analyze an RGBA raster and return an overlay position.
    ///
    /// Total over all input: an empty or truncated buffer, a zero-area
    /// image, or an internal panic all yield the fallback result instead of
    /// an error.
    pub fn analyze<R: Rng>(&self, image: &RgbaImageU8, rng: &mut R) -> PlacementResult {
        let start = Instant::now();

        if image.is_empty() || !image.is_complete() {
            debug!(
                "PlacementAnalyzer::analyze degenerate input {}x{} ({} bytes)",
                image.w,
                image.h,
                image.data.len()
            );
            return self.fallback_result(rng, start);
        }

        match panic::catch_unwind(AssertUnwindSafe(|| self.run_pipeline(image, rng))) {
            Ok(mut result) => {
                result.latency_ms = start.elapsed().as_secs_f64() * 1000.0;
                result
            }
            Err(_) => {
                debug!("PlacementAnalyzer::analyze pipeline panicked, using fallback");
                self.fallback_result(rng, start)
            }
        }
    }

    /// Convenience wrapper over [`Self::analyze`] using the thread-local RNG.
    pub fn analyze_with_thread_rng(&self, image: &RgbaImageU8) -> PlacementResult {
        self.analyze(image, &mut rand::rng())
    }

    fn run_pipeline<R: Rng>(&self, image: &RgbaImageU8, rng: &mut R) -> PlacementResult {
        let edges = sobel_edge_field(image);
        let integral = IntegralImage::build(&edges);
        let grid = DensityGrid::compute(&integral, self.options.grid_size);

        let sensitivity = self.options.sensitivity.clamp(0.0, 1.0);
        let cell = select_cell(
            &grid,
            sensitivity,
            self.options.preferred_x,
            self.options.preferred_y,
            rng,
        );
        let (x, y) = sample_within_cell(
            &cell,
            grid.size(),
            self.options.overlay_size_percent,
            rng,
        );
        let confidence = (1.0 - cell.normalized_density).clamp(0.0, 1.0);
        debug!(
            "PlacementAnalyzer::analyze {}x{} -> ({:.1}, {:.1}) confidence={:.3}",
            image.w, image.h, x, y, confidence
        );

        PlacementResult {
            x,
            y,
            confidence,
            fallback: false,
            density_grid: self.options.include_density.then(|| grid.to_rows()),
            // stamped by `analyze` once the guard returns
            latency_ms: 0.0,
        }
    }

    pub(crate) fn fallback_result<R: Rng>(&self, rng: &mut R, start: Instant) -> PlacementResult {
        let (x, y) = random_fallback_position(self.options.overlay_size_percent, rng);
        PlacementResult {
            x,
            y,
            confidence: 0.0,
            fallback: true,
            density_grid: None,
            latency_ms: start.elapsed().as_secs_f64() * 1000.0,
        }
    }
}
