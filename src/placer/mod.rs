//! Decision layer: cell selection, sub-cell sampling, and the façade.
//!
//! The modules here consume the density grid and turn it into a concrete
//! overlay position:
//!
//! - [`options`] – caller-facing knobs ([`PlacementOptions`]).
//! - [`selector`] – cost function and inverse-cost roulette over the K
//!   cheapest grid cells.
//! - [`sampling`] – continuous (x, y) draw inside the chosen cell with a
//!   center-biased uniform/Gaussian blend.
//! - [`fallback`] – bottom-weighted randomized position used when analysis
//!   cannot run.
//! - [`pipeline`] – the [`PlacementAnalyzer`] façade orchestrating the run.
//!
//! All randomness flows through a caller-supplied [`rand::Rng`], so tests can
//! pin a seed and assert exact outcomes.

pub mod fallback;
pub mod options;
pub mod pipeline;
pub mod sampling;
pub mod selector;

pub use fallback::random_fallback_position;
pub use options::PlacementOptions;
pub use pipeline::PlacementAnalyzer;
pub use sampling::sample_within_cell;
pub use selector::{rank_cells, select_cell, CellCandidate};
