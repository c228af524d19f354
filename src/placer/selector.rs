//! Cost-based grid cell selection.
//!
//! Every cell gets a cost blending its min-max-normalized density with its
//! normalized distance to the preferred anchor. The K cheapest cells form a
//! candidate pool and one is drawn by inverse-cost roulette — repeated calls
//! on the same image spread overlays across near-equally-good regions
//! instead of pinning them to a single pixel.
use crate::density::DensityGrid;
use log::debug;
use rand::Rng;

/// Anchor distances are divided by this to land roughly in [0, 1]
/// (percentage units; the image diagonal is ~141).
const REFERENCE_DISTANCE: f32 = 70.0;

/// Number of lowest-cost cells kept for the roulette draw.
const CANDIDATE_POOL: usize = 4;

/// Keeps `1 / cost` finite for exactly-zero-cost cells.
const WEIGHT_EPSILON: f32 = 0.001;

/// A scored grid cell.
#[derive(Clone, Debug)]
pub struct CellCandidate {
    pub gx: usize,
    pub gy: usize,
    /// Blended cost; lower is better.
    pub cost: f32,
    /// Min-max-normalized density of the cell, kept so the façade can derive
    /// confidence without rescanning the grid.
    pub normalized_density: f32,
}

impl CellCandidate {
    /// Cell center in percent of image size.
    pub fn center_percent(&self, grid_size: usize) -> (f32, f32) {
        let size = grid_size.max(1) as f32;
        (
            (self.gx as f32 + 0.5) / size * 100.0,
            (self.gy as f32 + 0.5) / size * 100.0,
        )
    }
}

#[inline]
/// `sensitivity · density + (1 − sensitivity) · distance`, both inputs
/// already normalized to [0, 1].
pub fn cell_cost(normalized_density: f32, normalized_distance: f32, sensitivity: f32) -> f32 {
    sensitivity * normalized_density + (1.0 - sensitivity) * normalized_distance
}

/// Score every cell of the grid and return the candidates sorted by
/// ascending cost.
pub fn rank_cells(
    grid: &DensityGrid,
    sensitivity: f32,
    preferred_x: f32,
    preferred_y: f32,
) -> Vec<CellCandidate> {
    let size = grid.size();
    let (min, max) = grid.min_max();
    let range = max - min;

    let mut candidates = Vec::with_capacity(size * size);
    for gy in 0..size {
        for gx in 0..size {
            let normalized_density = if range > 0.0 {
                (grid.get(gx, gy) - min) / range
            } else {
                0.0
            };
            let cell_x = (gx as f32 + 0.5) / size as f32 * 100.0;
            let cell_y = (gy as f32 + 0.5) / size as f32 * 100.0;
            let dist = ((cell_x - preferred_x).powi(2) + (cell_y - preferred_y).powi(2)).sqrt();
            candidates.push(CellCandidate {
                gx,
                gy,
                cost: cell_cost(normalized_density, dist / REFERENCE_DISTANCE, sensitivity),
                normalized_density,
            });
        }
    }
    candidates.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    candidates
}

/// Pick a cell: rank all cells, keep the K cheapest, roulette-draw one with
/// weight `1 / (cost + ε)`.
///
/// Always terminates: a uniform grid degenerates to a uniform draw over the
/// pool, a 1×1 grid to its only cell.
pub fn select_cell<R: Rng>(
    grid: &DensityGrid,
    sensitivity: f32,
    preferred_x: f32,
    preferred_y: f32,
    rng: &mut R,
) -> CellCandidate {
    let mut ranked = rank_cells(grid, sensitivity, preferred_x, preferred_y);
    ranked.truncate(CANDIDATE_POOL);
    let picked = weighted_pick(&ranked, rng);
    debug!(
        "select_cell: ({}, {}) cost={:.4} density={:.4} pool={}",
        picked.gx,
        picked.gy,
        picked.cost,
        picked.normalized_density,
        ranked.len()
    );
    picked
}

fn weighted_pick<R: Rng>(pool: &[CellCandidate], rng: &mut R) -> CellCandidate {
    debug_assert!(!pool.is_empty(), "grid produces at least one cell");
    let weights: Vec<f32> = pool.iter().map(|c| 1.0 / (c.cost + WEIGHT_EPSILON)).collect();
    let total: f32 = weights.iter().sum();

    let mut ticket = rng.random::<f32>() * total;
    for (candidate, w) in pool.iter().zip(&weights) {
        if ticket < *w {
            return candidate.clone();
        }
        ticket -= w;
    }
    // float round-off can walk the ticket past the wheel
    pool[pool.len() - 1].clone()
}
