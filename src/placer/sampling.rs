//! Continuous position sampling inside a selected grid cell.
//!
//! The final coordinate blends a uniform draw with a Gaussian draw centered
//! on the effective range midpoint (Box-Muller, σ = range/3, clamped), so
//! placements lean toward the cell's visual center without being
//! deterministic. A safety margin of half the overlay footprint keeps the
//! overlay fully inside the image.
use super::selector::CellCandidate;
use rand::Rng;
use std::f32::consts::PI;

/// Blend factor between the uniform and Gaussian draws: 0 is pure uniform,
/// 1 pure Gaussian.
const CENTER_BIAS: f32 = 0.4;

/// Draw a final (x, y) position, in percent of image size, inside `cell`.
///
/// Each axis range is the intersection of the cell's percent rectangle with
/// `[margin, 100 − margin]`; when a cell lies entirely outside the safe
/// band, the nearest valid point is used instead.
pub fn sample_within_cell<R: Rng>(
    cell: &CellCandidate,
    grid_size: usize,
    overlay_size_percent: f32,
    rng: &mut R,
) -> (f32, f32) {
    let margin = (overlay_size_percent * 0.5).clamp(0.0, 50.0);
    let span = 100.0 / grid_size.max(1) as f32;
    let x = sample_axis(cell.gx as f32 * span, (cell.gx + 1) as f32 * span, margin, rng);
    let y = sample_axis(cell.gy as f32 * span, (cell.gy + 1) as f32 * span, margin, rng);
    (x, y)
}

fn sample_axis<R: Rng>(cell_lo: f32, cell_hi: f32, margin: f32, rng: &mut R) -> f32 {
    let safe_lo = margin;
    let safe_hi = 100.0 - margin;
    let lo = cell_lo.max(safe_lo);
    let hi = cell_hi.min(safe_hi);
    if lo >= hi {
        // cell and safe band do not overlap; snap to the nearest valid point
        let cell_mid = 0.5 * (cell_lo + cell_hi);
        return cell_mid.clamp(safe_lo, safe_hi);
    }

    let mid = 0.5 * (lo + hi);
    let range = hi - lo;
    let uniform = lo + rng.random::<f32>() * range;
    let gaussian = (mid + standard_normal(rng) * (range / 3.0)).clamp(lo, hi);
    uniform * (1.0 - CENTER_BIAS) + gaussian * CENTER_BIAS
}

/// Standard normal draw via the Box-Muller transform.
fn standard_normal<R: Rng>(rng: &mut R) -> f32 {
    let u1 = rng.random::<f32>().max(f32::MIN_POSITIVE);
    let u2 = rng.random::<f32>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cell(gx: usize, gy: usize) -> CellCandidate {
        CellCandidate {
            gx,
            gy,
            cost: 0.0,
            normalized_density: 0.0,
        }
    }

    #[test]
    fn samples_stay_inside_cell_and_margins() {
        let mut rng = StdRng::seed_from_u64(3);
        let c = cell(1, 2); // x in [25, 50], y in [50, 75] on a 4-grid
        for _ in 0..256 {
            let (x, y) = sample_within_cell(&c, 4, 20.0, &mut rng);
            assert!((25.0..=50.0).contains(&x), "x out of cell: {x}");
            assert!((50.0..=75.0).contains(&y), "y out of cell: {y}");
            assert!((10.0..=90.0).contains(&x));
            assert!((10.0..=90.0).contains(&y));
        }
    }

    #[test]
    fn margin_truncates_border_cells() {
        let mut rng = StdRng::seed_from_u64(9);
        let c = cell(0, 3); // x in [0, 25], y in [75, 100]
        for _ in 0..256 {
            let (x, y) = sample_within_cell(&c, 4, 20.0, &mut rng);
            assert!(x >= 10.0, "safety margin violated: {x}");
            assert!(y <= 90.0, "safety margin violated: {y}");
        }
    }

    #[test]
    fn disjoint_cell_snaps_to_nearest_valid_point() {
        let mut rng = StdRng::seed_from_u64(5);
        // overlay of 60% -> margin 30; a border cell [0, 12.5] on an 8-grid
        // lies entirely below the safe band
        let (x, y) = sample_within_cell(&cell(0, 0), 8, 60.0, &mut rng);
        assert_eq!(x, 30.0);
        assert_eq!(y, 30.0);
    }

    #[test]
    fn oversized_overlay_degenerates_to_center() {
        let mut rng = StdRng::seed_from_u64(1);
        let (x, y) = sample_within_cell(&cell(2, 2), 4, 120.0, &mut rng);
        assert_eq!((x, y), (50.0, 50.0));
    }

    #[test]
    fn standard_normal_is_roughly_centered() {
        let mut rng = StdRng::seed_from_u64(77);
        let n = 4096;
        let mean: f32 = (0..n).map(|_| standard_normal(&mut rng)).sum::<f32>() / n as f32;
        assert!(mean.abs() < 0.1, "sample mean drifted: {mean}");
    }
}
