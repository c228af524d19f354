//! Randomized fallback placement used when analysis cannot run.
//!
//! Not text-aware at all — the position is drawn with a bottom-of-frame
//! bias (overlays cover video content less often there) while rejecting the
//! lower-left corner, where players burn in timestamp badges.
use rand::Rng;

/// Rejection-sampling retries before accepting whatever came up.
const MAX_ATTEMPTS: usize = 10;

/// Probability of drawing Y in the lower two-thirds band.
const BOTTOM_WEIGHT: f32 = 0.7;

/// Generate a weighted random position, in percent of container size.
///
/// `image_size_percent` is the overlay footprint; the draw is bounded to
/// `[0, 100 − size]` per axis so the overlay never leaves the container.
pub fn random_fallback_position<R: Rng>(image_size_percent: f32, rng: &mut R) -> (f32, f32) {
    let max_x = (100.0 - image_size_percent).max(0.0);
    let max_y = (100.0 - image_size_percent).max(0.0);

    let mut x = 0.0;
    let mut y = 0.0;
    for _ in 0..MAX_ATTEMPTS {
        y = if rng.random::<f32>() < BOTTOM_WEIGHT && max_y > 33.0 {
            // lower two-thirds band
            33.0 + rng.random::<f32>() * (max_y - 33.0)
        } else {
            // upper third
            rng.random::<f32>() * max_y.min(33.0)
        };
        x = rng.random::<f32>() * max_x;

        // lower-left timestamp badge region
        let in_timestamp_area = x < 15.0 && y > 85.0;
        if !in_timestamp_area {
            break;
        }
    }
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn positions_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..512 {
            let (x, y) = random_fallback_position(20.0, &mut rng);
            assert!((0.0..=80.0).contains(&x), "x out of bounds: {x}");
            assert!((0.0..=80.0).contains(&y), "y out of bounds: {y}");
        }
    }

    #[test]
    fn bottom_band_dominates() {
        let mut rng = StdRng::seed_from_u64(8);
        let n = 2048;
        let lower = (0..n)
            .filter(|_| random_fallback_position(20.0, &mut rng).1 >= 33.0)
            .count();
        assert!(
            lower as f32 / n as f32 > 0.55,
            "expected bottom-weighted draws, got {lower}/{n}"
        );
    }

    #[test]
    fn oversized_overlay_pins_to_origin() {
        let mut rng = StdRng::seed_from_u64(2);
        let (x, y) = random_fallback_position(100.0, &mut rng);
        assert_eq!((x, y), (0.0, 0.0));
    }
}
