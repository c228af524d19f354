//! Summed-area table (integral image) over an edge field.
//!
//! Built in one raster-order pass; any axis-aligned rectangular sum is then
//! an O(1) four-corner lookup. Source scalars are rounded into an integer
//! accumulator — `u64` cells keep the table exact for any raster size the
//! analyzer accepts.
use crate::image::ImageF32;

/// Prefix-sum table: cell (x, y) holds the sum of all rounded source values
/// in the rectangle from (0, 0) to (x, y) inclusive.
///
/// Invariant: values are monotonically non-decreasing along both axes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegralImage {
    pub w: usize,
    pub h: usize,
    data: Vec<u64>,
}

impl IntegralImage {
    /// Build the table from a scalar field in a single pass.
    pub fn build(field: &ImageF32) -> Self {
        let w = field.w;
        let h = field.h;
        let mut data = vec![0u64; w * h];
        for y in 0..h {
            for x in 0..w {
                let idx = y * w + x;
                let current = field.get(x, y).round() as u64;
                let left = if x > 0 { data[idx - 1] } else { 0 };
                let top = if y > 0 { data[idx - w] } else { 0 };
                let top_left = if x > 0 && y > 0 { data[idx - w - 1] } else { 0 };
                data[idx] = current + left + top - top_left;
            }
        }
        Self { w, h, data }
    }

    #[inline]
    fn at(&self, x: usize, y: usize) -> u64 {
        self.data[y * self.w + x]
    }

    /// Sum over the inclusive rectangle (x1, y1)-(x2, y2), in O(1).
    ///
    /// Requires `x1 <= x2 < w` and `y1 <= y2 < h`; a single-cell rectangle
    /// returns that cell's own (rounded) value.
    pub fn area_sum(&self, x1: usize, y1: usize, x2: usize, y2: usize) -> u64 {
        let bottom_right = self.at(x2, y2);
        let top_exclude = if y1 > 0 { self.at(x2, y1 - 1) } else { 0 };
        let left_exclude = if x1 > 0 { self.at(x1 - 1, y2) } else { 0 };
        let top_left_restore = if x1 > 0 && y1 > 0 {
            self.at(x1 - 1, y1 - 1)
        } else {
            0
        };
        // grouped so the unsigned subtraction cannot underflow
        (bottom_right + top_left_restore) - (top_exclude + left_exclude)
    }

    /// Mean value over the inclusive rectangle (x1, y1)-(x2, y2).
    pub fn area_mean(&self, x1: usize, y1: usize, x2: usize, y2: usize) -> f32 {
        let area = (x2 - x1 + 1) * (y2 - y1 + 1);
        if area == 0 {
            return 0.0;
        }
        self.area_sum(x1, y1, x2, y2) as f32 / area as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known_field() -> ImageF32 {
        ImageF32::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
    }

    #[test]
    fn build_matches_known_table() {
        let integral = IntegralImage::build(&known_field());
        let expected: Vec<u64> = vec![1, 3, 6, 5, 12, 21, 12, 27, 45];
        assert_eq!(integral.data, expected);
    }

    #[test]
    fn area_sum_full_image() {
        let integral = IntegralImage::build(&known_field());
        assert_eq!(integral.area_sum(0, 0, 2, 2), 45);
    }

    #[test]
    fn area_sum_single_cell() {
        let integral = IntegralImage::build(&known_field());
        assert_eq!(integral.area_sum(1, 1, 1, 1), 5);
        assert_eq!(integral.area_sum(0, 0, 0, 0), 1);
        assert_eq!(integral.area_sum(2, 2, 2, 2), 9);
    }

    #[test]
    fn area_sum_bottom_right_quadrant() {
        let integral = IntegralImage::build(&known_field());
        assert_eq!(integral.area_sum(1, 1, 2, 2), 28);
    }

    #[test]
    fn area_mean_divides_by_pixel_count() {
        let integral = IntegralImage::build(&known_field());
        assert_eq!(integral.area_mean(0, 0, 2, 2), 5.0);
        assert_eq!(integral.area_mean(1, 1, 1, 1), 5.0);
    }

    #[test]
    fn rebuild_is_bit_identical() {
        let field = known_field();
        let a = IntegralImage::build(&field);
        let b = IntegralImage::build(&field);
        assert_eq!(a, b);
    }

    #[test]
    fn fractional_values_are_rounded_into_the_accumulator() {
        let field = ImageF32::from_vec(2, 1, vec![0.4, 0.6]);
        let integral = IntegralImage::build(&field);
        assert_eq!(integral.area_sum(0, 0, 0, 0), 0);
        assert_eq!(integral.area_sum(0, 0, 1, 0), 1);
    }
}
