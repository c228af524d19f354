//! Coarse N×N density grid over the edge field.
//!
//! Each cell holds the mean edge magnitude of its image sub-rectangle,
//! queried through the integral image so the whole grid costs O(N²) lookups
//! regardless of image size.
use crate::integral::IntegralImage;
use serde::Serialize;

/// N×N matrix of mean edge densities, row-major.
#[derive(Clone, Debug, Serialize)]
pub struct DensityGrid {
    size: usize,
    cells: Vec<f32>,
}

impl DensityGrid {
    /// Partition the image into `grid_size × grid_size` cells and compute
    /// each cell's mean edge value.
    ///
    /// Cell width/height is `floor(dim / grid_size)`; the last row/column
    /// absorbs any truncation remainder so the grid always covers the full
    /// image.
    pub fn compute(integral: &IntegralImage, grid_size: usize) -> Self {
        let size = grid_size.max(1);
        let w = integral.w;
        let h = integral.h;
        if w == 0 || h == 0 {
            return Self {
                size,
                cells: vec![0.0; size * size],
            };
        }

        let cell_w = (w / size).max(1);
        let cell_h = (h / size).max(1);
        let mut cells = Vec::with_capacity(size * size);
        for gy in 0..size {
            let y1 = (gy * cell_h).min(h - 1);
            let y2 = if gy + 1 == size {
                h - 1
            } else {
                ((gy + 1) * cell_h - 1).min(h - 1)
            };
            for gx in 0..size {
                let x1 = (gx * cell_w).min(w - 1);
                let x2 = if gx + 1 == size {
                    w - 1
                } else {
                    ((gx + 1) * cell_w - 1).min(w - 1)
                };
                cells.push(integral.area_mean(x1, y1, x2.max(x1), y2.max(y1)));
            }
        }
        Self { size, cells }
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    /// Mean density of cell (gx, gy).
    pub fn get(&self, gx: usize, gy: usize) -> f32 {
        self.cells[gy * self.size + gx]
    }

    /// Minimum and maximum cell density over the whole grid.
    pub fn min_max(&self) -> (f32, f32) {
        let mut min = f32::INFINITY;
        let mut max = 0.0f32;
        for &d in &self.cells {
            min = min.min(d);
            max = max.max(d);
        }
        if min.is_infinite() {
            (0.0, 0.0)
        } else {
            (min, max)
        }
    }

    /// Row-major snapshot for diagnostics output.
    pub fn to_rows(&self) -> Vec<Vec<f32>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.to_vec())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageF32;

    #[test]
    fn zero_field_yields_zero_grid() {
        let field = ImageF32::new(32, 32);
        let grid = DensityGrid::compute(&IntegralImage::build(&field), 4);
        assert_eq!(grid.size(), 4);
        for gy in 0..4 {
            for gx in 0..4 {
                assert_eq!(grid.get(gx, gy), 0.0);
            }
        }
        assert_eq!(grid.min_max(), (0.0, 0.0));
    }

    #[test]
    fn uniform_field_yields_uniform_grid() {
        let field = ImageF32::from_vec(8, 8, vec![3.0; 64]);
        let grid = DensityGrid::compute(&IntegralImage::build(&field), 4);
        for gy in 0..4 {
            for gx in 0..4 {
                assert_eq!(grid.get(gx, gy), 3.0);
            }
        }
    }

    #[test]
    fn last_cell_absorbs_truncation_remainder() {
        // width 10, grid 4 -> cell width 2, last column spans x = 6..=9
        let mut field = ImageF32::new(10, 10);
        for y in 0..10 {
            field.set(9, y, 8.0);
        }
        let grid = DensityGrid::compute(&IntegralImage::build(&field), 4);
        // last column cell: 4 x cell_h pixels, one column of 8s inside it
        let last = grid.get(3, 0);
        assert!(last > 0.0, "remainder column must contribute: {last}");
        assert_eq!(grid.get(0, 0), 0.0);
    }

    #[test]
    fn localized_energy_lands_in_the_right_cell() {
        let mut field = ImageF32::new(16, 16);
        // paint only the top-left 4x4 block
        for y in 0..4 {
            for x in 0..4 {
                field.set(x, y, 100.0);
            }
        }
        let grid = DensityGrid::compute(&IntegralImage::build(&field), 4);
        assert_eq!(grid.get(0, 0), 100.0);
        for gy in 0..4 {
            for gx in 0..4 {
                if gx != 0 || gy != 0 {
                    assert_eq!(grid.get(gx, gy), 0.0);
                }
            }
        }
    }

    #[test]
    fn degenerate_grid_size_is_clamped_to_one() {
        let field = ImageF32::from_vec(4, 4, vec![2.0; 16]);
        let grid = DensityGrid::compute(&IntegralImage::build(&field), 0);
        assert_eq!(grid.size(), 1);
        assert_eq!(grid.get(0, 0), 2.0);
    }
}
