//! Sobel edge extraction over RGBA input.
//!
//! - Converts each pixel to BT.601 luminance (alpha ignored).
//! - Convolves the fixed 3×3 Sobel kernel pair over the luminance field.
//! - Combines the responses as `|gx| + |gy|` (Manhattan magnitude).
//!
//! Complexity: O(W·H); memory: two float buffers.
use crate::image::{ImageF32, ImageView, ImageViewMut, RgbaImageU8};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

#[inline]
/// BT.601 luminance from 8-bit channels: `0.299 R + 0.587 G + 0.114 B`.
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// Collapse an RGBA image into a per-pixel luminance field.
pub fn luminance_field(image: &RgbaImageU8) -> ImageF32 {
    let mut luma = ImageF32::new(image.w, image.h);
    for y in 0..image.h {
        let out = luma.row_mut(y);
        for (x, v) in out.iter_mut().enumerate() {
            let [r, g, b, _a] = image.rgba(x, y);
            *v = luminance(r, g, b);
        }
    }
    luma
}

/// Compute the per-pixel edge magnitude field for an RGBA image.
///
/// Border pixels (and every pixel of an image narrower or shorter than 3)
/// keep the value 0; a uniform-color image yields an all-zero field.
pub fn sobel_edge_field(image: &RgbaImageU8) -> ImageF32 {
    let luma = luminance_field(image);
    let w = luma.w;
    let h = luma.h;
    let mut out = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let rows = [luma.row(y - 1), luma.row(y), luma.row(y + 1)];
        let out_row = out.row_mut(y);
        for x in 1..w - 1 {
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                sum_x += row[x - 1] * kx_row[0] + row[x] * kx_row[1] + row[x + 1] * kx_row[2];
                sum_y += row[x - 1] * ky_row[0] + row[x] * ky_row[1] + row[x + 1] * ky_row[2];
            }
            out_row[x] = sum_x.abs() + sum_y.abs();
        }
    }
    out
}
