//! I/O helpers for RGBA rasters and JSON diagnostics.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned RGBA buffer.
//! - `save_density_heatmap`: render a density grid as a grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::RgbaImageU8;
use crate::density::DensityGrid;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned interleaved RGBA buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct OwnedRgbaImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl OwnedRgbaImage {
    /// Construct an owned RGBA buffer given raw interleaved bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `RgbaImageU8` view
    pub fn as_view(&self) -> RgbaImageU8<'_> {
        RgbaImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to interleaved 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<OwnedRgbaImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(OwnedRgbaImage::new(width, height, img.into_raw()))
}

/// Render a density grid as a grayscale PNG, one `cell_px × cell_px` block
/// per cell, min-max normalized so the busiest cell is white.
pub fn save_density_heatmap(
    grid: &DensityGrid,
    path: &Path,
    cell_px: u32,
) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let size = grid.size() as u32;
    let cell_px = cell_px.max(1);
    let (min, max) = grid.min_max();
    let range = max - min;
    let mut out = GrayImage::new(size * cell_px, size * cell_px);
    for (x, y, px) in out.enumerate_pixels_mut() {
        let gx = (x / cell_px) as usize;
        let gy = (y / cell_px) as usize;
        let d = grid.get(gx, gy);
        let v = if range > 0.0 {
            ((d - min) / range * 255.0).clamp(0.0, 255.0)
        } else {
            0.0
        };
        *px = Luma([v as u8]);
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
