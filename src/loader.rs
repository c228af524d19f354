//! Async outer adapter: fetch, decode, downscale, analyze.
//!
//! The analysis core is synchronous and CPU-bound; this module owns the one
//! asynchronous concern — getting bytes into a decoded raster. Its contract
//! mirrors the façade's: [`fetch_and_analyze`] always resolves to a
//! [`PlacementResult`], substituting the fallback on any network, decode, or
//! timeout failure. The timeout is structured: when it fires, the in-flight
//! fetch/analysis future is dropped, not abandoned in the background.
//!
//! Rasters are downscaled so the longest side is at most
//! [`LoaderOptions::max_analysis_size`] before analysis — edge density is a
//! statistical signal and survives downsampling, while the Sobel and
//! integral passes get two orders of magnitude cheaper.
use crate::image::{OwnedRgbaImage, RgbaImageU8};
use crate::placer::{PlacementAnalyzer, PlacementOptions};
use crate::types::PlacementResult;
use image::DynamicImage;
use image::imageops::FilterType;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Knobs for the fetch/decode stage.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// Longest raster side, in pixels, fed to the analyzer; larger images
    /// are downscaled (never upscaled).
    pub max_analysis_size: u32,
    /// Budget for the whole fetch + decode + analysis, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            max_analysis_size: 128,
            timeout_ms: 2000,
        }
    }
}

/// Fetch an image over HTTP and analyze it for overlay placement.
///
/// Never errors: any failure along the way resolves to the randomized
/// fallback result with zero confidence.
pub async fn fetch_and_analyze(
    url: &str,
    options: &PlacementOptions,
    loader: &LoaderOptions,
) -> PlacementResult {
    let analyzer = PlacementAnalyzer::new(options.clone());
    let budget = Duration::from_millis(loader.timeout_ms);

    let attempt = tokio::time::timeout(budget, async {
        let raster = fetch_raster(url, loader.max_analysis_size).await?;
        // analysis is cheap at <=128px; run it inline on the async task
        Ok::<_, String>(analyzer.analyze_with_thread_rng(&raster.as_view()))
    })
    .await;

    match attempt {
        Ok(Ok(result)) => result,
        Ok(Err(err)) => {
            debug!("fetch_and_analyze {url}: {err}");
            fallback(&analyzer)
        }
        Err(_) => {
            debug!(
                "fetch_and_analyze {url}: timed out after {}ms",
                loader.timeout_ms
            );
            fallback(&analyzer)
        }
    }
}

/// Synchronous twin of [`fetch_and_analyze`] reading from the filesystem,
/// used by the demo tool.
pub fn analyze_file(
    path: &Path,
    options: &PlacementOptions,
    loader: &LoaderOptions,
) -> Result<PlacementResult, String> {
    let raster = load_analysis_raster(path, loader.max_analysis_size)?;
    let analyzer = PlacementAnalyzer::new(options.clone());
    Ok(analyzer.analyze_with_thread_rng(&raster.as_view()))
}

/// Load a local image at analysis size: decode + downscale like the HTTP
/// path, falling back to a plain full-size load for formats the in-memory
/// decoder rejects.
pub fn load_analysis_raster(path: &Path, max_size: u32) -> Result<OwnedRgbaImage, String> {
    let bytes = fs::read(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    decode_rgba(&bytes, max_size).or_else(|_| crate::image::io::load_rgba_image(path))
}

async fn fetch_raster(url: &str, max_size: u32) -> Result<OwnedRgbaImage, String> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| format!("request failed: {e}"))?;
    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status()));
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|e| format!("body read failed: {e}"))?;
    decode_rgba(&bytes, max_size)
}

/// Decode encoded image bytes into RGBA, downscaling to the analysis size.
pub fn decode_rgba(bytes: &[u8], max_size: u32) -> Result<OwnedRgbaImage, String> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| format!("decode failed: {e}"))?;
    Ok(downscale_rgba(decoded, max_size))
}

fn downscale_rgba(decoded: DynamicImage, max_size: u32) -> OwnedRgbaImage {
    let rgba = decoded.to_rgba8();
    let longest = rgba.width().max(rgba.height());
    let rgba = if max_size > 0 && longest > max_size {
        let scale = max_size as f32 / longest as f32;
        let w = ((rgba.width() as f32 * scale).floor() as u32).max(1);
        let h = ((rgba.height() as f32 * scale).floor() as u32).max(1);
        image::imageops::resize(&rgba, w, h, FilterType::Triangle)
    } else {
        rgba
    };
    OwnedRgbaImage::new(rgba.width() as usize, rgba.height() as usize, rgba.into_raw())
}

fn fallback(analyzer: &PlacementAnalyzer) -> PlacementResult {
    // an empty view routes straight to the fallback path
    analyzer.analyze_with_thread_rng(&RgbaImageU8::new(0, 0, &[]))
}
