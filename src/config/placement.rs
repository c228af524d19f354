//! Config for the `placement_demo` tool.
use crate::loader::LoaderOptions;
use crate::placer::PlacementOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Where to write the result as pretty JSON.
    pub json_out: Option<PathBuf>,
    /// Where to write the density heat-map PNG.
    pub heatmap_out: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct PlacementToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub placement: PlacementOptions,
    #[serde(default)]
    pub loader: LoaderOptions,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<PlacementToolConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
