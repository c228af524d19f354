//! JSON configs for the bundled tools.

pub mod placement;

pub use placement::{load_config, OutputConfig, PlacementToolConfig};
