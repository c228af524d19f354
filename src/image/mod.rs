//! Pixel buffer types used by the analysis pipeline.
//!
//! - [`RgbaImageU8`] – borrowed view over interleaved 8-bit RGBA data (input).
//! - [`ImageF32`] – owned single-channel float field (edge magnitudes).
//! - [`io`] – disk helpers: RGBA loading, heat-map rendering, JSON output.

pub mod f32;
pub mod io;
pub mod rgba;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::io::OwnedRgbaImage;
pub use self::rgba::RgbaImageU8;
pub use self::traits::{ImageView, ImageViewMut};
