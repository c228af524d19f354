//! Edge processing: luminance conversion and Sobel gradient magnitude.
//!
//! The edge field is the pipeline's proxy for "visually busy": burned-in
//! titles and captions show up as dense clusters of strong gradients, flat
//! sky or vignette regions as near-zero ones. No attempt is made to
//! understand content.
//!
//! Design notes
//! - Magnitude is the Manhattan sum `|gx| + |gy|`, not the Euclidean norm.
//!   This keeps density values exactly inter-comparable across calls and is
//!   part of the contract downstream tests rely on.
//! - Border pixels stay 0: the 3×3 operator is only applied where a full
//!   neighborhood exists (no clamping, no wraparound).

pub mod sobel;

pub use sobel::{luminance, luminance_field, sobel_edge_field};
