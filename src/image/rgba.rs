//! Borrowed RGBA image view over an interleaved 8-bit pixel buffer.
//!
//! Row-major, top-left origin, 4 bytes (R, G, B, A) per pixel. The view is
//! the analyzer's sole input type; decoded rasters borrow into it via
//! [`crate::image::OwnedRgbaImage::as_view`].

#[derive(Clone, Debug)]
pub struct RgbaImageU8<'a> {
    pub w: usize,
    pub h: usize,
    /// Pixels (not bytes) between consecutive rows; equals `w` when packed.
    pub stride: usize,
    /// Interleaved R,G,B,A bytes.
    pub data: &'a [u8],
}

impl<'a> RgbaImageU8<'a> {
    /// View over a tightly packed buffer.
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    /// The four channel bytes at (x, y).
    pub fn rgba(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.stride + x) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// True when the view holds no analyzable pixels.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0 || self.data.is_empty()
    }

    /// True when `data` actually covers `w × h` packed pixels.
    pub fn is_complete(&self) -> bool {
        self.data.len() >= self.h.saturating_mul(self.stride) * 4
    }
}
