/// Generates a solid-color RGBA buffer.
pub fn solid_rgba(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
    rgba_from_fn(width, height, |_, _| rgb)
}

/// Generates an RGBA buffer from a per-pixel RGB function (alpha fixed 255).
pub fn rgba_from_fn(
    width: usize,
    height: usize,
    pixel: impl Fn(usize, usize) -> [u8; 3],
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = vec![0u8; width * height * 4];
    for y in 0..height {
        for x in 0..width {
            let [r, g, b] = pixel(x, y);
            let i = (y * width + x) * 4;
            img[i] = r;
            img[i + 1] = g;
            img[i + 2] = b;
            img[i + 3] = 255;
        }
    }
    img
}

/// High-contrast checkerboard in the top half, flat gray below — a stand-in
/// for a thumbnail with burned-in title text. Cells are 2 px wide so the
/// 3×3 Sobel taps actually see the transitions.
pub fn busy_top_rgba(width: usize, height: usize) -> Vec<u8> {
    rgba_from_fn(width, height, |x, y| {
        if y < height / 2 {
            if (x / 2 + y / 2) & 1 == 0 {
                [0, 0, 0]
            } else {
                [255, 255, 255]
            }
        } else {
            [128, 128, 128]
        }
    })
}
