/// Generates a tightly packed RGBA buffer where every pixel is `rgba`.
pub fn uniform_rgba(width: usize, height: usize, rgba: [u8; 4]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = Vec::with_capacity(width * height * 4);
    for _ in 0..width * height {
        img.extend_from_slice(&rgba);
    }
    img
}

/// Generates a grayscale checkerboard as a tightly packed RGBA buffer.
///
/// Cells alternate between `dark` and `bright` gray levels; alpha is 255.
pub fn checkerboard_rgba(
    width: usize,
    height: usize,
    cell: usize,
    dark: u8,
    bright: u8,
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let val = if (cx + cy) & 1 == 0 { dark } else { bright };
            img.extend_from_slice(&[val, val, val, 255]);
        }
    }
    img
}
