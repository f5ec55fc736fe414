//! Grayscale reduction from interleaved RGBA to a luminance plane.
//!
//! Standard perceptual luma weights (`0.299·R + 0.587·G + 0.114·B`); the
//! alpha channel is ignored. A pure per-pixel map with no cross-pixel
//! dependency, so rows parallelize trivially (enabled by the `parallel`
//! feature).
use crate::image::{ImageF32, ImageRgba8};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

#[inline]
fn luma_row(src: &[u8], dst: &mut [f32]) {
    for (px, out) in src.chunks_exact(4).zip(dst.iter_mut()) {
        *out = LUMA_R * px[0] as f32 + LUMA_G * px[1] as f32 + LUMA_B * px[2] as f32;
    }
}

/// Convert an RGBA view into an owned luminance plane with values in
/// [0, 255]. Any buffer of the declared length is valid input.
pub fn luminance(rgba: &ImageRgba8) -> ImageF32 {
    let mut out = ImageF32::new(rgba.w, rgba.h);
    let w = rgba.w;
    if w == 0 || rgba.h == 0 {
        return out;
    }

    #[cfg(feature = "parallel")]
    {
        out.data
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, dst)| luma_row(rgba.row(y), dst));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (y, dst) in out.data.chunks_mut(w).enumerate() {
            luma_row(rgba.row(y), dst);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_perceptual_weights() {
        // One red, one green, one blue, one white pixel.
        let data = [
            255u8, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255, //
            255, 255, 255, 255,
        ];
        let img = ImageRgba8::from_packed(&data, 4, 1);
        let lum = luminance(&img);
        assert!((lum.get(0, 0) - 0.299 * 255.0).abs() < 1e-3);
        assert!((lum.get(1, 0) - 0.587 * 255.0).abs() < 1e-3);
        assert!((lum.get(2, 0) - 0.114 * 255.0).abs() < 1e-3);
        assert!((lum.get(3, 0) - 255.0).abs() < 1e-3);
    }

    #[test]
    fn ignores_alpha() {
        let opaque = [100u8, 150, 200, 255];
        let transparent = [100u8, 150, 200, 0];
        let a = luminance(&ImageRgba8::from_packed(&opaque, 1, 1));
        let b = luminance(&ImageRgba8::from_packed(&transparent, 1, 1));
        assert_eq!(a.get(0, 0), b.get(0, 0));
    }
}
