//! Discrete 4-neighbor Laplacian over the interior of a luminance plane.
//!
//! For every interior pixel (1 ≤ x ≤ w−2, 1 ≤ y ≤ h−2):
//!
//! ```text
//! response(x,y) = 4·L(x,y) − L(x−1,y) − L(x+1,y) − L(x,y−1) − L(x,y+1)
//! ```
//!
//! Border pixels are never written (they stay 0) and are excluded from all
//! downstream statistics. No wraparound, clamping, or reflection: padding
//! the stencil at the border would contaminate the variance with artificial
//! boundary discontinuities.
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Apply the 4-neighbor Laplacian stencil to the interior of `lum`.
///
/// Returns a plane of the same dimensions; values are signed. On planes
/// smaller than 3×3 the interior is empty and the result is all zeros —
/// the variance stage rejects those dimensions before consulting it.
pub fn laplacian(lum: &ImageF32) -> ImageF32 {
    let w = lum.w;
    let h = lum.h;
    let mut out = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let above = lum.row(y - 1);
        let center = lum.row(y);
        let below = lum.row(y + 1);
        let dst = out.row_mut(y);
        for x in 1..w - 1 {
            dst[x] = 4.0 * center[x] - center[x - 1] - center[x + 1] - above[x] - below[x];
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane_from(values: &[f32], w: usize, h: usize) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        img.data.copy_from_slice(values);
        img
    }

    #[test]
    fn flat_plane_has_zero_response() {
        let lum = plane_from(&[200.0; 16], 4, 4);
        let resp = laplacian(&lum);
        assert!(resp.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn single_bright_pixel_matches_stencil() {
        let mut lum = ImageF32::new(3, 3);
        lum.set(1, 1, 10.0);
        let resp = laplacian(&lum);
        assert_eq!(resp.get(1, 1), 40.0);
    }

    #[test]
    fn neighbors_subtract_from_center() {
        // Center 5 with neighbors 1, 2, 3, 4: 4*5 - 1 - 2 - 3 - 4 = 10.
        let mut lum = ImageF32::new(3, 3);
        lum.set(1, 1, 5.0);
        lum.set(0, 1, 1.0);
        lum.set(2, 1, 2.0);
        lum.set(1, 0, 3.0);
        lum.set(1, 2, 4.0);
        let resp = laplacian(&lum);
        assert_eq!(resp.get(1, 1), 10.0);
    }

    #[test]
    fn border_stays_zero() {
        let lum = plane_from(&(0..25).map(|v| v as f32).collect::<Vec<_>>(), 5, 5);
        let resp = laplacian(&lum);
        for x in 0..5 {
            assert_eq!(resp.get(x, 0), 0.0);
            assert_eq!(resp.get(x, 4), 0.0);
        }
        for y in 0..5 {
            assert_eq!(resp.get(0, y), 0.0);
            assert_eq!(resp.get(4, y), 0.0);
        }
    }
}
