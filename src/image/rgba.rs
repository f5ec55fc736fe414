/// Borrowed view of an interleaved 8-bit RGBA buffer, row-major, channel
/// order R, G, B, A. `stride` is in pixels; a tightly packed buffer has
/// `stride == w` and `data.len() == w * h * 4`.
#[derive(Clone, Debug)]
pub struct ImageRgba8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [u8],
}

impl<'a> ImageRgba8<'a> {
    /// View over a tightly packed `w * h * 4` byte buffer.
    pub fn from_packed(data: &'a [u8], w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Number of bytes the backing buffer must hold for this view.
    #[inline]
    pub fn expected_len(&self) -> usize {
        self.stride * self.h * 4
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.stride + x) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Interleaved bytes of row `y` (`w * 4` bytes, no row padding included).
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride * 4;
        &self.data[start..start + self.w * 4]
    }
}
