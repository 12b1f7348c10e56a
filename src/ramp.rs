//! Brightness to character quantization.

/// Character ramp ordered from densest (darkest) to sparsest (lightest).
pub const DEFAULT_RAMP: &str = "@%#*+=-:. ";

/// A fixed, ordered set of ASCII characters used to represent brightness levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharRamp {
    chars: Vec<u8>,
}

impl CharRamp {
    /// Number of symbols in the ramp.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Ramp index for a luminance value.
    ///
    /// Computed as `luma * len / 256`, which stays within `[0, len - 1]`
    /// for every `u8` input and never decreases as `luma` grows.
    #[inline]
    pub fn index_for(&self, luma: u8) -> usize {
        luma as usize * self.chars.len() / 256
    }

    #[inline]
    pub fn char_for(&self, luma: u8) -> char {
        self.chars[self.index_for(luma)] as char
    }

    /// Map a row-major run of luminance values to a flat string, one char per pixel.
    pub fn map_pixels(&self, luma: &[u8]) -> String {
        let mut out = String::with_capacity(luma.len());
        for &l in luma {
            out.push(self.char_for(l));
        }
        out
    }
}

impl Default for CharRamp {
    fn default() -> Self {
        Self {
            chars: DEFAULT_RAMP.as_bytes().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ramp_has_ten_symbols() {
        assert_eq!(CharRamp::default().len(), 10);
    }

    #[test]
    fn extremes_map_to_ends_of_ramp() {
        let ramp = CharRamp::default();
        assert_eq!(ramp.index_for(0), 0);
        assert_eq!(ramp.char_for(0), '@');
        // 255 * 10 / 256 = 9
        assert_eq!(ramp.index_for(255), 9);
        assert_eq!(ramp.char_for(255), ' ');
    }

    #[test]
    fn bucket_boundaries() {
        let ramp = CharRamp::default();
        // 25 * 10 / 256 = 0, 26 * 10 / 256 = 1
        assert_eq!(ramp.index_for(25), 0);
        assert_eq!(ramp.index_for(26), 1);
        assert_eq!(ramp.index_for(128), 5);
        assert_eq!(ramp.char_for(128), '=');
    }

    #[test]
    fn index_in_range_and_monotonic() {
        let ramp = CharRamp::default();
        let mut prev = 0;
        for v in 0..=255u8 {
            let idx = ramp.index_for(v);
            assert!(idx < ramp.len());
            assert!(idx >= prev, "index decreased at {}", v);
            prev = idx;
        }
    }

    #[test]
    fn map_pixels_preserves_length() {
        let ramp = CharRamp::default();
        let s = ramp.map_pixels(&[0, 128, 255, 64]);
        assert_eq!(s.chars().count(), 4);
        assert_eq!(s, "@= #");
    }
}
