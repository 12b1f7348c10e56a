//! RGB to single-channel luminance.

use image::{DynamicImage, GrayImage, Luma, Rgb};

/// ITU-R BT.601 luma in 16.16 fixed point, rounded to nearest.
///
/// Weights are 0.299, 0.587 and 0.114 scaled by 65536 (they sum to exactly 65536),
/// so gray input comes back unchanged.
#[inline]
pub fn luminance(px: Rgb<u8>) -> u8 {
    let r = px[0] as u32;
    let g = px[1] as u32;
    let b = px[2] as u32;
    ((r * 19595 + g * 38470 + b * 7471 + 0x8000) >> 16) as u8
}

/// Reduce an image in any color mode to one luminance byte per pixel.
///
/// Alpha is discarded before the reduction.
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    GrayImage::from_fn(w, h, |x, y| Luma([luminance(*rgb.get_pixel(x, y))]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn primaries() {
        assert_eq!(luminance(Rgb([255, 0, 0])), 76);
        assert_eq!(luminance(Rgb([0, 255, 0])), 150);
        assert_eq!(luminance(Rgb([0, 0, 255])), 29);
    }

    #[test]
    fn rounds_to_nearest() {
        // 228 * 7471 / 65536 = 25.99, rounds to 26
        assert_eq!(luminance(Rgb([0, 0, 228])), 26);
        // 1 * 19595 / 65536 = 0.299
        assert_eq!(luminance(Rgb([1, 0, 0])), 0);
        // 2 * 19595 / 65536 = 0.598
        assert_eq!(luminance(Rgb([2, 0, 0])), 1);
    }

    #[test]
    fn rounding_moves_blue_228_out_of_the_densest_bucket() {
        let ramp = crate::ramp::CharRamp::default();
        assert_eq!(ramp.char_for(luminance(Rgb([0, 0, 228]))), '%');
        // 223 * 7471 / 65536 = 25.42, rounds to 25
        assert_eq!(ramp.char_for(luminance(Rgb([0, 0, 223]))), '@');
    }

    #[test]
    fn black_and_white() {
        assert_eq!(luminance(Rgb([0, 0, 0])), 0);
        assert_eq!(luminance(Rgb([255, 255, 255])), 255);
    }

    #[test]
    fn gray_input_is_unchanged() {
        for v in [0u8, 17, 128, 200, 255] {
            assert_eq!(luminance(Rgb([v, v, v])), v);
        }
    }

    #[test]
    fn keeps_dimensions() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(5, 3, Rgb([10, 20, 30])));
        let gray = to_grayscale(&img);
        assert_eq!(gray.dimensions(), (5, 3));
        assert!(gray.pixels().all(|p| p[0] == luminance(Rgb([10, 20, 30]))));
    }
}
