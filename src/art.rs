//! Flat character stream plus the row width needed to lay it back out as a grid.

use std::fmt;

use image::GrayImage;

use crate::ramp::CharRamp;

/// ASCII rendering of one image.
///
/// `flat` holds one character per pixel in row-major order, so its length is
/// always `width * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    flat: String,
    width: u32,
    height: u32,
}

impl AsciiArt {
    /// Quantize every pixel of a grayscale image through `ramp`.
    pub fn from_gray(gray: &GrayImage, ramp: &CharRamp) -> Self {
        let (width, height) = gray.dimensions();
        let flat = ramp.map_pixels(gray.as_raw());
        Self { flat, width, height }
    }

    pub fn flat(&self) -> &str {
        &self.flat
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        // The ramp is pure ASCII, so byte chunks are char chunks.
        self.flat
            .as_bytes()
            .chunks(self.width.max(1) as usize)
            .filter_map(|c| std::str::from_utf8(c).ok())
    }

    /// Multi-line string: rows joined with `\n`, no trailing newline.
    pub fn render(&self) -> String {
        wrap_rows(&self.flat, self.width as usize)
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Split `flat` into consecutive chunks of `width` characters joined by line breaks.
///
/// Only the last chunk can be shorter, and only when the length is not a
/// multiple of `width`. A zero width leaves the input on a single line.
pub fn wrap_rows(flat: &str, width: usize) -> String {
    if width == 0 {
        return flat.to_string();
    }
    let chars: Vec<char> = flat.chars().collect();
    let rows = chars.len().div_ceil(width);
    let mut out = String::with_capacity(flat.len() + rows);
    for (i, row) in chars.chunks(width).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(row);
    }
    out
}
