//! Column-driven resizing with character-cell aspect correction.

use image::imageops::FilterType;
use image::DynamicImage;

/// Height-to-width ratio of a typical monospace character cell.
///
/// Without this correction the rendered art looks vertically stretched.
pub const DEFAULT_CHAR_ASPECT: f64 = 1.65;

/// Smallest accepted character aspect.
///
/// Output height grows as `1 / char_aspect`; below this the grid explodes in size.
pub const MIN_CHAR_ASPECT: f64 = 0.1;

/// Bicubic resample used for every resize.
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Output grid size for an image rendered at `columns` characters wide.
///
/// The height is `floor(columns * (orig_h / orig_w) / char_aspect)`, clamped to
/// at least one row so very wide sources still produce a line of output.
/// `char_aspect` is raised to [`MIN_CHAR_ASPECT`] (NaN included).
/// `columns` is not validated here; callers reject zero before getting this far.
pub fn target_dimensions(orig_w: u32, orig_h: u32, columns: u32, char_aspect: f64) -> (u32, u32) {
    if orig_w == 0 {
        return (columns, 1);
    }
    let char_aspect = char_aspect.max(MIN_CHAR_ASPECT);
    let ratio = orig_h as f64 / orig_w as f64 / char_aspect;
    let h = (columns as f64 * ratio) as u32;
    (columns, h.max(1))
}

/// Resize `img` so that it is exactly `columns` pixels wide.
pub fn resize_to_columns(img: &DynamicImage, columns: u32, char_aspect: f64) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());
    let (target_w, target_h) = target_dimensions(orig_w, orig_h, columns, char_aspect);
    log::debug!("resizing {}x{} -> {}x{}", orig_w, orig_h, target_w, target_h);

    if target_w == orig_w && target_h == orig_h {
        return img.clone();
    }
    img.resize_exact(target_w, target_h, RESIZE_FILTER)
}
