//! Résolution de la taille de sortie, en cellules braille.
//!
//! A braille cell covers 2×4 source pixels, so keeping the image aspect
//! ratio means `rows = cols * img_h / img_w / 2`.

/// Pixels horizontaux couverts par une cellule.
pub const CELL_WIDTH: u32 = 2;
/// Pixels verticaux couverts par une cellule.
pub const CELL_HEIGHT: u32 = 4;

/// Output grid size in character cells.
///
/// # Example
/// ```
/// use dots_core::dimensions::resolve_dimensions;
/// // Explicit width and height win.
/// assert_eq!(resolve_dimensions(100, 100, 50, 25, 80, 24), (50, 25));
/// // Nothing requested: fit the square image in an 80×24 terminal.
/// assert_eq!(resolve_dimensions(100, 100, 0, 0, 80, 24), (48, 24));
/// ```
///
/// Rules, in order:
/// 1. both `width` and `height` requested: returned unchanged;
/// 2. only `width`: height follows the aspect ratio, at least 1;
/// 3. only `height`: width follows the aspect ratio, at least 1;
/// 4. neither, with both maxima set: the widest fit inside the maxima;
/// 5. otherwise `(0, 0)`, the caller has to pick a fallback.
///
/// Intermediate math is `f64`, truncated (never rounded) at the end.
#[must_use]
pub fn resolve_dimensions(
    img_width: u32,
    img_height: u32,
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
) -> (u32, u32) {
    if width > 0 && height > 0 {
        return (width, height);
    }

    if width > 0 {
        return (width, height_for_width(img_width, img_height, width).max(1));
    }

    if height > 0 {
        return (width_for_height(img_width, img_height, height).max(1), height);
    }

    if max_width > 0 && max_height > 0 {
        let h = height_for_width(img_width, img_height, max_width);
        if h <= max_height {
            return (max_width, h);
        }
        return (width_for_height(img_width, img_height, max_height), max_height);
    }

    (0, 0)
}

#[inline]
fn height_for_width(img_width: u32, img_height: u32, width: u32) -> u32 {
    (f64::from(width) * f64::from(img_height) / f64::from(img_width) / 2.0) as u32
}

#[inline]
fn width_for_height(img_width: u32, img_height: u32, height: u32) -> u32 {
    (f64::from(height) * f64::from(img_width) / f64::from(img_height) * 2.0) as u32
}
