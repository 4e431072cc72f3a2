//! Tramage Floyd-Steinberg (diffusion d'erreur) vers noir/blanc.
//!
//! ```text
//!          X   7/16
//!   3/16  5/16  1/16
//! ```
//!
//! Pixels are visited in raster order and every diffusion lands on a pixel
//! that has not been quantized yet, so this pass is strictly sequential.

use dots_core::frame::{PixelGrid, Rgb};

/// Voisins `(dx, dy, poids)` recevant l'erreur.
const DIFFUSION: [(i64, i64, f64); 4] = [
    (1, 0, 7.0 / 16.0),
    (-1, 1, 3.0 / 16.0),
    (0, 1, 5.0 / 16.0),
    (1, 1, 1.0 / 16.0),
];

/// Dither a copy of `grid`; the input is left untouched.
///
/// # Example
/// ```
/// use dots_braille::dither::floyd_steinberg;
/// use dots_core::frame::{PixelGrid, Rgb};
/// let src = PixelGrid::filled(4, 4, Rgb::gray(255));
/// let out = floyd_steinberg(&src, 20);
/// assert_eq!(out, src);
/// ```
#[must_use]
pub fn floyd_steinberg(grid: &PixelGrid, threshold: u8) -> PixelGrid {
    let mut out = grid.clone();
    floyd_steinberg_in_place(&mut out, threshold);
    out
}

/// Dither `grid` in place. Every pixel ends up `(0,0,0)` or `(255,255,255)`.
///
/// Per pixel: luminance `L` (BT.601, truncated), `new = 255` if
/// `L > threshold` else `0`, error `L - new` pushed to the neighbours'
/// red channel and written back as gray, clamped to [0, 255]. Neighbours
/// outside the grid are skipped.
pub fn floyd_steinberg_in_place(grid: &mut PixelGrid, threshold: u8) {
    for y in 0..grid.height {
        for x in 0..grid.width {
            quantize_and_diffuse(grid, x, y, threshold);
        }
    }
}

/// Quantize pixel `(x, y)` and spread its error over the neighbours.
fn quantize_and_diffuse(grid: &mut PixelGrid, x: u32, y: u32, threshold: u8) {
    let (w, h) = (i64::from(grid.width), i64::from(grid.height));
    let lum = grid.pixel(x, y).luminance();
    let new = if lum > threshold { 255u8 } else { 0u8 };
    let err = f64::from(i16::from(lum) - i16::from(new));
    grid.set(x, y, Rgb::gray(new));

    for (dx, dy, weight) in DIFFUSION {
        let (nx, ny) = (i64::from(x) + dx, i64::from(y) + dy);
        if nx < 0 || nx >= w || ny < 0 || ny >= h {
            continue;
        }
        let (nx, ny) = (nx as u32, ny as u32);
        let old = i64::from(grid.pixel(nx, ny).r);
        // Truncation toward zero, like the quantization error itself.
        let value = (old + (err * weight) as i64).clamp(0, 255) as u8;
        grid.set(nx, ny, Rgb::gray(value));
    }
}
