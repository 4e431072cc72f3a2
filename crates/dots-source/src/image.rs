use std::path::Path;

use anyhow::{Context, Result};
use dots_core::frame::PixelGrid;

/// Charge une image depuis le disque (PNG, JPEG, GIF, BMP).
///
/// Only the first frame of an animated GIF is kept. Alpha is flattened
/// onto black.
///
/// # Errors
/// Returns an error if the image cannot be opened or decoded.
///
/// # Example
/// ```no_run
/// use dots_source::image::load_image;
/// use std::path::Path;
/// let grid = load_image(Path::new("photo.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<PixelGrid> {
    let img = ::image::open(path)
        .with_context(|| format!("Impossible de charger {}", path.display()))?;
    let grid = from_dynamic(&img);
    log::debug!(
        "Image chargée : {} ({}×{})",
        path.display(),
        grid.width,
        grid.height
    );
    Ok(grid)
}

/// Convert a decoded image into an RGB grid, compositing alpha over black.
///
/// # Example
/// ```
/// use dots_source::image::from_dynamic;
/// use image::{DynamicImage, Rgba, RgbaImage};
///
/// let img = RgbaImage::from_pixel(2, 1, Rgba([200, 100, 50, 0]));
/// let grid = from_dynamic(&DynamicImage::ImageRgba8(img));
/// assert_eq!(grid.data, vec![0; 6]);
/// ```
#[must_use]
pub fn from_dynamic(img: &::image::DynamicImage) -> PixelGrid {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for px in rgba.pixels() {
        let [r, g, b, a] = px.0;
        data.extend_from_slice(&[premultiply(r, a), premultiply(g, a), premultiply(b, a)]);
    }
    PixelGrid {
        data,
        width,
        height,
    }
}

#[inline(always)]
fn premultiply(c: u8, a: u8) -> u8 {
    (u16::from(c) * u16::from(a) / 255) as u8
}

#[cfg(test)]
mod tests {
    use ::image::{DynamicImage, GrayImage, Luma, Rgba, RgbaImage};
    use dots_core::frame::Rgb;

    use super::*;

    #[test]
    fn opaque_pixels_are_unchanged() {
        let img = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        let grid = from_dynamic(&DynamicImage::ImageRgba8(img));
        assert_eq!((grid.width, grid.height), (3, 2));
        assert_eq!(grid.pixel(2, 1), Rgb::new(10, 20, 30));
    }

    #[test]
    fn half_alpha_darkens() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 128]));
        let grid = from_dynamic(&DynamicImage::ImageRgba8(img));
        assert_eq!(grid.pixel(0, 0), Rgb::gray(128));
    }

    #[test]
    fn grayscale_sources_expand_to_rgb() {
        let img = GrayImage::from_pixel(1, 1, Luma([77]));
        let grid = from_dynamic(&DynamicImage::ImageLuma8(img));
        assert_eq!(grid.pixel(0, 0), Rgb::gray(77));
    }

    #[test]
    fn load_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        RgbaImage::from_pixel(8, 16, Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();
        let grid = load_image(&path).unwrap();
        assert_eq!((grid.width, grid.height), (8, 16));
        assert_eq!(grid.pixel(7, 15), Rgb::new(255, 0, 0));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_image(&dir.path().join("nope.png")).is_err());
    }
}
