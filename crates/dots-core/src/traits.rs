use crate::error::CoreError;
use crate::frame::PixelGrid;

/// Redimensionne une grille de pixels vers une taille exacte.
///
/// Implémenté par : `dots_source::resize::Resizer`.
///
/// # Example
/// ```
/// use dots_core::error::CoreError;
/// use dots_core::frame::PixelGrid;
/// use dots_core::traits::Resample;
///
/// /// Nearest-neighbour, for illustration only.
/// struct Nearest;
/// impl Resample for Nearest {
///     fn resample(&mut self, src: &PixelGrid, width: u32, height: u32) -> Result<PixelGrid, CoreError> {
///         Ok(PixelGrid::from_fn(width, height, |x, y| {
///             src.pixel(x * src.width / width, y * src.height / height)
///         }))
///     }
/// }
///
/// let out = Nearest.resample(&PixelGrid::new(8, 8), 2, 4).unwrap();
/// assert_eq!((out.width, out.height), (2, 4));
/// ```
pub trait Resample {
    /// Produce a grid of exactly `width × height` pixels from `src`.
    ///
    /// Both upscaling and downscaling must be supported. `width` and
    /// `height` are positive; callers check that beforehand.
    ///
    /// # Errors
    /// Returns [`CoreError::Resample`] if the backend fails.
    fn resample(&mut self, src: &PixelGrid, width: u32, height: u32)
    -> Result<PixelGrid, CoreError>;
}
