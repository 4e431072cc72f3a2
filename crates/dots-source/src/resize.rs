use dots_core::error::CoreError;
use dots_core::frame::PixelGrid;
use dots_core::traits::Resample;
use fast_image_resize::images::{Image, ImageRef};
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};

/// Resizer réutilisable wrappant fast_image_resize.
///
/// Convolution with a Catmull-Rom kernel, for both upscaling and
/// downscaling.
///
/// # Example
/// ```
/// use dots_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
}

impl Resizer {
    /// Create a new Catmull-Rom resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::CatmullRom)),
        }
    }

    /// Resize `src` into `dst`. Dimensions of `dst` determine output size.
    ///
    /// # Errors
    /// Returns an error if either grid is empty or the resize fails.
    ///
    /// # Example
    /// ```
    /// use dots_source::resize::Resizer;
    /// use dots_core::frame::PixelGrid;
    /// let mut r = Resizer::new();
    /// let src = PixelGrid::new(100, 100);
    /// let mut dst = PixelGrid::new(50, 50);
    /// r.resize_into(&src, &mut dst).unwrap();
    /// ```
    pub fn resize_into(&mut self, src: &PixelGrid, dst: &mut PixelGrid) -> Result<(), CoreError> {
        for grid in [src, &*dst] {
            if grid.is_empty() {
                return Err(CoreError::InvalidDimensions {
                    width: grid.width,
                    height: grid.height,
                });
            }
        }

        if src.width == dst.width && src.height == dst.height {
            dst.data.copy_from_slice(&src.data);
            return Ok(());
        }

        let src_image = ImageRef::new(src.width, src.height, &src.data, PixelType::U8x3)
            .map_err(|e| CoreError::Resample(format!("source : {e}")))?;

        let mut dst_image =
            Image::from_slice_u8(dst.width, dst.height, &mut dst.data, PixelType::U8x3)
                .map_err(|e| CoreError::Resample(format!("destination : {e}")))?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .map_err(|e| CoreError::Resample(e.to_string()))?;

        Ok(())
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Resample for Resizer {
    fn resample(
        &mut self,
        src: &PixelGrid,
        width: u32,
        height: u32,
    ) -> Result<PixelGrid, CoreError> {
        let mut dst = PixelGrid::new(width, height);
        self.resize_into(src, &mut dst)?;
        log::trace!(
            "Resample {}×{} -> {width}×{height}",
            src.width,
            src.height
        );
        Ok(dst)
    }
}

/// Convenience for one-shot usage.
///
/// # Errors
/// Returns an error if the resize operation fails.
///
/// # Example
/// ```
/// use dots_source::resize::resize_frame;
/// use dots_core::frame::PixelGrid;
/// let src = PixelGrid::new(100, 100);
/// let dst = resize_frame(&src, 50, 50).unwrap();
/// assert_eq!(dst.width, 50);
/// ```
pub fn resize_frame(src: &PixelGrid, width: u32, height: u32) -> Result<PixelGrid, CoreError> {
    Resizer::new().resample(src, width, height)
}
