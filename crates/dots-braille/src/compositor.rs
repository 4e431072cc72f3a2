use dots_core::config::{RenderEnv, RenderOptions, ResolvedOptions};
use dots_core::dimensions::{CELL_HEIGHT, CELL_WIDTH, resolve_dimensions};
use dots_core::error::CoreError;
use dots_core::frame::PixelGrid;
use dots_core::traits::Resample;
use rayon::prelude::*;

use crate::ansi::push_colored;
use crate::border::add_frame;
use crate::braille::{block_color, block_glyph};
use crate::dither::floyd_steinberg;

/// Orchestre la conversion image → lignes braille.
///
/// Stages, in order: resolve options, resolve dimensions, resample,
/// optional dithering, per-cell block rendering, optional frame.
///
/// # Example
/// ```
/// use dots_braille::compositor::Renderer;
/// use dots_core::config::{RenderEnv, RenderOptions};
/// use dots_core::frame::{PixelGrid, Rgb};
/// use dots_source::resize::Resizer;
///
/// let mut renderer = Renderer::new(Resizer::new());
/// let image = PixelGrid::filled(8, 16, Rgb::gray(255));
/// let opts = RenderOptions { width: 4, height: 4, threshold: 128, color_enabled: false, ..Default::default() };
/// let lines = renderer.render(&image, &opts, &RenderEnv::default()).unwrap();
/// assert_eq!(lines, vec!["⣿⣿⣿⣿"; 4]);
/// ```
pub struct Renderer<R: Resample> {
    resampler: R,
}

impl<R: Resample> Renderer<R> {
    /// Create a renderer around a resampling backend.
    #[must_use]
    pub fn new(resampler: R) -> Self {
        Self { resampler }
    }

    /// Render `image` into text lines, one per cell row (+2 when framed).
    ///
    /// `options` is only read; effective values are derived locally.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] when the source image is
    /// empty or the resolved grid has a zero side, and propagates
    /// resampling failures.
    pub fn render(
        &mut self,
        image: &PixelGrid,
        options: &RenderOptions,
        env: &RenderEnv,
    ) -> Result<Vec<String>, CoreError> {
        if image.is_empty() {
            return Err(CoreError::InvalidDimensions {
                width: image.width,
                height: image.height,
            });
        }

        let opts = options.resolve(env);
        let (cols, rows) = output_size(image.width, image.height, &opts, env.terminal_size);
        log::debug!(
            "Rendu {}×{} px -> {cols}×{rows} cellules (seuil {}, couleur {}, tramage {}, cadre {})",
            image.width,
            image.height,
            opts.threshold,
            opts.color,
            opts.dither,
            opts.frame
        );

        let invalid = CoreError::InvalidDimensions {
            width: cols,
            height: rows,
        };
        if cols == 0 || rows == 0 {
            return Err(invalid);
        }
        let (Some(px_w), Some(px_h)) = (cols.checked_mul(CELL_WIDTH), rows.checked_mul(CELL_HEIGHT))
        else {
            return Err(invalid);
        };

        let resized = self.resampler.resample(image, px_w, px_h)?;

        // Glyphs come from the dithered copy, colors from the resampled grid.
        let dithered = opts.dither.then(|| floyd_steinberg(&resized, opts.threshold));
        let glyph_source = dithered.as_ref().unwrap_or(&resized);

        let lines = render_blocks(glyph_source, &resized, cols, rows, &opts);

        if opts.frame {
            Ok(add_frame(lines, opts.color))
        } else {
            Ok(lines)
        }
    }
}

/// Taille de sortie effective en cellules.
///
/// When width and height are not both given, the terminal size (minus the
/// frame, if any) bounds an aspect-preserving fit. When both are given and
/// a frame is requested, the frame is carved out of them, keeping at least
/// one cell per axis.
///
/// # Example
/// ```
/// use dots_braille::compositor::output_size;
/// use dots_core::config::{RenderEnv, RenderOptions};
///
/// let env = RenderEnv::default();
/// let opts = RenderOptions { frame: true, ..Default::default() }.resolve(&env);
/// // 80×24 terminal minus the frame leaves 78×22 for a square image.
/// assert_eq!(output_size(100, 100, &opts, (80, 24)), (44, 22));
/// ```
#[must_use]
pub fn output_size(
    img_width: u32,
    img_height: u32,
    opts: &ResolvedOptions,
    terminal: (u32, u32),
) -> (u32, u32) {
    if opts.width == 0 || opts.height == 0 {
        let (mut max_w, mut max_h) = terminal;
        if opts.frame {
            max_w = max_w.saturating_sub(2);
            max_h = max_h.saturating_sub(2);
        }
        resolve_dimensions(img_width, img_height, opts.width, opts.height, max_w, max_h)
    } else if opts.frame {
        (
            opts.width.saturating_sub(2).max(1),
            opts.height.saturating_sub(2).max(1),
        )
    } else {
        (opts.width, opts.height)
    }
}

/// Render every cell. Rows are independent and rendered in parallel.
fn render_blocks(
    glyphs: &PixelGrid,
    colors: &PixelGrid,
    cols: u32,
    rows: u32,
    opts: &ResolvedOptions,
) -> Vec<String> {
    let background = opts.background.code();
    // Worst case per cell: fg+bg escape, 3-byte glyph, reset.
    let line_capacity = cols as usize * if opts.color { 32 } else { 3 };

    (0..rows)
        .into_par_iter()
        .map(|row| {
            let mut line = String::with_capacity(line_capacity);
            let y0 = row * CELL_HEIGHT;
            for col in 0..cols {
                let x0 = col * CELL_WIDTH;
                let ch = block_glyph(&glyphs.block(x0, y0), opts.threshold);
                if opts.color {
                    let fg = block_color(&colors.block(x0, y0));
                    push_colored(&mut line, ch, fg, background);
                } else {
                    line.push(ch);
                }
            }
            line
        })
        .collect()
}
