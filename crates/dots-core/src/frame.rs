/// Couleur RGB 8 bits par canal.
///
/// # Example
/// ```
/// use dots_core::frame::Rgb;
/// let white = Rgb::gray(255);
/// assert_eq!(white.luminance(), 255);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Noir, utilisé pour les échantillons hors grille.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Build a color from its three channels.
    #[inline(always)]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gris neutre `(v, v, v)`.
    #[inline(always)]
    #[must_use]
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Luminance perceptuelle BT.601, tronquée.
    ///
    /// # Example
    /// ```
    /// use dots_core::frame::Rgb;
    /// assert_eq!(Rgb::BLACK.luminance(), 0);
    /// assert_eq!(Rgb::new(255, 0, 0).luminance(), 76);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn luminance(self) -> u8 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)) as u8
    }
}

/// Grille de pixels RGB, row-major, 3 bytes par pixel.
///
/// Owned by the pipeline stage that produced it. Stages that transform a
/// grid either return a fresh one or say so when they mutate in place.
///
/// # Example
/// ```
/// use dots_core::frame::PixelGrid;
/// let grid = PixelGrid::new(10, 10);
/// assert_eq!(grid.data.len(), 300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    /// Pixels RGB, row-major, 3 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelGrid {
    /// Crée une grille noire aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use dots_core::frame::PixelGrid;
    /// let grid = PixelGrid::new(100, 50);
    /// assert_eq!(grid.width, 100);
    /// assert_eq!(grid.height, 50);
    /// assert_eq!(grid.data.len(), 100 * 50 * 3);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 3],
            width,
            height,
        }
    }

    /// Grille uniforme remplie de `color`.
    ///
    /// # Example
    /// ```
    /// use dots_core::frame::{PixelGrid, Rgb};
    /// let grid = PixelGrid::filled(2, 2, Rgb::new(1, 2, 3));
    /// assert_eq!(grid.pixel(1, 1), Rgb::new(1, 2, 3));
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let data = [color.r, color.g, color.b].repeat(width as usize * height as usize);
        Self {
            data,
            width,
            height,
        }
    }

    /// Build a grid by evaluating `f(x, y)` for every pixel.
    ///
    /// # Example
    /// ```
    /// use dots_core::frame::{PixelGrid, Rgb};
    /// let grid = PixelGrid::from_fn(4, 1, |x, _| Rgb::gray(x as u8 * 10));
    /// assert_eq!(grid.pixel(3, 0), Rgb::gray(30));
    /// ```
    #[must_use]
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb) -> Self {
        let mut grid = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.set(x, y, f(x, y));
            }
        }
        grid
    }

    /// `true` si la grille ne contient aucun pixel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    /// Accès au pixel (x, y).
    ///
    /// Out-of-bounds positions read as black.
    ///
    /// # Example
    /// ```
    /// use dots_core::frame::{PixelGrid, Rgb};
    /// let grid = PixelGrid::filled(2, 2, Rgb::gray(200));
    /// assert_eq!(grid.pixel(0, 0), Rgb::gray(200));
    /// assert_eq!(grid.pixel(5, 0), Rgb::BLACK);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        if x >= self.width || y >= self.height {
            return Rgb::BLACK;
        }
        let idx = self.index(x, y);
        Rgb::new(self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    /// Écrit le pixel (x, y). Ignored when out of bounds.
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.index(x, y);
        self.data[idx] = color.r;
        self.data[idx + 1] = color.g;
        self.data[idx + 2] = color.b;
    }

    /// Échantillonne le bloc 2×4 dont le coin haut-gauche est `(x0, y0)`.
    ///
    /// # Example
    /// ```
    /// use dots_core::frame::{PixelGrid, Rgb};
    /// let grid = PixelGrid::filled(1, 1, Rgb::gray(255));
    /// let block = grid.block(0, 0);
    /// assert_eq!(block.samples()[0], Rgb::gray(255));
    /// // Everything past the 1×1 grid is the black sentinel.
    /// assert_eq!(block.samples()[7], Rgb::BLACK);
    /// ```
    #[must_use]
    pub fn block(&self, x0: u32, y0: u32) -> Block {
        let mut samples = [Rgb::BLACK; 8];
        for (sample, (dx, dy)) in samples.iter_mut().zip(Block::OFFSETS) {
            *sample = self.pixel(x0 + dx, y0 + dy);
        }
        Block { samples }
    }
}

/// Huit échantillons d'un bloc 2×4, dans l'ordre des points braille.
///
/// ```text
///  0 3
///  1 5
///  2 6
///  4 7
/// ```
///
/// Sample `i` drives bit `i` of the braille pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    samples: [Rgb; 8],
}

impl Block {
    /// `(dx, dy)` of each sample relative to the block origin.
    pub const OFFSETS: [(u32, u32); 8] = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (0, 3),
        (1, 1),
        (1, 2),
        (1, 3),
    ];

    /// Build a block directly from samples already in dot order.
    #[must_use]
    pub const fn from_samples(samples: [Rgb; 8]) -> Self {
        Self { samples }
    }

    /// Samples in dot order.
    #[inline(always)]
    #[must_use]
    pub const fn samples(&self) -> &[Rgb; 8] {
        &self.samples
    }

    /// Couleur moyenne (somme par canal / 8, tronquée).
    ///
    /// # Example
    /// ```
    /// use dots_core::frame::{Block, Rgb};
    /// let mut samples = [Rgb::BLACK; 8];
    /// samples[0] = Rgb::new(80, 16, 255);
    /// assert_eq!(Block::from_samples(samples).mean(), Rgb::new(10, 2, 31));
    /// ```
    #[must_use]
    pub fn mean(&self) -> Rgb {
        let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
        for s in &self.samples {
            r += u32::from(s.r);
            g += u32::from(s.g);
            b += u32::from(s.b);
        }
        Rgb::new((r / 8) as u8, (g / 8) as u8, (b / 8) as u8)
    }
}
