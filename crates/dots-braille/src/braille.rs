use dots_core::color::quantize;
use dots_core::frame::Block;

/// Braille base codepoint (U+2800).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Map an 8-bit dot pattern to its braille character.
///
/// Bit `i` raises the dot fed by sample `i` of a [`Block`]:
/// ```text
///  0 3
///  1 5
///  2 6
///  4 7
/// ```
///
/// # Example
/// ```
/// use dots_braille::braille::encode_braille;
/// assert_eq!(encode_braille(0), '\u{2800}'); // empty
/// assert_eq!(encode_braille(0xFF), '\u{28FF}'); // full
/// ```
#[inline(always)]
#[must_use]
pub fn encode_braille(pattern: u8) -> char {
    char::from_u32(BRAILLE_BASE + u32::from(pattern)).unwrap_or(' ')
}

/// Motif de points : bit `i` levé si la luminance de l'échantillon `i`
/// dépasse strictement `threshold`.
///
/// # Example
/// ```
/// use dots_braille::braille::dot_pattern;
/// use dots_core::frame::{Block, Rgb};
/// let mut samples = [Rgb::BLACK; 8];
/// samples[3] = Rgb::gray(255);
/// assert_eq!(dot_pattern(&Block::from_samples(samples), 128), 0b0000_1000);
/// ```
#[must_use]
pub fn dot_pattern(block: &Block, threshold: u8) -> u8 {
    block
        .samples()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.luminance() > threshold)
        .fold(0u8, |pattern, (i, _)| pattern | (1 << i))
}

/// Braille glyph of a 2×4 block.
///
/// # Example
/// ```
/// use dots_braille::braille::block_glyph;
/// use dots_core::frame::{Block, Rgb};
/// let lit = Block::from_samples([Rgb::gray(255); 8]);
/// assert_eq!(block_glyph(&lit, 128), '⣿');
/// ```
#[inline]
#[must_use]
pub fn block_glyph(block: &Block, threshold: u8) -> char {
    encode_braille(dot_pattern(block, threshold))
}

/// ANSI 256 code of the block's mean color.
///
/// # Example
/// ```
/// use dots_braille::braille::block_color;
/// use dots_core::frame::{Block, Rgb};
/// assert_eq!(block_color(&Block::from_samples([Rgb::new(255, 0, 0); 8])), 196);
/// ```
#[inline]
#[must_use]
pub fn block_color(block: &Block) -> u8 {
    quantize(block.mean())
}

#[cfg(test)]
mod tests {
    use dots_core::frame::{PixelGrid, Rgb};

    use super::*;

    fn single(i: usize) -> Block {
        let mut samples = [Rgb::BLACK; 8];
        samples[i] = Rgb::gray(255);
        Block::from_samples(samples)
    }

    #[test]
    fn braille_empty_is_blank() {
        assert_eq!(block_glyph(&Block::from_samples([Rgb::BLACK; 8]), 128), '⠀');
    }

    #[test]
    fn braille_full_is_solid_for_every_threshold_below_max() {
        let lit = Block::from_samples([Rgb::gray(255); 8]);
        for t in 0..255u8 {
            assert_eq!(block_glyph(&lit, t), '\u{28FF}', "threshold {t}");
        }
        assert_eq!(block_glyph(&lit, 255), '\u{2800}');
    }

    #[test]
    fn first_and_last_samples() {
        assert_eq!(block_glyph(&single(0), 128), '\u{2801}');
        assert_eq!(block_glyph(&single(7), 128), '\u{2880}');
    }

    #[test]
    fn each_sample_owns_one_bit() {
        for i in 0..8 {
            assert_eq!(dot_pattern(&single(i), 0), 1 << i);
        }
    }

    #[test]
    fn threshold_is_strict() {
        let block = Block::from_samples([Rgb::gray(100); 8]);
        assert_eq!(dot_pattern(&block, 100), 0);
        assert_eq!(dot_pattern(&block, 99), 0xFF);
    }

    #[test]
    fn left_column_sets_bits_0_1_2_4() {
        let grid = PixelGrid::from_fn(2, 4, |x, _| if x == 0 { Rgb::gray(255) } else { Rgb::BLACK });
        assert_eq!(dot_pattern(&grid.block(0, 0), 20), 0b0001_0111);
        assert_eq!(block_glyph(&grid.block(0, 0), 20), '\u{2817}');
    }

    #[test]
    fn mean_color_is_quantized() {
        let mut samples = [Rgb::BLACK; 8];
        samples[..4].copy_from_slice(&[Rgb::gray(255); 4]);
        // Mean 127 gray -> grayscale ramp.
        assert_eq!(block_color(&Block::from_samples(samples)), 244);
        assert_eq!(block_color(&Block::from_samples([Rgb::BLACK; 8])), 16);
    }
}
