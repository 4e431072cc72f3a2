//! Quantification RGB → palette ANSI 256 couleurs.
//!
//! Only the 240 non-system entries are produced: the 6×6×6 cube (16–231)
//! and the 24-step grayscale ramp (232–255).

use crate::error::CoreError;
use crate::frame::Rgb;

/// Valeurs réelles des 6 niveaux du cube xterm.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Écart max-min en dessous duquel une couleur passe par la rampe de gris.
const GRAYSCALE_SPREAD: u8 = 10;

/// Map an RGB color to the nearest ANSI 256 color code.
///
/// Near-neutral colors go through the grayscale ramp, the rest through the
/// color cube.
///
/// # Example
/// ```
/// use dots_core::color::quantize_rgb;
/// assert_eq!(quantize_rgb(255, 0, 0), 196);
/// assert_eq!(quantize_rgb(128, 128, 128), 244);
/// ```
#[must_use]
pub fn quantize_rgb(r: u8, g: u8, b: u8) -> u8 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max - min < GRAYSCALE_SPREAD {
        quantize_grayscale(r, g, b)
    } else {
        16 + 36 * quantize_channel(r) + 6 * quantize_channel(g) + quantize_channel(b)
    }
}

/// Same as [`quantize_rgb`] for an [`Rgb`] value.
#[inline(always)]
#[must_use]
pub fn quantize(color: Rgb) -> u8 {
    quantize_rgb(color.r, color.g, color.b)
}

/// Rampe de gris 232–255, avec le noir et le blanc du cube aux extrémités.
fn quantize_grayscale(r: u8, g: u8, b: u8) -> u8 {
    let avg = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
    if avg < 8 {
        return 16;
    }
    if avg >= 238 {
        return 231;
    }
    // [8, 237] → [0, 23]
    let step = ((avg - 8) * 24 / 229).min(23);
    232 + step as u8
}

/// Nearest cube level for one channel. Lower index wins on ties.
fn quantize_channel(c: u8) -> u8 {
    let mut nearest = 0u8;
    let mut best = u8::MAX;
    for (i, &level) in CUBE_LEVELS.iter().enumerate() {
        let dist = c.abs_diff(level);
        if dist < best {
            best = dist;
            nearest = i as u8;
        }
    }
    nearest
}

/// Parse a hex color literal and return its ANSI 256 color code.
///
/// Accepts an optional leading `#` followed by 3 (`f00`) or 6 (`ff0000`)
/// hex digits, case-insensitive.
///
/// # Errors
/// Returns [`CoreError::InvalidHexFormat`] on a wrong length or a non-hex
/// character.
///
/// # Example
/// ```
/// use dots_core::color::parse_hex;
/// assert_eq!(parse_hex("#f00").unwrap(), 196);
/// assert_eq!(parse_hex("00FFFF").unwrap(), 51);
/// assert!(parse_hex("gggggg").is_err());
/// ```
pub fn parse_hex(input: &str) -> Result<u8, CoreError> {
    let rgb = parse_hex_rgb(input)?;
    Ok(quantize(rgb))
}

/// Parse a hex color literal into its RGB channels.
///
/// # Errors
/// Same rules as [`parse_hex`].
///
/// # Example
/// ```
/// use dots_core::color::parse_hex_rgb;
/// use dots_core::frame::Rgb;
/// assert_eq!(parse_hex_rgb("#1a2").unwrap(), Rgb::new(0x11, 0xaa, 0x22));
/// ```
pub fn parse_hex_rgb(input: &str) -> Result<Rgb, CoreError> {
    let invalid = |reason: String| CoreError::InvalidHexFormat {
        input: input.to_string(),
        reason,
    };

    let digits = input.strip_prefix('#').unwrap_or(input);
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(invalid(format!("caractère non hexadécimal {bad:?}")));
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        n => return Err(invalid(format!("longueur {n} (attendu 3 ou 6)"))),
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|e| invalid(e.to_string()))
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_land_on_cube_corners() {
        assert_eq!(quantize_rgb(255, 0, 0), 196);
        assert_eq!(quantize_rgb(0, 255, 0), 46);
        assert_eq!(quantize_rgb(0, 0, 255), 21);
        assert_eq!(quantize_rgb(255, 255, 0), 226);
        assert_eq!(quantize_rgb(255, 0, 255), 201);
    }

    #[test]
    fn extremes_use_cube_black_and_white() {
        assert_eq!(quantize_rgb(0, 0, 0), 16);
        assert_eq!(quantize_rgb(255, 255, 255), 231);
        assert_eq!(quantize_rgb(128, 128, 128), 244);
    }

    #[test]
    fn near_neutral_dark_and_light_clamp() {
        for r in 0..=255u8 {
            for spread in 0..10u8 {
                let g = r.saturating_add(spread);
                let avg = (u16::from(r) + u16::from(g) + u16::from(r)) / 3;
                let code = quantize_rgb(r, g, r);
                if avg < 8 {
                    assert_eq!(code, 16, "({r},{g},{r})");
                } else if avg >= 238 {
                    assert_eq!(code, 231, "({r},{g},{r})");
                } else {
                    assert!((232..=255).contains(&code), "({r},{g},{r}) -> {code}");
                }
            }
        }
    }

    #[test]
    fn grayscale_ramp_is_monotonic() {
        let mut prev = quantize_rgb(8, 8, 8);
        assert_eq!(prev, 232);
        for v in 9..238u8 {
            let code = quantize_rgb(v, v, v);
            assert!(code >= prev, "ramp went backwards at {v}");
            prev = code;
        }
        assert_eq!(prev, 255);
    }

    #[test]
    fn channel_ties_pick_lower_level() {
        // 115 is 20 away from both 95 and 135.
        assert_eq!(quantize_channel(115), 1);
        assert_eq!(quantize_channel(47), 0);
        assert_eq!(quantize_channel(48), 1);
        assert_eq!(quantize_channel(255), 5);
    }

    #[test]
    fn spread_of_ten_leaves_grayscale() {
        // max - min == 10 goes through the cube.
        assert_eq!(quantize_rgb(100, 110, 100), 16 + 36 + 6 + 1);
    }

    #[test]
    fn hex_variants_agree() {
        for lit in ["f00", "#f00", "ff0000", "#ff0000", "FF0000", "#F00"] {
            assert_eq!(parse_hex(lit), Ok(196), "{lit}");
        }
        assert_eq!(parse_hex("0ff"), Ok(51));
        assert_eq!(parse_hex("#00f"), Ok(21));
        assert_eq!(parse_hex("000000"), Ok(16));
        assert_eq!(parse_hex("ffffff"), Ok(231));
    }

    #[test]
    fn hex_rejects_malformed_input() {
        for lit in ["", "#", "ff", "ff00001", "gggggg", "ff00gg", "##f00", "f 0", "éé"] {
            assert!(
                matches!(parse_hex(lit), Err(CoreError::InvalidHexFormat { .. })),
                "{lit:?} should be rejected"
            );
        }
    }
}
