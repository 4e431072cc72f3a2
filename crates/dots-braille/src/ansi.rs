//! Séquences SGR ANSI 256 couleurs.

use std::fmt::Write;

/// Reset de tous les attributs.
pub const RESET: &str = "\x1b[0m";

/// Blanc système (15), utilisé pour le cadre.
pub const FRAME_WHITE: &str = "\x1b[38;5;15m";

/// Foreground escape `ESC[38;5;{code}m`.
///
/// # Example
/// ```
/// use dots_braille::ansi::fg;
/// assert_eq!(fg(196), "\x1b[38;5;196m");
/// ```
#[must_use]
pub fn fg(code: u8) -> String {
    let mut out = String::with_capacity(11);
    push_sgr(&mut out, code, None);
    out
}

/// Foreground + background escape `ESC[38;5;{fg};48;5;{bg}m`.
///
/// # Example
/// ```
/// use dots_braille::ansi::fg_bg;
/// assert_eq!(fg_bg(196, 21), "\x1b[38;5;196;48;5;21m");
/// ```
#[must_use]
pub fn fg_bg(fg: u8, bg: u8) -> String {
    let mut out = String::with_capacity(20);
    push_sgr(&mut out, fg, Some(bg));
    out
}

/// Seule source des octets SGR couleur.
fn push_sgr(out: &mut String, fg: u8, bg: Option<u8>) {
    // Writing into a String cannot fail.
    let _ = match bg {
        Some(bg) => write!(out, "\x1b[38;5;{fg};48;5;{bg}m"),
        None => write!(out, "\x1b[38;5;{fg}m"),
    };
}

/// Append one colored glyph (`escape + ch + reset`) to `out`.
///
/// # Example
/// ```
/// use dots_braille::ansi::push_colored;
/// let mut line = String::new();
/// push_colored(&mut line, '⣿', 46, Some(16));
/// assert_eq!(line, "\x1b[38;5;46;48;5;16m⣿\x1b[0m");
/// ```
pub fn push_colored(out: &mut String, ch: char, fg: u8, bg: Option<u8>) {
    push_sgr(out, fg, bg);
    out.push(ch);
    out.push_str(RESET);
}

/// Visible character count, skipping escape sequences.
///
/// An escape runs from `ESC` up to and including the next `m`.
///
/// # Example
/// ```
/// use dots_braille::ansi::visible_width;
/// assert_eq!(visible_width("\x1b[38;5;196m⣿\x1b[0m⠀"), 2);
/// ```
#[must_use]
pub fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
