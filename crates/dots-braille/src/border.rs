use crate::ansi::{FRAME_WHITE, RESET, visible_width};

/// Wrap rendered lines in a one-cell box-drawing border.
///
/// The border width follows the visible width of the first line, escape
/// sequences excluded. With `color`, every border run is painted white and
/// followed by a reset; without it, no escape is emitted at all.
///
/// # Example
/// ```
/// use dots_braille::border::add_frame;
/// let framed = add_frame(vec!["⣿⣿".to_string()], false);
/// assert_eq!(framed, vec!["┌──┐", "│⣿⣿│", "└──┘"]);
/// ```
#[must_use]
pub fn add_frame(lines: Vec<String>, color: bool) -> Vec<String> {
    let Some(first) = lines.first() else {
        return lines;
    };

    let width = visible_width(first);
    let (open, close) = if color { (FRAME_WHITE, RESET) } else { ("", "") };
    let rule = "─".repeat(width);

    let mut framed = Vec::with_capacity(lines.len() + 2);
    framed.push(format!("{open}┌{rule}┐{close}"));
    for line in &lines {
        framed.push(format!("{open}│{close}{line}{open}│{close}"));
    }
    framed.push(format!("{open}└{rule}┘{close}"));
    framed
}
