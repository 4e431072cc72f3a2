/// Braille conversion engine for dots.
///
/// Turns a pixel grid into lines of Unicode braille, optionally dithered,
/// colored with ANSI 256 escapes and framed.

pub mod ansi;
pub mod border;
pub mod braille;
pub mod compositor;
pub mod dither;

pub use compositor::Renderer;
