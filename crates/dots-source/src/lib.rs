/// Pixel sources for dots: image decoding and resampling.

pub mod image;
pub mod resize;
