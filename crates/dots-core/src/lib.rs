/// Types, configuration and pure algorithms shared by the dots workspace.
///
/// Nothing in this crate performs I/O: image decoding, resampling backends
/// and terminal probing live in the other crates.

pub mod color;
pub mod config;
pub mod dimensions;
pub mod error;
pub mod frame;
pub mod traits;

pub use config::{Background, RenderEnv, RenderOptions, ResolvedOptions};
pub use error::CoreError;
pub use frame::{Block, PixelGrid, Rgb};
pub use traits::Resample;
