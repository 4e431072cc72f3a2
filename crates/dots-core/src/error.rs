use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Hex color literal is not 3 or 6 hex digits (after an optional `#`).
    #[error("Couleur hex invalide « {input} » : {reason}")]
    InvalidHexFormat {
        /// The literal as given by the caller.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// The resampling backend rejected the operation.
    #[error("Redimensionnement impossible : {0}")]
    Resample(String),

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),
}
