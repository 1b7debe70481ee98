//! Error types for configuring and rendering QR images.
//!
//! Three enums keep the three failure classes apart so callers can match on
//! them: configuration mistakes, logo loading failures and render-time
//! failures.

use std::io;
use std::path::PathBuf;

/// A configuration step was given a value it can never accept.
///
/// These are programming errors on the caller's side. Returning one from a
/// builder method through `?` stops the configuration before any later step
/// is applied.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported image format: {0} (expected JPEG or PNG)")]
    UnsupportedFormat(String),

    #[error("invalid hex color {0:?}: expected #RGB, #RRGGBB or #RRGGBBAA")]
    InvalidHexColor(String),

    #[error("cell width must be at least 1 pixel")]
    ZeroCellWidth,
}

/// Loading a logo image failed.
#[derive(Debug, thiserror::Error)]
pub enum LogoError {
    #[error("logo file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("could not read logo file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not decode logo: {source}")]
    Decode {
        #[source]
        source: image::ImageError,
    },
}

/// Rendering a matrix or encoding the resulting bitmap failed.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("matrix has no cells")]
    EmptyMatrix,

    #[error("logo is {width}x{height} but may be at most {max}px on each side")]
    LogoTooLarge { width: u32, height: u32, max: u32 },

    #[error("image too large: {0}px per side")]
    TooLarge(u64),

    #[error("encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
