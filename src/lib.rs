//! # qirender
//!
//! A Rust library for rendering finished QR code matrices into raster images.
//!
//! `qirender` does not encode data. It takes a matrix of cell states from any QR encoder and
//! controls how it is painted: which colors are used for background, data and finder cells,
//! what shape each cell is drawn as, whether a logo sits in the center, and which image format
//! the result is written in.
//!
//! ## Features
//!
//! - Per-configuration color table, so concurrent renders never share colors.
//! - Square or circular cells, or any shape implementing [`shape::Shape`].
//! - JPEG and PNG output, or any encoder implementing [`encoder::ImageEncoder`].
//! - Logos loaded from memory or from JPEG/PNG files, with explicit or lenient error handling.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qirender = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Render a styled QR code to PNG bytes:
//!
//! ```rust
//! use qirender::{helper::to_bytes, matrix::Matrix, options::RenderConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // any encoder's dark-module predicate works here
//!     let matrix = Matrix::from_modules(21, |x, y| ((x ^ y) & 1) == 0);
//!
//!     let config = RenderConfig::builder()
//!         .foreground_hex("#ff6f00")?
//!         .circle_shape()
//!         .cell_width(10)?
//!         .builtin_encoder_named("png")?
//!         .build();
//!
//!     let png = to_bytes(&matrix, &config)?;
//!     assert!(!png.is_empty());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: Cell states and the matrix consumed by the renderer.
//! - [`color`]: The color table and hex color parsing.
//! - [`shape`]: Cell shape strategies.
//! - [`encoder`]: Output image encoders.
//! - [`logo`]: Logo loading.
//! - [`options`]: Render configuration and its builder.
//! - [`render`]: Painting a matrix into a bitmap.
//! - [`helper`]: Convenience wrappers for bytes and files.

#![forbid(unsafe_code)]

pub mod color;
pub mod encoder;
pub mod error;
pub mod helper;
pub mod logo;
pub mod matrix;
pub mod options;
pub mod render;
pub mod shape;

pub use error::{ConfigError, LogoError, RenderError};
pub use options::{RenderConfig, RenderConfigBuilder};
