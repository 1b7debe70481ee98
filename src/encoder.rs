//! Output image encoders.
//!
//! An [`ImageEncoder`] serializes the rendered bitmap into a byte sink. JPEG
//! and PNG are built in; anything else can be plugged in by implementing the
//! trait.
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

use image::codecs::jpeg;
use image::codecs::png;
use image::{DynamicImage, ExtendedColorType, ImageEncoder as _, ImageFormat, RgbaImage};

use crate::error::{ConfigError, RenderError};

/// JPEG quality used by [`JpegEncoder`]; the `image` crate's default.
pub const JPEG_QUALITY: u8 = 75;

/// Serializes a finished bitmap into `sink`.
///
/// Failures must be returned, never swallowed.
pub trait ImageEncoder: Send + Sync {
    fn encode(&self, image: &RgbaImage, sink: &mut dyn Write) -> Result<(), RenderError>;

    /// File extension for this format, without the dot, if there is a conventional one.
    fn extension(&self) -> Option<&str> {
        None
    }
}

/// Baseline JPEG at [`JPEG_QUALITY`]. The alpha channel is discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegEncoder;

impl ImageEncoder for JpegEncoder {
    fn encode(&self, image: &RgbaImage, sink: &mut dyn Write) -> Result<(), RenderError> {
        // JPEG has no alpha channel
        let rgb = DynamicImage::ImageRgba8(image.clone()).into_rgb8();
        let mut encoder = jpeg::JpegEncoder::new_with_quality(sink, JPEG_QUALITY);
        encoder.encode(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)?;
        Ok(())
    }

    fn extension(&self) -> Option<&str> {
        Some("jpg")
    }
}

/// Lossless RGBA PNG with default compression.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl ImageEncoder for PngEncoder {
    fn encode(&self, image: &RgbaImage, sink: &mut dyn Write) -> Result<(), RenderError> {
        png::PngEncoder::new(sink).write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )?;
        Ok(())
    }

    fn extension(&self) -> Option<&str> {
        Some("png")
    }
}

/// The built-in output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jpeg,
    Png,
}

impl OutputFormat {
    /// The built-in encoder for this format.
    pub fn encoder(self) -> Arc<dyn ImageEncoder> {
        match self {
            OutputFormat::Jpeg => Arc::new(JpegEncoder),
            OutputFormat::Png => Arc::new(PngEncoder),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Jpeg => f.write_str("JPEG"),
            OutputFormat::Png => f.write_str("PNG"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "png" => Ok(OutputFormat::Png),
            _ => Err(ConfigError::UnsupportedFormat(name.to_string())),
        }
    }
}

impl TryFrom<ImageFormat> for OutputFormat {
    type Error = ConfigError;

    fn try_from(format: ImageFormat) -> Result<Self, Self::Error> {
        match format {
            ImageFormat::Jpeg => Ok(OutputFormat::Jpeg),
            ImageFormat::Png => Ok(OutputFormat::Png),
            other => Err(ConfigError::UnsupportedFormat(format!("{other:?}"))),
        }
    }
}
