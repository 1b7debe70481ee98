//! Logo loading.
//!
//! Logos are decoded strictly in the requested format. Every failure is
//! returned as a [`LogoError`] so the caller decides whether a missing logo
//! matters; [`crate::options::RenderConfigBuilder::logo_file`] is the
//! lenient wrapper that only logs.
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::LogoError;

/// Formats a logo can be decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoFormat {
    Jpeg,
    Png,
}

impl From<LogoFormat> for ImageFormat {
    fn from(format: LogoFormat) -> Self {
        match format {
            LogoFormat::Jpeg => ImageFormat::Jpeg,
            LogoFormat::Png => ImageFormat::Png,
        }
    }
}

/// Opens and decodes a logo file.
///
/// # Errors
///
/// * [`LogoError::NotFound`] if nothing exists at `path`.
/// * [`LogoError::Io`] if the file exists but cannot be opened.
/// * [`LogoError::Decode`] if the content is not a valid image of `format`.
pub fn load_logo_file<P: AsRef<Path>>(
    path: P,
    format: LogoFormat,
) -> Result<DynamicImage, LogoError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LogoError::NotFound { path: path.to_path_buf() },
        _ => LogoError::Io { path: path.to_path_buf(), source },
    })?;
    load_logo_reader(BufReader::new(file), format)
}

/// Decodes a logo held in memory.
pub fn load_logo_bytes(bytes: &[u8], format: LogoFormat) -> Result<DynamicImage, LogoError> {
    load_logo_reader(Cursor::new(bytes), format)
}

/// Decodes a logo from any buffered reader.
pub fn load_logo_reader<R>(reader: R, format: LogoFormat) -> Result<DynamicImage, LogoError>
where
    R: BufRead + io::Seek,
{
    image::load(reader, format.into()).map_err(|source| LogoError::Decode { source })
}
