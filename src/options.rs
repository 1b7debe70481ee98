//! Render configuration and its builder.
//!
//! A [`RenderConfig`] starts from defaults and is shaped by a chain of
//! builder calls. Calls are applied in the order written and a later call on
//! the same setting replaces the earlier one.
//!
//! # Example
//!
//! ```rust
//! use qirender::encoder::OutputFormat;
//! use qirender::options::RenderConfig;
//!
//! # fn main() -> Result<(), qirender::error::ConfigError> {
//! let config = RenderConfig::builder()
//!     .foreground_hex("#1a237e")?
//!     .background_hex("#fafafa")?
//!     .circle_shape()
//!     .cell_width(8)?
//!     .builtin_encoder(OutputFormat::Png)
//!     .build();
//! assert_eq!(config.cell_width(), 8);
//! # Ok(())
//! # }
//! ```
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use image::{DynamicImage, Rgba};

use crate::color::{parse_hex, ColorTable};
use crate::encoder::{ImageEncoder, OutputFormat};
use crate::error::{ConfigError, LogoError};
use crate::logo::{self, LogoFormat};
use crate::matrix::CellState;
use crate::shape::{Circle, Rectangle, Shape};

/// Default side length of one cell, in pixels.
pub const DEFAULT_CELL_WIDTH: u32 = 20;

/// Default quiet zone around the matrix, in cells.
pub const DEFAULT_QUIET_ZONE: u32 = 4;

/// Settings for one rendering pass.
#[derive(Clone)]
pub struct RenderConfig {
    colors: ColorTable,
    logo: Option<DynamicImage>,
    cell_width: u32,
    quiet_zone: u32,
    shape: Arc<dyn Shape>,
    encoder: Arc<dyn ImageEncoder>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            colors: ColorTable::default(),
            logo: None,
            cell_width: DEFAULT_CELL_WIDTH,
            quiet_zone: DEFAULT_QUIET_ZONE,
            shape: Arc::new(Rectangle),
            encoder: OutputFormat::default().encoder(),
        }
    }
}

impl fmt::Debug for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderConfig")
            .field("colors", &self.colors)
            .field("logo", &self.logo.as_ref().map(|l| (l.width(), l.height())))
            .field("cell_width", &self.cell_width)
            .field("quiet_zone", &self.quiet_zone)
            .finish_non_exhaustive()
    }
}

impl RenderConfig {
    /// Starts a builder from the default configuration.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    pub fn background(&self) -> Rgba<u8> {
        self.colors.color_for(CellState::Background)
    }

    pub fn foreground(&self) -> Rgba<u8> {
        self.colors.color_for(CellState::Foreground)
    }

    pub fn logo(&self) -> Option<&DynamicImage> {
        self.logo.as_ref()
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    pub fn quiet_zone(&self) -> u32 {
        self.quiet_zone
    }

    pub fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }

    pub fn encoder(&self) -> &dyn ImageEncoder {
        self.encoder.as_ref()
    }
}

/// Builds a [`RenderConfig`] one step at a time.
///
/// Fallible steps return `Result<Self, _>` so a chain stops at the first
/// bad value. Logo loading through [`RenderConfigBuilder::logo_file`] is the
/// exception: it logs the failure and keeps going.
#[derive(Debug, Clone, Default)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn background(mut self, color: Rgba<u8>) -> Self {
        self.config.colors.set(CellState::Background, color);
        self
    }

    pub fn background_hex(self, hex: &str) -> Result<Self, ConfigError> {
        Ok(self.background(parse_hex(hex)?))
    }

    /// Sets the color of data modules and finder patterns alike.
    pub fn foreground(mut self, color: Rgba<u8>) -> Self {
        self.config.colors.set(CellState::Foreground, color);
        self.config.colors.set(CellState::Finder, color);
        self
    }

    pub fn foreground_hex(self, hex: &str) -> Result<Self, ConfigError> {
        Ok(self.foreground(parse_hex(hex)?))
    }

    /// Attaches a logo drawn centered over the code.
    ///
    /// The logo may be at most one-fifth of the final image width on each
    /// side; larger logos are rejected when rendering.
    pub fn logo(mut self, image: DynamicImage) -> Self {
        self.config.logo = Some(image);
        self
    }

    /// Loads a logo from `path`, or keeps the previous logo if that fails.
    ///
    /// The failure is reported with `log::warn!`. Use
    /// [`RenderConfigBuilder::try_logo_file`] to handle it instead.
    pub fn logo_file<P: AsRef<Path>>(self, path: P, format: LogoFormat) -> Self {
        let path = path.as_ref();
        match logo::load_logo_file(path, format) {
            Ok(image) => self.logo(image),
            Err(err) => {
                log::warn!("ignoring logo {}: {}", path.display(), err);
                self
            }
        }
    }

    /// Loads a logo from `path`, returning the failure to the caller.
    pub fn try_logo_file<P>(self, path: P, format: LogoFormat) -> Result<Self, LogoError>
    where
        P: AsRef<Path>,
    {
        Ok(self.logo(logo::load_logo_file(path, format)?))
    }

    /// Decodes a logo from memory, or keeps the previous logo if that fails.
    pub fn logo_bytes(self, bytes: &[u8], format: LogoFormat) -> Self {
        match logo::load_logo_bytes(bytes, format) {
            Ok(image) => self.logo(image),
            Err(err) => {
                log::warn!("ignoring logo: {}", err);
                self
            }
        }
    }

    /// Side length of one cell in pixels.
    pub fn cell_width(mut self, width: u32) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroCellWidth);
        }
        self.config.cell_width = width;
        Ok(self)
    }

    /// Width of the blank border around the matrix, in cells.
    pub fn quiet_zone(mut self, cells: u32) -> Self {
        self.config.quiet_zone = cells;
        self
    }

    pub fn rectangle_shape(self) -> Self {
        self.shape(Rectangle)
    }

    pub fn circle_shape(self) -> Self {
        self.shape(Circle)
    }

    pub fn shape<S: Shape + 'static>(mut self, shape: S) -> Self {
        self.config.shape = Arc::new(shape);
        self
    }

    /// Uses a caller-supplied shape. `None` leaves the current shape in place.
    pub fn custom_shape(mut self, shape: Option<Arc<dyn Shape>>) -> Self {
        if let Some(shape) = shape {
            self.config.shape = shape;
        }
        self
    }

    pub fn builtin_encoder(mut self, format: OutputFormat) -> Self {
        log::debug!("using built-in {} encoder", format);
        self.config.encoder = format.encoder();
        self
    }

    /// Selects a built-in encoder by name (`"jpeg"`, `"jpg"` or `"png"`).
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedFormat`] for any other name.
    pub fn builtin_encoder_named(self, name: &str) -> Result<Self, ConfigError> {
        Ok(self.builtin_encoder(name.parse()?))
    }

    pub fn encoder<E: ImageEncoder + 'static>(mut self, encoder: E) -> Self {
        self.config.encoder = Arc::new(encoder);
        self
    }

    /// Uses a caller-supplied encoder. `None` leaves the current encoder in place.
    pub fn custom_encoder(mut self, encoder: Option<Arc<dyn ImageEncoder>>) -> Self {
        if let Some(encoder) = encoder {
            self.config.encoder = encoder;
        }
        self
    }

    pub fn build(self) -> RenderConfig {
        self.config
    }
}
