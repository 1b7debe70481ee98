//! Paints a [`Matrix`] into a bitmap using a [`RenderConfig`].
use std::io::Write;

use image::{imageops, RgbaImage};

use crate::error::RenderError;
use crate::matrix::{CellState, Matrix};
use crate::options::RenderConfig;

/// Largest logo side allowed, as a fraction of the image width.
const LOGO_MAX_FRACTION: u32 = 5;

/// Largest canvas rendered, in pixels (1 GiB of RGBA).
pub const MAX_PIXELS: u64 = 1 << 28;

/// Renders `matrix` into an RGBA bitmap.
///
/// The canvas is `(size + 2 * quiet_zone) * cell_width` pixels square. It is
/// filled with the background color, then every foreground and finder cell is
/// painted with the configured shape, and finally the logo (if any) is
/// composited in the center.
///
/// # Errors
///
/// * [`RenderError::EmptyMatrix`] for a zero-sized matrix.
/// * [`RenderError::TooLarge`] if the canvas would exceed [`MAX_PIXELS`].
/// * [`RenderError::LogoTooLarge`] if either logo side exceeds one-fifth of
///   the image width.
///
/// # Example
///
/// ```rust
/// use qirender::matrix::Matrix;
/// use qirender::options::RenderConfig;
/// use qirender::render::render;
///
/// let matrix = Matrix::from_modules(21, |x, y| x == y);
/// let config = RenderConfig::builder().cell_width(2).unwrap().quiet_zone(0).build();
/// let img = render(&matrix, &config).unwrap();
/// assert_eq!(img.dimensions(), (42, 42));
/// ```
pub fn render(matrix: &Matrix, config: &RenderConfig) -> Result<RgbaImage, RenderError> {
    let size = matrix.size();
    if size == 0 {
        return Err(RenderError::EmptyMatrix);
    }

    let cell_width = config.cell_width();
    let cells = u64::from(size) + 2 * u64::from(config.quiet_zone());
    let side = cells.checked_mul(u64::from(cell_width));
    let side = match side.and_then(|s| s.checked_mul(s)) {
        Some(pixels) if pixels <= MAX_PIXELS => side.unwrap_or_default() as u32,
        _ => return Err(RenderError::TooLarge(side.unwrap_or(u64::MAX))),
    };

    let logo = match config.logo() {
        Some(logo) => {
            let max = side / LOGO_MAX_FRACTION;
            if logo.width() > max || logo.height() > max {
                return Err(RenderError::LogoTooLarge {
                    width: logo.width(),
                    height: logo.height(),
                    max,
                });
            }
            Some(logo.to_rgba8())
        }
        None => None,
    };

    log::debug!("rendering {}x{} matrix into {}x{} pixels", size, size, side, side);

    let colors = config.colors();
    let shape = config.shape();
    let mut canvas = RgbaImage::from_pixel(side, side, colors.color_for(CellState::Background));

    for (x, y, state) in matrix.iter() {
        let px = (x + config.quiet_zone()) * cell_width;
        let py = (y + config.quiet_zone()) * cell_width;
        let color = colors.color_for(state);
        match state {
            CellState::Background => {}
            CellState::Foreground => shape.draw(&mut canvas, px, py, cell_width, color),
            CellState::Finder => shape.draw_finder(&mut canvas, px, py, cell_width, color),
        }
    }

    if let Some(logo) = logo {
        let ox = (side - logo.width()) / 2;
        let oy = (side - logo.height()) / 2;
        imageops::overlay(&mut canvas, &logo, i64::from(ox), i64::from(oy));
    }

    Ok(canvas)
}

/// Renders `matrix` and writes it to `sink` with the configured encoder.
pub fn encode<W: Write>(
    matrix: &Matrix,
    config: &RenderConfig,
    mut sink: W,
) -> Result<(), RenderError> {
    let image = render(matrix, config)?;
    config.encoder().encode(&image, &mut sink)?;
    sink.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, WHITE};
    use image::{DynamicImage, Rgba};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

    fn config() -> crate::options::RenderConfigBuilder {
        RenderConfig::builder().cell_width(4).unwrap().quiet_zone(1)
    }

    #[test]
    fn test_empty_matrix() {
        let err = render(&Matrix::new(0), &RenderConfig::default()).unwrap_err();
        assert!(matches!(err, RenderError::EmptyMatrix));
    }

    #[test]
    fn test_dimensions_include_quiet_zone() {
        let img = render(&Matrix::new(21), &config().build()).unwrap();
        assert_eq!(img.dimensions(), (23 * 4, 23 * 4));
        assert!(img.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn test_cells_use_table_colors() {
        let mut m = Matrix::new(3);
        m.set(0, 0, CellState::Finder);
        m.set(1, 1, CellState::Foreground);
        let img = render(&m, &config().foreground(RED).background(GREEN).build()).unwrap();

        // quiet zone
        assert_eq!(*img.get_pixel(0, 0), GREEN);
        // finder cell at (0, 0) starts at pixel 4
        assert_eq!(*img.get_pixel(4, 4), RED);
        assert_eq!(*img.get_pixel(7, 7), RED);
        assert_eq!(*img.get_pixel(8, 4), GREEN);
        // foreground cell at (1, 1)
        assert_eq!(*img.get_pixel(9, 9), RED);
    }

    #[test]
    fn test_circle_corners_show_background() {
        let mut m = Matrix::new(1);
        m.set(0, 0, CellState::Foreground);
        let cfg = RenderConfig::builder()
            .cell_width(10)
            .unwrap()
            .quiet_zone(0)
            .circle_shape()
            .build();
        let img = render(&m, &cfg).unwrap();
        assert_eq!(*img.get_pixel(0, 0), WHITE);
        assert_eq!(*img.get_pixel(5, 5), BLACK);
    }

    #[test]
    fn test_logo_is_centered() {
        let logo = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, RED));
        let cfg = RenderConfig::builder()
            .cell_width(1)
            .unwrap()
            .quiet_zone(0)
            .logo(logo)
            .build();
        let img = render(&Matrix::new(21), &cfg).unwrap();
        assert_eq!(*img.get_pixel(10, 10), RED);
        assert_eq!(*img.get_pixel(8, 8), RED);
        assert_eq!(*img.get_pixel(7, 7), WHITE);
        assert_eq!(*img.get_pixel(12, 12), WHITE);
    }

    #[test]
    fn test_oversized_logo_rejected() {
        let logo = DynamicImage::new_rgba8(5, 2);
        let cfg = RenderConfig::builder()
            .cell_width(1)
            .unwrap()
            .quiet_zone(0)
            .logo(logo)
            .build();
        match render(&Matrix::new(21), &cfg) {
            Err(RenderError::LogoTooLarge { width, max, .. }) => {
                assert_eq!(width, 5);
                assert_eq!(max, 4);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_size_overflow() {
        let cfg = RenderConfig::builder().cell_width(u32::MAX).unwrap().build();
        assert!(matches!(render(&Matrix::new(21), &cfg), Err(RenderError::TooLarge(_))));

        let cfg = RenderConfig::builder()
            .cell_width(u32::MAX)
            .unwrap()
            .quiet_zone(u32::MAX)
            .build();
        assert!(matches!(render(&Matrix::new(1), &cfg), Err(RenderError::TooLarge(u64::MAX))));
    }

    #[test]
    fn test_canvas_over_pixel_budget() {
        // side fits in u32 but side * side * 4 bytes cannot be allocated
        let cfg = RenderConfig::builder().cell_width(100_000_000).unwrap().build();
        match render(&Matrix::new(21), &cfg) {
            Err(RenderError::TooLarge(side)) => assert_eq!(side, 29 * 100_000_000),
            other => panic!("unexpected {other:?}"),
        }

        // 16385px per side is one row over the budget
        let cfg = RenderConfig::builder().cell_width(1).unwrap().quiet_zone(8192).build();
        match render(&Matrix::new(1), &cfg) {
            Err(RenderError::TooLarge(side)) => assert_eq!(side, 16_385),
            other => panic!("unexpected {other:?}"),
        }
        let cfg = RenderConfig::builder().cell_width(1).unwrap().quiet_zone(8).build();
        assert!(render(&Matrix::new(1), &cfg).is_ok());
    }
}
