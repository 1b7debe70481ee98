//! Cell shape strategies.
//!
//! A [`Shape`] paints a single cell into the canvas. The renderer paints the
//! background first, so a shape only has to cover the pixels it wants in the
//! foreground color.
use image::{Rgba, RgbaImage};

/// Paints one matrix cell.
///
/// `(x, y)` is the cell's top-left pixel and `width` its side length in
/// pixels. Implementations must not write outside
/// `[x, x + width) x [y, y + width)`.
pub trait Shape: Send + Sync {
    fn draw(&self, canvas: &mut RgbaImage, x: u32, y: u32, width: u32, color: Rgba<u8>);

    /// Paints a cell that belongs to a finder pattern. Defaults to [`Shape::draw`].
    fn draw_finder(&self, canvas: &mut RgbaImage, x: u32, y: u32, width: u32, color: Rgba<u8>) {
        self.draw(canvas, x, y, width, color);
    }
}

/// Fills the whole cell square. This is the default shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rectangle;

impl Shape for Rectangle {
    fn draw(&self, canvas: &mut RgbaImage, x: u32, y: u32, width: u32, color: Rgba<u8>) {
        let (x_end, y_end) = clip(canvas, x, y, width);
        for py in y..y_end {
            for px in x..x_end {
                canvas.put_pixel(px, py, color);
            }
        }
    }
}

/// Fills the circle inscribed in the cell, leaving the corners untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Circle;

impl Shape for Circle {
    fn draw(&self, canvas: &mut RgbaImage, x: u32, y: u32, width: u32, color: Rgba<u8>) {
        let radius = width as f32 / 2.0;
        let cx = x as f32 + radius;
        let cy = y as f32 + radius;
        let (x_end, y_end) = clip(canvas, x, y, width);

        for py in y..y_end {
            for px in x..x_end {
                // sample at the pixel center
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= radius * radius {
                    canvas.put_pixel(px, py, color);
                }
            }
        }
    }
}

/// Exclusive end coordinates of the cell, clipped to the canvas.
fn clip(canvas: &RgbaImage, x: u32, y: u32, width: u32) -> (u32, u32) {
    let x_end = x.saturating_add(width).min(canvas.width());
    let y_end = y.saturating_add(width).min(canvas.height());
    (x_end, y_end)
}
