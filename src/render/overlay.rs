use image::{GrayImage, Luma, Rgba};
use imageproc::drawing::{Canvas, draw_filled_ellipse_mut};

pub const HIGHLIGHT: Rgba<u8> = Rgba([255, 255, 255, 30]);
pub const SHADE: Rgba<u8> = Rgba([0, 0, 0, 20]);

/// Axis-aligned ellipse given by its bounding box corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EllipseBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl EllipseBox {
    pub fn center(&self) -> (i32, i32) {
        ((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }

    pub fn radii(&self) -> (i32, i32) {
        ((self.right - self.left) / 2, (self.bottom - self.top) / 2)
    }
}

/// Circle hanging off the top-right corner
pub fn highlight_box(width: u32, _height: u32) -> EllipseBox {
    let w = width as i32;
    EllipseBox { left: w - 200, top: -100, right: w + 100, bottom: 200 }
}

/// Circle hanging off the bottom-left corner
pub fn shade_box(_width: u32, height: u32) -> EllipseBox {
    let h = height as i32;
    EllipseBox { left: -100, top: h - 200, right: 200, bottom: h + 100 }
}

/// Rasterize `bounds` into a canvas-sized coverage mask.
/// The ellipse routine may visit a pixel more than once, so it never draws
/// a translucent color directly.
fn ellipse_mask(width: u32, height: u32, bounds: EllipseBox) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    let (rx, ry) = bounds.radii();
    draw_filled_ellipse_mut(&mut mask, bounds.center(), rx, ry, Luma([255]));
    mask
}

/// Blend `color` exactly once into every pixel covered by `bounds`
fn fill_ellipse<C>(canvas: &mut C, bounds: EllipseBox, color: Rgba<u8>)
where
    C: Canvas<Pixel = Rgba<u8>>,
{
    let (width, height) = canvas.dimensions();
    let mask = ellipse_mask(width, height, bounds);
    for (x, y, coverage) in mask.enumerate_pixels() {
        if coverage[0] > 0 {
            canvas.draw_pixel(x, y, color);
        }
    }
}

/// Draw the two decorative circles; parts outside the canvas are clipped
pub fn draw_overlay<C>(canvas: &mut C)
where
    C: Canvas<Pixel = Rgba<u8>>,
{
    let (width, height) = canvas.dimensions();
    fill_ellipse(canvas, highlight_box(width, height), HIGHLIGHT);
    fill_ellipse(canvas, shade_box(width, height), SHADE);
}
