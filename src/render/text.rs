use crate::fonts::LabelFont;
use image::Rgba;
use imageproc::drawing::Canvas;

/// Extra pixels between consecutive lines of a label
pub const LINE_SPACING: u32 = 4;

/// Labels sit this far above true center to leave room for the category tag
pub const LABEL_LIFT: i32 = 30;

pub const SHADOW_OFFSET: i32 = 3;
pub const SHADOW_COLOR: Rgba<u8> = Rgba([0, 0, 0, 128]);
pub const LABEL_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const CATEGORY_COLOR: Rgba<u8> = Rgba([255, 255, 255, 200]);

/// Distance of the category tag from the left and bottom edges
pub const CATEGORY_MARGIN_X: i32 = 30;
pub const CATEGORY_MARGIN_BOTTOM: i32 = 60;

/// Size of a (possibly multi-line) block of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// Measure `text` as lines split on `\n`: widest line by stacked line boxes
pub fn measure(font: &LabelFont, px: f32, text: &str) -> TextExtent {
    let line_height = font.line_height(px);
    let lines: Vec<&str> = text.split('\n').collect();
    let width = lines.iter().map(|l| font.line_width(px, l)).max().unwrap_or(0);
    let height = (line_height + LINE_SPACING) * (lines.len() as u32 - 1) + line_height;
    TextExtent { width, height }
}

/// Top-left corner that centers `extent` horizontally and lifts it above the vertical center
pub fn label_origin(width: u32, height: u32, extent: TextExtent) -> (i32, i32) {
    let x = (width as i32 - extent.width as i32).div_euclid(2);
    let y = (height as i32 - extent.height as i32).div_euclid(2) - LABEL_LIFT;
    (x, y)
}

pub fn category_origin(_width: u32, height: u32) -> (i32, i32) {
    (CATEGORY_MARGIN_X, height as i32 - CATEGORY_MARGIN_BOTTOM)
}

/// Draw `text` line by line, each left-aligned at `x`
pub fn draw_multiline<C>(
    canvas: &mut C,
    font: &LabelFont,
    px: f32,
    color: Rgba<u8>,
    x: i32,
    y: i32,
    text: &str,
) where
    C: Canvas<Pixel = Rgba<u8>>,
{
    let advance = (font.line_height(px) + LINE_SPACING) as i32;
    for (i, line) in text.split('\n').enumerate() {
        font.draw_line(canvas, color, x, y + i as i32 * advance, px, line);
    }
}

/// Centered label with a drop shadow
pub fn draw_label<C>(canvas: &mut C, font: &LabelFont, px: f32, text: &str)
where
    C: Canvas<Pixel = Rgba<u8>>,
{
    let (width, height) = canvas.dimensions();
    let (x, y) = label_origin(width, height, measure(font, px, text));
    draw_multiline(canvas, font, px, SHADOW_COLOR, x + SHADOW_OFFSET, y + SHADOW_OFFSET, text);
    draw_multiline(canvas, font, px, LABEL_COLOR, x, y, text);
}

/// Category tag in the bottom-left corner, drawn as given
pub fn draw_category<C>(canvas: &mut C, font: &LabelFont, px: f32, label: &str)
where
    C: Canvas<Pixel = Rgba<u8>>,
{
    let (width, height) = canvas.dimensions();
    let (x, y) = category_origin(width, height);
    draw_multiline(canvas, font, px, CATEGORY_COLOR, x, y, label);
}
