use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::Rgba;
use imageproc::drawing::{Canvas, draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use std::path::Path;
use tracing::{debug, warn};

/// Side length of a built-in bitmap glyph before scaling
const BITMAP_GLYPH_SIZE: u32 = 8;

/// A font that can measure and draw a single line of text
pub enum LabelFont {
    TrueType(FontVec),
    /// Built-in 8x8 bitmap glyphs, scaled up to roughly the requested size
    Bitmap,
}

impl LabelFont {
    /// Load a TrueType/OpenType font from disk
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read(path)
            .map_err(|e| anyhow::anyhow!("Failed to read font {}: {}", path.display(), e))?;
        let font = FontVec::try_from_vec(data)
            .map_err(|e| anyhow::anyhow!("Failed to parse font {}: {}", path.display(), e))?;
        Ok(Self::TrueType(font))
    }

    pub fn is_bitmap(&self) -> bool {
        matches!(self, Self::Bitmap)
    }

    /// Height of one line box (ascent to descent) at `px`
    pub fn line_height(&self, px: f32) -> u32 {
        match self {
            Self::TrueType(font) => {
                let scaled = font.as_scaled(PxScale::from(px));
                (scaled.ascent() - scaled.descent()).ceil() as u32
            }
            Self::Bitmap => BITMAP_GLYPH_SIZE * bitmap_scale(px),
        }
    }

    /// Advance width of `line` at `px`, kerning included
    pub fn line_width(&self, px: f32, line: &str) -> u32 {
        match self {
            Self::TrueType(font) => {
                let scaled = font.as_scaled(PxScale::from(px));
                let mut width = 0.0f32;
                let mut last = None;
                for c in line.chars() {
                    let id = scaled.glyph_id(c);
                    if let Some(prev) = last {
                        width += scaled.kern(prev, id);
                    }
                    width += scaled.h_advance(id);
                    last = Some(id);
                }
                width.ceil() as u32
            }
            Self::Bitmap => line.chars().count() as u32 * BITMAP_GLYPH_SIZE * bitmap_scale(px),
        }
    }

    /// Draw `line` with its line box's top-left corner at (x, y)
    pub fn draw_line<C>(&self, canvas: &mut C, color: Rgba<u8>, x: i32, y: i32, px: f32, line: &str)
    where
        C: Canvas<Pixel = Rgba<u8>>,
    {
        match self {
            Self::TrueType(font) => {
                draw_text_mut(canvas, color, x, y, PxScale::from(px), font, line)
            }
            Self::Bitmap => draw_bitmap_line(canvas, color, x, y, bitmap_scale(px), line),
        }
    }
}

/// Integer upscale factor that brings an 8px glyph closest to `px`
fn bitmap_scale(px: f32) -> u32 {
    ((px / BITMAP_GLYPH_SIZE as f32).round() as u32).max(1)
}

fn draw_bitmap_line<C>(canvas: &mut C, color: Rgba<u8>, x: i32, y: i32, scale: u32, line: &str)
where
    C: Canvas<Pixel = Rgba<u8>>,
{
    let cell = (BITMAP_GLYPH_SIZE * scale) as i32;
    for (i, c) in line.chars().enumerate() {
        // Characters outside basic Latin render as blanks
        let Some(glyph) = BASIC_FONTS.get(c) else {
            continue;
        };
        let origin_x = x + i as i32 * cell;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..BITMAP_GLYPH_SIZE {
                // Bit 0 is the leftmost pixel
                if bits & (1u8 << col) == 0 {
                    continue;
                }
                let px = origin_x + (col * scale) as i32;
                let py = y + row as i32 * scale as i32;
                draw_filled_rect_mut(canvas, Rect::at(px, py).of_size(scale, scale), color);
            }
        }
    }
}

/// The two faces used on every placeholder
pub struct FontSet {
    /// Bold face for the centered label
    pub label: LabelFont,
    /// Regular face for the category tag
    pub category: LabelFont,
}

impl FontSet {
    /// Try the bold and regular faces; if either is unusable both fall back
    /// to the built-in bitmap font.
    pub fn load(bold: &Path, regular: &Path) -> Self {
        match (LabelFont::load(bold), LabelFont::load(regular)) {
            (Ok(label), Ok(category)) => {
                debug!(bold = %bold.display(), regular = %regular.display(), "loaded fonts");
                Self { label, category }
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!("{e}; using built-in bitmap font");
                Self::fallback()
            }
        }
    }

    pub fn fallback() -> Self {
        Self {
            label: LabelFont::Bitmap,
            category: LabelFont::Bitmap,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.label.is_bitmap() && self.category.is_bitmap()
    }
}
