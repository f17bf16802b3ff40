use crate::config::{CATEGORY_FONT_PX, LABEL_FONT_PX};
use crate::fonts::FontSet;
use crate::models::PlaceholderSpec;
use crate::pipeline::{PaintContext, PaintStep, Surface};
use crate::render::{gradient, overlay, text};
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

/// Fill the canvas with the record's vertical gradient
pub struct GradientStep;

impl PaintStep for GradientStep {
    fn paint(
        &self,
        surface: &mut Surface,
        spec: &PlaceholderSpec,
        _context: &PaintContext,
    ) -> Result<()> {
        // Opaque fill, so write straight to the image instead of blending
        gradient::fill_gradient(&mut surface.0, spec.gradient_start, spec.gradient_end);
        Ok(())
    }

    fn name(&self) -> &str {
        "Gradient Fill"
    }
}

/// Translucent circles in the top-right and bottom-left corners
pub struct OverlayStep;

impl PaintStep for OverlayStep {
    fn paint(
        &self,
        surface: &mut Surface,
        _spec: &PlaceholderSpec,
        _context: &PaintContext,
    ) -> Result<()> {
        overlay::draw_overlay(surface);
        Ok(())
    }

    fn name(&self) -> &str {
        "Decorative Overlay"
    }
}

/// Centered two-line label with drop shadow
pub struct LabelStep {
    pub fonts: Arc<FontSet>,
    pub px: f32,
}

impl LabelStep {
    pub fn new(fonts: Arc<FontSet>) -> Self {
        Self { fonts, px: LABEL_FONT_PX }
    }
}

impl PaintStep for LabelStep {
    fn paint(
        &self,
        surface: &mut Surface,
        spec: &PlaceholderSpec,
        _context: &PaintContext,
    ) -> Result<()> {
        let extent = text::measure(&self.fonts.label, self.px, spec.text);
        debug!(file = spec.filename, width = extent.width, height = extent.height, "label extent");
        text::draw_label(surface, &self.fonts.label, self.px, spec.text);
        Ok(())
    }

    fn name(&self) -> &str {
        "Label Text"
    }
}

/// Uppercased category tag
pub struct CategoryStep {
    pub fonts: Arc<FontSet>,
    pub px: f32,
}

impl CategoryStep {
    pub fn new(fonts: Arc<FontSet>) -> Self {
        Self { fonts, px: CATEGORY_FONT_PX }
    }
}

impl PaintStep for CategoryStep {
    fn paint(
        &self,
        surface: &mut Surface,
        spec: &PlaceholderSpec,
        _context: &PaintContext,
    ) -> Result<()> {
        text::draw_category(surface, &self.fonts.category, self.px, &spec.category_label());
        Ok(())
    }

    fn name(&self) -> &str {
        "Category Tag"
    }
}
