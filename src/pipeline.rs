use crate::error::{PlaceholderError, Result};
use crate::models::PlaceholderSpec;
use image::{DynamicImage, Rgba, RgbImage, RgbaImage};
use imageproc::drawing::Blend;
use std::sync::Arc;
use tracing::debug;

/// Drawing surface for one placeholder.
/// Draws through `Blend` so translucent colors composite over what is already there.
pub type Surface = Blend<RgbaImage>;

/// Context available to all paint steps
#[derive(Clone, Debug)]
pub struct PaintContext {
    pub width: u32,
    pub height: u32,
}

/// Trait that all paint steps must implement
pub trait PaintStep: Send + Sync {
    /// Draw this step's contribution for `spec` onto the surface
    fn paint(
        &self,
        surface: &mut Surface,
        spec: &PlaceholderSpec,
        context: &PaintContext,
    ) -> anyhow::Result<()>;

    /// Human-readable name for this step (used in logs and errors)
    fn name(&self) -> &str;
}

/// Composable paint pipeline builder
#[derive(Clone)]
pub struct Pipeline {
    steps: Vec<Arc<dyn PaintStep>>,
    context: PaintContext,
}

impl Pipeline {
    /// Create an empty pipeline for canvases of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            steps: Vec::new(),
            context: PaintContext { width, height },
        }
    }

    /// Helper method to add a step from a Box (for convenience)
    pub fn add_step_boxed(mut self, step: Box<dyn PaintStep>) -> Self {
        self.steps.push(Arc::from(step));
        self
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step in order on a fresh canvas and flatten it to RGB
    pub fn render(&self, spec: &PlaceholderSpec) -> Result<RgbImage> {
        let mut surface = Blend(RgbaImage::from_pixel(
            self.context.width,
            self.context.height,
            Rgba([0, 0, 0, 255]),
        ));

        for step in &self.steps {
            debug!(file = spec.filename, step = step.name(), "painting");
            step.paint(&mut surface, spec, &self.context)
                .map_err(|source| PlaceholderError::Paint {
                    step: step.name().to_string(),
                    source,
                })?;
        }

        Ok(DynamicImage::ImageRgba8(surface.0).into_rgb8())
    }
}
