pub mod gradient;
pub mod overlay;
pub mod steps;
pub mod text;

use crate::fonts::FontSet;
use crate::pipeline::Pipeline;
use std::sync::Arc;
use steps::{CategoryStep, GradientStep, LabelStep, OverlayStep};

/// The standard placeholder look: gradient, circles, label, category tag
pub fn standard_pipeline(width: u32, height: u32, fonts: Arc<FontSet>) -> Pipeline {
    Pipeline::new(width, height)
        .add_step_boxed(Box::new(GradientStep))
        .add_step_boxed(Box::new(OverlayStep))
        .add_step_boxed(Box::new(LabelStep::new(fonts.clone())))
        .add_step_boxed(Box::new(CategoryStep::new(fonts)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PLACEHOLDERS;
    use image::Rgb;

    #[test]
    fn standard_pipeline_step_order() {
        let pipeline = standard_pipeline(800, 600, Arc::new(FontSet::fallback()));
        assert_eq!(
            pipeline.step_names(),
            vec!["Gradient Fill", "Decorative Overlay", "Label Text", "Category Tag"]
        );
    }

    #[test]
    fn photo1_corners_follow_gradient() {
        let pipeline = standard_pipeline(800, 600, Arc::new(FontSet::fallback()));
        let image = pipeline.render(&PLACEHOLDERS[0]).unwrap();

        assert_eq!(image.dimensions(), (800, 600));
        assert_eq!(*image.get_pixel(0, 0), Rgb([255, 107, 53]));
        // Bottom row, clear of the circles and the category tag
        assert_eq!(*image.get_pixel(400, 599), Rgb([255, 142, 106]));
        assert_eq!(*image.get_pixel(799, 599), Rgb([255, 142, 106]));
    }
}
