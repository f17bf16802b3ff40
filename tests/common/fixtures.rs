use placeholders::render::standard_pipeline;
use placeholders::{
    FontSet, Generator, GeneratorConfig, PaintContext, PaintStep, PlaceholderSpec, Surface,
};
use std::path::Path;
use std::sync::Arc;

pub const MISSING_BOLD: &str = "/nonexistent/fonts/Bold.ttf";
pub const MISSING_REGULAR: &str = "/nonexistent/fonts/Regular.ttf";

/// Config writing into `out_dir`, with font paths that never exist so the
/// built-in fallback is always used.
pub fn fallback_config(out_dir: &Path) -> GeneratorConfig {
    GeneratorConfig::default()
        .with_out_dir(out_dir)
        .with_fonts(MISSING_BOLD, MISSING_REGULAR)
}

pub fn fallback_generator(out_dir: &Path) -> Generator {
    Generator::new(fallback_config(out_dir))
}

/// Paint step that fails for one filename and does nothing otherwise
pub struct FailOn(pub &'static str);

impl PaintStep for FailOn {
    fn paint(
        &self,
        _surface: &mut Surface,
        spec: &PlaceholderSpec,
        _context: &PaintContext,
    ) -> anyhow::Result<()> {
        if spec.filename == self.0 {
            anyhow::bail!("simulated failure for {}", spec.filename);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Injected Failure"
    }
}

/// Standard generator whose pipeline breaks on `filename`
pub fn generator_failing_on(out_dir: &Path, filename: &'static str) -> Generator {
    let config = fallback_config(out_dir);
    let pipeline = standard_pipeline(config.width, config.height, Arc::new(FontSet::fallback()))
        .add_step_boxed(Box::new(FailOn(filename)));
    Generator::with_pipeline(config, pipeline)
}

/// Largest per-channel difference between two colors
pub fn channel_distance(a: [u8; 3], b: [u8; 3]) -> u8 {
    a.iter().zip(b.iter()).map(|(x, y)| x.abs_diff(*y)).max().unwrap_or(0)
}
