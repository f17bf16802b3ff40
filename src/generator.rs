use crate::config::GeneratorConfig;
use crate::error::{PlaceholderError, Result};
use crate::fonts::FontSet;
use crate::models::PlaceholderSpec;
use crate::pipeline::Pipeline;
use crate::render::standard_pipeline;
use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error};

/// Fail early when this build of `image` cannot write JPEGs
pub fn check_jpeg_support() -> Result<()> {
    if ImageFormat::Jpeg.writing_enabled() {
        Ok(())
    } else {
        Err(PlaceholderError::JpegUnsupported)
    }
}

/// What happened to one record in a batch
#[derive(Debug)]
pub enum RecordOutcome {
    Generated { path: PathBuf },
    Failed { filename: String, error: PlaceholderError },
}

impl RecordOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }
}

/// Per-record outcomes in batch order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<RecordOutcome>,
}

impl BatchReport {
    /// Records attempted, whether or not they succeeded
    pub fn processed(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &PlaceholderError)> {
        self.outcomes.iter().filter_map(|o| match o {
            RecordOutcome::Failed { filename, error } => Some((filename.as_str(), error)),
            RecordOutcome::Generated { .. } => None,
        })
    }
}

/// Renders placeholder records and writes them as JPEG files
pub struct Generator {
    config: GeneratorConfig,
    pipeline: Pipeline,
}

impl Generator {
    /// Load fonts (falling back to the built-in font) and build the standard pipeline
    pub fn new(config: GeneratorConfig) -> Self {
        let fonts = Arc::new(FontSet::load(&config.bold_font, &config.regular_font));
        let pipeline = standard_pipeline(config.width, config.height, fonts);
        Self { config, pipeline }
    }

    /// Use a custom paint pipeline instead of the standard one
    pub fn with_pipeline(config: GeneratorConfig, pipeline: Pipeline) -> Self {
        Self { config, pipeline }
    }

    pub fn out_dir(&self) -> &Path {
        &self.config.out_dir
    }

    /// Create the output directory and any missing parents; fine if it already exists
    pub fn prepare_output_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config.out_dir).map_err(|source| {
            PlaceholderError::CreateOutputDir {
                path: self.config.out_dir.clone(),
                source,
            }
        })
    }

    /// Paint one record into an in-memory RGB canvas
    pub fn render(&self, spec: &PlaceholderSpec) -> Result<RgbImage> {
        self.pipeline.render(spec)
    }

    /// Render one record and write it to `<out_dir>/<filename>`
    pub fn generate(&self, spec: &PlaceholderSpec) -> Result<PathBuf> {
        self.prepare_output_dir()?;

        let image = self.render(spec)?;
        let path = self.config.out_dir.join(spec.filename);
        write_jpeg(&image, &path, self.config.quality)?;

        debug!(path = %path.display(), "wrote placeholder");
        Ok(path)
    }

    /// Generate every record in order.
    ///
    /// A failing record is reported and skipped; only an unusable output
    /// directory stops the batch.
    pub fn run_batch(&self, specs: &[PlaceholderSpec]) -> Result<BatchReport> {
        self.prepare_output_dir()?;

        let mut report = BatchReport::default();
        for spec in specs {
            let outcome = match self.generate(spec) {
                Ok(path) => {
                    println!("✓ Generated: {}", path.display());
                    RecordOutcome::Generated { path }
                }
                Err(e) => {
                    error!(file = spec.filename, "{e}");
                    println!("✗ Error generating {}: {}", spec.filename, e);
                    RecordOutcome::Failed {
                        filename: spec.filename.to_string(),
                        error: e,
                    }
                }
            };
            report.outcomes.push(outcome);
        }

        Ok(report)
    }
}

fn write_jpeg(image: &RgbImage, path: &Path, quality: u8) -> Result<()> {
    let io_err = |source| PlaceholderError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    JpegEncoder::new_with_quality(&mut writer, quality)
        .encode_image(image)
        .map_err(|source| PlaceholderError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(io_err)
}
