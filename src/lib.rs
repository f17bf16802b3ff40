pub mod config;
pub mod error;
pub mod fonts;
pub mod generator;
pub mod models;
pub mod pipeline;
pub mod render;

pub use config::GeneratorConfig;
pub use error::PlaceholderError;
pub use fonts::{FontSet, LabelFont};
pub use generator::{BatchReport, Generator, RecordOutcome, check_jpeg_support};
pub use models::{PLACEHOLDERS, PlaceholderSpec, find_placeholder};
pub use pipeline::{PaintContext, PaintStep, Pipeline, Surface};
