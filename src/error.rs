use image::ImageError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlaceholderError>;

#[derive(Debug, Error)]
pub enum PlaceholderError {
    /// The `image` crate was built without a JPEG encoder
    #[error(
        "JPEG encoding is not available in this build. \
         Rebuild with the `image` crate's default features (or at least `jpeg`) enabled"
    )]
    JpegUnsupported,

    #[error("failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{step} failed: {source}")]
    Paint {
        step: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}
