use std::path::PathBuf;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_QUALITY: u8 = 85;
pub const DEFAULT_OUT_DIR: &str = "images";

pub const DEFAULT_BOLD_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";
pub const DEFAULT_REGULAR_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Pixel sizes for the centered label and the category tag
pub const LABEL_FONT_PX: f32 = 80.0;
pub const CATEGORY_FONT_PX: f32 = 30.0;

/// Settings shared by every record in a batch
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub width: u32,
    pub height: u32,
    /// JPEG quality, 1-100
    pub quality: u8,
    pub out_dir: PathBuf,
    pub bold_font: PathBuf,
    pub regular_font: PathBuf,
}

impl GeneratorConfig {
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn with_fonts(mut self, bold: impl Into<PathBuf>, regular: impl Into<PathBuf>) -> Self {
        self.bold_font = bold.into();
        self.regular_font = regular.into();
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            quality: DEFAULT_QUALITY,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            bold_font: PathBuf::from(DEFAULT_BOLD_FONT),
            regular_font: PathBuf::from(DEFAULT_REGULAR_FONT),
        }
    }
}
