use crate::error::ConfigError;
use crate::projection::Canvas;
use crate::renderers::{OutputFormat, StrokeColor, StrokeStyle};
use log::debug;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_DIR: &str = "./gpx-files";
pub const DEFAULT_OUTPUT_DIR: &str = "./output-images";

/// Batch settings. Every field is optional in the JSON file; missing ones
/// fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub stroke_color: StrokeColor,
    pub stroke_width: f32,
    pub format: OutputFormat,
    /// Compute elapsed time and distance and add them to the log.
    pub totals: bool,
    /// Descend into subdirectories of `input_dir`.
    pub recursive: bool,
    /// Convert on a thread pool; output order is unchanged.
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        let canvas = Canvas::default();
        let stroke = StrokeStyle::default();
        Config {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            canvas_width: canvas.width,
            canvas_height: canvas.height,
            stroke_color: stroke.color,
            stroke_width: stroke.width,
            format: OutputFormat::default(),
            totals: false,
            recursive: false,
            parallel: false,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!("loading configuration from {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        let config: Config = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas must not be empty ({}x{})",
                self.canvas_width, self.canvas_height
            )));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "stroke width must be positive, got {}",
                self.stroke_width
            )));
        }
        Ok(())
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.canvas_width,
            height: self.canvas_height,
        }
    }

    pub fn stroke(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.stroke_color.clone(),
            width: self.stroke_width,
        }
    }
}
