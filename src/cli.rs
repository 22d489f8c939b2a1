use clap::{Parser, crate_authors, crate_description, crate_name, crate_version};
use gpx_trace::Config;
use gpx_trace::renderers::{OutputFormat, StrokeColor};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// JSON configuration file, overridden by the flags below.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Directory holding the .gpx / .gpx.gz files.
    #[clap(short = 'i', long)]
    pub input: Option<PathBuf>,
    /// Directory receiving the images and log.txt.
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
    /// Image format.
    #[clap(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Canvas width.
    #[clap(long)]
    pub width: Option<u32>,
    /// Canvas height.
    #[clap(long)]
    pub height: Option<u32>,
    /// Stroke colour, a CSS name or #rrggbb.
    #[clap(long)]
    pub stroke_color: Option<StrokeColor>,
    /// Stroke width.
    #[clap(long)]
    pub stroke_width: Option<f32>,
    /// Add total time and distance to the log.
    #[clap(short = 't', long)]
    pub totals: bool,
    /// Look for input files in subdirectories too.
    #[clap(short = 'r', long)]
    pub recursive: bool,
    /// Convert files in parallel.
    #[clap(short = 'p', long)]
    pub parallel: bool,
}

impl Opts {
    pub fn apply(self, config: &mut Config) {
        if let Some(input) = self.input {
            config.input_dir = input;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(width) = self.width {
            config.canvas_width = width;
        }
        if let Some(height) = self.height {
            config.canvas_height = height;
        }
        if let Some(color) = self.stroke_color {
            config.stroke_color = color;
        }
        if let Some(width) = self.stroke_width {
            config.stroke_width = width;
        }
        config.totals |= self.totals;
        config.recursive |= self.recursive;
        config.parallel |= self.parallel;
    }
}
