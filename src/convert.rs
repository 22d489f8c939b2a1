use crate::config::Config;
use crate::error::ConvertError;
use crate::io::{LogEntry, format_time_for_filename};
use crate::parsers::{Parser, default_parsers};
use crate::projection::{Canvas, Projection};
use crate::renderers::{PathRenderer, StrokeStyle, renderer_for};
use crate::summary::TripSummary;
use crate::track::Track;
use log::debug;
use std::path::Path;

/// A rendered image that has not been written yet, with its log line.
#[derive(Debug)]
pub struct Conversion {
    pub file_name: String,
    pub image: Vec<u8>,
    pub entry: LogEntry,
}

/// Track → image pipeline, parameterised by the rendering backend and by
/// whether trip totals are computed.
pub struct Converter {
    parsers: Vec<Box<dyn Parser>>,
    renderer: Box<dyn PathRenderer>,
    canvas: Canvas,
    style: StrokeStyle,
    totals: bool,
}

impl Converter {
    pub fn new(
        renderer: Box<dyn PathRenderer>,
        canvas: Canvas,
        style: StrokeStyle,
        totals: bool,
    ) -> Self {
        Converter {
            parsers: default_parsers(),
            renderer,
            canvas,
            style,
            totals,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Converter::new(
            renderer_for(config.format),
            config.canvas(),
            config.stroke(),
            config.totals,
        )
    }

    pub fn accepts(&self, path: &Path) -> bool {
        self.parsers.iter().any(|parser| parser.accepts(path))
    }

    pub fn convert_file(&self, path: &Path) -> Result<Conversion, ConvertError> {
        let parser = self
            .parsers
            .iter()
            .find(|parser| parser.accepts(path))
            .ok_or_else(|| ConvertError::UnsupportedInput(path.to_path_buf()))?;
        debug!("{} reading {}", parser.name(), path.display());

        let track = parser.parse(path)?;
        self.convert_track(&track)
    }

    pub fn convert_track(&self, track: &Track) -> Result<Conversion, ConvertError> {
        let projection = Projection::fit(&track.points, self.canvas)?;
        let path = projection.project_all(&track.points);
        let image = self.renderer.render(&path, self.canvas, &self.style)?;
        debug!(
            "{} drew {} points at scale {:.3}",
            self.renderer.name(),
            path.len(),
            projection.scale
        );

        let file_name = format!(
            "{}.{}",
            format_time_for_filename(&track.start_time),
            self.renderer.extension()
        );
        let summary = self.totals.then(|| TripSummary::from_points(&track.points));

        Ok(Conversion {
            entry: LogEntry {
                file_name: file_name.clone(),
                track_name: track.name.clone(),
                summary,
            },
            file_name,
            image,
        })
    }
}
