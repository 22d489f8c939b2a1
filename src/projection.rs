use crate::error::ConvertError;
use crate::track::TrackPoint;
use geo::{BoundingRect, Coord, LineString};
use log::debug;

/// Geographic extents below this (in degrees) are treated as zero.
pub const MIN_RANGE_DEGREES: f64 = 1e-12;

/// Size of the drawing surface in pixels (raster) or user units (vector).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas {
            width: 800,
            height: 600,
        }
    }
}

/// Maps latitude/longitude onto the canvas, north up.
///
/// The track's bounding box is scaled uniformly so that it touches the canvas
/// on its constraining axis and is centred on the other one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub canvas: Canvas,
}

impl Projection {
    /// Derives the transform from the bounding box of `points`.
    ///
    /// An axis with zero extent (a purely north-south or east-west track) does
    /// not constrain the scale and ends up centred. When both axes are
    /// degenerate the scale is 1 and the single location lands in the middle
    /// of the canvas.
    pub fn fit(points: &[TrackPoint], canvas: Canvas) -> Result<Self, ConvertError> {
        if let Some(bad) = points
            .iter()
            .find(|p| !p.latitude.is_finite() || !p.longitude.is_finite())
        {
            return Err(ConvertError::DegenerateGeometry(format!(
                "non-finite coordinate ({}, {})",
                bad.latitude, bad.longitude
            )));
        }

        let line: LineString = points.iter().map(TrackPoint::point).collect();
        let bounds = line
            .bounding_rect()
            .ok_or_else(|| ConvertError::DegenerateGeometry("track has no points".to_owned()))?;

        let lon_range = bounds.width();
        let lat_range = bounds.height();
        let width = f64::from(canvas.width);
        let height = f64::from(canvas.height);

        let scale = [(lon_range, width), (lat_range, height)]
            .into_iter()
            .filter(|(range, _)| *range > MIN_RANGE_DEGREES)
            .map(|(range, extent)| extent / range)
            .reduce(f64::min)
            .unwrap_or_else(|| {
                debug!("track collapses to a single location, centring it");
                1.0
            });

        if lon_range <= MIN_RANGE_DEGREES || lat_range <= MIN_RANGE_DEGREES {
            debug!(
                "zero-extent bounding box axis (lon range {}, lat range {})",
                lon_range, lat_range
            );
        }

        let x_offset = (width - lon_range * scale) / 2.0;
        let y_offset = (height - lat_range * scale) / 2.0;

        Ok(Projection {
            scale,
            translate_x: -bounds.min().x * scale + x_offset,
            translate_y: -bounds.min().y * scale + y_offset,
            canvas,
        })
    }

    pub fn project(&self, point: &TrackPoint) -> Coord {
        Coord {
            x: point.longitude * self.scale + self.translate_x,
            y: f64::from(self.canvas.height) - (point.latitude * self.scale + self.translate_y),
        }
    }

    pub fn project_all(&self, points: &[TrackPoint]) -> Vec<Coord> {
        points.iter().map(|p| self.project(p)).collect()
    }
}
