use super::Parser;
use crate::error::ConvertError;
use crate::track::{Track, TrackPoint};
use chrono::{DateTime, FixedOffset, Utc};
use gpx::{Gpx, Time};
use roxmltree::Document;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub struct GpxParser;

impl Parser for GpxParser {
    fn accepts(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "gpx")
    }

    fn parse(&self, path: &Path) -> Result<Track, ConvertError> {
        let file = File::open(path)?;
        read_track(BufReader::new(file))
    }

    fn name(&self) -> &'static str {
        "GPX Parser"
    }
}

/// Reads the first segment of the first track, plus the metadata name and time.
///
/// Further tracks and segments are ignored. Points without a `<time>` child
/// keep `timestamp: None`. The start time is kept as written in the document.
pub fn read_track<R: Read>(mut reader: R) -> Result<Track, ConvertError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| ConvertError::MalformedDocument(e.to_string()))?;
    let gpx: Gpx = gpx::read(text.as_bytes())?;

    let track = gpx
        .tracks
        .first()
        .ok_or_else(|| ConvertError::MalformedDocument("no <trk> element".to_owned()))?;
    let segment = track
        .segments
        .first()
        .ok_or_else(|| ConvertError::MalformedDocument("no <trkseg> in first track".to_owned()))?;

    let points = segment
        .points
        .iter()
        .map(|waypoint| {
            let point = waypoint.point();
            let timestamp = waypoint
                .time
                .as_ref()
                .map(|time| parse_time(time).map(|t| t.with_timezone(&Utc)))
                .transpose()?;
            Ok(TrackPoint {
                latitude: point.y(),
                longitude: point.x(),
                timestamp,
            })
        })
        .collect::<Result<Vec<_>, ConvertError>>()?;

    if points.is_empty() {
        return Err(ConvertError::MalformedDocument(
            "first track segment has no points".to_owned(),
        ));
    }

    let metadata = gpx.metadata.as_ref();
    metadata
        .and_then(|m| m.time.as_ref())
        .ok_or(ConvertError::MissingMetadata("time"))
        .and_then(parse_time)?;
    let start_time = raw_metadata_time(&text)?;
    let name = metadata
        .and_then(|m| m.name.clone())
        .filter(|name| !name.is_empty())
        .ok_or(ConvertError::MissingMetadata("name"))?;

    Ok(Track {
        points,
        name,
        start_time,
    })
}

// gpx only keeps the parsed instant; the text of <metadata><time> names the
// output file, so pull it from the document itself
fn raw_metadata_time(text: &str) -> Result<String, ConvertError> {
    let doc = Document::parse(text).map_err(|e| ConvertError::MalformedDocument(e.to_string()))?;
    doc.root_element()
        .children()
        .find(|n| n.has_tag_name("metadata"))
        .and_then(|metadata| metadata.children().find(|n| n.has_tag_name("time")))
        .and_then(|time| time.text())
        .map(|time| time.trim().to_owned())
        .filter(|time| !time.is_empty())
        .ok_or(ConvertError::MissingMetadata("time"))
}

fn parse_time(time: &Time) -> Result<DateTime<FixedOffset>, ConvertError> {
    let formatted = time.format()?;
    DateTime::parse_from_rfc3339(&formatted)
        .map_err(|e| ConvertError::MalformedDocument(format!("bad timestamp '{}': {}", formatted, e)))
}
