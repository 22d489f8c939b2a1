use super::Parser;
use super::gpx::read_track;
use crate::error::ConvertError;
use crate::track::Track;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/**
 * Parse .gpx.gz files, as exported by some trackers to save space.
 */
pub struct GpxGzParser;

impl Parser for GpxGzParser {
    fn accepts(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(".gpx.gz"))
    }

    fn parse(&self, path: &Path) -> Result<Track, ConvertError> {
        let file = File::open(path)?;
        read_track(BufReader::new(GzDecoder::new(file)))
    }

    fn name(&self) -> &'static str {
        "Compressed GPX Parser"
    }
}
