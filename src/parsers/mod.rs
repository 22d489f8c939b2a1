pub mod gpx;
pub mod gpx_gz;

use crate::error::ConvertError;
use crate::track::Track;
use std::path::Path;

// extract a Track from one input file
pub trait Parser: Send + Sync {
    fn accepts(&self, path: &Path) -> bool;

    fn parse(&self, path: &Path) -> Result<Track, ConvertError>;

    fn name(&self) -> &'static str;
}

pub fn default_parsers() -> Vec<Box<dyn Parser>> {
    vec![Box::new(gpx::GpxParser), Box::new(gpx_gz::GpxGzParser)]
}
