//! Draws GPX tracks as PNG or SVG polylines and logs each conversion.

pub mod batch;
pub mod config;
pub mod convert;
pub mod error;
pub mod io;
pub mod parsers;
pub mod projection;
pub mod renderers;
pub mod summary;
pub mod track;

pub use batch::{BatchReport, run};
pub use config::Config;
pub use error::ConvertError;
