pub mod png;
pub mod svg;

use crate::error::ConvertError;
use crate::projection::Canvas;
use clap::ValueEnum;
use geo::Coord;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Which kind of image the batch produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

/// A solid stroke colour, kept with the text it was written as so vector
/// output can reuse it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct StrokeColor {
    css: String,
    rgb: (u8, u8, u8),
}

impl StrokeColor {
    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }
}

impl Default for StrokeColor {
    fn default() -> Self {
        StrokeColor {
            css: "blue".to_owned(),
            rgb: (0, 0, 255),
        }
    }
}

impl FromStr for StrokeColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let css = s.trim().to_lowercase();
        let rgb = match css.as_str() {
            "black" => (0, 0, 0),
            "white" => (255, 255, 255),
            "red" => (255, 0, 0),
            "green" => (0, 128, 0),
            "blue" => (0, 0, 255),
            "yellow" => (255, 255, 0),
            "orange" => (255, 165, 0),
            "purple" => (128, 0, 128),
            "gray" | "grey" => (128, 128, 128),
            hex if hex.starts_with('#') => parse_hex(&hex[1..])
                .ok_or_else(|| format!("invalid hex colour '{}'", s))?,
            _ => return Err(format!("unknown colour '{}'", s)),
        };
        Ok(StrokeColor { css, rgb })
    }
}

impl TryFrom<String> for StrokeColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for StrokeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}

fn parse_hex(digits: &str) -> Option<(u8, u8, u8)> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => Some((
            u8::from_str_radix(&digits[0..2], 16).ok()?,
            u8::from_str_radix(&digits[2..4], 16).ok()?,
            u8::from_str_radix(&digits[4..6], 16).ok()?,
        )),
        // #rgb expands each nibble: #f80 == #ff8800
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok().map(|v| v * 17);
            Some((nibble(0)?, nibble(1)?, nibble(2)?))
        }
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: StrokeColor,
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        StrokeStyle {
            color: StrokeColor::default(),
            width: 4.0,
        }
    }
}

// draw an open polyline of already projected canvas coordinates
pub trait PathRenderer: Send + Sync {
    fn render(
        &self,
        path: &[Coord],
        canvas: Canvas,
        style: &StrokeStyle,
    ) -> Result<Vec<u8>, ConvertError>;

    fn extension(&self) -> &'static str;

    fn name(&self) -> &'static str;
}

pub fn renderer_for(format: OutputFormat) -> Box<dyn PathRenderer> {
    match format {
        OutputFormat::Png => Box::new(png::PngRenderer),
        OutputFormat::Svg => Box::new(svg::SvgRenderer),
    }
}
