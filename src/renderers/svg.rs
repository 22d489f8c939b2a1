use super::{PathRenderer, StrokeStyle};
use crate::error::ConvertError;
use crate::projection::Canvas;
use geo::Coord;

/// Vector output: one `<path>` with `M`/`L` commands, stroked and unfilled.
pub struct SvgRenderer;

impl PathRenderer for SvgRenderer {
    fn render(
        &self,
        path: &[Coord],
        canvas: Canvas,
        style: &StrokeStyle,
    ) -> Result<Vec<u8>, ConvertError> {
        let data = path
            .iter()
            .enumerate()
            .map(|(index, coord)| {
                let command = if index == 0 { 'M' } else { 'L' };
                format!("{}{},{}", command, coord.x, coord.y)
            })
            .collect::<Vec<_>>()
            .join(" ");

        let svg = format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{}" height="{}">"#,
                r#"<path d="{}" stroke="{}" stroke-width="{}" fill="none"></path>"#,
                "</svg>"
            ),
            canvas.width,
            canvas.height,
            data,
            style.color.css(),
            style.width,
        );
        Ok(svg.into_bytes())
    }

    fn extension(&self) -> &'static str {
        "svg"
    }

    fn name(&self) -> &'static str {
        "SVG Renderer"
    }
}
