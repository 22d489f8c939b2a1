use super::{PathRenderer, StrokeStyle};
use crate::error::ConvertError;
use crate::projection::Canvas;
use geo::Coord;
use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Raster output through `tiny-skia`, encoded as PNG with a transparent
/// background.
pub struct PngRenderer;

impl PathRenderer for PngRenderer {
    fn render(
        &self,
        path: &[Coord],
        canvas: Canvas,
        style: &StrokeStyle,
    ) -> Result<Vec<u8>, ConvertError> {
        let mut pixmap = Pixmap::new(canvas.width, canvas.height).ok_or_else(|| {
            ConvertError::Render(format!(
                "can't allocate a {}x{} canvas",
                canvas.width, canvas.height
            ))
        })?;

        let mut builder = PathBuilder::new();
        for (index, coord) in path.iter().enumerate() {
            if index == 0 {
                builder.move_to(coord.x as f32, coord.y as f32);
            } else {
                builder.line_to(coord.x as f32, coord.y as f32);
            }
        }

        // a lone move-to has nothing to stroke, the image stays blank
        if let Some(line) = builder.finish() {
            let (r, g, b) = style.color.rgb();
            let mut paint = Paint::default();
            paint.set_color_rgba8(r, g, b, 255);
            paint.anti_alias = true;

            let stroke = Stroke {
                width: style.width,
                ..Stroke::default()
            };
            pixmap.stroke_path(&line, &paint, &stroke, Transform::identity(), None);
        }

        pixmap
            .encode_png()
            .map_err(|e| ConvertError::Render(e.to_string()))
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn name(&self) -> &'static str {
        "PNG Renderer"
    }
}
