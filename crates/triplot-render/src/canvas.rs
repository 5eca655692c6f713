//! Software rasterization canvas.
//!
//! Wraps a [`tiny_skia::Pixmap`] with the small set of drawing primitives
//! the plot pipeline needs: line segments, markers, and rectangle frames.
//! All coordinates are in pixels; projection from data space happens in
//! [`crate::viewport`].

use glam::Vec3;
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Rect, Stroke, StrokeDash,
    Transform,
};
use triplot_core::{LineStyle, MarkerShape};

use crate::error::{RenderError, RenderResult};

/// A line segment in pixel coordinates.
pub type Segment = ((f32, f32), (f32, f32));

/// An RGBA canvas with plot drawing primitives.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Creates a canvas of the given size, filled with `background`.
    pub fn new(width: u32, height: u32, background: Vec3) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidCanvasSize { width, height });
        }
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::AllocationFailed { width, height })?;
        let (r, g, b) = color_to_rgba8(background);
        pixmap.fill(Color::from_rgba8(r, g, b, 255));
        Ok(Self { pixmap })
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Strokes a batch of line segments with one paint setup.
    ///
    /// Segments are appended to a single path, so large edge sets rasterize
    /// in one pass. [`LineStyle::None`] draws nothing.
    pub fn stroke_segments(
        &mut self,
        segments: &[Segment],
        color: Vec3,
        width: f32,
        line_style: LineStyle,
    ) {
        if segments.is_empty() || line_style == LineStyle::None {
            return;
        }

        let mut builder = PathBuilder::new();
        for &((x0, y0), (x1, y1)) in segments {
            builder.move_to(x0, y0);
            builder.line_to(x1, y1);
        }
        let Some(path) = builder.finish() else {
            return;
        };

        let paint = line_paint(color);
        let stroke = line_stroke(width, line_style);
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Draws a marker centered at `(x, y)`.
    ///
    /// `size` is the marker diameter in pixels.
    pub fn draw_marker(&mut self, x: f32, y: f32, shape: MarkerShape, size: f32, color: Vec3) {
        let radius = size / 2.0;
        if radius <= 0.0 {
            return;
        }
        match shape {
            MarkerShape::Circle => self.fill_circle(x, y, radius, color),
            MarkerShape::Square => self.fill_square(x, y, radius, color),
            MarkerShape::Cross => {
                let arms = [
                    ((x - radius, y - radius), (x + radius, y + radius)),
                    ((x - radius, y + radius), (x + radius, y - radius)),
                ];
                self.stroke_segments(&arms, color, (size / 4.0).max(1.0), LineStyle::Solid);
            }
        }
    }

    /// Strokes a rectangle outline, used for the axes frame.
    pub fn stroke_rect(&mut self, left: f32, top: f32, width: f32, height: f32, color: Vec3) {
        let Some(rect) = Rect::from_xywh(left, top, width, height) else {
            return;
        };
        let path = PathBuilder::from_rect(rect);
        let paint = line_paint(color);
        let stroke = line_stroke(1.0, LineStyle::Solid);
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Consumes the canvas and returns straight (non-premultiplied) RGBA bytes,
    /// row-major, 4 bytes per pixel.
    #[must_use]
    pub fn into_rgba(self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Vec3) {
        let mut builder = PathBuilder::new();
        builder.push_circle(cx, cy, radius);
        let Some(path) = builder.finish() else {
            return;
        };
        let paint = line_paint(color);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn fill_square(&mut self, cx: f32, cy: f32, radius: f32, color: Vec3) {
        let Some(rect) = Rect::from_xywh(cx - radius, cy - radius, radius * 2.0, radius * 2.0)
        else {
            return;
        };
        let paint = line_paint(color);
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .finish()
    }
}

fn line_paint(color: Vec3) -> Paint<'static> {
    let (r, g, b) = color_to_rgba8(color);
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = true;
    paint
}

fn line_stroke(width: f32, line_style: LineStyle) -> Stroke {
    let mut stroke = Stroke {
        width: width.max(0.5),
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };
    if line_style == LineStyle::Dashed {
        let dash = 3.0 * width.max(1.0);
        stroke.dash = StrokeDash::new(vec![dash, dash], 0.0);
    }
    stroke
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn color_to_rgba8(color: Vec3) -> (u8, u8, u8) {
    let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    (to_byte(color.x), to_byte(color.y), to_byte(color.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use triplot_core::colors;

    fn is_uniform(rgba: &[u8]) -> bool {
        rgba.chunks_exact(4).all(|px| px == &rgba[..4])
    }

    #[test]
    fn new_canvas_is_uniform_background() {
        let canvas = Canvas::new(16, 12, colors::WHITE).expect("canvas creation failed");
        assert_eq!((canvas.width(), canvas.height()), (16, 12));
        let rgba = canvas.into_rgba();
        assert_eq!(rgba.len(), 16 * 12 * 4);
        assert!(is_uniform(&rgba));
        assert_eq!(&rgba[0..4], &[255, 255, 255, 255]);
    }

    #[test]
    fn zero_size_is_rejected() {
        let result = Canvas::new(0, 16, colors::WHITE);
        assert!(matches!(
            result,
            Err(RenderError::InvalidCanvasSize { width: 0, height: 16 })
        ));
    }

    #[test]
    fn stroked_segments_change_pixels() {
        let mut canvas = Canvas::new(32, 32, colors::WHITE).expect("canvas creation failed");
        canvas.stroke_segments(
            &[((4.0, 4.0), (28.0, 28.0))],
            colors::BLUE,
            1.0,
            LineStyle::Solid,
        );
        assert!(!is_uniform(&canvas.into_rgba()));
    }

    #[test]
    fn line_style_none_draws_nothing() {
        let mut canvas = Canvas::new(32, 32, colors::WHITE).expect("canvas creation failed");
        canvas.stroke_segments(
            &[((4.0, 4.0), (28.0, 28.0))],
            colors::BLUE,
            1.0,
            LineStyle::None,
        );
        assert!(is_uniform(&canvas.into_rgba()));
    }

    #[test]
    fn marker_covers_its_center() {
        for shape in [MarkerShape::Circle, MarkerShape::Square, MarkerShape::Cross] {
            let mut canvas = Canvas::new(32, 32, colors::WHITE).expect("canvas creation failed");
            canvas.draw_marker(16.0, 16.0, shape, 6.0, colors::BLACK);
            let rgba = canvas.into_rgba();
            let center = (16 * 32 + 16) * 4;
            assert_ne!(
                &rgba[center..center + 3],
                &[255, 255, 255],
                "{shape:?} marker left the center pixel untouched"
            );
        }
    }

    #[test]
    fn dashed_stroke_has_gaps() {
        let mut canvas = Canvas::new(64, 16, colors::WHITE).expect("canvas creation failed");
        canvas.stroke_segments(
            &[((2.0, 8.0), (62.0, 8.0))],
            colors::BLACK,
            1.0,
            LineStyle::Dashed,
        );
        let rgba = canvas.into_rgba();
        let row = 8 * 64 * 4;
        let mut background = 0;
        let mut inked = 0;
        for x in 4..60 {
            let px = row + x * 4;
            if rgba[px..px + 3] == [255, 255, 255] {
                background += 1;
            } else {
                inked += 1;
            }
        }
        assert!(inked > 0);
        assert!(background > 0, "dashed line rendered as solid");
    }
}
