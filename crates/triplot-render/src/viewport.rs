//! Mapping from data coordinates to pixel coordinates.
//!
//! A [`Viewport`] is built once per frame from the union of the artist
//! bounds and the figure's aspect policy, then shared by every draw call.

use glam::DVec2;
use triplot_core::Aspect;

/// Pixel-space rectangle occupied by the plot area, excluding axes margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRect {
    /// Left edge in pixels.
    pub left: f32,
    /// Top edge in pixels.
    pub top: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl PlotRect {
    /// Creates a plot rectangle from its left/top corner and size.
    #[must_use]
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge in pixels.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge in pixels.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Transform between data space and pixel space for one frame.
///
/// Data y grows upward while pixel y grows downward, so the vertical axis
/// is flipped during projection.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    rect: PlotRect,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    /// Fits a viewport around `bounds`, expanded by `margin` (a fraction of
    /// the data span per axis).
    ///
    /// With [`Aspect::Equal`] the shorter data span is widened about its
    /// center until both axes share the same units-per-pixel scale.
    /// Missing or degenerate bounds fall back to the unit square.
    #[must_use]
    pub fn fit(bounds: Option<(DVec2, DVec2)>, rect: PlotRect, margin: f64, aspect: Aspect) -> Self {
        let (min, max) = match bounds {
            Some((min, max)) if min.x.is_finite() && max.x.is_finite() && min.y.is_finite() && max.y.is_finite() => {
                (min, max)
            }
            _ => (DVec2::ZERO, DVec2::ONE),
        };

        let (mut x_min, mut x_max) = expand_axis(min.x, max.x, margin);
        let (mut y_min, mut y_max) = expand_axis(min.y, max.y, margin);

        if aspect == Aspect::Equal && rect.width > 0.0 && rect.height > 0.0 {
            let x_scale = (x_max - x_min) / f64::from(rect.width);
            let y_scale = (y_max - y_min) / f64::from(rect.height);
            let scale = x_scale.max(y_scale);
            let x_center = (x_min + x_max) / 2.0;
            let y_center = (y_min + y_max) / 2.0;
            let half_x = scale * f64::from(rect.width) / 2.0;
            let half_y = scale * f64::from(rect.height) / 2.0;
            x_min = x_center - half_x;
            x_max = x_center + half_x;
            y_min = y_center - half_y;
            y_max = y_center + half_y;
        }

        Self {
            rect,
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Projects a data point into pixel coordinates.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_pixels(&self, p: DVec2) -> (f32, f32) {
        let tx = (p.x - self.x_min) / (self.x_max - self.x_min);
        let ty = (self.y_max - p.y) / (self.y_max - self.y_min);
        (
            self.rect.left + (tx * f64::from(self.rect.width)) as f32,
            self.rect.top + (ty * f64::from(self.rect.height)) as f32,
        )
    }

    /// Pixel rectangle this viewport projects into.
    #[must_use]
    pub fn rect(&self) -> PlotRect {
        self.rect
    }

    /// Data-space x range covered by the plot area.
    #[must_use]
    pub fn x_range(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    /// Data-space y range covered by the plot area.
    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }
}

/// Pads one axis by `margin` of its span, with a fixed pad for zero spans.
fn expand_axis(min: f64, max: f64, margin: f64) -> (f64, f64) {
    let span = max - min;
    if span > 0.0 {
        (min - span * margin, max + span * margin)
    } else {
        (min - 0.5, max + 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_100() -> PlotRect {
        PlotRect::new(10.0, 20.0, 100.0, 100.0)
    }

    #[test]
    fn plot_rect_edges() {
        let rect = rect_100();
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 120.0);
    }

    #[test]
    fn corners_project_to_rect_corners() {
        let bounds = Some((DVec2::new(0.0, 0.0), DVec2::new(2.0, 4.0)));
        let vp = Viewport::fit(bounds, rect_100(), 0.0, Aspect::Auto);

        let (x, y) = vp.to_pixels(DVec2::new(0.0, 0.0));
        assert!((x - 10.0).abs() < 1e-4);
        assert!((y - 120.0).abs() < 1e-4);

        let (x, y) = vp.to_pixels(DVec2::new(2.0, 4.0));
        assert!((x - 110.0).abs() < 1e-4);
        assert!((y - 20.0).abs() < 1e-4);
    }

    #[test]
    fn y_axis_is_flipped() {
        let bounds = Some((DVec2::new(0.0, 0.0), DVec2::new(1.0, 1.0)));
        let vp = Viewport::fit(bounds, rect_100(), 0.0, Aspect::Auto);

        let (_, y_low) = vp.to_pixels(DVec2::new(0.5, 0.0));
        let (_, y_high) = vp.to_pixels(DVec2::new(0.5, 1.0));
        assert!(y_high < y_low);
    }

    #[test]
    fn margin_expands_ranges() {
        let bounds = Some((DVec2::new(0.0, 0.0), DVec2::new(10.0, 10.0)));
        let vp = Viewport::fit(bounds, rect_100(), 0.05, Aspect::Auto);

        let (x_min, x_max) = vp.x_range();
        assert!((x_min + 0.5).abs() < 1e-12);
        assert!((x_max - 10.5).abs() < 1e-12);
    }

    #[test]
    fn equal_aspect_equalizes_scale() {
        // Wide data in a square rect: y must widen to match x.
        let bounds = Some((DVec2::new(0.0, 0.0), DVec2::new(10.0, 1.0)));
        let vp = Viewport::fit(bounds, rect_100(), 0.0, Aspect::Equal);

        let (x_min, x_max) = vp.x_range();
        let (y_min, y_max) = vp.y_range();
        let x_scale = (x_max - x_min) / 100.0;
        let y_scale = (y_max - y_min) / 100.0;
        assert!((x_scale - y_scale).abs() < 1e-12);

        // Widening happens about the pre-expansion center.
        assert!(((y_min + y_max) / 2.0 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_bounds_fall_back_to_padded_point() {
        let bounds = Some((DVec2::new(3.0, 3.0), DVec2::new(3.0, 3.0)));
        let vp = Viewport::fit(bounds, rect_100(), 0.05, Aspect::Auto);

        let (x_min, x_max) = vp.x_range();
        assert!((x_min - 2.5).abs() < 1e-12);
        assert!((x_max - 3.5).abs() < 1e-12);
    }

    #[test]
    fn missing_bounds_fall_back_to_unit_square() {
        let vp = Viewport::fit(None, rect_100(), 0.0, Aspect::Auto);
        assert_eq!(vp.x_range(), (0.0, 1.0));
        assert_eq!(vp.y_range(), (0.0, 1.0));
    }
}
