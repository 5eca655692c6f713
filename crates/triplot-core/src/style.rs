//! Plot styling: colors, line styles, and point markers.
//!
//! Styling is purely presentational and has no effect on geometry. Colors
//! are linear RGB with components in `[0, 1]`.

use glam::Vec3;

/// Named plot colors.
pub mod colors {
    use glam::Vec3;

    /// Pure blue.
    pub const BLUE: Vec3 = Vec3::new(0.0, 0.0, 1.0);
    /// Half-intensity green.
    pub const GREEN: Vec3 = Vec3::new(0.0, 0.5, 0.0);
    /// Pure red.
    pub const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    /// Black.
    pub const BLACK: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    /// White.
    pub const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
}

/// How lines between mesh points are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Solid lines.
    #[default]
    Solid,
    /// Dashed lines.
    Dashed,
    /// No lines; only markers are drawn.
    None,
}

/// Shape of the marker drawn at each point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerShape {
    /// Filled circle.
    #[default]
    Circle,
    /// Filled square.
    Square,
    /// Two crossing line segments.
    Cross,
}

/// Visual style of a single plot.
///
/// Fields are public; construct with struct-update syntax over
/// [`PlotStyle::default()`] or use [`PlotStyle::with_color`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotStyle {
    /// Color of the mesh edges.
    pub line_color: Vec3,
    /// Edge stroke width in pixels.
    pub line_width: f32,
    /// Edge line style.
    pub line_style: LineStyle,
    /// Marker drawn at every point; `None` disables markers.
    pub marker: Option<MarkerShape>,
    /// Marker diameter in pixels.
    pub marker_size: f32,
    /// Marker color; `None` falls back to the line color.
    pub marker_color: Option<Vec3>,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            line_color: colors::BLUE,
            line_width: 1.0,
            line_style: LineStyle::Solid,
            marker: Some(MarkerShape::Circle),
            marker_size: 3.0,
            marker_color: None,
        }
    }
}

impl PlotStyle {
    /// Creates the default style in the given color.
    #[must_use]
    pub fn with_color(color: Vec3) -> Self {
        Self {
            line_color: color,
            ..Self::default()
        }
    }

    /// Returns the effective marker fill color.
    #[must_use]
    pub fn marker_fill(&self) -> Vec3 {
        self.marker_color.unwrap_or(self.line_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = PlotStyle::default();
        assert_eq!(style.line_color, colors::BLUE);
        assert!((style.line_width - 1.0).abs() < f32::EPSILON);
        assert_eq!(style.line_style, LineStyle::Solid);
        assert_eq!(style.marker, Some(MarkerShape::Circle));
    }

    #[test]
    fn test_marker_fill_falls_back_to_line_color() {
        let style = PlotStyle::with_color(colors::GREEN);
        assert_eq!(style.marker_fill(), colors::GREEN);

        let style = PlotStyle {
            marker_color: Some(colors::RED),
            ..PlotStyle::with_color(colors::GREEN)
        };
        assert_eq!(style.marker_fill(), colors::RED);
    }
}
