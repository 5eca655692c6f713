//! Triangular-grid plot artist.

use std::any::Any;

use glam::DVec2;
use triplot_core::artist::Artist;
use triplot_core::style::PlotStyle;

use crate::triangulation::Triangulation;

/// A triangulation paired with the style it is drawn in.
///
/// This is the artist registered on a figure by `triplot`: mesh edges of
/// the unmasked triangles in the line style, plus a marker at every
/// point.
pub struct TriMeshPlot {
    label: String,
    triangulation: Triangulation,
    style: PlotStyle,
    enabled: bool,
}

impl TriMeshPlot {
    /// Creates a new plot artist from a triangulation and a style.
    pub fn new(label: impl Into<String>, triangulation: Triangulation, style: PlotStyle) -> Self {
        Self {
            label: label.into(),
            triangulation,
            style,
            enabled: true,
        }
    }

    /// Returns the triangulation.
    #[must_use]
    pub fn triangulation(&self) -> &Triangulation {
        &self.triangulation
    }

    /// Returns the style.
    #[must_use]
    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    /// Sets the style.
    pub fn set_style(&mut self, style: PlotStyle) -> &mut Self {
        self.style = style;
        self
    }
}

impl Artist for TriMeshPlot {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn kind(&self) -> &'static str {
        "TriMeshPlot"
    }

    fn data_bounds(&self) -> Option<(DVec2, DVec2)> {
        self.triangulation.bounding_box()
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
