//! Figure rendering driver.
//!
//! Walks a figure's artists, projects their geometry through a shared
//! viewport, and rasterizes everything onto one canvas. Artist dispatch
//! happens here by downcasting, which keeps `triplot-core` free of any
//! renderer details.

use triplot_core::{Figure, Options};
use triplot_mesh::TriMeshPlot;
use triplot_render::{draw_axes, Canvas, PlotRect, PngMetadata, RenderResult, Segment, Viewport};

/// Pixel margin reserved around the plot area for the frame and ticks.
const AXES_MARGIN: f32 = 40.0;

/// Renders `figure` at the given size and returns the finished canvas.
pub(crate) fn render_figure(
    figure: &Figure,
    width: u32,
    height: u32,
    options: &Options,
) -> RenderResult<Canvas> {
    log::debug!(
        "rendering figure {} ({:?}) at {width}x{height}",
        figure.id(),
        figure.title()
    );
    let mut canvas = Canvas::new(width, height, options.background_color)?;

    let rect = plot_rect(width, height, options.draw_axes);
    let viewport = Viewport::fit(
        figure.data_bounds(),
        rect,
        options.data_margin,
        figure.aspect(),
    );

    if options.draw_axes {
        draw_axes(&mut canvas, &viewport, options.target_ticks);
    }

    for artist in figure.artists() {
        if !artist.is_enabled() {
            continue;
        }
        if let Some(plot) = artist.as_any().downcast_ref::<TriMeshPlot>() {
            draw_tri_mesh(&mut canvas, &viewport, plot);
        } else {
            log::warn!(
                "skipping artist {:?} of unknown kind {}",
                artist.label(),
                artist.kind()
            );
        }
    }

    Ok(canvas)
}

/// Text metadata embedded alongside the pixels when a figure is saved.
pub(crate) fn metadata_for(figure: &Figure) -> PngMetadata {
    PngMetadata {
        title: (!figure.title().is_empty()).then(|| figure.title().to_string()),
        x_label: figure.x_label().map(str::to_string),
        y_label: figure.y_label().map(str::to_string),
    }
}

fn plot_rect(width: u32, height: u32, draw_axes: bool) -> PlotRect {
    #[allow(clippy::cast_precision_loss)]
    let (w, h) = (width as f32, height as f32);
    if draw_axes && w > 2.0 * AXES_MARGIN && h > 2.0 * AXES_MARGIN {
        PlotRect::new(
            AXES_MARGIN,
            AXES_MARGIN,
            w - 2.0 * AXES_MARGIN,
            h - 2.0 * AXES_MARGIN,
        )
    } else {
        PlotRect::new(0.0, 0.0, w, h)
    }
}

fn draw_tri_mesh(canvas: &mut Canvas, viewport: &Viewport, plot: &TriMeshPlot) {
    let style = plot.style();
    let triangulation = plot.triangulation();

    let segments: Vec<Segment> = triangulation
        .edge_segments()
        .map(|(a, b)| (viewport.to_pixels(a), viewport.to_pixels(b)))
        .collect();
    canvas.stroke_segments(
        &segments,
        style.line_color,
        style.line_width,
        style.line_style,
    );

    // Markers cover every point, including those only masked triangles touch.
    if let Some(marker) = style.marker {
        let fill = style.marker_fill();
        for &point in triangulation.points() {
            let (x, y) = viewport.to_pixels(point);
            canvas.draw_marker(x, y, marker, style.marker_size, fill);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use triplot_core::{colors, PlotStyle};
    use triplot_mesh::Triangulation;

    fn is_uniform(rgba: &[u8]) -> bool {
        rgba.chunks_exact(4).all(|px| px == &rgba[..4])
    }

    fn triangle_figure() -> Figure {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(0.5, 1.0),
        ];
        let triangulation = Triangulation::with_triangles(points, vec![[0, 1, 2]]).unwrap();
        let mut figure = Figure::new("one triangle");
        figure.add_artist(Box::new(TriMeshPlot::new(
            "mesh",
            triangulation,
            PlotStyle::default(),
        )));
        figure
    }

    #[test]
    fn empty_figure_without_axes_is_uniform() {
        let figure = Figure::new("empty");
        let options = Options {
            draw_axes: false,
            ..Options::default()
        };
        let canvas = render_figure(&figure, 64, 64, &options).unwrap();
        assert!(is_uniform(&canvas.into_rgba()));
    }

    #[test]
    fn axes_alone_leave_marks() {
        let figure = Figure::new("empty");
        let options = Options::default();
        let canvas = render_figure(&figure, 200, 200, &options).unwrap();
        assert!(!is_uniform(&canvas.into_rgba()));
    }

    #[test]
    fn triangle_plot_is_drawn_inside_the_frame() {
        let figure = triangle_figure();
        let options = Options {
            draw_axes: false,
            ..Options::default()
        };
        let canvas = render_figure(&figure, 200, 200, &options).unwrap();
        let rgba = canvas.into_rgba();
        assert!(!is_uniform(&rgba));

        // Blue line pixels must exist somewhere in the interior.
        let blue = rgba
            .chunks_exact(4)
            .any(|px| px[2] > 200 && px[0] < 64 && px[1] < 64);
        assert!(blue, "no blue mesh edges were rasterized");
    }

    #[test]
    fn fully_masked_plot_still_draws_markers() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(0.5, 1.0),
        ];
        let mut triangulation = Triangulation::with_triangles(points, vec![[0, 1, 2]]).unwrap();
        triangulation.set_mask(Some(vec![true])).unwrap();

        let mut figure = Figure::new("masked");
        figure.add_artist(Box::new(TriMeshPlot::new(
            "mesh",
            triangulation,
            PlotStyle::with_color(colors::BLACK),
        )));

        let options = Options {
            draw_axes: false,
            ..Options::default()
        };
        let canvas = render_figure(&figure, 100, 100, &options).unwrap();
        assert!(
            !is_uniform(&canvas.into_rgba()),
            "markers must be drawn even when every triangle is masked"
        );
    }

    #[test]
    fn metadata_mirrors_figure_text() {
        let mut figure = Figure::new("triplot of Delaunay triangulation");
        figure.set_x_label("Longitude (degrees)");
        let metadata = metadata_for(&figure);
        assert_eq!(
            metadata.title.as_deref(),
            Some("triplot of Delaunay triangulation")
        );
        assert_eq!(metadata.x_label.as_deref(), Some("Longitude (degrees)"));
        assert!(metadata.y_label.is_none());
    }
}
