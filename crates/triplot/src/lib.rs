//! triplot-rs: A Rust-native plotting library for 2D triangulations.
//!
//! Triplot renders triangular grids, either computed by Delaunay
//! triangulation or supplied explicitly, as mesh plots with markers on
//! every point. Figures are registered in a global registry and written
//! out as PNG images by [`show()`].
//!
//! # Quick Start
//!
//! ```no_run
//! use triplot::*;
//!
//! fn main() -> Result<()> {
//!     // Initialize triplot
//!     init()?;
//!
//!     // Build a triangulated point set
//!     let points = ring_lattice(36, 8, 0.25, 0.95);
//!     let mut triangulation = Triangulation::delaunay(points)?;
//!     triangulation.mask_inside_radius(0.25);
//!
//!     // Plot it on a new figure
//!     let fig = figure("triplot of Delaunay triangulation")?;
//!     fig.set_aspect(Aspect::Equal);
//!     fig.triplot(triangulation, PlotStyle::default())?;
//!
//!     // Write every registered figure to disk
//!     show()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Triplot uses a paradigm of **figures** and **artists**:
//!
//! - A **figure** is one output image, with a title, axis labels, an
//!   aspect policy, and an output size
//! - An **artist** is a drawable payload on a figure; the stock artist
//!   is [`TriMeshPlot`], a triangulation plus a [`PlotStyle`]
//!
//! The title and axis labels are not rasterized; they travel with the
//! saved PNG as `tEXt` metadata chunks and can be read back with
//! [`read_text_chunks`].

// Builder-style handle methods return &Self
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod render;

use std::path::Path;

// Re-export core types
pub use triplot_core::{
    artist::Artist,
    error::{Result, TriplotError},
    figure::{Aspect, Figure, FigureId},
    options::Options,
    registry::Registry,
    state::{with_context, with_context_mut, Context},
    style::{colors, LineStyle, MarkerShape, PlotStyle},
    DVec2, Vec3,
};

// Re-export mesh types
pub use triplot_mesh::{
    compute_delaunay, fixtures, linspace, ring_lattice, DelaunayBackend, SpadeBackend, TriMeshPlot,
    Triangulation,
};

// Re-export the saved-image metadata surface
pub use triplot_render::{
    read_text_chunks, PngMetadata, SOFTWARE_KEYWORD, TITLE_KEYWORD, X_LABEL_KEYWORD,
    Y_LABEL_KEYWORD,
};

/// Initializes triplot with default settings.
///
/// This must be called before any other triplot functions.
pub fn init() -> Result<()> {
    triplot_core::state::init_context()?;
    log::info!("triplot-rs initialized");
    Ok(())
}

/// Returns whether triplot has been initialized.
pub fn is_initialized() -> bool {
    triplot_core::state::is_initialized()
}

/// Shuts down triplot and releases all resources.
///
/// This removes all registered figures and resets the global state.
/// After calling this, you can call [`init()`] again to reinitialize.
pub fn shutdown() {
    triplot_core::state::shutdown_context();
    log::info!("triplot-rs shut down");
}

/// Renders every registered figure and writes it to disk.
///
/// Files land in [`Options::output_dir`] as
/// `<output_prefix><figure id>.png`, in figure-id order. The figure
/// title and axis labels are embedded as `tEXt` metadata.
pub fn show() -> Result<()> {
    let _ = env_logger::try_init();
    if !is_initialized() {
        return Err(TriplotError::NotInitialized);
    }

    let saved = with_context(|ctx| -> Result<Vec<(FigureId, std::path::PathBuf)>> {
        let dir = Path::new(&ctx.options.output_dir);
        let mut saved = Vec::new();
        for figure in ctx.registry.iter() {
            let path = dir.join(format!("{}{}.png", ctx.options.output_prefix, figure.id()));
            let (width, height) = figure.size();
            let canvas =
                render::render_figure(figure, width, height, &ctx.options).map_err(render_err)?;
            triplot_render::save_png(
                &path,
                &canvas.into_rgba(),
                width,
                height,
                &render::metadata_for(figure),
            )
            .map_err(render_err)?;
            saved.push((figure.id(), path));
        }
        Ok(saved)
    })?;

    for (id, path) in saved {
        log::info!("figure {id} written to {}", path.display());
    }
    Ok(())
}

/// Creates a new figure with the given title and registers it.
///
/// The figure takes its output size from the current [`Options`].
pub fn figure(title: impl Into<String>) -> Result<FigureHandle> {
    if !is_initialized() {
        return Err(TriplotError::NotInitialized);
    }
    let id = with_context_mut(|ctx| {
        let mut figure = Figure::new(title);
        figure.set_size(ctx.options.figure_width, ctx.options.figure_height);
        ctx.registry.register(figure)
    });
    log::debug!("registered figure {id}");
    Ok(FigureHandle { id })
}

/// Gets a handle for a registered figure by id.
pub fn get_figure(id: FigureId) -> Option<FigureHandle> {
    triplot_core::state::try_with_context(|ctx| ctx.initialized && ctx.registry.contains(id))
        .unwrap_or(false)
        .then_some(FigureHandle { id })
}

/// Removes a figure by id, returning whether it existed.
pub fn remove_figure(id: FigureId) -> bool {
    triplot_core::state::try_with_context_mut(|ctx| ctx.registry.remove(id).is_some())
        .unwrap_or(false)
}

/// Removes all figures. Figure ids keep counting up afterwards.
pub fn remove_all_figures() {
    let _ = triplot_core::state::try_with_context_mut(|ctx| ctx.registry.clear());
}

/// Returns a copy of the current global options.
pub fn options() -> Result<Options> {
    triplot_core::state::try_with_context(|ctx| ctx.options.clone())
        .ok_or(TriplotError::NotInitialized)
}

/// Replaces the global options.
pub fn set_options(options: Options) -> Result<()> {
    triplot_core::state::try_with_context_mut(|ctx| ctx.options = options)
        .ok_or(TriplotError::NotInitialized)
}

/// Renders a figure to a raw RGBA pixel buffer without touching disk.
///
/// The returned buffer has `width * height * 4` bytes, ordered
/// row-by-row from top-left to bottom-right.
///
/// # Example
/// ```no_run
/// use triplot::*;
///
/// init().unwrap();
/// let fig = figure("preview").unwrap();
/// let pixels = render_to_image(fig.id(), 800, 600).unwrap();
/// assert_eq!(pixels.len(), 800 * 600 * 4);
/// ```
pub fn render_to_image(id: FigureId, width: u32, height: u32) -> Result<Vec<u8>> {
    if !is_initialized() {
        return Err(TriplotError::NotInitialized);
    }
    with_context(|ctx| {
        let figure = ctx
            .registry
            .get(id)
            .ok_or(TriplotError::FigureNotFound(id.0))?;
        let canvas =
            render::render_figure(figure, width, height, &ctx.options).map_err(render_err)?;
        Ok(canvas.into_rgba())
    })
}

/// Renders a figure at its own size and saves it as a PNG.
pub fn render_to_file(id: FigureId, path: impl AsRef<Path>) -> Result<()> {
    if !is_initialized() {
        return Err(TriplotError::NotInitialized);
    }
    with_context(|ctx| {
        let figure = ctx
            .registry
            .get(id)
            .ok_or(TriplotError::FigureNotFound(id.0))?;
        let (width, height) = figure.size();
        let canvas =
            render::render_figure(figure, width, height, &ctx.options).map_err(render_err)?;
        triplot_render::save_png(
            path.as_ref(),
            &canvas.into_rgba(),
            width,
            height,
            &render::metadata_for(figure),
        )
        .map_err(render_err)?;
        log::info!("figure {id} written to {}", path.as_ref().display());
        Ok(())
    })
}

fn render_err(e: triplot_render::RenderError) -> TriplotError {
    match e {
        triplot_render::RenderError::IoError(io) => TriplotError::IoError(io),
        other => TriplotError::RenderError(other.to_string()),
    }
}

/// Handle for a registered figure.
///
/// Handles are cheap ids; every method goes through the global registry.
/// Setters silently do nothing if the figure has been removed.
#[derive(Debug, Clone, Copy)]
pub struct FigureHandle {
    id: FigureId,
}

impl FigureHandle {
    /// Returns the id of this figure.
    pub fn id(&self) -> FigureId {
        self.id
    }

    /// Sets the figure title.
    pub fn set_title(&self, title: &str) -> &Self {
        self.update(|figure| figure.set_title(title));
        self
    }

    /// Sets the x-axis label.
    pub fn set_x_label(&self, label: &str) -> &Self {
        self.update(|figure| figure.set_x_label(label));
        self
    }

    /// Sets the y-axis label.
    pub fn set_y_label(&self, label: &str) -> &Self {
        self.update(|figure| figure.set_y_label(label));
        self
    }

    /// Sets the aspect-ratio policy.
    pub fn set_aspect(&self, aspect: Aspect) -> &Self {
        self.update(|figure| figure.set_aspect(aspect));
        self
    }

    /// Sets the output size in pixels.
    pub fn set_size(&self, width: u32, height: u32) -> &Self {
        self.update(|figure| figure.set_size(width, height));
        self
    }

    /// Adds a triangulation mesh plot to this figure.
    ///
    /// Draws the edges of every unmasked triangle in the style's line
    /// color, plus a marker at every point of the triangulation.
    pub fn triplot(&self, triangulation: Triangulation, style: PlotStyle) -> Result<&Self> {
        with_context_mut(|ctx| -> Result<()> {
            let figure = ctx
                .registry
                .get_mut(self.id)
                .ok_or(TriplotError::FigureNotFound(self.id.0))?;
            let label = format!("trimesh{}", figure.num_artists());
            figure.add_artist(Box::new(TriMeshPlot::new(label, triangulation, style)));
            Ok(())
        })?;
        Ok(self)
    }

    /// Returns the number of artists on this figure.
    pub fn num_artists(&self) -> usize {
        triplot_core::state::try_with_context(|ctx| {
            ctx.registry.get(self.id).map_or(0, Figure::num_artists)
        })
        .unwrap_or(0)
    }

    fn update(&self, f: impl FnOnce(&mut Figure)) {
        with_context_mut(|ctx| {
            if let Some(figure) = ctx.registry.get_mut(self.id) {
                f(figure);
            }
        });
    }
}
