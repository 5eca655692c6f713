//! Figure model: a titled drawing surface owning a list of artists.
//!
//! Each figure corresponds to one rendered image. Figures are created
//! fresh per plot, registered in the global [`Registry`](crate::Registry),
//! and identified by an auto-incrementing [`FigureId`].

use std::fmt;

use glam::DVec2;

use crate::artist::Artist;

/// Identifier of a registered figure.
///
/// Ids are assigned in registration order starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FigureId(pub u32);

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Aspect-ratio policy of a figure's axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aspect {
    /// Each axis is scaled independently to fill the available area.
    #[default]
    Auto,
    /// One data unit spans the same number of pixels on both axes.
    Equal,
}

/// A drawing surface holding the artists of exactly one plot.
pub struct Figure {
    /// Registry-assigned id; 0 until registered.
    id: FigureId,
    /// Title text, carried as metadata in saved images.
    title: String,
    /// Optional x-axis label.
    x_label: Option<String>,
    /// Optional y-axis label.
    y_label: Option<String>,
    /// Aspect-ratio policy.
    aspect: Aspect,
    /// Output size in pixels.
    width: u32,
    height: u32,
    /// Drawable payloads, in registration order.
    artists: Vec<Box<dyn Artist>>,
}

impl Figure {
    /// Default output width in pixels.
    pub const DEFAULT_WIDTH: u32 = 800;
    /// Default output height in pixels.
    pub const DEFAULT_HEIGHT: u32 = 600;

    /// Creates a new figure with the given title and no artists.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: FigureId(0),
            title: title.into(),
            x_label: None,
            y_label: None,
            aspect: Aspect::Auto,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            artists: Vec::new(),
        }
    }

    /// Returns the id of this figure.
    #[must_use]
    pub fn id(&self) -> FigureId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: FigureId) {
        self.id = id;
    }

    /// Returns the title of this figure.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the title of this figure.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Returns the x-axis label, if any.
    #[must_use]
    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    /// Sets the x-axis label.
    pub fn set_x_label(&mut self, label: impl Into<String>) {
        self.x_label = Some(label.into());
    }

    /// Returns the y-axis label, if any.
    #[must_use]
    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    /// Sets the y-axis label.
    pub fn set_y_label(&mut self, label: impl Into<String>) {
        self.y_label = Some(label.into());
    }

    /// Returns the aspect-ratio policy.
    #[must_use]
    pub fn aspect(&self) -> Aspect {
        self.aspect
    }

    /// Sets the aspect-ratio policy.
    pub fn set_aspect(&mut self, aspect: Aspect) {
        self.aspect = aspect;
    }

    /// Returns the output size in pixels as `(width, height)`.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Sets the output size in pixels.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Adds an artist to this figure.
    pub fn add_artist(&mut self, artist: Box<dyn Artist>) {
        self.artists.push(artist);
    }

    /// Returns the artists of this figure, in registration order.
    #[must_use]
    pub fn artists(&self) -> &[Box<dyn Artist>] {
        &self.artists
    }

    /// Returns the artists of this figure mutably.
    pub fn artists_mut(&mut self) -> &mut [Box<dyn Artist>] {
        &mut self.artists
    }

    /// Returns the number of artists on this figure.
    #[must_use]
    pub fn num_artists(&self) -> usize {
        self.artists.len()
    }

    /// Returns the union of the data extents of all enabled artists.
    ///
    /// Returns `None` if no enabled artist has a spatial extent.
    #[must_use]
    pub fn data_bounds(&self) -> Option<(DVec2, DVec2)> {
        let mut min = DVec2::splat(f64::MAX);
        let mut max = DVec2::splat(f64::MIN);
        let mut has_extent = false;

        for artist in &self.artists {
            if !artist.is_enabled() {
                continue;
            }
            if let Some((bb_min, bb_max)) = artist.data_bounds() {
                min = min.min(bb_min);
                max = max.max(bb_max);
                has_extent = true;
            }
        }

        has_extent.then_some((min, max))
    }
}
