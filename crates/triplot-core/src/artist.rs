//! Artist trait for renderable plot payloads.
//!
//! An [`Artist`] is a drawable item attached to a figure, such as a
//! triangulated mesh plot. Figures own artists as trait objects; the
//! renderer downcasts to concrete artist types when drawing.

use std::any::Any;

use glam::DVec2;

/// A drawable item attached to a figure.
///
/// Each artist has:
/// - A label naming it within its figure
/// - A kind name identifying its concrete type
/// - A rectangular data extent used to fit the viewport
/// - Visibility state
pub trait Artist: Any + Send + Sync {
    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns a mutable reference to self as `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Returns the label of this artist.
    fn label(&self) -> &str;

    /// Returns the kind name of this artist (e.g., "`TriMeshPlot`").
    fn kind(&self) -> &'static str;

    /// Returns the axis-aligned extent of this artist's data as
    /// `(min, max)` corners.
    ///
    /// Returns `None` if the artist has no spatial extent.
    fn data_bounds(&self) -> Option<(DVec2, DVec2)>;

    /// Returns whether this artist is currently drawn.
    fn is_enabled(&self) -> bool;

    /// Sets the visibility of this artist.
    fn set_enabled(&mut self, enabled: bool);
}
