//! Axes frame and tick placement.
//!
//! Ticks follow the usual 1-2-5 ladder: the raw step for the requested
//! tick count is rounded up to the nearest 1, 2, or 5 times a power of
//! ten, then ticks are laid on multiples of that step inside the range.

use glam::DVec2;
use triplot_core::{colors, LineStyle};

use crate::canvas::{Canvas, Segment};
use crate::viewport::Viewport;

/// Tick mark length in pixels, drawn outward from the frame.
const TICK_LENGTH: f32 = 5.0;

/// Returns nicely rounded tick positions covering `[min, max]`.
///
/// `target` is the desired tick count; the actual count varies with how
/// the range lands on the step ladder. Empty for degenerate ranges.
#[must_use]
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return Vec::new();
    }

    #[allow(clippy::cast_precision_loss)]
    let raw_step = span / target as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = factor * magnitude;

    let first = (min / step).ceil() * step;
    let mut ticks = Vec::new();
    let mut index = 0u32;
    loop {
        let value = first + f64::from(index) * step;
        if value > max + step * 1e-9 {
            break;
        }
        // Snap values like -5.5e-17 back onto zero.
        ticks.push(if value.abs() < step * 1e-9 { 0.0 } else { value });
        index += 1;
    }
    ticks
}

/// Draws the plot frame and outward tick marks onto `canvas`.
///
/// The x ticks sit below the bottom edge, the y ticks left of the left
/// edge, matching the frame drawn around the viewport's plot rectangle.
pub fn draw_axes(canvas: &mut Canvas, viewport: &Viewport, target_ticks: usize) {
    let rect = viewport.rect();
    canvas.stroke_rect(rect.left, rect.top, rect.width, rect.height, colors::BLACK);

    let (x_min, x_max) = viewport.x_range();
    let (y_min, y_max) = viewport.y_range();

    let mut segments: Vec<Segment> = Vec::new();
    for tick in nice_ticks(x_min, x_max, target_ticks) {
        let (x, _) = viewport.to_pixels(DVec2::new(tick, y_min));
        segments.push(((x, rect.bottom()), (x, rect.bottom() + TICK_LENGTH)));
    }
    for tick in nice_ticks(y_min, y_max, target_ticks) {
        let (_, y) = viewport.to_pixels(DVec2::new(x_min, tick));
        segments.push(((rect.left - TICK_LENGTH, y), (rect.left, y)));
    }
    canvas.stroke_segments(&segments, colors::BLACK, 1.0, LineStyle::Solid);
}
