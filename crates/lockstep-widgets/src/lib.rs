#![forbid(unsafe_code)]

//! Widgets: the three presentable views of a trace walk and the surface
//! they are placed on.
//!
//! Widgets here are plain state holders that know how to draw
//! themselves onto a plain-text [`canvas::Canvas`]. The engine mutates
//! them as the script executes; an embedding UI can either read their
//! state directly or take the rendered text frame.

pub mod canvas;
pub mod code_view;
pub mod surface;
pub mod terminal;
pub mod var_frame;

use canvas::Canvas;
use lockstep_core::geometry::Rect;

/// A `Widget` is a renderable view of one slice of the walk's state.
///
/// Widgets render themselves into a [`Canvas`] within a given [`Rect`]
/// and report the natural size of their content so the surface can size
/// the canvas around the placements.
pub trait Widget {
    /// Natural content size, `(width, height)` in cells.
    fn measure(&self) -> (u16, u16);

    /// Render the widget into the canvas, clipped to `area`.
    fn render(&self, area: Rect, canvas: &mut Canvas);
}

/// Display width of a string in cells, saturated to `u16`.
pub(crate) fn text_width(s: &str) -> u16 {
    unicode_width::UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}
