#![forbid(unsafe_code)]

//! Geometric primitives for widget placement and rendering.

/// Maximum row a widget may be anchored at.
///
/// Generous for real exercises (the classic layouts use rows below 20);
/// the bound exists to reject authoring typos before a learner ever sees
/// the exercise.
pub const MAX_ROW: u16 = 256;

/// Maximum column a widget may be anchored at.
pub const MAX_COL: u16 = 512;

/// Grid position of a widget on the display surface.
///
/// Coordinates are 0-indexed cells with the origin at the top-left.
/// An anchor is fixed at placement time and never mutated afterwards;
/// it is an advisory layout hint, not a collision-checked region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    /// Row (y) of the widget's top-left corner.
    pub row: u16,
    /// Column (x) of the widget's top-left corner.
    pub col: u16,
}

impl Anchor {
    /// Create a new anchor.
    #[inline]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Whether the anchor lies inside the surface bounds.
    #[inline]
    pub const fn in_bounds(&self) -> bool {
        self.row <= MAX_ROW && self.col <= MAX_COL
    }
}

/// A rectangle in canvas coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
