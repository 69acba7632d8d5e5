#![forbid(unsafe_code)]

//! A plain-text cell grid widgets draw into.
//!
//! The canvas is the engine's whole rendering surface: a rectangle of
//! character cells that stringifies to the text frame an embedding UI
//! shows. Drawing is grapheme-cluster aware so double-width characters
//! occupy two cells and combining marks don't shift columns.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A fixed-size grid of character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl Canvas {
    /// Create a canvas filled with spaces.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width as usize * height as usize],
        }
    }

    /// Canvas width in cells.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Canvas height in cells.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Read a cell. Out-of-range coordinates yield `None`.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        if x < self.width && y < self.height {
            Some(self.cells[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Write a cell. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = ch;
        }
    }

    /// Draw a text span at `(x, y)`, stopping at `max_x` (exclusive).
    ///
    /// Returns the x position after the last drawn cell. Zero-width
    /// graphemes are skipped; a grapheme wider than the remaining room
    /// ends the span. Wide graphemes claim their trailing cell with a
    /// space so later draws can't split them silently.
    pub fn draw_text(&mut self, mut x: u16, y: u16, content: &str, max_x: u16) -> u16 {
        let max_x = max_x.min(self.width);
        for grapheme in content.graphemes(true) {
            if x >= max_x {
                break;
            }
            let w = UnicodeWidthStr::width(grapheme);
            if w == 0 {
                continue;
            }
            if x as usize + w > max_x as usize {
                break;
            }
            if let Some(c) = grapheme.chars().next() {
                self.set(x, y, c);
                for dx in 1..w as u16 {
                    self.set(x + dx, y, ' ');
                }
            }
            x += w as u16;
        }
        x
    }

    /// A single row as a right-trimmed string.
    #[must_use]
    pub fn row(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = y as usize * self.width as usize;
        let row: String = self.cells[start..start + self.width as usize]
            .iter()
            .collect();
        row.trim_end().to_string()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&self.row(y))?;
        }
        Ok(())
    }
}
