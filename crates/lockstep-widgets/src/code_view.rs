#![forbid(unsafe_code)]

//! Source listing widget with the current-line highlight.

use lockstep_core::geometry::Rect;
use lockstep_core::source::SourceText;

use crate::canvas::Canvas;
use crate::{Widget, text_width};

/// The fixed source listing and the line the walk is currently on.
///
/// The listing never changes; the only mutable state is the highlight,
/// moved by the script (silently via a jump, or after the learner
/// correctly predicts the next line). `current` is 1-based; `None` means
/// no line is highlighted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeView {
    source: SourceText,
    current: Option<u32>,
}

impl CodeView {
    /// Create a view over a listing with no highlight.
    #[must_use]
    pub fn new(source: SourceText) -> Self {
        Self {
            source,
            current: None,
        }
    }

    /// The listing.
    #[must_use]
    pub fn source(&self) -> &SourceText {
        &self.source
    }

    /// The highlighted line, if any.
    #[must_use]
    pub fn current_line(&self) -> Option<u32> {
        self.current
    }

    /// Move the highlight unconditionally.
    ///
    /// Callers validate the line number at authoring time; a runtime
    /// jump never fails.
    pub fn jump_to(&mut self, line: u32) {
        self.current = Some(line);
    }

    /// Width of the line-number gutter in digits.
    fn gutter_width(&self) -> usize {
        let mut digits = 1;
        let mut n = self.source.line_count().max(1);
        while n >= 10 {
            digits += 1;
            n /= 10;
        }
        digits
    }
}

impl Widget for CodeView {
    fn measure(&self) -> (u16, u16) {
        let widest = self.source.lines().map(text_width).max().unwrap_or(0);
        // marker + gutter + " | " + text
        let width = 1 + self.gutter_width() as u16 + 3 + widest;
        (width, self.source.line_count().min(u16::MAX as u32) as u16)
    }

    fn render(&self, area: Rect, canvas: &mut Canvas) {
        let gutter = self.gutter_width();
        for (i, line) in self.source.lines().enumerate() {
            let number = i as u32 + 1;
            let Ok(offset) = u16::try_from(i) else {
                break;
            };
            let y = area.y.saturating_add(offset);
            if y >= area.bottom() {
                break;
            }
            let marker = if self.current == Some(number) { '>' } else { ' ' };
            let text = format!("{marker}{number:>gutter$} | {line}");
            canvas.draw_text(area.x, y, &text, area.right());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> CodeView {
        CodeView::new(SourceText::new("total = 0\nfor i in range(3):\n    total += 1"))
    }

    #[test]
    fn starts_with_no_highlight() {
        assert_eq!(view().current_line(), None);
    }

    #[test]
    fn jump_moves_the_highlight() {
        let mut v = view();
        v.jump_to(2);
        assert_eq!(v.current_line(), Some(2));
        v.jump_to(3);
        assert_eq!(v.current_line(), Some(3));
    }

    #[test]
    fn renders_gutter_and_marker() {
        let mut v = view();
        v.jump_to(2);
        let (w, h) = v.measure();
        let mut canvas = Canvas::new(w, h);
        v.render(Rect::new(0, 0, w, h), &mut canvas);
        assert_eq!(canvas.row(0), " 1 | total = 0");
        assert_eq!(canvas.row(1), ">2 | for i in range(3):");
        assert_eq!(canvas.row(2), " 3 |     total += 1");
    }

    #[test]
    fn gutter_widens_for_long_listings() {
        let listing: String = (0..12).map(|i| format!("line{i}\n")).collect();
        let v = CodeView::new(SourceText::new(listing));
        let (w, h) = v.measure();
        let mut canvas = Canvas::new(w, h);
        v.render(Rect::new(0, 0, w, h), &mut canvas);
        assert_eq!(canvas.row(0), "  1 | line0");
        assert_eq!(canvas.row(9), " 10 | line9");
    }

    #[test]
    fn render_clips_to_area() {
        let v = view();
        let mut canvas = Canvas::new(30, 2);
        v.render(Rect::new(0, 0, 30, 2), &mut canvas);
        assert_eq!(canvas.row(1), " 2 | for i in range(3):");
        // third line clipped away
        assert_eq!(canvas.row(2), "");
    }
}
