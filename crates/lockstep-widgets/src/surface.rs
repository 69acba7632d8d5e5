#![forbid(unsafe_code)]

//! The display surface: widget placement registry and whole-frame
//! renderer.
//!
//! Placement mirrors how an exercise author lays out the classic tracer
//! page: code listing top-left, terminal below, variable frame beside
//! it. Each widget is anchored at a grid position chosen once at
//! authoring time. Anchors are advisory layout hints; nothing checks
//! overlap. The surface renders whichever widgets are placed onto one
//! [`Canvas`] sized to fit them all.

use lockstep_core::error::{AuthoringError, AuthoringResult};
use lockstep_core::geometry::{Anchor, Rect};
use lockstep_core::step::WidgetKind;

use crate::Widget;
use crate::canvas::Canvas;
use crate::code_view::CodeView;
use crate::terminal::Terminal;
use crate::var_frame::VarFrame;

/// Placement registry: at most one anchor per widget kind.
///
/// The step vocabulary addresses widgets implicitly ("the" terminal,
/// "the" code listing), so a second placement of the same kind is an
/// authoring error, as is an anchor outside the surface bounds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Surface {
    code: Option<Anchor>,
    terminal: Option<Anchor>,
    frame: Option<Anchor>,
}

impl Surface {
    /// Create a surface with nothing placed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget at `(row, col)`.
    ///
    /// Positions are fixed for the session and never mutated afterwards.
    pub fn place(&mut self, row: u16, col: u16, kind: WidgetKind) -> AuthoringResult<()> {
        let anchor = Anchor::new(row, col);
        if !anchor.in_bounds() {
            return Err(AuthoringError::PlacementOutOfBounds { kind, row, col });
        }
        let slot = self.slot_mut(kind);
        if slot.is_some() {
            return Err(AuthoringError::DuplicateWidget { kind });
        }
        *slot = Some(anchor);
        Ok(())
    }

    /// Anchor of a placed widget, if any.
    #[must_use]
    pub fn anchor(&self, kind: WidgetKind) -> Option<Anchor> {
        match kind {
            WidgetKind::Code => self.code,
            WidgetKind::Terminal => self.terminal,
            WidgetKind::Frame => self.frame,
        }
    }

    /// Whether a widget of this kind has been placed.
    #[must_use]
    pub fn is_placed(&self, kind: WidgetKind) -> bool {
        self.anchor(kind).is_some()
    }

    fn slot_mut(&mut self, kind: WidgetKind) -> &mut Option<Anchor> {
        match kind {
            WidgetKind::Code => &mut self.code,
            WidgetKind::Terminal => &mut self.terminal,
            WidgetKind::Frame => &mut self.frame,
        }
    }

    /// Render every placed widget onto one canvas sized to fit them all.
    ///
    /// Unplaced widgets are skipped. Draw order is code, terminal, frame;
    /// overlapping placements draw in that order, last wins.
    #[must_use]
    pub fn render(&self, code: &CodeView, terminal: &Terminal, frame: &VarFrame) -> Canvas {
        let parts: [(Option<Anchor>, &dyn Widget); 3] = [
            (self.code, code),
            (self.terminal, terminal),
            (self.frame, frame),
        ];

        let mut width = 0u16;
        let mut height = 0u16;
        for (anchor, widget) in &parts {
            if let Some(a) = anchor {
                let (w, h) = widget.measure();
                width = width.max(a.col.saturating_add(w));
                height = height.max(a.row.saturating_add(h));
            }
        }

        let mut canvas = Canvas::new(width, height);
        for (anchor, widget) in &parts {
            if let Some(a) = anchor {
                let (w, h) = widget.measure();
                widget.render(Rect::new(a.col, a.row, w, h), &mut canvas);
            }
        }
        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lockstep_core::geometry::{MAX_COL, MAX_ROW};
    use lockstep_core::source::SourceText;
    use lockstep_core::value::Value;

    #[test]
    fn place_registers_anchor() {
        let mut s = Surface::new();
        s.place(15, 0, WidgetKind::Terminal).unwrap();
        assert!(s.is_placed(WidgetKind::Terminal));
        assert_eq!(s.anchor(WidgetKind::Terminal), Some(Anchor::new(15, 0)));
        assert!(!s.is_placed(WidgetKind::Code));
    }

    #[test]
    fn duplicate_placement_is_rejected() {
        let mut s = Surface::new();
        s.place(0, 0, WidgetKind::Code).unwrap();
        assert_eq!(
            s.place(3, 3, WidgetKind::Code),
            Err(AuthoringError::DuplicateWidget {
                kind: WidgetKind::Code
            })
        );
        // the original anchor survives the failed attempt
        assert_eq!(s.anchor(WidgetKind::Code), Some(Anchor::new(0, 0)));
    }

    #[test]
    fn out_of_bounds_placement_is_rejected() {
        let mut s = Surface::new();
        assert_eq!(
            s.place(MAX_ROW + 1, 0, WidgetKind::Frame),
            Err(AuthoringError::PlacementOutOfBounds {
                kind: WidgetKind::Frame,
                row: MAX_ROW + 1,
                col: 0,
            })
        );
        assert!(s.place(0, MAX_COL + 1, WidgetKind::Frame).is_err());
        assert!(!s.is_placed(WidgetKind::Frame));
    }

    #[test]
    fn render_composes_placed_widgets() {
        let mut s = Surface::new();
        s.place(0, 0, WidgetKind::Code).unwrap();
        s.place(4, 0, WidgetKind::Terminal).unwrap();
        s.place(4, 20, WidgetKind::Frame).unwrap();

        let mut code = CodeView::new(SourceText::new("a = 1\nprint(a)"));
        code.jump_to(1);
        let mut term = Terminal::new();
        term.println("1");
        let mut vars = VarFrame::new();
        vars.assign("a", Value::Int(1));

        let canvas = s.render(&code, &term, &vars);
        assert_eq!(canvas.row(0), ">1 | a = 1");
        assert_eq!(canvas.row(1), " 2 | print(a)");
        assert_eq!(canvas.row(4), "1                   a = 1");
    }

    #[test]
    fn render_skips_unplaced_widgets() {
        let mut s = Surface::new();
        s.place(0, 0, WidgetKind::Terminal).unwrap();

        let code = CodeView::new(SourceText::new("x = 0"));
        let mut term = Terminal::new();
        term.println("hello");
        let vars = VarFrame::new();

        let canvas = s.render(&code, &term, &vars);
        assert_eq!(canvas.to_string(), "hello");
    }

    #[test]
    fn render_of_empty_surface_is_empty() {
        let s = Surface::new();
        let code = CodeView::new(SourceText::new("x = 0"));
        let canvas = s.render(&code, &Terminal::new(), &VarFrame::new());
        assert_eq!(canvas.width(), 0);
        assert_eq!(canvas.height(), 0);
        assert_eq!(canvas.to_string(), "");
    }
}
