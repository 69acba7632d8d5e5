#![forbid(unsafe_code)]

//! Append-only terminal log widget.
//!
//! The terminal is a streaming log: completed lines plus at most one
//! open partial line (a prompt waiting for input, or text printed
//! without a newline). Completed lines are never mutated or reordered;
//! the rendered text only ever grows by appending.

use lockstep_core::geometry::Rect;

use crate::canvas::Canvas;
use crate::{Widget, text_width};

/// The console log of the traced program.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Terminal {
    completed: Vec<String>,
    partial: String,
}

impl Terminal {
    /// Create an empty terminal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text without a line break.
    ///
    /// Embedded newlines behave as a real terminal would: each one
    /// completes the open line.
    pub fn print(&mut self, text: &str) {
        let mut segments = text.split('\n');
        if let Some(first) = segments.next() {
            self.partial.push_str(first);
        }
        for segment in segments {
            self.complete_line();
            self.partial.push_str(segment);
        }
    }

    /// Append a full line.
    pub fn println(&mut self, text: &str) {
        self.print(text);
        self.complete_line();
    }

    /// Echo learner input: it lands on the open prompt line, which the
    /// virtual Enter keystroke then completes.
    pub fn echo_input(&mut self, input: &str) {
        self.println(input);
    }

    fn complete_line(&mut self) {
        self.completed.push(std::mem::take(&mut self.partial));
    }

    /// Completed lines, oldest first.
    #[must_use]
    pub fn completed_lines(&self) -> &[String] {
        &self.completed
    }

    /// All visible lines: completed plus the open partial line, if any.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = self.completed.iter().map(String::as_str).collect();
        if !self.partial.is_empty() {
            lines.push(&self.partial);
        }
        lines
    }

    /// The full log as one string, partial line included, no trailing
    /// newline on the partial.
    #[must_use]
    pub fn rendered(&self) -> String {
        let mut out = String::new();
        for line in &self.completed {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&self.partial);
        out
    }

    /// Whether nothing has been printed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty() && self.partial.is_empty()
    }
}

impl Widget for Terminal {
    fn measure(&self) -> (u16, u16) {
        let lines = self.lines();
        let width = lines.iter().copied().map(text_width).max().unwrap_or(0);
        (width, lines.len().min(u16::MAX as usize) as u16)
    }

    fn render(&self, area: Rect, canvas: &mut Canvas) {
        for (i, line) in self.lines().into_iter().enumerate() {
            let Ok(offset) = u16::try_from(i) else {
                break;
            };
            let y = area.y.saturating_add(offset);
            if y >= area.bottom() {
                break;
            }
            canvas.draw_text(area.x, y, line, area.right());
        }
    }
}
