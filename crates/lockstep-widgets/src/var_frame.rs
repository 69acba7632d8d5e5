#![forbid(unsafe_code)]

//! Variable inspector widget.
//!
//! An explicit key-value store: the script's assign steps set entries,
//! and the widget shows the mapping as aligned `name = value` rows. The
//! frame never invents values; everything displayed was put there by a
//! step, in program order, the way a tracer narrates variable state
//! evolving.

use std::collections::BTreeMap;

use lockstep_core::geometry::Rect;
use lockstep_core::value::Value;

use crate::canvas::Canvas;
use crate::{Widget, text_width};

/// The variable inspector: variable name → current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VarFrame {
    entries: BTreeMap<String, Value>,
}

impl VarFrame {
    /// Create an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or overwrite a variable. Always succeeds; no suspension.
    pub fn assign(&mut self, name: impl Into<String>, value: Value) {
        self.entries.insert(name.into(), value);
    }

    /// Current value of a variable, if assigned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Number of variables shown.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` entries, sorted by name.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The full mapping, sorted by name.
    #[must_use]
    pub fn mapping(&self) -> &BTreeMap<String, Value> {
        &self.entries
    }

    /// Width of the name column in cells.
    fn name_width(&self) -> u16 {
        self.entries.keys().map(|n| text_width(n)).max().unwrap_or(0)
    }
}

impl Widget for VarFrame {
    fn measure(&self) -> (u16, u16) {
        if self.entries.is_empty() {
            return (0, 0);
        }
        let value_w = self
            .entries
            .values()
            .map(|v| text_width(&v.to_string()))
            .max()
            .unwrap_or(0);
        // name column + " = " + value
        let width = self.name_width().saturating_add(3).saturating_add(value_w);
        (width, self.entries.len().min(u16::MAX as usize) as u16)
    }

    fn render(&self, area: Rect, canvas: &mut Canvas) {
        let name_w = self.name_width() as usize;
        for (i, (name, value)) in self.entries.iter().enumerate() {
            let Ok(offset) = u16::try_from(i) else {
                break;
            };
            let y = area.y.saturating_add(offset);
            if y >= area.bottom() {
                break;
            }
            let row = format!("{name:<name_w$} = {value}");
            canvas.draw_text(area.x, y, &row, area.right());
        }
    }
}
