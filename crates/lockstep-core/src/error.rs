#![forbid(unsafe_code)]

//! Authoring error taxonomy.
//!
//! Authoring errors are fatal and caught when an exercise is built,
//! before any learner-facing session exists. They are surfaced to the
//! exercise author, never to the learner.

use std::fmt;

use crate::step::WidgetKind;

/// A defect in an authored exercise, detected at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthoringError {
    /// The source listing has no lines.
    EmptySource,
    /// A step references a line outside the listing.
    LineOutOfRange {
        /// Index of the offending step in the script.
        step: usize,
        /// The referenced line.
        line: u32,
        /// Number of lines in the listing.
        line_count: u32,
    },
    /// An assignment target is not a plausible identifier.
    BadVariableName { step: usize, name: String },
    /// An expression question whose ground truth is `uninitialized`
    /// cannot be answered.
    UnanswerableExpr { step: usize },
    /// A widget anchor lies outside the surface bounds.
    PlacementOutOfBounds {
        kind: WidgetKind,
        row: u16,
        col: u16,
    },
    /// A second widget of the same kind was placed.
    DuplicateWidget { kind: WidgetKind },
    /// A step addresses a widget that was never placed.
    MissingWidget { step: usize, kind: WidgetKind },
}

impl fmt::Display for AuthoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySource => write!(f, "source listing is empty"),
            Self::LineOutOfRange {
                step,
                line,
                line_count,
            } => write!(
                f,
                "step {step} references line {line}, but the listing has {line_count} lines"
            ),
            Self::BadVariableName { step, name } => {
                write!(f, "step {step} assigns to invalid variable name {name:?}")
            }
            Self::UnanswerableExpr { step } => write!(
                f,
                "step {step} asks for an expression whose expected value is uninitialized"
            ),
            Self::PlacementOutOfBounds { kind, row, col } => write!(
                f,
                "{} widget placed out of bounds at ({row}, {col})",
                kind.name()
            ),
            Self::DuplicateWidget { kind } => {
                write!(f, "{} widget placed more than once", kind.name())
            }
            Self::MissingWidget { step, kind } => write!(
                f,
                "step {step} addresses the {} widget, which is not placed",
                kind.name()
            ),
        }
    }
}

impl std::error::Error for AuthoringError {}

/// Result type for exercise-authoring operations.
pub type AuthoringResult<T> = Result<T, AuthoringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_step_and_widget() {
        let e = AuthoringError::MissingWidget {
            step: 4,
            kind: WidgetKind::Terminal,
        };
        assert_eq!(
            e.to_string(),
            "step 4 addresses the terminal widget, which is not placed"
        );
    }

    #[test]
    fn display_reports_line_bounds() {
        let e = AuthoringError::LineOutOfRange {
            step: 0,
            line: 99,
            line_count: 12,
        };
        assert!(e.to_string().contains("line 99"));
        assert!(e.to_string().contains("12 lines"));
    }
}
