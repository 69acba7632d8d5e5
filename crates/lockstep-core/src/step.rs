#![forbid(unsafe_code)]

//! The step vocabulary an author writes a trace in.
//!
//! A trace script is a finite, statically-ordered list of steps. Steps
//! either mutate the presented state immediately (jump the code
//! highlight, assign a variable, print) or suspend the walk until the
//! learner responds (predict a line, supply a value, acknowledge a
//! note). Any apparent branching in an exercise is resolved while
//! *authoring*: the author picks the branch the traced run takes and
//! scripts that straight line.

use crate::value::Value;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The widget a step addresses or a suspension focuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WidgetKind {
    /// The source listing with the current-line highlight.
    Code,
    /// The append-only console log.
    Terminal,
    /// The variable inspector.
    Frame,
}

impl WidgetKind {
    /// Human-readable widget name, for error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Terminal => "terminal",
            Self::Frame => "frame",
        }
    }
}

/// The shape of input a suspension expects from the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AnswerKind {
    /// A 1-based line number (exact integer match).
    LineNumber,
    /// Free-form console input; anything is accepted and echoed.
    FreeText,
    /// A typed literal checked against the authored ground truth.
    TypedValue,
    /// A bare acknowledgement (notes and pauses).
    Acknowledge,
}

impl AnswerKind {
    /// Short name for error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LineNumber => "line number",
            Self::FreeText => "free text",
            Self::TypedValue => "typed value",
            Self::Acknowledge => "acknowledgement",
        }
    }
}

/// One authored step of a trace script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Move the code highlight silently; narration, not a question.
    Jump { line: u32 },
    /// Ask the learner which line executes next. Only an exact match on
    /// `expected` is accepted; on acceptance the highlight moves there.
    AskLine { expected: u32 },
    /// Show a message the learner acknowledges before the walk resumes.
    Note { message: String },
    /// Hold the walk until the learner continues.
    Pause,
    /// Set or overwrite a variable in the inspector.
    Assign { name: String, value: Value },
    /// Append text to the terminal without a line break.
    Print { text: String },
    /// Append a full line to the terminal.
    Println { text: String },
    /// Print `prompt` to the terminal and wait for free-form input,
    /// which is echoed verbatim. Never judged; the trace fixes what the
    /// simulated user "typed".
    AskInput { prompt: String },
    /// Ask the learner to compute a value. Only `expected` is accepted.
    AskExpr { expected: Value, prompt: String },
}

impl Step {
    /// Whether executing this step suspends the walk for learner input.
    #[must_use]
    pub const fn suspends(&self) -> bool {
        matches!(
            self,
            Self::AskLine { .. }
                | Self::Note { .. }
                | Self::Pause
                | Self::AskInput { .. }
                | Self::AskExpr { .. }
        )
    }

    /// The input shape this step waits for, if it suspends.
    #[must_use]
    pub const fn answer_kind(&self) -> Option<AnswerKind> {
        match self {
            Self::AskLine { .. } => Some(AnswerKind::LineNumber),
            Self::AskInput { .. } => Some(AnswerKind::FreeText),
            Self::AskExpr { .. } => Some(AnswerKind::TypedValue),
            Self::Note { .. } | Self::Pause => Some(AnswerKind::Acknowledge),
            _ => None,
        }
    }

    /// The widget this step reads or writes, if any.
    ///
    /// `Note` and `Pause` address the walk itself, not a widget.
    #[must_use]
    pub const fn target(&self) -> Option<WidgetKind> {
        match self {
            Self::Jump { .. } | Self::AskLine { .. } => Some(WidgetKind::Code),
            Self::Print { .. } | Self::Println { .. } | Self::AskInput { .. } => {
                Some(WidgetKind::Terminal)
            }
            Self::Assign { .. } | Self::AskExpr { .. } => Some(WidgetKind::Frame),
            Self::Note { .. } | Self::Pause => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suspension_classification() {
        assert!(!Step::Jump { line: 1 }.suspends());
        assert!(!Step::Assign { name: "x".into(), value: Value::Int(0) }.suspends());
        assert!(!Step::Print { text: String::new() }.suspends());
        assert!(!Step::Println { text: String::new() }.suspends());
        assert!(Step::AskLine { expected: 1 }.suspends());
        assert!(Step::Note { message: String::new() }.suspends());
        assert!(Step::Pause.suspends());
        assert!(Step::AskInput { prompt: String::new() }.suspends());
        assert!(
            Step::AskExpr { expected: Value::Int(1), prompt: String::new() }.suspends()
        );
    }

    #[test]
    fn answer_kinds_match_suspension() {
        assert_eq!(
            Step::AskLine { expected: 3 }.answer_kind(),
            Some(AnswerKind::LineNumber)
        );
        assert_eq!(Step::Pause.answer_kind(), Some(AnswerKind::Acknowledge));
        assert_eq!(Step::Jump { line: 3 }.answer_kind(), None);
    }

    #[test]
    fn targets_address_the_right_widget() {
        assert_eq!(Step::Jump { line: 1 }.target(), Some(WidgetKind::Code));
        assert_eq!(
            Step::Print { text: String::new() }.target(),
            Some(WidgetKind::Terminal)
        );
        assert_eq!(
            Step::Assign { name: "x".into(), value: Value::Uninit }.target(),
            Some(WidgetKind::Frame)
        );
        assert_eq!(Step::Pause.target(), None);
    }
}
