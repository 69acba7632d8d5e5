#![forbid(unsafe_code)]

//! Suspensions: the walk's pause states and the answers that resolve them.
//!
//! Exactly one suspension is pending at a time. It is created when the
//! walk reaches a suspending step and destroyed the instant a submission
//! resolves it; a wrong answer re-creates it in place with the attempt
//! count bumped.

use lockstep_core::step::{AnswerKind, Step, WidgetKind};
use lockstep_core::value::Value;

#[cfg(feature = "transcript")]
use serde::{Deserialize, Serialize};

/// Prompt shown for a line prediction.
pub const ASK_LINE_PROMPT: &str = "Which line is executed next?";

/// Prompt shown while the walk holds for an acknowledgement.
pub const PAUSE_PROMPT: &str = "Continue when ready.";

/// A learner's input for one suspension.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "transcript", derive(Serialize, Deserialize))]
pub enum Answer {
    /// A 1-based line number.
    Line(u32),
    /// Raw text, exactly as typed.
    Text(String),
    /// A typed literal.
    Value(Value),
    /// A bare acknowledgement.
    Ack,
}

impl Answer {
    /// The shape of this answer.
    #[must_use]
    pub const fn kind(&self) -> AnswerKind {
        match self {
            Self::Line(_) => AnswerKind::LineNumber,
            Self::Text(_) => AnswerKind::FreeText,
            Self::Value(_) => AnswerKind::TypedValue,
            Self::Ack => AnswerKind::Acknowledge,
        }
    }
}

/// How one submission was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "transcript", derive(Serialize, Deserialize))]
pub enum Verdict {
    /// Matched the authored answer.
    Correct,
    /// Did not match; the suspension stands.
    Incorrect,
    /// Wrong once too often under a lenient policy; the authored answer
    /// was applied instead of the learner's.
    Revealed,
    /// Taken as-is; the step has no ground truth to judge against.
    Accepted,
}

impl Verdict {
    /// Whether this verdict resolved its suspension.
    #[must_use]
    pub const fn resolves(&self) -> bool {
        !matches!(self, Self::Incorrect)
    }

    /// Short lowercase name, for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
            Self::Revealed => "revealed",
            Self::Accepted => "accepted",
        }
    }
}

/// The walk is paused, waiting for one learner input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suspension {
    /// The shape of input this suspension expects.
    pub kind: AnswerKind,
    /// The widget the question is about. `None` for notes and pauses,
    /// which address the walk itself.
    pub focus: Option<WidgetKind>,
    /// What to show the learner.
    pub prompt: String,
    /// Wrong submissions already made against this suspension.
    pub attempts: u32,
    /// How the submission that led here was judged. `None` on the first
    /// suspension of a session.
    pub verdict: Option<Verdict>,
}

impl Suspension {
    /// Describe the pause `step` causes, or `None` if it never suspends.
    pub(crate) fn for_step(step: &Step, attempts: u32, verdict: Option<Verdict>) -> Option<Self> {
        let kind = step.answer_kind()?;
        let prompt = match step {
            Step::AskLine { .. } => ASK_LINE_PROMPT,
            Step::Pause => PAUSE_PROMPT,
            Step::Note { message } => message.as_str(),
            Step::AskInput { prompt } | Step::AskExpr { prompt, .. } => prompt.as_str(),
            _ => return None,
        };
        Some(Self {
            kind,
            focus: step.target(),
            prompt: prompt.to_string(),
            attempts,
            verdict,
        })
    }
}

/// What `start` and `submit` hand back: the next pause, or the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The walk is paused at a suspension.
    Suspended(Suspension),
    /// Every step has executed.
    Done,
}

impl Outcome {
    /// The pending suspension, if the walk is paused.
    #[must_use]
    pub fn suspension(&self) -> Option<&Suspension> {
        match self {
            Self::Suspended(suspension) => Some(suspension),
            Self::Done => None,
        }
    }

    /// Whether the walk has completed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}
