#![forbid(unsafe_code)]

//! The trace script: an ordered step list plus its authoring checks.

use crate::error::{AuthoringError, AuthoringResult};
use crate::source::SourceText;
use crate::step::Step;
use crate::value::Value;

/// A complete, ordered trace script.
///
/// Built with [`ScriptBuilder`]; immutable afterwards. The script is a
/// straight-line plan: the engine executes steps strictly in order and
/// never skips or re-enters one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the script has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Fetch a step by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Iterate over the steps in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    /// Number of steps that suspend for learner input.
    #[must_use]
    pub fn suspension_count(&self) -> usize {
        self.steps.iter().filter(|s| s.suspends()).count()
    }

    /// Check the script against the listing it narrates.
    ///
    /// Catches every line reference outside the listing, malformed
    /// assignment targets, and expression questions with no concrete
    /// answer. Widget placement checks live with the surface; the full
    /// cross-check runs when an exercise is assembled.
    pub fn validate(&self, source: &SourceText) -> AuthoringResult<()> {
        if source.is_empty() {
            return Err(AuthoringError::EmptySource);
        }
        for (index, step) in self.steps.iter().enumerate() {
            match step {
                Step::Jump { line } | Step::AskLine { expected: line } => {
                    if !source.contains_line(*line) {
                        return Err(AuthoringError::LineOutOfRange {
                            step: index,
                            line: *line,
                            line_count: source.line_count(),
                        });
                    }
                }
                Step::Assign { name, .. } => {
                    if !is_identifier(name) {
                        return Err(AuthoringError::BadVariableName {
                            step: index,
                            name: name.clone(),
                        });
                    }
                }
                Step::AskExpr { expected, .. } => {
                    if *expected == Value::Uninit {
                        return Err(AuthoringError::UnanswerableExpr { step: index });
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Whether `name` is a plausible ASCII identifier.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Incremental builder for a [`Script`].
///
/// Methods chain on `&mut self` so authoring code can unroll loops the
/// way the traced program runs them:
///
/// ```
/// use lockstep_core::script::ScriptBuilder;
///
/// let mut b = ScriptBuilder::new();
/// b.jump(7).note("Initialize the accumulator total to zero.");
/// b.assign("total", 0);
/// for _ in 0..3 {
///     b.ask_line(11);
/// }
/// let script = b.finish();
/// assert_eq!(script.len(), 6);
/// ```
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    steps: Vec<Step>,
}

impl ScriptBuilder {
    /// Start an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the code highlight silently.
    pub fn jump(&mut self, line: u32) -> &mut Self {
        self.steps.push(Step::Jump { line });
        self
    }

    /// Ask the learner which line executes next.
    pub fn ask_line(&mut self, expected: u32) -> &mut Self {
        self.steps.push(Step::AskLine { expected });
        self
    }

    /// Show a note the learner acknowledges.
    pub fn note(&mut self, message: impl Into<String>) -> &mut Self {
        self.steps.push(Step::Note {
            message: message.into(),
        });
        self
    }

    /// Hold until the learner continues.
    pub fn pause(&mut self) -> &mut Self {
        self.steps.push(Step::Pause);
        self
    }

    /// Set a variable in the inspector.
    pub fn assign(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.steps.push(Step::Assign {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append terminal text without a line break.
    pub fn print(&mut self, text: impl Into<String>) -> &mut Self {
        self.steps.push(Step::Print { text: text.into() });
        self
    }

    /// Append a full terminal line.
    pub fn println(&mut self, text: impl Into<String>) -> &mut Self {
        self.steps.push(Step::Println { text: text.into() });
        self
    }

    /// Prompt for free-form terminal input.
    pub fn ask_input(&mut self, prompt: impl Into<String>) -> &mut Self {
        self.steps.push(Step::AskInput {
            prompt: prompt.into(),
        });
        self
    }

    /// Ask the learner to compute a value.
    pub fn ask_expr(&mut self, expected: impl Into<Value>, prompt: impl Into<String>) -> &mut Self {
        self.steps.push(Step::AskExpr {
            expected: expected.into(),
            prompt: prompt.into(),
        });
        self
    }

    /// Finish the script.
    #[must_use]
    pub fn finish(self) -> Script {
        Script { steps: self.steps }
    }
}
