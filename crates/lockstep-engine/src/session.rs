#![forbid(unsafe_code)]

//! The learner-facing session: one suspendable walk over one exercise.
//!
//! A session owns the simulation state (code highlight, terminal log,
//! variable frame) and a cursor into the script. Non-suspending steps
//! execute eagerly in a batch; the walk pauses at each suspending step
//! until `submit` resolves it. Exactly one suspension is pending at a
//! time, and every observable mutation happens between suspensions, so
//! independent sessions never share state.

use std::fmt;

use tracing::{debug, debug_span, info_span};

use lockstep_core::step::{AnswerKind, Step};
use lockstep_core::value::Value;
use lockstep_widgets::canvas::Canvas;
use lockstep_widgets::code_view::CodeView;
use lockstep_widgets::terminal::Terminal;
use lockstep_widgets::var_frame::VarFrame;

use crate::exercise::Exercise;
use crate::policy::AttemptPolicy;
use crate::record::{AttemptEntry, Transcript};
use crate::snapshot::Snapshot;
use crate::suspension::{Answer, Outcome, Suspension, Verdict};

/// A protocol error: the call does not fit the walk's current state.
///
/// These are recoverable. The session is left exactly as it was; the
/// caller can retry with a fitting call or answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// `start` was called on a session that is already under way.
    AlreadyStarted,
    /// `submit` was called with no suspension pending, either before
    /// `start` or after completion.
    NoPendingSuspension,
    /// The submitted answer cannot be coerced to the shape the pending
    /// suspension expects.
    AnswerShape {
        expected: AnswerKind,
        got: AnswerKind,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyStarted => write!(f, "session has already started"),
            Self::NoPendingSuspension => write!(f, "no suspension is pending"),
            Self::AnswerShape { expected, got } => write!(
                f,
                "expected {} but got {}",
                expected.name(),
                got.name()
            ),
        }
    }
}

impl std::error::Error for SessionError {}

/// Result type for session-protocol operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Where the walk stands. `Running` never escapes: batches of
/// non-suspending steps execute inside a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NotStarted,
    Suspended,
    Completed,
}

/// One learner's walk through one exercise.
///
/// ```
/// use lockstep_core::script::ScriptBuilder;
/// use lockstep_core::source::SourceText;
/// use lockstep_core::step::WidgetKind;
/// use lockstep_engine::exercise::Exercise;
/// use lockstep_engine::policy::AttemptPolicy;
/// use lockstep_engine::session::Session;
/// use lockstep_engine::suspension::{Answer, Verdict};
/// use lockstep_widgets::surface::Surface;
///
/// let mut surface = Surface::new();
/// surface.place(0, 0, WidgetKind::Code)?;
/// let mut b = ScriptBuilder::new();
/// b.jump(1).ask_line(2);
/// let exercise = Exercise::new(
///     SourceText::new("a = 1\nprint(a)"),
///     surface,
///     b.finish(),
/// )?;
///
/// let mut session = Session::new(exercise, AttemptPolicy::Strict);
/// let outcome = session.start()?;
/// assert!(!outcome.is_done());
/// let outcome = session.submit(Answer::Line(2))?;
/// assert!(outcome.is_done());
/// assert_eq!(session.last_verdict(), Some(Verdict::Correct));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    exercise: Exercise,
    policy: AttemptPolicy,
    code: CodeView,
    terminal: Terminal,
    frame: VarFrame,
    cursor: usize,
    phase: Phase,
    attempts: u32,
    last_verdict: Option<Verdict>,
    transcript: Transcript,
}

impl Session {
    /// Create a session over a validated exercise.
    #[must_use]
    pub fn new(exercise: Exercise, policy: AttemptPolicy) -> Self {
        let code = CodeView::new(exercise.source().clone());
        Self {
            exercise,
            policy,
            code,
            terminal: Terminal::new(),
            frame: VarFrame::new(),
            cursor: 0,
            phase: Phase::NotStarted,
            attempts: 0,
            last_verdict: None,
            transcript: Transcript::default(),
        }
    }

    /// Begin the walk: run every step up to the first suspension.
    pub fn start(&mut self) -> SessionResult<Outcome> {
        if self.phase != Phase::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }
        let _span = info_span!(
            "lockstep.session.start",
            steps = self.exercise.script().len(),
            suspensions = self.exercise.suspension_count()
        )
        .entered();
        Ok(self.run_to_suspension())
    }

    /// Resolve the pending suspension with `answer` and run forward to
    /// the next one.
    ///
    /// A wrong answer re-suspends in place with the attempt count
    /// bumped; under a lenient [`AttemptPolicy`] it may instead resolve
    /// as [`Verdict::Revealed`], applying the authored answer (never the
    /// learner's). A shape mismatch is an error: nothing is recorded and
    /// no state moves.
    pub fn submit(&mut self, answer: Answer) -> SessionResult<Outcome> {
        if self.phase != Phase::Suspended {
            return Err(SessionError::NoPendingSuspension);
        }
        let Some(step) = self.exercise.script().get(self.cursor).cloned() else {
            return Err(SessionError::NoPendingSuspension);
        };
        let _span = debug_span!(
            "lockstep.session.submit",
            step = self.cursor,
            kind = step.answer_kind().map(|k| k.name()).unwrap_or("none")
        )
        .entered();

        let (submitted, mut verdict) = judge(&step, answer)?;
        if verdict == Verdict::Incorrect {
            self.attempts += 1;
            if self.policy.should_reveal(self.attempts) {
                verdict = Verdict::Revealed;
            }
        }
        self.transcript.push(AttemptEntry {
            step: self.cursor,
            kind: submitted.kind(),
            expected: expected_answer(&step),
            submitted: submitted.clone(),
            verdict,
        });
        self.last_verdict = Some(verdict);
        debug!(
            step = self.cursor,
            verdict = verdict.name(),
            attempts = self.attempts,
            "judged submission"
        );

        if verdict == Verdict::Incorrect {
            return match Suspension::for_step(&step, self.attempts, self.last_verdict) {
                Some(suspension) => Ok(Outcome::Suspended(suspension)),
                None => Err(SessionError::NoPendingSuspension),
            };
        }
        self.resolve(&step, &submitted);
        self.cursor += 1;
        Ok(self.run_to_suspension())
    }

    /// Execute steps from the cursor until one suspends or the script
    /// ends.
    fn run_to_suspension(&mut self) -> Outcome {
        loop {
            let Some(step) = self.exercise.script().get(self.cursor).cloned() else {
                self.phase = Phase::Completed;
                debug!(submissions = self.transcript.len(), "walk completed");
                return Outcome::Done;
            };
            match Suspension::for_step(&step, 0, self.last_verdict) {
                Some(suspension) => {
                    self.reach(&step);
                    self.phase = Phase::Suspended;
                    self.attempts = 0;
                    return Outcome::Suspended(suspension);
                }
                None => {
                    self.apply(&step);
                    self.cursor += 1;
                }
            }
        }
    }

    /// Side effects of arriving at a suspending step, applied exactly
    /// once per suspension regardless of how many answers it takes.
    fn reach(&mut self, step: &Step) {
        if let Step::AskInput { prompt } = step {
            self.terminal.print(prompt);
        }
    }

    /// Execute one non-suspending step.
    fn apply(&mut self, step: &Step) {
        match step {
            Step::Jump { line } => self.code.jump_to(*line),
            Step::Assign { name, value } => self.frame.assign(name.clone(), value.clone()),
            Step::Print { text } => self.terminal.print(text),
            Step::Println { text } => self.terminal.println(text),
            _ => {}
        }
    }

    /// Side effects of resolving a suspension. The highlight moves to
    /// the authored line whether the learner earned it or it was
    /// revealed; terminal input echoes what the learner actually typed.
    fn resolve(&mut self, step: &Step, submitted: &Answer) {
        match step {
            Step::AskLine { expected } => self.code.jump_to(*expected),
            Step::AskInput { .. } => {
                if let Answer::Text(text) = submitted {
                    self.terminal.echo_input(text);
                }
            }
            _ => {}
        }
    }

    /// The exercise this session walks.
    #[must_use]
    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    /// The configured leniency policy.
    #[must_use]
    pub fn policy(&self) -> AttemptPolicy {
        self.policy
    }

    /// The code listing view.
    #[must_use]
    pub fn code(&self) -> &CodeView {
        &self.code
    }

    /// The terminal log.
    #[must_use]
    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    /// The variable inspector.
    #[must_use]
    pub fn frame(&self) -> &VarFrame {
        &self.frame
    }

    /// Index of the script step the walk currently stands at.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether `start` has been called.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    /// Whether a suspension is pending.
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.phase == Phase::Suspended
    }

    /// Whether every step has executed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// How the most recent submission was judged.
    #[must_use]
    pub fn last_verdict(&self) -> Option<Verdict> {
        self.last_verdict
    }

    /// The append-only record of submissions so far.
    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Render the whole surface as a text frame.
    #[must_use]
    pub fn render(&self) -> Canvas {
        self.exercise
            .surface()
            .render(&self.code, &self.terminal, &self.frame)
    }

    /// A read-only projection of the simulation state, sufficient for a
    /// UI to redraw without replaying history.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_line: self.code.current_line(),
            terminal_text: self.terminal.rendered(),
            variables: self.frame.mapping().clone(),
        }
    }
}

/// Coerce a raw answer to the step's shape and judge it.
///
/// Returns the normalized answer (what the transcript records) and its
/// verdict. Shape mismatches never reach the equality check.
fn judge(step: &Step, answer: Answer) -> SessionResult<(Answer, Verdict)> {
    match step {
        Step::AskLine { expected } => {
            let line = match answer {
                Answer::Line(n) => n,
                Answer::Text(ref text) => {
                    text.trim()
                        .parse()
                        .map_err(|_| SessionError::AnswerShape {
                            expected: AnswerKind::LineNumber,
                            got: AnswerKind::FreeText,
                        })?
                }
                ref other => {
                    return Err(SessionError::AnswerShape {
                        expected: AnswerKind::LineNumber,
                        got: other.kind(),
                    });
                }
            };
            let verdict = if line == *expected {
                Verdict::Correct
            } else {
                Verdict::Incorrect
            };
            Ok((Answer::Line(line), verdict))
        }
        Step::AskExpr { expected, .. } => {
            let value = match answer {
                Answer::Value(value) => value,
                Answer::Text(text) => Value::parse(&text),
                other => {
                    return Err(SessionError::AnswerShape {
                        expected: AnswerKind::TypedValue,
                        got: other.kind(),
                    });
                }
            };
            let verdict = if value == *expected {
                Verdict::Correct
            } else {
                Verdict::Incorrect
            };
            Ok((Answer::Value(value), verdict))
        }
        Step::AskInput { .. } => match answer {
            Answer::Text(text) => Ok((Answer::Text(text), Verdict::Accepted)),
            other => Err(SessionError::AnswerShape {
                expected: AnswerKind::FreeText,
                got: other.kind(),
            }),
        },
        Step::Note { .. } | Step::Pause => Ok((Answer::Ack, Verdict::Accepted)),
        _ => Err(SessionError::NoPendingSuspension),
    }
}

/// The authored ground truth for a suspending step, if it has one.
fn expected_answer(step: &Step) -> Option<Answer> {
    match step {
        Step::AskLine { expected } => Some(Answer::Line(*expected)),
        Step::AskExpr { expected, .. } => Some(Answer::Value(expected.clone())),
        _ => None,
    }
}
