#![forbid(unsafe_code)]

//! Line-oriented session driver.
//!
//! Draws the rendered surface after every resolved suspension, asks the
//! pending question, and feeds each typed line back into the session.
//! The driver is generic over its streams so tests can walk it with
//! canned input.

use std::io::{self, BufRead, Write};

use crossterm::style::{Color, Stylize};
use tracing::debug;

use lockstep::{
    Answer, AnswerKind, AttemptPolicy, Error, Exercise, Outcome, Result, Session, SessionError,
    Suspension, Verdict,
};

/// Drives one session over a pair of line-oriented streams.
pub struct Driver<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Walk one exercise until it completes or the input runs out.
    ///
    /// Returns the session either way; the caller can check
    /// [`Session::is_completed`] and export the transcript.
    pub fn run(&mut self, exercise: Exercise, policy: AttemptPolicy) -> Result<Session> {
        let mut session = Session::new(exercise, policy);
        let mut outcome = session.start()?;
        while let Outcome::Suspended(suspension) = outcome {
            self.draw(&session)?;
            self.prompt(&suspension)?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                writeln!(self.output, "walk abandoned at step {}", session.cursor())?;
                debug!(cursor = session.cursor(), "input ended before completion");
                return Ok(session);
            };
            let answer = answer_from_line(suspension.kind, &line);
            match session.submit(answer) {
                Ok(next) => {
                    self.feedback(session.last_verdict())?;
                    outcome = next;
                }
                Err(SessionError::AnswerShape { expected, .. }) => {
                    let hint =
                        self.paint(&format!("that doesn't look like a {}", expected.name()), Color::Yellow);
                    writeln!(self.output, "{hint}")?;
                    outcome = Outcome::Suspended(suspension);
                }
                Err(err) => return Err(Error::Session(err)),
            }
        }
        self.draw(&session)?;
        self.summarize(&session)?;
        debug!(
            submissions = session.transcript().len(),
            "walk completed"
        );
        Ok(session)
    }

    fn draw(&mut self, session: &Session) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", session.render())?;
        writeln!(self.output)
    }

    fn prompt(&mut self, suspension: &Suspension) -> io::Result<()> {
        write!(self.output, "{}", suspension.prompt)?;
        if suspension.attempts > 0 {
            write!(self.output, " (try {})", suspension.attempts + 1)?;
        }
        if suspension.kind == AnswerKind::Acknowledge {
            write!(self.output, " [Enter]")?;
        }
        write!(self.output, " ")?;
        self.output.flush()
    }

    fn feedback(&mut self, verdict: Option<Verdict>) -> io::Result<()> {
        let Some(verdict) = verdict else {
            return Ok(());
        };
        let line = match verdict {
            Verdict::Correct => self.paint("correct", Color::Green),
            Verdict::Incorrect => self.paint("not this time; look again", Color::Red),
            Verdict::Revealed => {
                self.paint("revealed; the walk moved on with the authored answer", Color::Yellow)
            }
            Verdict::Accepted => return Ok(()),
        };
        writeln!(self.output, "{line}")
    }

    fn summarize(&mut self, session: &Session) -> io::Result<()> {
        let summary = session.transcript().summary();
        writeln!(
            self.output,
            "walk complete: {} submissions ({} correct, {} incorrect, {} revealed)",
            summary.submissions, summary.correct, summary.incorrect, summary.revealed
        )
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Interpret one typed line as an answer of the expected shape.
///
/// Everything stays text; the session coerces line numbers and typed
/// values itself and rejects shapes it cannot coerce. Acknowledgements
/// ignore whatever was typed.
fn answer_from_line(kind: AnswerKind, line: &str) -> Answer {
    match kind {
        AnswerKind::Acknowledge => Answer::Ack,
        _ => Answer::Text(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lockstep::{ScriptBuilder, SourceText, Surface, WidgetKind};

    fn tiny_exercise() -> Exercise {
        let mut surface = Surface::new();
        surface.place(0, 0, WidgetKind::Code).unwrap();
        surface.place(4, 0, WidgetKind::Terminal).unwrap();
        surface.place(4, 30, WidgetKind::Frame).unwrap();
        let mut b = ScriptBuilder::new();
        b.jump(1).ask_line(2).println("1");
        Exercise::new(SourceText::new("a = 1\nprint(a)"), surface, b.finish()).unwrap()
    }

    fn run_with(input: &str, policy: AttemptPolicy) -> (Session, String) {
        let mut output = Vec::new();
        let mut driver = Driver::new(io::Cursor::new(input.to_string()), &mut output, false);
        let session = driver.run(tiny_exercise(), policy).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn completes_on_correct_answers() {
        let (session, output) = run_with("2\n", AttemptPolicy::Strict);
        assert!(session.is_completed());
        assert!(output.contains(">1 | a = 1"));
        assert!(output.contains("Which line is executed next?"));
        assert!(output.contains("correct"));
        assert!(output.contains("walk complete: 1 submissions (1 correct, 0 incorrect, 0 revealed)"));
    }

    #[test]
    fn wrong_answers_retry_with_attempt_count() {
        let (session, output) = run_with("9\n2\n", AttemptPolicy::Strict);
        assert!(session.is_completed());
        assert!(output.contains("not this time; look again"));
        assert!(output.contains("(try 2)"));
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn shape_errors_hint_and_reprompt() {
        let (session, output) = run_with("banana\n2\n", AttemptPolicy::Strict);
        assert!(session.is_completed());
        assert!(output.contains("that doesn't look like a line number"));
        // the malformed line was never judged
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn end_of_input_abandons_the_walk() {
        let (session, output) = run_with("", AttemptPolicy::Strict);
        assert!(!session.is_completed());
        assert!(session.is_suspended());
        assert!(output.contains("walk abandoned at step 1"));
    }

    #[test]
    fn reveal_policy_reports_the_reveal() {
        let (session, output) = run_with("9\n9\n", AttemptPolicy::RevealAfter(2));
        assert!(session.is_completed());
        assert!(output.contains("revealed"));
        assert_eq!(session.transcript().summary().revealed, 1);
    }

    #[test]
    fn acknowledgements_take_a_blank_line() {
        let mut surface = Surface::new();
        surface.place(0, 0, WidgetKind::Code).unwrap();
        let mut b = ScriptBuilder::new();
        b.jump(1).note("Nothing has run yet.").pause();
        let exercise =
            Exercise::new(SourceText::new("a = 1"), surface, b.finish()).unwrap();
        let mut output = Vec::new();
        let mut driver = Driver::new(io::Cursor::new("\n\n".to_string()), &mut output, false);
        let session = driver.run(exercise, AttemptPolicy::Strict).unwrap();
        assert!(session.is_completed());
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Nothing has run yet. [Enter]"));
        assert!(text.contains("Continue when ready. [Enter]"));
    }
}
