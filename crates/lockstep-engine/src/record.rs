#![forbid(unsafe_code)]

//! The append-only record of a session's submissions.
//!
//! Every judged submission lands here, wrong ones included. The record
//! is enough to rebuild a session from scratch (see
//! [`Session::replay`](crate::session::Session::replay)) and to tally a
//! grade, and with the `transcript` feature it round-trips through JSON
//! for storage outside the engine.

use lockstep_core::step::AnswerKind;

use crate::suspension::{Answer, Verdict};

#[cfg(feature = "transcript")]
use serde::{Deserialize, Serialize};

/// One judged submission.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "transcript", derive(Serialize, Deserialize))]
pub struct AttemptEntry {
    /// Index of the suspending step in the script.
    pub step: usize,
    /// The input shape the suspension expected.
    pub kind: AnswerKind,
    /// The authored answer, when the step has one.
    pub expected: Option<Answer>,
    /// What the learner submitted, after shape coercion.
    pub submitted: Answer,
    /// How it was judged.
    pub verdict: Verdict,
}

/// Append-only log of every judged submission in one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "transcript", derive(Serialize, Deserialize))]
pub struct Transcript {
    entries: Vec<AttemptEntry>,
}

impl Transcript {
    pub(crate) fn push(&mut self, entry: AttemptEntry) {
        self.entries.push(entry);
    }

    /// Number of recorded submissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been submitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fetch an entry by submission order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AttemptEntry> {
        self.entries.get(index)
    }

    /// The most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&AttemptEntry> {
        self.entries.last()
    }

    /// Iterate over entries in submission order.
    pub fn iter(&self) -> impl Iterator<Item = &AttemptEntry> {
        self.entries.iter()
    }

    /// Tally the verdicts.
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        let mut summary = SessionSummary::default();
        for entry in &self.entries {
            summary.submissions += 1;
            match entry.verdict {
                Verdict::Correct => summary.correct += 1,
                Verdict::Incorrect => summary.incorrect += 1,
                Verdict::Revealed => summary.revealed += 1,
                Verdict::Accepted => summary.accepted += 1,
            }
        }
        summary
    }

    /// Serialize the transcript to pretty-printed JSON.
    #[cfg(feature = "transcript")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Restore a transcript from [`Transcript::to_json`] output.
    #[cfg(feature = "transcript")]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Verdict tallies for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "transcript", derive(Serialize, Deserialize))]
pub struct SessionSummary {
    /// Total submissions, wrong ones included.
    pub submissions: usize,
    /// Submissions judged correct.
    pub correct: usize,
    /// Submissions judged incorrect.
    pub incorrect: usize,
    /// Suspensions resolved by revealing the authored answer.
    pub revealed: usize,
    /// Submissions taken without judgement.
    pub accepted: usize,
}

impl SessionSummary {
    /// Submissions that resolved their suspension.
    #[must_use]
    pub const fn resolved(&self) -> usize {
        self.correct + self.revealed + self.accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(step: usize, verdict: Verdict) -> AttemptEntry {
        AttemptEntry {
            step,
            kind: AnswerKind::LineNumber,
            expected: Some(Answer::Line(5)),
            submitted: Answer::Line(5),
            verdict,
        }
    }

    #[test]
    fn entries_keep_submission_order() {
        let mut t = Transcript::default();
        t.push(entry(0, Verdict::Incorrect));
        t.push(entry(0, Verdict::Correct));
        t.push(entry(3, Verdict::Accepted));
        assert_eq!(t.len(), 3);
        let steps: Vec<usize> = t.iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![0, 0, 3]);
        assert_eq!(t.last().map(|e| e.verdict), Some(Verdict::Accepted));
    }

    #[test]
    fn summary_tallies_verdicts() {
        let mut t = Transcript::default();
        t.push(entry(0, Verdict::Incorrect));
        t.push(entry(0, Verdict::Incorrect));
        t.push(entry(0, Verdict::Revealed));
        t.push(entry(1, Verdict::Correct));
        t.push(entry(2, Verdict::Accepted));
        let summary = t.summary();
        assert_eq!(summary.submissions, 5);
        assert_eq!(summary.incorrect, 2);
        assert_eq!(summary.revealed, 1);
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.accepted, 1);
        assert_eq!(summary.resolved(), 3);
    }

    #[test]
    fn empty_transcript_summary_is_zero() {
        let summary = Transcript::default().summary();
        assert_eq!(summary.submissions, 0);
        assert_eq!(summary.resolved(), 0);
    }

    #[cfg(feature = "transcript")]
    #[test]
    fn json_round_trip() {
        let mut t = Transcript::default();
        t.push(entry(0, Verdict::Correct));
        t.push(AttemptEntry {
            step: 4,
            kind: AnswerKind::FreeText,
            expected: None,
            submitted: Answer::Text("yes".into()),
            verdict: Verdict::Accepted,
        });
        let json = t.to_json().unwrap();
        assert_eq!(Transcript::from_json(&json).unwrap(), t);
    }
}
