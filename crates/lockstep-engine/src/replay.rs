#![forbid(unsafe_code)]

//! Rebuilding a session from its transcript.
//!
//! Every submission a session judges lands in its [`Transcript`], so an
//! abandoned session can be reconstructed exactly: start fresh, submit
//! each recorded answer in order, and require every verdict to come out
//! as recorded. Divergence means the transcript does not belong to this
//! exercise and policy.

use std::fmt;

use tracing::debug_span;

use crate::exercise::Exercise;
use crate::policy::AttemptPolicy;
use crate::record::Transcript;
use crate::session::{Session, SessionError};
use crate::suspension::Verdict;

/// Why a transcript failed to replay against an exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// A recorded answer no longer fits the suspension it met.
    Session { entry: usize, source: SessionError },
    /// A recorded submission was judged differently on replay.
    VerdictDiverged {
        entry: usize,
        recorded: Verdict,
        replayed: Verdict,
    },
    /// The transcript has entries beyond the walk's completion.
    TrailingEntries { entry: usize },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Session { entry, source } => {
                write!(f, "transcript entry {entry} failed to replay: {source}")
            }
            Self::VerdictDiverged {
                entry,
                recorded,
                replayed,
            } => write!(
                f,
                "transcript entry {entry} was recorded {} but replayed {}",
                recorded.name(),
                replayed.name()
            ),
            Self::TrailingEntries { entry } => write!(
                f,
                "transcript entry {entry} lies beyond the walk's completion"
            ),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Session { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Session {
    /// Rebuild a session by replaying a transcript from the top.
    ///
    /// Replaying a partial transcript (an abandoned session) stops at
    /// the suspension the learner left off at; the returned session can
    /// simply continue. The policy must match the one the transcript
    /// was recorded under, or reveal verdicts will diverge.
    pub fn replay(
        exercise: Exercise,
        policy: AttemptPolicy,
        transcript: &Transcript,
    ) -> Result<Self, ReplayError> {
        let _span = debug_span!("lockstep.session.replay", entries = transcript.len()).entered();
        let mut session = Session::new(exercise, policy);
        let mut done = session
            .start()
            .map_err(|source| ReplayError::Session { entry: 0, source })?
            .is_done();
        for (index, entry) in transcript.iter().enumerate() {
            if done {
                return Err(ReplayError::TrailingEntries { entry: index });
            }
            done = session
                .submit(entry.submitted.clone())
                .map_err(|source| ReplayError::Session {
                    entry: index,
                    source,
                })?
                .is_done();
            if let Some(replayed) = session.last_verdict() {
                if replayed != entry.verdict {
                    return Err(ReplayError::VerdictDiverged {
                        entry: index,
                        recorded: entry.verdict,
                        replayed,
                    });
                }
            }
        }
        Ok(session)
    }
}
