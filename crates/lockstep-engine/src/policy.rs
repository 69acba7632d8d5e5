#![forbid(unsafe_code)]

//! Leniency policy for repeated wrong answers.

/// What to do when a learner keeps missing one suspension.
///
/// The embedding author picks the policy per session. A strict session
/// holds the suspension until the learner answers correctly; a lenient
/// one reveals the authored answer after `n` misses, records the reveal,
/// and moves on so the learner is never stuck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttemptPolicy {
    /// Never reveal; only a correct answer resolves the suspension.
    #[default]
    Strict,
    /// Reveal the authored answer after `n` wrong submissions. Values
    /// below 1 behave as 1.
    RevealAfter(u32),
}

impl AttemptPolicy {
    /// Whether a suspension that has seen `wrong_attempts` misses should
    /// be revealed and resolved.
    #[must_use]
    pub fn should_reveal(&self, wrong_attempts: u32) -> bool {
        match self {
            Self::Strict => false,
            Self::RevealAfter(n) => wrong_attempts >= (*n).max(1),
        }
    }
}
