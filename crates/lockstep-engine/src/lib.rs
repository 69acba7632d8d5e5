#![forbid(unsafe_code)]

//! Engine: drives an authored trace script against one learner.
//!
//! The engine turns the inert script model from `lockstep-core` into an
//! interactive session. An [`Exercise`] bundles a listing, a widget
//! layout, and a script, validating the whole at construction; a
//! [`Session`] walks the script with exactly one pending suspension at
//! a time, judging each [`Answer`] against the authored ground truth
//! and recording every submission in an append-only [`Transcript`].
//!
//! # Key components
//!
//! - [`Exercise`] - a validated bundle of listing, layout, and script
//! - [`Session`] - the suspendable walk; `start`, then `submit` until
//!   [`Outcome::Done`]
//! - [`Suspension`] - one pending learner interaction
//! - [`AttemptPolicy`] - leniency on repeated wrong answers
//! - [`Transcript`] - the session's judged submissions, replayable via
//!   [`Session::replay`]
//! - [`Snapshot`] - a read-only projection for redrawing
//!
//! Execution is strictly sequential: non-suspending steps run eagerly
//! in batches between suspensions, steps execute in author order, and
//! nothing ever runs concurrently with a pending suspension.

pub mod exercise;
pub mod policy;
pub mod record;
pub mod replay;
pub mod session;
pub mod snapshot;
pub mod suspension;

pub use exercise::Exercise;
pub use policy::AttemptPolicy;
pub use record::{AttemptEntry, SessionSummary, Transcript};
pub use replay::ReplayError;
pub use session::{Session, SessionError, SessionResult};
pub use snapshot::Snapshot;
pub use suspension::{ASK_LINE_PROMPT, Answer, Outcome, PAUSE_PROMPT, Suspension, Verdict};
