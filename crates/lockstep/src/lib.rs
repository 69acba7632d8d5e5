#![forbid(unsafe_code)]

//! LockStep public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for embedders.
//! It re-exports the commonly-used types from the internal crates and
//! offers a lightweight prelude for day-to-day usage.
//!
//! A complete exercise fits in a few lines:
//!
//! ```
//! use lockstep::prelude::*;
//!
//! let mut surface = Surface::new();
//! surface.place(0, 0, WidgetKind::Code)?;
//!
//! let mut b = ScriptBuilder::new();
//! b.jump(1).ask_line(2);
//!
//! let exercise = Exercise::new(
//!     SourceText::new("a = 1\nprint(a)"),
//!     surface,
//!     b.finish(),
//! )?;
//!
//! let mut session = Session::new(exercise, AttemptPolicy::Strict);
//! session.start()?;
//! let outcome = session.submit(Answer::Line(2))?;
//! assert!(outcome.is_done());
//! # Ok::<(), lockstep::Error>(())
//! ```

use std::fmt;

// --- Core re-exports --------------------------------------------------------

pub use lockstep_core::error::{AuthoringError, AuthoringResult};
pub use lockstep_core::geometry::{Anchor, MAX_COL, MAX_ROW, Rect};
pub use lockstep_core::script::{Script, ScriptBuilder};
pub use lockstep_core::source::SourceText;
pub use lockstep_core::step::{AnswerKind, Step, WidgetKind};
pub use lockstep_core::value::Value;

// --- Widget re-exports ------------------------------------------------------

pub use lockstep_widgets::Widget;
pub use lockstep_widgets::canvas::Canvas;
pub use lockstep_widgets::code_view::CodeView;
pub use lockstep_widgets::surface::Surface;
pub use lockstep_widgets::terminal::Terminal;
pub use lockstep_widgets::var_frame::VarFrame;

// --- Engine re-exports ------------------------------------------------------

pub use lockstep_engine::exercise::Exercise;
pub use lockstep_engine::policy::AttemptPolicy;
pub use lockstep_engine::record::{AttemptEntry, SessionSummary, Transcript};
pub use lockstep_engine::replay::ReplayError;
pub use lockstep_engine::session::{Session, SessionError, SessionResult};
pub use lockstep_engine::snapshot::Snapshot;
pub use lockstep_engine::suspension::{
    ASK_LINE_PROMPT, Answer, Outcome, PAUSE_PROMPT, Suspension, Verdict,
};

// --- Errors -----------------------------------------------------------------

/// Top-level error type unifying the authoring and walk errors, for
/// embedders that build and drive an exercise in one fallible flow.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while driving a session from a real terminal.
    Io(std::io::Error),
    /// The exercise definition is malformed.
    Authoring(AuthoringError),
    /// A session-protocol call did not fit the walk's state.
    Session(SessionError),
    /// A transcript failed to replay against its exercise.
    Replay(ReplayError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Authoring(err) => write!(f, "{err}"),
            Self::Session(err) => write!(f, "{err}"),
            Self::Replay(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Authoring(err) => Some(err),
            Self::Session(err) => Some(err),
            Self::Replay(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<AuthoringError> for Error {
    fn from(err: AuthoringError) -> Self {
        Self::Authoring(err)
    }
}

impl From<SessionError> for Error {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}

impl From<ReplayError> for Error {
    fn from(err: ReplayError) -> Self {
        Self::Replay(err)
    }
}

/// Standard result type for lockstep APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude ----------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Answer, AnswerKind, AttemptPolicy, Error, Exercise, Outcome, Result, Script,
        ScriptBuilder, Session, SourceText, Surface, Suspension, Value, Verdict, WidgetKind,
    };

    pub use crate::{core, engine, widgets};
}

pub use lockstep_core as core;
pub use lockstep_engine as engine;
pub use lockstep_widgets as widgets;
