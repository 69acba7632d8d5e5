#![forbid(unsafe_code)]

//! An authored exercise, validated as a whole.

use lockstep_core::error::{AuthoringError, AuthoringResult};
use lockstep_core::script::Script;
use lockstep_core::source::SourceText;
use lockstep_widgets::surface::Surface;

/// A complete exercise: fixed listing, widget layout, and trace script.
///
/// Construction runs every authoring check: the script checks from
/// [`Script::validate`] plus the cross-check that each step's target
/// widget is actually placed on the surface. A constructed `Exercise`
/// is immutable and known-good, so sessions never re-validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    source: SourceText,
    surface: Surface,
    script: Script,
}

impl Exercise {
    /// Assemble and validate an exercise.
    ///
    /// Authoring errors abort here, before any learner-facing session
    /// exists.
    pub fn new(source: SourceText, surface: Surface, script: Script) -> AuthoringResult<Self> {
        script.validate(&source)?;
        for (index, step) in script.iter().enumerate() {
            if let Some(kind) = step.target() {
                if !surface.is_placed(kind) {
                    return Err(AuthoringError::MissingWidget { step: index, kind });
                }
            }
        }
        Ok(Self {
            source,
            surface,
            script,
        })
    }

    /// The fixed program listing.
    #[must_use]
    pub fn source(&self) -> &SourceText {
        &self.source
    }

    /// The widget layout.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The trace script.
    #[must_use]
    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Number of learner interactions a complete walk requires.
    #[must_use]
    pub fn suspension_count(&self) -> usize {
        self.script.suspension_count()
    }
}
