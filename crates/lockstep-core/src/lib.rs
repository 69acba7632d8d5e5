#![forbid(unsafe_code)]

//! Core: the script model for guided code-tracing exercises.
//!
//! An exercise author describes one deterministic walk through a short
//! program as an ordered list of [`step::Step`]s. This crate owns that
//! vocabulary plus the pieces it is validated against: the fixed program
//! listing ([`source::SourceText`]), widget placement coordinates
//! ([`geometry`]), and the authoring error taxonomy ([`error`]).
//!
//! Everything here is inert data. Driving a script against a learner is
//! the engine crate's job; drawing it is the widgets crate's job.

pub mod error;
pub mod geometry;
pub mod script;
pub mod source;
pub mod step;
pub mod value;
