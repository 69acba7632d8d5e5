#![forbid(unsafe_code)]

//! Terminal demo for LockStep: drive the built-in exercises over
//! stdin/stdout, line by line.

pub mod cli;
pub mod driver;
pub mod exercises;
