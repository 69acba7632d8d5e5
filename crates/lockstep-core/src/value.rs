#![forbid(unsafe_code)]

//! Literal values: what the variable inspector shows and the validator
//! compares.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A literal value in the traced program.
///
/// The inspector renders values the way a beginner would write them in
/// source: integers and booleans bare, strings double-quoted with control
/// characters escaped, and unassigned variables as the `uninitialized`
/// sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Signed integer.
    Int(i64),
    /// String literal.
    Str(String),
    /// Boolean.
    Bool(bool),
    /// Declared but not yet assigned.
    Uninit,
}

impl Value {
    /// Parse a learner-submitted string into a typed value.
    ///
    /// Tries integer, then boolean, and falls back to a string. The input
    /// is trimmed first: surrounding whitespace is never part of a
    /// literal. Parsing never fails; shape errors are the caller's
    /// concern.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Self::Int(n);
        }
        match trimmed {
            "true" | "True" => Self::Bool(true),
            "false" | "False" => Self::Bool(false),
            _ => Self::Str(trimmed.to_string()),
        }
    }

    /// Short name of the value's shape, for error messages.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Uninit => "uninitialized",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Uninit => write!(f, "uninitialized"),
            Self::Str(s) => {
                f.write_str("\"")?;
                for ch in s.chars() {
                    match ch {
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        _ => write!(f, "{ch}")?,
                    }
                }
                f.write_str("\"")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}
