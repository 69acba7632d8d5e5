#![forbid(unsafe_code)]

//! A read-only projection of simulation state.

use std::collections::BTreeMap;

use lockstep_core::value::Value;

/// Everything a UI needs to redraw a session without replaying history.
///
/// Taken with [`Session::snapshot`](crate::session::Session::snapshot).
/// Snapshots are plain data; they never observe later mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The highlighted line, if any line has been reached yet.
    pub current_line: Option<u32>,
    /// The full terminal text. Completed lines end in `\n`; a trailing
    /// unterminated prompt, if any, comes last.
    pub terminal_text: String,
    /// Variable name to current value, sorted by name.
    pub variables: BTreeMap<String, Value>,
}

impl Snapshot {
    /// The terminal text split into lines.
    #[must_use]
    pub fn terminal_lines(&self) -> Vec<&str> {
        self.terminal_text.lines().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_lines_split_on_newlines() {
        let snapshot = Snapshot {
            current_line: Some(13),
            terminal_text: "headphones\nreading material\n".to_string(),
            variables: BTreeMap::new(),
        };
        assert_eq!(
            snapshot.terminal_lines(),
            vec!["headphones", "reading material"]
        );
    }

    #[test]
    fn unterminated_prompt_is_its_own_line() {
        let snapshot = Snapshot {
            current_line: None,
            terminal_text: "Are you traveling by plane? (yes / no): ".to_string(),
            variables: BTreeMap::new(),
        };
        assert_eq!(snapshot.terminal_lines().len(), 1);
    }

    #[test]
    fn empty_terminal_has_no_lines() {
        let snapshot = Snapshot {
            current_line: None,
            terminal_text: String::new(),
            variables: BTreeMap::new(),
        };
        assert!(snapshot.terminal_lines().is_empty());
    }
}
