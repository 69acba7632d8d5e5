#![forbid(unsafe_code)]

//! The fixed program listing a trace walks through.

/// An immutable source listing, split into lines at construction.
///
/// Line numbers are 1-based throughout, matching what the learner sees in
/// the gutter. The listing is fixed for the life of an exercise; nothing
/// ever edits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    lines: Vec<String>,
}

impl SourceText {
    /// Create a listing from raw text.
    ///
    /// One leading newline and any trailing whitespace are stripped so
    /// the listing can be authored as a raw string literal that opens on
    /// its own line:
    ///
    /// ```
    /// use lockstep_core::source::SourceText;
    ///
    /// let src = SourceText::new(
    ///     r#"
    /// total: int = 0
    /// print(total)
    /// "#,
    /// );
    /// assert_eq!(src.line(1), Some("total: int = 0"));
    /// assert_eq!(src.line_count(), 2);
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let body = text.strip_prefix('\n').unwrap_or(&text).trim_end();
        let lines = if body.is_empty() {
            Vec::new()
        } else {
            body.split('\n')
                .map(|line| line.trim_end().to_string())
                .collect()
        };
        Self { lines }
    }

    /// Number of lines in the listing.
    #[must_use]
    pub fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    /// Fetch a line by its 1-based number.
    #[must_use]
    pub fn line(&self, number: u32) -> Option<&str> {
        if number == 0 {
            return None;
        }
        self.lines.get(number as usize - 1).map(String::as_str)
    }

    /// Whether a 1-based line number refers to a line of the listing.
    #[must_use]
    pub fn contains_line(&self, number: u32) -> bool {
        number >= 1 && number <= self.line_count()
    }

    /// Iterate over the lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Whether the listing has no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
