//! Core types for lint suggestions and reports.

use serde::{Deserialize, Serialize};

/// A single advisory finding tied to a source line.
///
/// Suggestions are immutable values: a rule creates one, the analyzer
/// sorts them, the presentation layer prints them. They carry no
/// identity beyond their fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// Line number (1-indexed).
    pub line: usize,
    /// Human-readable message.
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// Result of analyzing one text.
///
/// An empty report is a normal outcome, not a failure: it means the
/// rules found nothing to say.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Report {
    /// All suggestions, sorted by line ascending.
    pub suggestions: Vec<Suggestion>,
}

impl Report {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no rule produced a suggestion.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Number of suggestions in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    /// Returns true if the report holds no suggestions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

impl IntoIterator for Report {
    type Item = Suggestion;
    type IntoIter = std::vec::IntoIter<Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.suggestions.into_iter()
    }
}
