//! Rule to flag `System out println` written without member access.

use lexlint_core::{LineIndex, Rule, Suggestion};
use regex::Regex;
use std::sync::OnceLock;

/// Rule name for system-out-spacing.
pub const NAME: &str = "system-out-spacing";

fn spaced_call() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bSystem\s+out\s+println\b").expect("pattern is valid"))
}

/// Flags the three-token sequence `System out println`.
///
/// Case- and order-sensitive, word-boundary delimited on both ends. A
/// companion to [`MissingDot`](crate::MissingDot) for the one spaced
/// call that shows up constantly in beginner Java.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOutSpacing;

impl SystemOutSpacing {
    /// Creates a new rule instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SystemOutSpacing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags 'System out println' missing its '.' separators"
    }

    fn apply(&self, text: &str, index: &LineIndex) -> Vec<Suggestion> {
        spaced_call()
            .find_iter(text)
            .map(|m| {
                Suggestion::new(
                    index.line_of(m.start()),
                    "Replace 'System out println' with 'System.out.println'",
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str) -> Vec<Suggestion> {
        let index = LineIndex::new(text);
        SystemOutSpacing::new().apply(text, &index)
    }

    #[test]
    fn fires_on_spaced_call() {
        let suggestions = check("System out println(\"hi\");");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].line, 1);
        assert_eq!(
            suggestions[0].message,
            "Replace 'System out println' with 'System.out.println'"
        );
    }

    #[test]
    fn ignores_correct_call() {
        assert!(check("System.out.println(\"hi\");").is_empty());
    }

    #[test]
    fn case_sensitive() {
        assert!(check("system out println(\"hi\");").is_empty());
    }

    #[test]
    fn order_sensitive() {
        assert!(check("out System println(\"hi\");").is_empty());
    }

    #[test]
    fn word_boundary_on_both_ends() {
        assert!(check("MySystem out printlnx();").is_empty());
    }

    #[test]
    fn reports_line_of_match_start() {
        let suggestions = check("int x;\n\nSystem out println(x);\n");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].line, 3);
    }
}
