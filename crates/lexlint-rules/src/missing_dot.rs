//! Rule to flag a likely missing '.' before a method call.
//!
//! # Rationale
//!
//! `user getName()` is almost always a mangled `user.getName()`. Two
//! adjacent bare identifiers followed directly by `(` rarely appear in
//! well-formed Java-like source outside declarations, so the rule warns
//! on that shape.
//!
//! # Precision
//!
//! This is a deliberate heuristic. Declarations whose declared name is
//! immediately called into (`Foo bar(args)`) match too; the keyword
//! exclusion list only removes the most common legitimate left-hand
//! tokens. No semantic disambiguation is attempted.

use lexlint_core::{LineIndex, Rule, Suggestion};
use regex::Regex;
use std::sync::OnceLock;

/// Rule name for missing-dot.
pub const NAME: &str = "missing-dot";

/// Left-hand identifiers that legitimately precede a called identifier.
const KEYWORDS: &[&str] = &[
    "new", "return", "if", "for", "while", "switch", "case", "throws", "throw", "import",
    "package", "class", "interface",
];

fn adjacent_idents() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\s+([A-Za-z_][A-Za-z0-9_]*)\b")
            .expect("pattern is valid")
    })
}

/// Flags two adjacent identifiers immediately followed by `(`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingDot;

impl MissingDot {
    /// Creates a new rule instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for MissingDot {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags adjacent identifiers before a call, a likely missing '.'"
    }

    fn apply(&self, text: &str, index: &LineIndex) -> Vec<Suggestion> {
        let mut out = Vec::new();
        let bytes = text.as_bytes();

        for caps in adjacent_idents().captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            let lhs = &caps[1];
            let rhs = &caps[2];

            if KEYWORDS.contains(&lhs) {
                continue;
            }

            // Only warn when the match is directly followed by a call.
            let end = whole.end();
            if end < bytes.len() && bytes[end] == b'(' {
                out.push(Suggestion::new(
                    index.line_of(whole.start()),
                    format!("Possible missing '.' between '{lhs}' and '{rhs}'"),
                ));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str) -> Vec<Suggestion> {
        let index = LineIndex::new(text);
        MissingDot::new().apply(text, &index)
    }

    #[test]
    fn fires_on_adjacent_idents_before_call() {
        let suggestions = check("Foo bar(1);");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].line, 1);
        assert_eq!(
            suggestions[0].message,
            "Possible missing '.' between 'Foo' and 'bar'"
        );
    }

    #[test]
    fn keyword_lhs_is_excluded() {
        assert!(check("return bar(1);").is_empty());
        assert!(check("new Thing(1);").is_empty());
        assert!(check("if x(1);").is_empty());
    }

    #[test]
    fn requires_following_paren() {
        assert!(check("Foo bar").is_empty());
        assert!(check("Foo bar;").is_empty());
        assert!(check("Foo bar = baz;").is_empty());
    }

    #[test]
    fn match_at_end_of_text_does_not_fire() {
        assert!(check("Foo bar").is_empty());
    }

    #[test]
    fn spans_whitespace_including_newline() {
        let suggestions = check("user\n    getName();");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].line, 1);
    }

    #[test]
    fn reports_line_of_match_start() {
        let suggestions = check("int x = 1;\nuser getName();\n");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].line, 2);
    }

    #[test]
    fn multiple_matches_each_reported() {
        let suggestions = check("a b(1); c d(2);");
        assert_eq!(suggestions.len(), 2);
    }
}
