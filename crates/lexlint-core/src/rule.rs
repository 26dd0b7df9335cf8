//! Rule trait for defining lexical lint rules.

use crate::line_index::LineIndex;
use crate::types::Suggestion;

/// A stateless lint rule over raw source text.
///
/// Rules receive the whole text plus a prebuilt [`LineIndex`] and return
/// line-attributed suggestions. They never see an AST: everything is
/// heuristic pattern matching or single-pass lexical scanning, so
/// findings are advisory by design.
///
/// Rules must be pure functions of their inputs. The analyzer may run
/// them in any order; the final report is stably sorted by line, so
/// only a rule's own emission order survives for same-line findings.
///
/// # Example
///
/// ```ignore
/// use lexlint_core::{LineIndex, Rule, Suggestion};
///
/// pub struct NoTabs;
///
/// impl Rule for NoTabs {
///     fn name(&self) -> &'static str { "no-tabs" }
///
///     fn apply(&self, text: &str, index: &LineIndex) -> Vec<Suggestion> {
///         text.bytes()
///             .enumerate()
///             .filter(|&(_, b)| b == b'\t')
///             .map(|(i, _)| Suggestion::new(index.line_of(i), "Tab character"))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "missing-dot").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Scans `text` and returns any suggestions found.
    fn apply(&self, text: &str, index: &LineIndex) -> Vec<Suggestion>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn apply(&self, _text: &str, index: &LineIndex) -> Vec<Suggestion> {
            vec![Suggestion::new(index.line_of(0), "test finding")]
        }
    }

    #[test]
    fn rule_trait_basics() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.description(), "A test rule");

        let index = LineIndex::new("abc");
        let suggestions = rule.apply("abc", &index);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].line, 1);
    }
}
