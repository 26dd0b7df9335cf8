//! Analyzer for orchestrating rule execution over one text.

use crate::line_index::LineIndex;
use crate::rule::{Rule, RuleBox};
use crate::types::Report;

use tracing::debug;

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with no rules registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple boxed rules to the analyzer.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Builds the analyzer.
    #[must_use]
    pub fn build(self) -> Analyzer {
        Analyzer { rules: self.rules }
    }
}

/// Runs a set of rules over a single text and merges their suggestions.
///
/// The analyzer builds one [`LineIndex`] per text and hands it read-only
/// to every rule. Suggestions from all rules are pooled and stably
/// sorted by line ascending, so rules' relative emission order is
/// preserved for same-line findings.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    rules: Vec<RuleBox>,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes one text and returns the merged, sorted report.
    ///
    /// An empty report means no rule had anything to say; this is a
    /// normal outcome, not a failure.
    #[must_use]
    pub fn analyze(&self, text: &str) -> Report {
        let index = LineIndex::new(text);
        let mut report = Report::new();

        for rule in &self.rules {
            let suggestions = rule.apply(text, &index);
            debug!(rule = rule.name(), count = suggestions.len(), "rule applied");
            report.suggestions.extend(suggestions);
        }

        // Stable: emission order survives for equal lines.
        report.suggestions.sort_by_key(|s| s.line);

        debug!(total = report.len(), "analysis complete");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Suggestion;

    struct FixedRule {
        name: &'static str,
        suggestions: Vec<Suggestion>,
    }

    impl Rule for FixedRule {
        fn name(&self) -> &'static str {
            self.name
        }

        fn apply(&self, _text: &str, _index: &LineIndex) -> Vec<Suggestion> {
            self.suggestions.clone()
        }
    }

    #[test]
    fn no_rules_yields_clean_report() {
        let analyzer = Analyzer::builder().build();
        assert_eq!(analyzer.rule_count(), 0);
        assert!(analyzer.analyze("anything").is_clean());
    }

    #[test]
    fn merges_and_sorts_by_line() {
        let analyzer = Analyzer::builder()
            .rule(FixedRule {
                name: "a",
                suggestions: vec![Suggestion::new(5, "from a"), Suggestion::new(1, "from a")],
            })
            .rule(FixedRule {
                name: "b",
                suggestions: vec![Suggestion::new(3, "from b")],
            })
            .build();

        let report = analyzer.analyze("x");
        let lines: Vec<usize> = report.suggestions.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![1, 3, 5]);
    }

    #[test]
    fn sort_is_stable_for_equal_lines() {
        let analyzer = Analyzer::builder()
            .rule(FixedRule {
                name: "first",
                suggestions: vec![Suggestion::new(2, "first wins ties")],
            })
            .rule(FixedRule {
                name: "second",
                suggestions: vec![Suggestion::new(2, "second keeps order")],
            })
            .build();

        let report = analyzer.analyze("x");
        assert_eq!(report.suggestions[0].message, "first wins ties");
        assert_eq!(report.suggestions[1].message, "second keeps order");
    }
}
