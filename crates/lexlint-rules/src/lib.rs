//! # lexlint-rules
//!
//! Built-in lint rules for lexlint.
//!
//! All rules operate on raw text plus a [`LineIndex`](lexlint_core::LineIndex);
//! none of them parses. Findings are heuristic and advisory.
//!
//! ## Available Rules
//!
//! | Name | Description |
//! |------|-------------|
//! | `missing-dot` | Adjacent identifiers before a call, a likely missing `.` |
//! | `system-out-spacing` | `System out println` missing its `.` separators |
//! | `unclosed-construct` | Unmatched brackets and unterminated literals |
//!
//! ## Usage
//!
//! ```ignore
//! use lexlint_core::Analyzer;
//! use lexlint_rules::default_rules;
//!
//! let analyzer = Analyzer::builder().rules(default_rules()).build();
//! let report = analyzer.analyze(source);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod missing_dot;
mod system_out;
mod unclosed_construct;

pub use missing_dot::MissingDot;
pub use system_out::SystemOutSpacing;
pub use unclosed_construct::UnclosedConstruct;

/// Re-export core types for convenience.
pub use lexlint_core::{Rule, RuleBox, Suggestion};

/// Returns the default rule set: every built-in rule.
#[must_use]
pub fn default_rules() -> Vec<RuleBox> {
    vec![
        Box::new(MissingDot::new()),
        Box::new(SystemOutSpacing::new()),
        Box::new(UnclosedConstruct::new()),
    ]
}

/// Returns the rules selected by name, ignoring unknown names with a
/// warning.
#[must_use]
pub fn rules_by_name(names: &[&str]) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();

    for name in names {
        match *name {
            missing_dot::NAME => rules.push(Box::new(MissingDot::new())),
            system_out::NAME => rules.push(Box::new(SystemOutSpacing::new())),
            unclosed_construct::NAME => rules.push(Box::new(UnclosedConstruct::new())),
            _ => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}
