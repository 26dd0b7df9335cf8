//! # lexlint-core
//!
//! Core framework for fast, heuristic lexical linting of source text.
//!
//! This crate provides the engine behind lexlint: no parser, no AST,
//! just line-attributed suggestions produced by stateless rules scanning
//! raw text. It includes:
//!
//! - [`LineIndex`] for mapping byte offsets to 1-based line numbers
//! - [`Rule`] trait for text-based lint rules
//! - [`Analyzer`] for running rules and merging their suggestions
//! - [`Suggestion`] and [`Report`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use lexlint_core::Analyzer;
//! use lexlint_rules::default_rules;
//!
//! let analyzer = Analyzer::builder().rules(default_rules()).build();
//! let report = analyzer.analyze("foo(");
//! for s in &report.suggestions {
//!     println!("{s}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod line_index;
mod rule;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use line_index::LineIndex;
pub use rule::{Rule, RuleBox};
pub use types::{Report, Suggestion};
