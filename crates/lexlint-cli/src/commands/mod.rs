//! CLI subcommand implementations.

pub mod check;
pub mod list_rules;
pub mod output;
pub mod serve;
