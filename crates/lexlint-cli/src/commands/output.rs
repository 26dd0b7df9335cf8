//! Shared output formatting for reports.

use anyhow::Result;
use lexlint_core::{Report, Suggestion};
use serde::Serialize;

use crate::OutputFormat;

/// One file's report, as serialized for JSON output and the HTTP
/// endpoint.
#[derive(Debug, Serialize)]
pub struct FileReport<'a> {
    /// Display name of the analyzed file.
    pub file: &'a str,
    /// Suggestions, sorted by line.
    pub suggestions: &'a [Suggestion],
}

/// Prints one file's report in the specified format.
pub fn print(file: &str, report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(file, report),
        OutputFormat::Json => return print_json(file, report),
        OutputFormat::Compact => print_compact(file, report),
    }
    Ok(())
}

fn print_text(file: &str, report: &Report) {
    if report.is_clean() {
        println!("No quick suggestions for {file}");
        return;
    }

    println!("Suggestions for {file}:");
    for suggestion in &report.suggestions {
        println!("  Line {}: {}", suggestion.line, suggestion.message);
    }
}

fn print_json(file: &str, report: &Report) -> Result<()> {
    let doc = FileReport {
        file,
        suggestions: &report.suggestions,
    };
    let json = serde_json::to_string_pretty(&doc)?;
    println!("{json}");
    Ok(())
}

fn print_compact(file: &str, report: &Report) {
    for suggestion in &report.suggestions {
        println!("{}:{}: {}", file, suggestion.line, suggestion.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_report_serializes_expected_shape() {
        let suggestions = vec![Suggestion::new(1, "Unclosed '('")];
        let doc = FileReport {
            file: "A.java",
            suggestions: &suggestions,
        };
        let json = serde_json::to_value(&doc).expect("serialize");
        assert_eq!(json["file"], "A.java");
        assert_eq!(json["suggestions"][0]["line"], 1);
        assert_eq!(json["suggestions"][0]["message"], "Unclosed '('");
    }
}
