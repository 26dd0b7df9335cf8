//! Check command implementation.

use anyhow::{Context, Result};
use lexlint_core::Analyzer;
use lexlint_rules::{default_rules, rules_by_name};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    paths: &[PathBuf],
    format: OutputFormat,
    rules_filter: Option<String>,
    ext: Vec<String>,
    deny: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = Config::resolve(config_path).context("Failed to load config")?;

    // CLI flags win over config; config wins over defaults.
    let rules = match rules_filter
        .as_deref()
        .map(|f| f.split(',').map(str::trim).collect::<Vec<_>>())
    {
        Some(names) => rules_by_name(&names),
        None => match &config.rules {
            Some(names) => {
                let names: Vec<&str> = names.iter().map(String::as_str).collect();
                rules_by_name(&names)
            }
            None => default_rules(),
        },
    };

    let analyzer = Analyzer::builder().rules(rules).build();
    tracing::debug!("Running {} rules", analyzer.rule_count());

    let extensions = if ext.is_empty() {
        config.extensions_or_default()
    } else {
        ext
    };

    let files = collect_files(paths, &extensions)?;
    tracing::info!("Analyzing {} file(s)", files.len());

    let mut total = 0;
    for file in &files {
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let report = analyzer.analyze(&text);
        total += report.len();

        let name = display_name(file);
        super::output::print(&name, &report, format)?;
    }

    if deny && total > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Expands directories into files with one of the wanted extensions;
/// explicit file paths are taken as-is.
fn collect_files(paths: &[PathBuf], extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry
                    .with_context(|| format!("Failed to walk {}", path.display()))?;
                if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(path.clone());
        }
    }

    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.iter().any(|want| want == e))
}

/// Display name used for output framing only, never for analysis.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
