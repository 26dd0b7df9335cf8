//! List rules command implementation.

use lexlint_rules::default_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<22} Description", "Name");
    println!("{}", "-".repeat(72));

    for rule in default_rules() {
        println!("{:<22} {}", rule.name(), rule.description());
    }

    println!("\nAll rules run by default. Use --rules to filter, e.g.:");
    println!("  lexlint check --rules unclosed-construct,missing-dot Main.java");
}
