//! `cerbdoc tokens` command implementation.

use std::path::Path;

use cerbdoc::extract_tokens;
use colored::Colorize;

/// Run the tokens command.
pub fn run(file: &Path, pattern: Option<&str>) -> Result<(), cerbdoc::Error> {
    let text = std::fs::read_to_string(file)?;

    let mut tokens: Vec<String> = extract_tokens(pattern.unwrap_or(""), &text)
        .into_iter()
        .collect();
    tokens.sort();

    if tokens.is_empty() {
        println!("No tokens in {}", file.display());
        return Ok(());
    }

    println!(
        "{} tokens in {}:",
        tokens.len().to_string().green().bold(),
        file.display()
    );
    for token in tokens {
        println!("  {token}");
    }

    Ok(())
}
