//! `cerbdoc search` command implementation.

use std::path::Path;

use cerbdoc::DocIndex;
use colored::Colorize;

/// Run the search command.
pub fn run(workspace: &Path, query: &str, limit: usize) -> Result<(), cerbdoc::Error> {
    let mut docs = DocIndex::new(workspace)?;
    docs.index()?;

    let mut symbols = docs.search(query);
    symbols.truncate(limit);

    if symbols.is_empty() {
        println!("No symbols found matching \"{query}\"");

        if docs.symbol_count() == 0 {
            println!(
                "\n{}: No documentation was found. Are there .cerberusdoc files under {}?",
                "hint".dimmed(),
                workspace.display()
            );
        }
        return Ok(());
    }

    println!(
        "Found {} symbols matching \"{}\":",
        symbols.len().to_string().green().bold(),
        query.cyan()
    );
    println!();

    for sym in symbols {
        let location = match docs.definition(&sym.name) {
            Ok(Some(loc)) => format!("{}:{}", loc.uri, loc.start.line + 1),
            _ => sym.uri.clone(),
        };

        println!(
            "  {} {}",
            sym.display_label().white().bold(),
            format!("- {location}").dimmed()
        );

        if let Some(description) = &sym.description {
            if let Some(first_line) = description.lines().find(|l| !l.trim().is_empty()) {
                println!("    {}", first_line.dimmed());
            }
        }
    }

    Ok(())
}
