//! `cerbdoc index` command implementation.

use std::path::Path;

use cerbdoc::DocIndex;
use colored::Colorize;

/// Run the index command.
pub fn run(workspace: &Path) -> Result<(), cerbdoc::Error> {
    println!("{} {}...", "Indexing".cyan().bold(), workspace.display());

    let mut docs = DocIndex::new(workspace)?;
    let stats = docs.index()?;

    // Display results
    println!();
    println!(
        "{} {} documents, found {} symbols ({} distinct names)",
        "Indexed".green().bold(),
        stats.docs_indexed,
        stats.symbols_found,
        docs.name_count()
    );
    println!("{}: {:.2?}", "Duration".dimmed(), stats.duration);

    if stats.docs_skipped > 0 {
        println!(
            "{}: {} documents (unreadable or not UTF-8)",
            "Skipped".yellow(),
            stats.docs_skipped
        );
    }

    if !stats.directories_skipped.is_empty() {
        println!(
            "{}: {} directories (permission denied)",
            "Skipped".yellow(),
            stats.directories_skipped.len()
        );
    }

    if !stats.errors.is_empty() {
        println!();
        println!("{} ({}):", "Errors".red().bold(), stats.errors.len());
        for err in stats.errors.iter().take(5) {
            println!("  {} {}: {}", "•".red(), err.path.display(), err.message);
        }
        if stats.errors.len() > 5 {
            println!("  ... and {} more", stats.errors.len() - 5);
        }
    }

    Ok(())
}
