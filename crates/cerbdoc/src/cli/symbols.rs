//! `cerbdoc symbols` command implementation.

use std::path::Path;

use cerbdoc::{offset_to_position, parse_doc_symbols, path_to_uri};
use colored::Colorize;

/// Run the symbols command.
pub fn run(file: &Path, json: bool) -> Result<(), cerbdoc::Error> {
    let text = std::fs::read_to_string(file)?;
    let uri = path_to_uri(file);
    let symbols = parse_doc_symbols(&text, &uri);

    if json {
        let rendered = serde_json::to_string_pretty(&symbols)
            .map_err(|e| cerbdoc::Error::Config(format!("cannot render JSON: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }

    if symbols.is_empty() {
        println!("No symbols in {}", file.display());
        return Ok(());
    }

    println!(
        "{} symbols in {}:",
        symbols.len().to_string().green().bold(),
        file.display()
    );
    println!();

    for sym in &symbols {
        let position = sym
            .range
            .map(|range| {
                let pos = offset_to_position(&text, range.start);
                format!("{}:{}", pos.line + 1, pos.character + 1)
            })
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {} {}",
            sym.display_label().white().bold(),
            format!("({position})").dimmed()
        );
    }

    Ok(())
}
