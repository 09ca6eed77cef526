//! `cerbdoc check` command implementation.

use std::path::{Path, PathBuf};

use cerbdoc::{Diagnostic, DocIndex, validate_document};
use colored::Colorize;

/// Run the check command.
///
/// With explicit files, checks exactly those; otherwise checks every
/// documentation file in the workspace.
pub fn run(workspace: &Path, files: &[PathBuf]) -> Result<(), cerbdoc::Error> {
    let findings: Vec<(PathBuf, Vec<Diagnostic>)> = if files.is_empty() {
        let docs = DocIndex::new(workspace)?;
        docs.validate_workspace()?
    } else {
        let mut findings = Vec::new();
        for file in files {
            let text = std::fs::read_to_string(file)?;
            let diagnostics = validate_document(&text);
            if !diagnostics.is_empty() {
                findings.push((file.clone(), diagnostics));
            }
        }
        findings
    };

    if findings.is_empty() {
        println!("{}", "No structural problems found".green());
        return Ok(());
    }

    let total: usize = findings.iter().map(|(_, d)| d.len()).sum();
    println!(
        "{} {} problems in {} files:",
        "Found".yellow().bold(),
        total,
        findings.len()
    );
    println!();

    for (path, diagnostics) in findings {
        for diag in diagnostics {
            println!(
                "  {}:{}:{} {} {}",
                path.display(),
                diag.start.line + 1,
                diag.start.character + 1,
                "warning:".yellow(),
                diag.message
            );
        }
    }

    Ok(())
}
