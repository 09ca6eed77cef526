//! Structural diagnostics for documentation code samples.
//!
//! Fenced examples in keyword docs frequently demonstrate loop constructs;
//! an unbalanced `For`/`Next` pair in a sample usually means the doc was
//! truncated or mis-pasted. The check is purely lexical: it scans fenced
//! blocks (the whole text when no fence is present) and pairs openers with
//! closers on a stack.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text::{fenced_blocks, lines_with_offsets, offset_to_position};
use crate::types::Position;

static FOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^For\b").expect("for pattern is valid"));

static CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(Next|End\s+For|End)\b").expect("close pattern is valid"));

/// Severity of a structural diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Structure that is very likely wrong
    Warning,
}

/// One structural finding in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity of the finding
    pub severity: Severity,
    /// Start of the offending line, document-relative
    pub start: Position,
    /// End of the flagged span on that line
    pub end: Position,
    /// Human-readable message
    pub message: String,
}

/// Longest span flagged on a single line.
const MAX_FLAGGED_CHARS: usize = 200;

/// Check loop balance in a document's code samples.
///
/// Returns one warning per `Next`/`End`/`End For` without an opener and one
/// per `For` left unclosed at the end of its block. Never fails; text
/// without samples yields no diagnostics.
#[must_use]
pub fn validate_document(text: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let blocks = fenced_blocks(text);
    if blocks.is_empty() {
        check_block(text, 0, text, &mut diagnostics);
    } else {
        for block in blocks {
            check_block(text, block.content_start, block.content, &mut diagnostics);
        }
    }

    diagnostics
}

fn check_block(text: &str, content_start: usize, content: &str, out: &mut Vec<Diagnostic>) {
    // Offsets of unclosed `For` lines, document-relative.
    let mut open_loops: Vec<(usize, usize)> = Vec::new();

    for (line_start, line) in lines_with_offsets(content) {
        let trimmed = line.trim();
        let doc_offset = content_start + line_start;

        if FOR_RE.is_match(trimmed) {
            open_loops.push((doc_offset, line.len()));
        } else if CLOSE_RE.is_match(trimmed) {
            if open_loops.pop().is_none() {
                let closer = trimmed.split_whitespace().next().unwrap_or(trimmed);
                out.push(line_diagnostic(
                    text,
                    doc_offset,
                    line.len(),
                    format!("Closing '{closer}' found without matching 'For'"),
                ));
            }
        }
    }

    for (doc_offset, line_len) in open_loops {
        out.push(line_diagnostic(
            text,
            doc_offset,
            line_len,
            "Missing closing 'Next' (or 'End' / 'End For') for 'For' started here".to_string(),
        ));
    }
}

fn line_diagnostic(text: &str, line_offset: usize, line_len: usize, message: String) -> Diagnostic {
    let start = offset_to_position(text, line_offset);
    Diagnostic {
        severity: Severity::Warning,
        start: Position::new(start.line, 0),
        end: Position::new(start.line, line_len.min(MAX_FLAGGED_CHARS)),
        message,
    }
}
