//! Shared text utilities: offset/position conversion, line iteration, and
//! fenced-block scanning.
//!
//! Both the symbol parser and the token extractor prefer the interior of
//! fenced code blocks when a document has them, so the fence scan lives here.
//! Offsets are byte offsets into the original text; positions count line
//! breaks (`\n`, optionally preceded by `\r`) and bytes within the line.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Position, TextRange};

/// Fenced block delimited by triple backticks, with an optional `cerberusx`
/// language hint after the opening fence.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)```(?:cerberusx)?\s*([\s\S]*?)```").expect("fence pattern is valid")
});

/// A fenced code block found in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FencedBlock<'t> {
    /// Extent of the whole block in the document, fences included
    pub span: TextRange,
    /// Byte offset of the block interior in the document
    pub content_start: usize,
    /// Interior of the block, fences and language hint excluded
    pub content: &'t str,
}

/// Find all fenced blocks in `text`, in document order.
///
/// An unterminated fence (no closing backticks) yields no block.
#[must_use]
pub fn fenced_blocks(text: &str) -> Vec<FencedBlock<'_>> {
    FENCE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(FencedBlock {
                span: TextRange::new(whole.start(), whole.end())?,
                content_start: inner.start(),
                content: inner.as_str(),
            })
        })
        .collect()
}

/// Iterate the lines of `s` together with the byte offset of each line start.
///
/// Lines are split on `\n`; a trailing `\r` is stripped from the yielded line
/// but still accounted for in the offsets of subsequent lines.
pub fn lines_with_offsets(s: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    s.split('\n').map(move |piece| {
        let start = offset;
        offset += piece.len() + 1;
        (start, piece.strip_suffix('\r').unwrap_or(piece))
    })
}

/// Convert a byte offset into a zero-indexed line/character position.
///
/// The offset is clamped to the text length. Character counts bytes since
/// the last line break, so the result indexes into the line's bytes.
#[must_use]
pub fn offset_to_position(text: &str, offset: usize) -> Position {
    let offset = offset.min(text.len());
    let prefix = &text.as_bytes()[..offset];

    let mut line = 0;
    let mut line_start = 0;
    for (i, &b) in prefix.iter().enumerate() {
        if b == b'\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    Position::new(line, offset - line_start)
}

/// Convert a zero-indexed line/character position into a byte offset.
///
/// Out-of-range lines clamp to the end of the text; out-of-range characters
/// clamp to the end of the line.
#[must_use]
pub fn position_to_offset(text: &str, position: Position) -> usize {
    for (index, (start, line)) in lines_with_offsets(text).enumerate() {
        if index == position.line {
            let mut cut = position.character.min(line.len());
            while !line.is_char_boundary(cut) {
                cut -= 1;
            }
            return start + cut;
        }
    }
    text.len()
}

/// The identifier ending at `position`, if any.
///
/// Scans backwards from the position for a `[A-Za-z_][A-Za-z0-9_]*` suffix,
/// mirroring how an editor resolves the word under the cursor.
#[must_use]
pub fn word_at(text: &str, position: Position) -> Option<&str> {
    let (_, line) = lines_with_offsets(text).nth(position.line)?;
    let mut cut = position.character.min(line.len());
    while !line.is_char_boundary(cut) {
        cut -= 1;
    }
    let before = &line[..cut];

    let bytes = before.as_bytes();
    let mut start = bytes.len();
    while start > 0 && (bytes[start - 1].is_ascii_alphanumeric() || bytes[start - 1] == b'_') {
        start -= 1;
    }
    // The identifier may not start with a digit; drop leading digits.
    while start < bytes.len() && bytes[start].is_ascii_digit() {
        start += 1;
    }

    if start == bytes.len() {
        None
    } else {
        Some(&before[start..])
    }
}
