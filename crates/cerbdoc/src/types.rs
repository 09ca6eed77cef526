//! Domain types for the cerbdoc symbol index.
//!
//! These types represent the core domain model:
//! - **Entities**: `Symbol` (produced by the parser, held by the store)
//! - **Locations**: `TextRange` (byte offsets), `Position` (line/column), `Location`
//! - **Results**: `IndexStats`, `UpdateStats` (operation reports)
//! - **Query views**: `CompletionItem`, `SignatureHelp`
//!
//! ## Design Decisions
//!
//! | Decision | Choice | Rationale |
//! |----------|--------|-----------|
//! | `range` | Byte offsets, not line/column | Positions are computed on demand against current file text |
//! | `range` | Optional | Header and keyword formats don't produce one |
//! | Dedup key | Lowercased name | Matches the case-insensitive lookup contract |

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::DocError;

/// A half-open byte-offset range into the original document text.
///
/// Offsets always land on UTF-8 character boundaries because they come from
/// regex match bounds over the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    /// Offset of the first byte of the range
    pub start: usize,
    /// Offset one past the last byte of the range
    pub end: usize,
}

impl TextRange {
    /// Create a new range with validation.
    ///
    /// Returns `None` if `end` is before `start`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Option<Self> {
        if end < start {
            return None;
        }
        Some(Self { start, end })
    }

    /// Length of the range in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A zero-indexed line/character position in a document.
///
/// `character` counts bytes from the start of the line, matching the
/// byte-offset convention of [`TextRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Offset within the line (0-indexed)
    pub character: usize,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// A resolved document location: URI plus start/end positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// URI of the document containing the range
    pub uri: String,
    /// Start position
    pub start: Position,
    /// End position
    pub end: Position,
}

/// One documented entity recovered from a `.cerberusdoc` file.
///
/// Symbols are recreated from scratch on every parse; they carry no identity
/// across calls except through the `(name, uri)` pair, which the index uses
/// to reconcile updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Identifier, stored with original casing (deduplication is case-insensitive)
    pub name: String,
    /// Raw call-signature text, unparsed and unvalidated (e.g. `(x, y)`)
    pub signature: Option<String>,
    /// Free-text documentation, possibly prefixed with a bolded keyword-type label
    pub description: Option<String>,
    /// Identifier of the source document, assigned by the caller and opaque here
    pub uri: String,
    /// Extent of the defining text in the original document, when the source
    /// format provides one
    pub range: Option<TextRange>,
}

impl Symbol {
    /// Signature rendered next to the name, e.g. `MoveTo(x,y)`.
    ///
    /// Falls back to the bare name when no signature was documented.
    #[must_use]
    pub fn display_label(&self) -> String {
        match &self.signature {
            Some(sig) if sig.starts_with('(') || sig.starts_with(':') => {
                format!("{}{sig}", self.name)
            }
            Some(sig) => sig.clone(),
            None => self.name.clone(),
        }
    }
}

/// A completion candidate: one representative symbol per known name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionItem {
    /// The completed identifier, original casing
    pub label: String,
    /// Signature shown next to the label, empty when undocumented
    pub detail: String,
    /// Description shown in the documentation pane, empty when undocumented
    pub documentation: String,
}

/// Signature assistance for a call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureHelp {
    /// Rendered label, e.g. `MoveTo(x,y)`
    pub label: String,
    /// Documentation for the signature, empty when undocumented
    pub documentation: String,
}

/// Statistics from a full index operation.
///
/// Returned by `DocIndex::index()`.
#[derive(Debug, Clone)]
pub struct IndexStats {
    /// Number of documents successfully parsed and stored
    pub docs_indexed: usize,
    /// Total symbols recovered across all documents
    pub symbols_found: usize,
    /// Documents skipped (unreadable or not UTF-8); detailed in `errors`
    pub docs_skipped: usize,
    /// Directories that could not be read (path, error reason)
    pub directories_skipped: Vec<(PathBuf, String)>,
    /// Errors encountered (document-level, non-fatal)
    pub errors: Vec<DocError>,
    /// How long the indexing took
    pub duration: Duration,
}

/// Statistics from an incremental update.
///
/// Returned by `DocIndex::update()`.
#[derive(Debug, Clone)]
pub struct UpdateStats {
    /// Documents re-parsed because their content hash changed
    pub docs_changed: usize,
    /// Documents left alone because their content hash matched
    pub docs_unchanged: usize,
    /// Documents dropped because they disappeared from the workspace
    pub docs_removed: usize,
    /// Errors encountered (document-level, non-fatal)
    pub errors: Vec<DocError>,
    /// How long the update took
    pub duration: Duration,
}
