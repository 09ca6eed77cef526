//! # Cerbdoc: documentation symbol index and query interface
//!
//! Cerbdoc recovers symbol records from `.cerberusdoc` documentation files
//! and accumulates them in an in-memory, name-keyed index. It is designed
//! for programmatic use by editor tooling, CLI tools, and doc pipelines.
//!
//! ## Design Philosophy
//!
//! - **Recognize, don't validate** - signatures and descriptions are carried
//!   verbatim; no semantic checks
//! - **Best effort** - malformed documentation yields fewer symbols, never
//!   an error
//! - **Layered formats** - a fixed-priority cascade prefers richer dialects
//!   (Markdown module docs) over looser ones (inline command lines)
//! - **Embeddable** - library first, CLI second
//!
//! ## Quick Start
//!
//! ```no_run
//! use cerbdoc::DocIndex;
//! use std::path::Path;
//!
//! let mut docs = DocIndex::new(Path::new("/path/to/workspace"))?;
//!
//! // Index the workspace
//! let stats = docs.index()?;
//! println!("Indexed {} docs, found {} symbols", stats.docs_indexed, stats.symbols_found);
//!
//! // Query by name (case-insensitive)
//! if let Some(symbols) = docs.lookup("moveto") {
//!     println!("{} definitions", symbols.len());
//! }
//! # Ok::<(), cerbdoc::Error>(())
//! ```

mod error;
mod index;
mod parser;
mod text;
mod tokens;
mod types;
mod uri;
mod validate;

pub use error::{DocError, DocErrorKind, Error, Result};
pub use index::SymbolIndex;
pub use parser::parse_doc_symbols;
pub use text::{offset_to_position, position_to_offset, word_at};
pub use tokens::{DEFAULT_TOKEN_PATTERN, TokenExtractor, extract_tokens};
pub use types::{
    CompletionItem, IndexStats, Location, Position, SignatureHelp, Symbol, TextRange, UpdateStats,
};
pub use uri::{path_to_uri, uri_to_path};
pub use validate::{Diagnostic, Severity, validate_document};

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Instant;

use regex::Regex;
use tracing::{debug, warn};
use xxhash_rust::xxh3::xxh3_64;

/// File extension of documentation sources.
pub const DOC_EXTENSION: &str = "cerberusdoc";

/// Identifier immediately before an open parenthesis, for signature help.
static CALL_SITE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)\s*\($").expect("call site pattern is valid")
});

/// Documentation index and query interface.
///
/// `DocIndex` is the main entry point. It walks a workspace for
/// `.cerberusdoc` files, parses each into symbols, and answers the queries
/// an editor front end needs: lookup, search, completion, hover,
/// go-to-definition, and signature help. All state is in memory; a
/// document's contributions are replaced atomically when it changes.
pub struct DocIndex {
    workspace_root: PathBuf,
    store: SymbolIndex,
    extractor: TokenExtractor,
    /// Content hash per indexed document, for change detection.
    documents: HashMap<PathBuf, u64>,
}

impl DocIndex {
    /// Create a new index for a workspace.
    ///
    /// Uses convention-based defaults: hidden directories (starting with
    /// `.`) are excluded from the walk, and the token extractor starts with
    /// the default pattern.
    ///
    /// # Errors
    ///
    /// Fails when the workspace root does not exist.
    pub fn new(workspace_root: &Path) -> Result<Self> {
        let workspace_root = workspace_root.canonicalize().map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("workspace root not found: {}", workspace_root.display()),
            ))
        })?;

        Ok(Self {
            workspace_root,
            store: SymbolIndex::new(),
            extractor: TokenExtractor::default(),
            documents: HashMap::new(),
        })
    }

    /// The canonicalized workspace root.
    #[must_use]
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    // === Indexing ===

    /// Index all documentation files in the workspace from scratch.
    ///
    /// Unreadable documents and non-UTF-8 content are collected as
    /// [`DocError`]s in the returned stats; they never halt the walk.
    ///
    /// # Errors
    ///
    /// Only infrastructure failures on the walk itself are fatal.
    pub fn index(&mut self) -> Result<IndexStats> {
        let start = Instant::now();
        self.store = SymbolIndex::new();
        self.documents.clear();

        let mut directories_skipped = Vec::new();
        let mut errors = Vec::new();
        let mut docs_indexed = 0;
        let mut symbols_found = 0;

        for path in self.discover_docs(&mut directories_skipped)? {
            match self.load_document(&path) {
                Ok(count) => {
                    docs_indexed += 1;
                    symbols_found += count;
                }
                Err(doc_error) => errors.push(doc_error),
            }
        }

        debug!(docs_indexed, symbols_found, "workspace indexed");

        Ok(IndexStats {
            docs_indexed,
            symbols_found,
            docs_skipped: errors.len(),
            directories_skipped,
            errors,
            duration: start.elapsed(),
        })
    }

    /// Re-walk the workspace and re-parse only the documents whose content
    /// changed; drop documents that disappeared.
    ///
    /// # Errors
    ///
    /// Only infrastructure failures on the walk itself are fatal.
    pub fn update(&mut self) -> Result<UpdateStats> {
        let start = Instant::now();

        let mut directories_skipped = Vec::new();
        let mut errors = Vec::new();
        let mut docs_changed = 0;
        let mut docs_unchanged = 0;

        let found: HashSet<PathBuf> = self
            .discover_docs(&mut directories_skipped)?
            .into_iter()
            .collect();

        for path in &found {
            match std::fs::read(path) {
                Ok(bytes) => {
                    let hash = xxh3_64(&bytes);
                    if self.documents.get(path) == Some(&hash) {
                        docs_unchanged += 1;
                        continue;
                    }
                    match std::str::from_utf8(&bytes) {
                        Ok(text) => {
                            self.reindex_document(path, text);
                            docs_changed += 1;
                        }
                        Err(_) => errors.push(DocError::encoding_error(path.clone())),
                    }
                }
                Err(e) => errors.push(DocError::io_error(path.clone(), &e)),
            }
        }

        let gone: Vec<PathBuf> = self
            .documents
            .keys()
            .filter(|path| !found.contains(*path))
            .cloned()
            .collect();
        let docs_removed = gone.len();
        for path in gone {
            self.remove_document(&path);
        }

        debug!(docs_changed, docs_unchanged, docs_removed, "workspace updated");

        Ok(UpdateStats {
            docs_changed,
            docs_unchanged,
            docs_removed,
            errors,
            duration: start.elapsed(),
        })
    }

    /// Replace one document's symbols from in-memory text.
    ///
    /// This is the change-notification path: the text does not have to
    /// match what is on disk. Returns the number of symbols recovered.
    pub fn reindex_document(&mut self, path: &Path, text: &str) -> usize {
        let uri = path_to_uri(path);
        let symbols = parse_doc_symbols(text, &uri);
        let count = symbols.len();
        self.store.insert_document(&uri, symbols);
        self.documents
            .insert(path.to_path_buf(), xxh3_64(text.as_bytes()));
        count
    }

    /// Drop one document's symbols.
    pub fn remove_document(&mut self, path: &Path) {
        let uri = path_to_uri(path);
        self.store.remove_document(&uri);
        self.documents.remove(path);
    }

    // === Queries ===

    /// All symbols documented under `name`, case-insensitively.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&[Symbol]> {
        self.store.get(name)
    }

    /// The representative symbol of every name containing `query`.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Symbol> {
        self.store.search(query)
    }

    /// One completion candidate per known name.
    #[must_use]
    pub fn completions(&self) -> Vec<CompletionItem> {
        self.store.completions()
    }

    /// The symbol under the cursor in `text`, if its word is documented.
    #[must_use]
    pub fn symbol_at(&self, text: &str, position: Position) -> Option<&Symbol> {
        let word = word_at(text, position)?;
        self.store.first(word)
    }

    /// Markdown hover content for a name: fenced signature plus description.
    #[must_use]
    pub fn hover(&self, name: &str) -> Option<String> {
        let symbol = self.store.first(name)?;

        let mut parts = Vec::new();
        if symbol.signature.is_some() {
            parts.push(format!("```cerberusx\n{}\n```", symbol.display_label()));
        }
        if let Some(description) = &symbol.description {
            parts.push(format!("```text\n{description}\n```"));
        }
        Some(parts.join("\n\n"))
    }

    /// Resolve a name to its defining location.
    ///
    /// Reads the *current* content of the defining file and converts the
    /// symbol's stored byte offsets to line/character positions against it.
    /// Names without a stored range (header and keyword formats) resolve to
    /// `None`.
    ///
    /// # Errors
    ///
    /// Fails when the defining file cannot be read or its URI is invalid.
    pub fn definition(&self, name: &str) -> Result<Option<Location>> {
        let Some(symbol) = self.store.first(name) else {
            return Ok(None);
        };
        let Some(range) = symbol.range else {
            return Ok(None);
        };

        let path = uri_to_path(&symbol.uri)?;
        let text = std::fs::read_to_string(&path)?;

        Ok(Some(Location {
            uri: symbol.uri.clone(),
            start: offset_to_position(&text, range.start),
            end: offset_to_position(&text, range.end),
        }))
    }

    /// Signature help for the call being typed at `position` in `text`.
    ///
    /// Looks backwards from the cursor for `name(` and resolves the name
    /// against the index.
    #[must_use]
    pub fn signature_help(&self, text: &str, position: Position) -> Option<SignatureHelp> {
        let offset = position_to_offset(text, position);
        let caps = CALL_SITE_RE.captures(&text[..offset])?;
        let symbol = self.store.first(&caps[1])?;

        Some(SignatureHelp {
            label: symbol.display_label(),
            documentation: symbol.description.clone().unwrap_or_default(),
        })
    }

    /// Fallback identifier tokens for `text`, using the active pattern.
    #[must_use]
    pub fn tokens(&self, text: &str) -> std::collections::HashSet<String> {
        self.extractor.extract_from_text(text)
    }

    /// The active token extraction pattern.
    #[must_use]
    pub fn token_pattern(&self) -> &str {
        self.extractor.pattern()
    }

    /// Replace the token extraction pattern. Invalid patterns are rejected
    /// with a logged warning and leave the previous pattern in effect.
    pub fn set_token_pattern(&mut self, source: &str) {
        self.extractor.update_pattern(source);
    }

    /// Run structural diagnostics over every documentation file in the
    /// workspace.
    ///
    /// Unreadable or non-UTF-8 documents are skipped with a logged warning;
    /// only the walk itself can fail.
    ///
    /// # Errors
    ///
    /// Fails when the workspace cannot be walked at all.
    pub fn validate_workspace(&self) -> Result<Vec<(PathBuf, Vec<Diagnostic>)>> {
        let mut results = Vec::new();
        for path in self.discover_docs(&mut Vec::new())? {
            match std::fs::read_to_string(&path) {
                Ok(text) => {
                    let diagnostics = validate_document(&text);
                    if !diagnostics.is_empty() {
                        results.push((path, diagnostics));
                    }
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Cannot read document, skipping");
                }
            }
        }
        Ok(results)
    }

    // === Statistics ===

    /// Number of indexed documents.
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct documented names.
    #[must_use]
    pub fn name_count(&self) -> usize {
        self.store.len()
    }

    /// Total number of stored symbols.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.store.symbol_count()
    }

    // === Internals ===

    /// Read, hash, parse, and store one document.
    fn load_document(&mut self, path: &Path) -> std::result::Result<usize, DocError> {
        let bytes =
            std::fs::read(path).map_err(|e| DocError::io_error(path.to_path_buf(), &e))?;
        let text = std::str::from_utf8(&bytes)
            .map_err(|_| DocError::encoding_error(path.to_path_buf()))?;
        Ok(self.reindex_document(path, text))
    }

    /// Discover documentation files in the workspace.
    fn discover_docs(
        &self,
        directories_skipped: &mut Vec<(PathBuf, String)>,
    ) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        Self::walk_dir(&self.workspace_root, &mut files, directories_skipped);
        files.sort();
        Ok(files)
    }

    /// Recursively walk a directory, collecting documentation files.
    ///
    /// Directories that cannot be read (e.g., due to permissions) are
    /// tracked in `directories_skipped` for reporting.
    fn walk_dir(
        dir: &Path,
        files: &mut Vec<PathBuf>,
        directories_skipped: &mut Vec<(PathBuf, String)>,
    ) {
        let entries = match std::fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    directory = %dir.display(),
                    error = %e,
                    "Cannot read directory, skipping"
                );
                directories_skipped.push((dir.to_path_buf(), e.to_string()));
                return;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!(
                        directory = %dir.display(),
                        error = %e,
                        "Failed to read directory entry, skipping"
                    );
                    continue;
                }
            };

            let path = entry.path();

            // Skip hidden files and directories
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with('.') {
                    continue;
                }
            }

            if path.is_dir() {
                Self::walk_dir(&path, files, directories_skipped);
            } else if path.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(DOC_EXTENSION)
            {
                files.push(path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_workspace() -> TempDir {
        tempfile::tempdir().expect("failed to create temp dir")
    }

    #[test]
    fn new_creates_instance_for_valid_workspace() {
        let workspace = temp_workspace();
        let result = DocIndex::new(workspace.path());

        assert!(result.is_ok());
    }

    #[test]
    fn new_fails_for_nonexistent_workspace() {
        let result = DocIndex::new(Path::new("/nonexistent/path/that/does/not/exist"));

        assert!(result.is_err());
    }

    #[test]
    fn reindex_document_replaces_symbols() {
        let workspace = temp_workspace();
        let mut docs = DocIndex::new(workspace.path()).expect("failed to create index");
        let path = workspace.path().join("draw.cerberusdoc");

        let count = docs.reindex_document(&path, "---\nname: Draw\n---\n");
        assert_eq!(count, 1);
        assert!(docs.lookup("draw").is_some());

        docs.reindex_document(&path, "---\nname: Clear\n---\n");
        assert!(docs.lookup("draw").is_none());
        assert!(docs.lookup("clear").is_some());
    }

    #[test]
    fn signature_help_resolves_call_site() {
        let workspace = temp_workspace();
        let mut docs = DocIndex::new(workspace.path()).expect("failed to create index");
        let path = workspace.path().join("draw.cerberusdoc");
        docs.reindex_document(&path, "```cerberusx\nMoveTo(x,y) - move the cursor\n```\n");

        let text = "MoveTo(";
        let help = docs
            .signature_help(text, Position::new(0, 7))
            .expect("call site resolves");
        assert_eq!(help.label, "MoveTo(x,y)");
    }

    #[test]
    fn symbol_at_resolves_word_under_cursor() {
        let workspace = temp_workspace();
        let mut docs = DocIndex::new(workspace.path()).expect("failed to create index");
        let path = workspace.path().join("draw.cerberusdoc");
        docs.reindex_document(&path, "```cerberusx\nMoveTo(x,y) - move\n```\n");

        let found = docs.symbol_at("call MoveTo here", Position::new(0, 11));
        assert_eq!(found.map(|s| s.name.as_str()), Some("MoveTo"));
    }
}
