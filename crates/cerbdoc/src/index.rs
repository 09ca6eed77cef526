//! Name-keyed symbol store accumulated across documents.
//!
//! Keys are lowercased names; values are the symbols carrying that name, in
//! the order they were inserted. The map itself preserves name insertion
//! order, so completion lists stay stable across updates.
//!
//! A document's contributions are replaced wholesale: [`SymbolIndex::insert_document`]
//! first removes every symbol with the same URI, then appends the new ones.
//! From the caller's perspective the swap is atomic: there is no state in
//! which a document is half-indexed.

use indexmap::IndexMap;
use tracing::trace;

use crate::types::{CompletionItem, Symbol};

/// Map from lowercased symbol name to the symbols carrying that name.
#[derive(Debug, Clone, Default)]
pub struct SymbolIndex {
    by_name: IndexMap<String, Vec<Symbol>>,
}

impl SymbolIndex {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a document's symbols.
    ///
    /// Removes every prior symbol whose `uri` matches, then appends the new
    /// symbols. Names left without any symbol disappear from the store.
    pub fn insert_document(&mut self, uri: &str, symbols: Vec<Symbol>) {
        self.remove_document(uri);
        let added = symbols.len();
        for symbol in symbols {
            self.by_name
                .entry(symbol.name.to_lowercase())
                .or_default()
                .push(symbol);
        }
        trace!(uri, added, names = self.by_name.len(), "document symbols replaced");
    }

    /// Remove every symbol contributed by `uri`.
    pub fn remove_document(&mut self, uri: &str) {
        for symbols in self.by_name.values_mut() {
            symbols.retain(|s| s.uri != uri);
        }
        self.by_name.retain(|_, symbols| !symbols.is_empty());
    }

    /// All symbols for a name, case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[Symbol]> {
        self.by_name
            .get(&name.to_lowercase())
            .map(Vec::as_slice)
    }

    /// First-inserted symbol for a name, case-insensitively.
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&Symbol> {
        self.get(name).and_then(<[Symbol]>::first)
    }

    /// The representative (first-inserted) symbol of every name whose
    /// lowercased form contains `query`. An empty query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Symbol> {
        let query = query.to_lowercase();
        self.by_name
            .iter()
            .filter(|(name, _)| query.is_empty() || name.contains(&query))
            .filter_map(|(_, symbols)| symbols.first())
            .collect()
    }

    /// One completion candidate per known name, in insertion order.
    #[must_use]
    pub fn completions(&self) -> Vec<CompletionItem> {
        self.by_name
            .values()
            .filter_map(|symbols| symbols.first())
            .map(|s| CompletionItem {
                label: s.name.clone(),
                detail: s.signature.clone().unwrap_or_default(),
                documentation: s.description.clone().unwrap_or_default(),
            })
            .collect()
    }

    /// Iterate the known names (lowercased), in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the store holds no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Total number of stored symbols across all names.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.by_name.values().map(Vec::len).sum()
    }
}
