//! Fallback identifier extraction for non-semantic completion.
//!
//! The extractor collects a bag of plausible identifiers from documentation
//! text with a configurable pattern. It has no understanding of the symbol
//! formats; the parser in [`crate::parser`] handles those. Fenced code
//! blocks are preferred when present, since prose around them is rarely
//! worth completing.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::text::fenced_blocks;

/// Identifiers of length >= 3, the pattern used when none is configured.
pub const DEFAULT_TOKEN_PATTERN: &str = r"\b[A-Za-z_][A-Za-z0-9_]{2,}\b";

static DEFAULT_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_TOKEN_PATTERN).expect("default token pattern is valid"));

/// Configurable regex-driven identifier extractor.
///
/// The active pattern can be swapped at runtime; an uncompilable replacement
/// is rejected with a logged warning and the previous pattern stays in
/// effect, so the extractor never ends up in a broken state.
#[derive(Debug, Clone)]
pub struct TokenExtractor {
    source: String,
    regex: Regex,
}

impl Default for TokenExtractor {
    fn default() -> Self {
        Self {
            source: DEFAULT_TOKEN_PATTERN.to_string(),
            regex: DEFAULT_TOKEN_RE.clone(),
        }
    }
}

impl TokenExtractor {
    /// Create an extractor from a pattern source.
    ///
    /// An empty source selects the default pattern. A source that fails to
    /// compile also falls back to the default, with a logged warning,
    /// rather than failing construction.
    #[must_use]
    pub fn new(source: &str) -> Self {
        if source.is_empty() {
            return Self::default();
        }
        match Regex::new(source) {
            Ok(regex) => Self {
                source: source.to_string(),
                regex,
            },
            Err(error) => {
                warn!(pattern = %source, %error, "invalid token extraction pattern, using default");
                Self::default()
            }
        }
    }

    /// The active pattern source.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// Replace the active pattern.
    ///
    /// An empty source resets to the default. A source that fails to compile
    /// leaves the previous pattern in effect and logs the failure.
    pub fn update_pattern(&mut self, new_source: &str) {
        let source = if new_source.is_empty() {
            DEFAULT_TOKEN_PATTERN
        } else {
            new_source
        };
        match Regex::new(source) {
            Ok(regex) => {
                self.source = source.to_string();
                self.regex = regex;
            }
            Err(error) => {
                warn!(pattern = %source, %error, "invalid token extraction pattern, keeping previous");
            }
        }
    }

    /// Collect identifier tokens from `text`.
    ///
    /// When the text contains fenced code blocks, only their interiors are
    /// scanned; otherwise the whole text is. Purely numeric tokens are
    /// discarded. The result is a deduplicated, unordered set.
    #[must_use]
    pub fn extract_from_text(&self, text: &str) -> HashSet<String> {
        let mut results = HashSet::new();

        let blocks = fenced_blocks(text);
        if blocks.is_empty() {
            self.collect(text, &mut results);
        } else {
            for block in blocks {
                self.collect(block.content, &mut results);
            }
        }

        results
    }

    fn collect(&self, s: &str, set: &mut HashSet<String>) {
        for m in self.regex.find_iter(s) {
            let token = m.as_str();
            if token.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }
            set.insert(token.to_string());
        }
    }
}

/// One-shot token extraction with an ad-hoc pattern.
///
/// Equivalent to `TokenExtractor::new(regex_source).extract_from_text(text)`;
/// an empty or uncompilable source falls back to the default pattern.
#[must_use]
pub fn extract_tokens(regex_source: &str, text: &str) -> HashSet<String> {
    TokenExtractor::new(regex_source).extract_from_text(text)
}
