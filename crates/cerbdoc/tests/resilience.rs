//! Property tests: no input may panic the parser or the token extractor,
//! and parsing is a pure function of its input.

use cerbdoc::{TokenExtractor, extract_tokens, parse_doc_symbols, validate_document};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parse_never_panics_on_arbitrary_text(text in ".{0,400}") {
        let _ = parse_doc_symbols(&text, "file:///fuzz.cerberusdoc");
    }

    #[test]
    fn parse_never_panics_on_format_shaped_text(
        text in r"(#+ |> |>> |---|```|~n|\*|Language:|command:|[A-Za-z0-9_(),: \r\n-]){0,120}"
    ) {
        let _ = parse_doc_symbols(&text, "file:///fuzz.cerberusdoc");
    }

    #[test]
    fn parse_is_idempotent(text in ".{0,400}") {
        let first = parse_doc_symbols(&text, "file:///fuzz.cerberusdoc");
        let second = parse_doc_symbols(&text, "file:///fuzz.cerberusdoc");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn no_two_symbols_share_a_lowercased_name(text in ".{0,400}") {
        let symbols = parse_doc_symbols(&text, "file:///fuzz.cerberusdoc");

        let mut seen = std::collections::HashSet::new();
        for symbol in &symbols {
            prop_assert!(
                seen.insert(symbol.name.to_lowercase()),
                "duplicate name: {}", symbol.name
            );
        }
    }

    #[test]
    fn every_range_lies_within_the_text(text in ".{0,400}") {
        let symbols = parse_doc_symbols(&text, "file:///fuzz.cerberusdoc");

        for symbol in &symbols {
            if let Some(range) = symbol.range {
                prop_assert!(range.start <= range.end);
                prop_assert!(range.end <= text.len());
                prop_assert!(text.is_char_boundary(range.start));
                prop_assert!(text.is_char_boundary(range.end));
            }
        }
    }

    #[test]
    fn token_extraction_never_panics(text in ".{0,400}", pattern in ".{0,30}") {
        // Arbitrary pattern sources may be invalid; extraction must still work.
        let _ = extract_tokens(&pattern, &text);
    }

    #[test]
    fn extracted_tokens_are_never_purely_numeric(text in ".{0,400}") {
        let extractor = TokenExtractor::default();
        for token in extractor.extract_from_text(&text) {
            prop_assert!(!token.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn validation_never_panics(text in ".{0,400}") {
        let _ = validate_document(&text);
    }
}
