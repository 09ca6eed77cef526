//! Documentation symbol extraction for `.cerberusdoc` text.
//!
//! A document may use one of several loosely structured dialects: Markdown
//! module docs, single-keyword docs, YAML front matter, fenced command
//! lists, or inline command lines. The parser applies a fixed-priority
//! cascade of format recognizers and returns a normalized list of
//! [`Symbol`] records.
//!
//! ## Cascade
//!
//! | Stage | Format | Behavior |
//! |-------|--------|----------|
//! | 1 | Markdown headers (`# Function Foo(..)`) | exclusive: any hit ends the parse |
//! | 2 | Keyword block (`Language:` / leading `>`) | exclusive: exactly one symbol |
//! | 3 | YAML front matter (`--- .. ---`) | accumulating |
//! | 4 | Fenced command lines | accumulating |
//! | 5 | Inline `name(sig) - desc` lines | accumulating |
//!
//! Stages share one per-call set of emitted names, lowercased: the first
//! occurrence of a name wins, across stages and within them. Parsing never
//! fails; malformed sections simply contribute nothing.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::text::{fenced_blocks, lines_with_offsets};
use crate::types::{Symbol, TextRange};

/// `# Function Name:ReturnType(...)` style module docs. The tail after the
/// identifier must open with `:` or `(` and runs to the end of the line.
static MD_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?imR)^#+\s*(Function|Method|Class|Interface|Property|Const|Global|Field)\s+([A-Za-z_][A-Za-z0-9_]*)\s*([:(].*?)$",
    )
    .expect("markdown header pattern is valid")
});

/// `Language:` line followed by a `> Keyword Name` line (workspace docs).
static LANG_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Language:\s*[\r\n]+\s*>\s*(\w+)\s+([A-Za-z_][A-Za-z0-9_]*)")
        .expect("language keyword pattern is valid")
});

/// `> Keyword Name` at the very start of the document (installation docs).
static DIRECT_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*>\s*(\w+)\s+([A-Za-z_][A-Za-z0-9_]*)")
        .expect("direct keyword pattern is valid")
});

/// `>> Syntax` section, running to the next `>>` section or end of text.
static SYNTAX_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)>>\s*Syntax\s*([\s\S]*?)(?:>>|\z)").expect("syntax section pattern is valid")
});

/// `>> Description` section, running to the next `>>` section or end of text.
static DESC_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)>>\s*Description\s*([\s\S]*?)(?:>>|\z)")
        .expect("description section pattern is valid")
});

/// Italic markers stripped from syntax lines.
static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("italic pattern is valid"));

/// `--- ... ---` front-matter fences.
static FRONT_MATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"---\s*([\s\S]*?)\s*---").expect("front matter pattern is valid")
});

static YAML_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)name\s*:\s*(.+)").expect("name key pattern is valid"));

static YAML_SIGNATURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)signature\s*:\s*(.+)").expect("signature key pattern is valid")
});

static YAML_DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)description\s*:\s*([\s\S]+)").expect("description key pattern is valid")
});

/// Inline `command: name(sig) - description` lines, separator required.
static INLINE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?imR)^(?:command\s*:\s*)?([A-Za-z_][A-Za-z0-9_]*)\s*(\([^)]*\))?\s*(?:-|:)\s*(.+)$")
        .expect("inline line pattern is valid")
});

/// Single fenced-block command line, separator optional.
static COMMAND_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)(\s*\([^)]*\))?\s*(?:-|:)?\s*(.*)$")
        .expect("command line pattern is valid")
});

/// The recognizers of the cascade, in priority order.
///
/// Exclusive stages preempt everything below them as soon as they produce a
/// symbol; accumulating stages all run and share duplicate suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormatStage {
    MarkdownHeaders,
    KeywordBlock,
    FrontMatter,
    FencedCommands,
    InlineLines,
}

impl FormatStage {
    const CASCADE: [Self; 5] = [
        Self::MarkdownHeaders,
        Self::KeywordBlock,
        Self::FrontMatter,
        Self::FencedCommands,
        Self::InlineLines,
    ];

    fn is_exclusive(self) -> bool {
        matches!(self, Self::MarkdownHeaders | Self::KeywordBlock)
    }
}

/// Parse documentation text into an ordered list of symbols.
///
/// `uri` identifies the source document; it is copied into every symbol and
/// otherwise opaque. The call never fails: text with no recognizable
/// structure yields an empty list, and identical input always yields
/// identical output.
#[must_use]
pub fn parse_doc_symbols(text: &str, uri: &str) -> Vec<Symbol> {
    let mut pass = ParsePass {
        text,
        uri,
        symbols: Vec::new(),
        seen: HashSet::new(),
        front_matter_spans: Vec::new(),
    };

    for stage in FormatStage::CASCADE {
        match stage {
            FormatStage::MarkdownHeaders => pass.markdown_headers(),
            FormatStage::KeywordBlock => pass.keyword_block(),
            FormatStage::FrontMatter => pass.front_matter(),
            FormatStage::FencedCommands => pass.fenced_commands(),
            FormatStage::InlineLines => pass.inline_lines(),
        }
        if stage.is_exclusive() && !pass.symbols.is_empty() {
            debug!(stage = ?stage, symbols = pass.symbols.len(), uri, "exclusive stage matched");
            return pass.symbols;
        }
    }

    trace!(symbols = pass.symbols.len(), uri, "cascade completed");
    pass.symbols
}

/// State threaded through one parse call.
struct ParsePass<'t> {
    text: &'t str,
    uri: &'t str,
    symbols: Vec<Symbol>,
    /// Lowercased names already emitted; first occurrence wins.
    seen: HashSet<String>,
    /// Front-matter blocks already recognized by stage 3. The inline stage
    /// skips matches inside these so key/value lines aren't re-read as
    /// commands named `name` or `signature`.
    front_matter_spans: Vec<TextRange>,
}

impl ParsePass<'_> {
    /// Reserve a name, case-insensitively. Returns `false` when an earlier
    /// match already owns it.
    fn claim(&mut self, name: &str) -> bool {
        self.seen.insert(name.to_lowercase())
    }

    fn push(&mut self, name: &str, signature: Option<String>, description: Option<String>, range: Option<TextRange>) {
        self.symbols.push(Symbol {
            name: name.to_string(),
            signature,
            description,
            uri: self.uri.to_string(),
            range,
        });
    }

    // === Stage 1: Markdown module docs ===

    fn markdown_headers(&mut self) {
        let mut matched = 0usize;
        for caps in MD_HEADER_RE.captures_iter(self.text) {
            let keyword_type = &caps[1];
            let name = &caps[2];
            let tail = caps[3].trim_end();
            if !self.claim(name) {
                continue;
            }
            matched += 1;

            let signature = Some(format!("{name}{tail}"));
            let header_end = caps.get(0).map_or(0, |m| m.end());
            let description = match description_after_header(&self.text[header_end..]) {
                Some(body) => format!("**{keyword_type}**\n\n{body}"),
                None => format!("**{keyword_type}**"),
            };

            self.push(name, signature, Some(description), None);
        }
        if matched > 0 {
            trace!(symbols = matched, "markdown header format matched");
        }
    }

    // === Stage 2: single-keyword docs ===

    fn keyword_block(&mut self) {
        let caps = LANG_KEYWORD_RE
            .captures(self.text)
            .or_else(|| DIRECT_KEYWORD_RE.captures(self.text));
        let Some(caps) = caps else {
            return;
        };

        let keyword_type = caps[1].to_string();
        let name = caps[2].to_string();

        let signature = SYNTAX_SECTION_RE.captures(self.text).and_then(|section| {
            let cleaned = ITALIC_RE
                .replace_all(section[1].trim(), "$1")
                .replace("~n", "\n");
            cleaned
                .lines()
                .find(|line| !line.trim().is_empty())
                .map(|line| line.trim().to_string())
        });

        let body = DESC_SECTION_RE.captures(self.text).and_then(|section| {
            let lines: Vec<&str> = section[1]
                .trim()
                .lines()
                .filter(|line| !line.trim().is_empty())
                .take(3)
                .collect();
            if lines.is_empty() {
                None
            } else {
                Some(lines.join("\n").trim().to_string())
            }
        });

        let description = match body {
            Some(body) => format!("**{keyword_type}**\n\n{body}"),
            None => format!("**{keyword_type}**"),
        };

        if self.claim(&name) {
            self.push(&name, signature, Some(description), None);
        }
    }

    // === Stage 3: YAML front matter ===

    fn front_matter(&mut self) {
        for caps in FRONT_MATTER_RE.captures_iter(self.text) {
            let Some(whole) = caps.get(0) else { continue };
            let block = &caps[1];

            let Some(name_caps) = YAML_NAME_RE.captures(block) else {
                continue;
            };
            // The block is recognized front matter even when its name is a
            // duplicate; the inline stage must not re-read its keys.
            let range = TextRange {
                start: whole.start(),
                end: whole.end(),
            };
            self.front_matter_spans.push(range);

            let name = name_caps[1].trim().to_string();
            if !self.claim(&name) {
                continue;
            }

            let signature = YAML_SIGNATURE_RE
                .captures(block)
                .map(|c| c[1].trim().to_string());
            let description = YAML_DESCRIPTION_RE
                .captures(block)
                .map(|c| c[1].trim().to_string());

            self.push(&name, signature, description, Some(range));
        }
    }

    // === Stage 4: fenced command lines ===

    fn fenced_commands(&mut self) {
        for block in fenced_blocks(self.text) {
            for (line_start, line) in lines_with_offsets(block.content) {
                let Some(command) = parse_command_line(line.trim()) else {
                    continue;
                };
                if !self.claim(command.name) {
                    continue;
                }

                let start = block.content_start + line_start;
                let range = TextRange {
                    start,
                    end: start + line.len(),
                };
                self.push(command.name, command.signature, command.description, Some(range));
            }
        }
    }

    // === Stage 5: inline command lines ===

    fn inline_lines(&mut self) {
        for caps in INLINE_LINE_RE.captures_iter(self.text) {
            let Some(whole) = caps.get(0) else { continue };
            if self.in_front_matter(whole.start()) {
                continue;
            }

            let name = &caps[1];
            if !self.claim(name) {
                continue;
            }

            let signature = caps.get(2).map(|m| m.as_str().trim().to_string());
            let description = Some(caps[3].trim().to_string());
            let range = TextRange {
                start: whole.start(),
                end: whole.end(),
            };
            self.push(name, signature, description, Some(range));
        }
    }

    fn in_front_matter(&self, offset: usize) -> bool {
        self.front_matter_spans
            .iter()
            .any(|span| offset >= span.start && offset < span.end)
    }
}

/// Best-effort description block following a Markdown header: skip blank
/// lines, then take up to three lines, stopping at a blank line or the next
/// header.
fn description_after_header(remaining: &str) -> Option<String> {
    let mut collected: Vec<&str> = Vec::new();
    let mut lines = remaining.lines().peekable();

    // Drop the tail of the header line, then any blank lines before the body.
    while let Some(line) = lines.peek() {
        if line.trim().is_empty() {
            lines.next();
        } else {
            break;
        }
    }

    for line in lines {
        if line.is_empty() || line.starts_with('#') {
            break;
        }
        collected.push(line);
    }

    let block = collected.join("\n");
    let trimmed = block.trim();
    if trimmed.is_empty() {
        return None;
    }

    let body: Vec<&str> = trimmed.split('\n').take(3).collect();
    Some(body.join("\n"))
}

/// One parsed fenced-block command line.
struct CommandLine<'l> {
    name: &'l str,
    signature: Option<String>,
    description: Option<String>,
}

/// Parse a single command line, e.g. `foo(arg1, arg2) - description`.
///
/// The separator is optional here: a bare identifier still parses, with an
/// empty description.
fn parse_command_line(line: &str) -> Option<CommandLine<'_>> {
    let caps = COMMAND_LINE_RE.captures(line)?;
    let name = caps.get(1)?.as_str();
    let signature = caps
        .get(2)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty());
    let description = caps
        .get(3)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty());

    Some(CommandLine {
        name,
        signature,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const URI: &str = "file:///docs/test.cerberusdoc";

    fn parse(text: &str) -> Vec<Symbol> {
        parse_doc_symbols(text, URI)
    }

    // === Stage 1: Markdown headers ===

    #[test]
    fn markdown_header_yields_symbol_with_signature_and_label() {
        let text = "# Function Foo(x, y)\n\nAdds x to y.\nSecond line.\n";
        let symbols = parse(text);

        assert_eq!(symbols.len(), 1);
        let sym = &symbols[0];
        assert_eq!(sym.name, "Foo");
        assert_eq!(sym.signature.as_deref(), Some("Foo(x, y)"));
        assert_eq!(
            sym.description.as_deref(),
            Some("**Function**\n\nAdds x to y.\nSecond line.")
        );
        assert_eq!(sym.uri, URI);
        assert!(sym.range.is_none());
    }

    #[test]
    fn markdown_header_with_return_type_tail() {
        let text = "## Method Draw:Void(canvas)\n";
        let symbols = parse(text);

        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "Draw");
        assert_eq!(symbols[0].signature.as_deref(), Some("Draw:Void(canvas)"));
        assert_eq!(symbols[0].description.as_deref(), Some("**Method**"));
    }

    #[test]
    fn markdown_header_without_signature_tail_is_not_a_match() {
        // The tail must open with `:` or `(`
        assert!(parse("# Function Foo\n").is_empty());
    }

    #[test]
    fn markdown_description_stops_at_next_header() {
        let text = "# Function Foo(x)\nFirst.\n# Function Bar(y)\nSecond.\n";
        let symbols = parse(text);

        assert_eq!(symbols.len(), 2);
        assert_eq!(
            symbols[0].description.as_deref(),
            Some("**Function**\n\nFirst.")
        );
        assert_eq!(
            symbols[1].description.as_deref(),
            Some("**Function**\n\nSecond.")
        );
    }

    #[test]
    fn markdown_description_is_truncated_to_three_lines() {
        let text = "# Function Foo(x)\n\none\ntwo\nthree\nfour\n";
        let symbols = parse(text);

        assert_eq!(
            symbols[0].description.as_deref(),
            Some("**Function**\n\none\ntwo\nthree")
        );
    }

    #[test]
    fn markdown_duplicate_names_keep_first_occurrence() {
        let text = "# Function Foo(x)\nFirst.\n\n# Method FOO(y)\nShadowed.\n";
        let symbols = parse(text);

        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "Foo");
        assert_eq!(symbols[0].signature.as_deref(), Some("Foo(x)"));
    }

    #[test]
    fn markdown_preempts_front_matter() {
        let text = "# Function Foo(x)\n\n---\nname: Bar\n---\n";
        let symbols = parse(text);

        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "Foo");
    }

    // === Stage 2: keyword blocks ===

    #[test]
    fn language_keyword_block_with_syntax_and_description() {
        let text = "Language:\n> Keyword Print\n\n\
                    >> Syntax\n*Print(value:String)*\n\n\
                    >> Description\nWrites a line.\nFlushes output.\nThird.\nFourth.\n";
        let symbols = parse(text);

        assert_eq!(symbols.len(), 1);
        let sym = &symbols[0];
        assert_eq!(sym.name, "Print");
        assert_eq!(sym.signature.as_deref(), Some("Print(value:String)"));
        assert_eq!(
            sym.description.as_deref(),
            Some("**Keyword**\n\nWrites a line.\nFlushes output.\nThird.")
        );
        assert!(sym.range.is_none());
    }

    #[test]
    fn direct_keyword_block_at_start_of_text() {
        let text = "> Keyword For\n\n>> Description\nLoop construct.\n";
        let symbols = parse(text);

        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "For");
        assert_eq!(
            symbols[0].description.as_deref(),
            Some("**Keyword**\n\nLoop construct.")
        );
    }

    #[test]
    fn direct_keyword_not_at_start_is_ignored() {
        let text = "some prose\n> Keyword For\n";
        assert!(parse(text).is_empty());
    }

    #[test]
    fn keyword_syntax_strips_italics_and_expands_escapes() {
        let text = "> Function Abs\n\n>> Syntax\n~n*Abs(value:Float)*\n";
        let symbols = parse(text);

        assert_eq!(symbols[0].signature.as_deref(), Some("Abs(value:Float)"));
    }

    #[test]
    fn keyword_block_without_sections_still_yields_label() {
        let symbols = parse("> Keyword End\n");

        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "End");
        assert!(symbols[0].signature.is_none());
        assert_eq!(symbols[0].description.as_deref(), Some("**Keyword**"));
    }

    #[test]
    fn keyword_block_preempts_remaining_stages() {
        let text = "Language:\n> Keyword Print\n\n```cerberusx\nMoveTo(x,y) - move\n```\n";
        let symbols = parse(text);

        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "Print");
    }

    // === Stage 3: front matter ===

    #[test]
    fn front_matter_block_yields_symbol_with_block_range() {
        let text = "---\nname: Draw\nsignature: (x,y)\ndescription: draws a sprite\n---\n";
        let symbols = parse(text);

        assert_eq!(symbols.len(), 1);
        let sym = &symbols[0];
        assert_eq!(sym.name, "Draw");
        assert_eq!(sym.signature.as_deref(), Some("(x,y)"));
        assert_eq!(sym.description.as_deref(), Some("draws a sprite"));

        let range = sym.range.expect("front matter symbol has a range");
        assert_eq!(range.start, 0);
        assert_eq!(&text[range.start..range.end], text.trim_end());
    }

    #[test]
    fn front_matter_without_name_is_skipped() {
        let text = "---\nsignature: (x)\n---\n";
        // The nameless block yields nothing; its signature key is also not
        // picked up by the inline stage as a command named "signature".
        let symbols = parse(text);
        assert!(symbols.is_empty());
    }

    #[test]
    fn multiple_front_matter_blocks_accumulate() {
        let text = "---\nname: Draw\n---\ninterlude\n---\nname: Clear\n---\n";
        let symbols = parse(text);

        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].name, "Draw");
        assert_eq!(symbols[1].name, "Clear");
    }

    #[test]
    fn front_matter_duplicate_names_are_suppressed() {
        let text = "---\nname: Draw\n---\n---\nname: DRAW\nsignature: (a)\n---\n";
        let symbols = parse(text);

        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "Draw");
        assert!(symbols[0].signature.is_none());
    }

    // === Stage 4: fenced commands ===

    #[test]
    fn fenced_command_line_yields_symbol_with_line_range() {
        let text = "```cerberusx\nMoveTo(x,y) - move the cursor\n```\n";
        let symbols = parse(text);

        assert_eq!(symbols.len(), 1);
        let sym = &symbols[0];
        assert_eq!(sym.name, "MoveTo");
        assert_eq!(sym.signature.as_deref(), Some("(x,y)"));
        assert_eq!(sym.description.as_deref(), Some("move the cursor"));

        let range = sym.range.expect("fenced command has a range");
        assert_eq!(
            &text[range.start..range.end],
            "MoveTo(x,y) - move the cursor"
        );
    }

    #[test]
    fn fenced_bare_identifier_parses_without_description() {
        let text = "```\nFlush\n```\n";
        let symbols = parse(text);

        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "Flush");
        assert!(symbols[0].signature.is_none());
        assert!(symbols[0].description.is_none());
    }

    #[test]
    fn fenced_colon_separator_parses() {
        let text = "```cerberusx\nLineTo(x,y) : draw a line\n```\n";
        let symbols = parse(text);

        assert_eq!(symbols[0].name, "LineTo");
        assert_eq!(symbols[0].description.as_deref(), Some("draw a line"));
    }

    #[test]
    fn fenced_numeric_line_is_ignored() {
        let text = "```\n42\nFlush - clear buffers\n```\n";
        let symbols = parse(text);

        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "Flush");
    }

    // === Stage 5: inline lines ===

    #[test]
    fn inline_line_with_command_prefix() {
        let text = "command: SetColor(r,g,b) - set the draw color\n";
        let symbols = parse(text);

        assert_eq!(symbols.len(), 1);
        let sym = &symbols[0];
        assert_eq!(sym.name, "SetColor");
        assert_eq!(sym.signature.as_deref(), Some("(r,g,b)"));
        assert_eq!(sym.description.as_deref(), Some("set the draw color"));

        let range = sym.range.expect("inline symbol has a range");
        assert_eq!(
            &text[range.start..range.end],
            "command: SetColor(r,g,b) - set the draw color"
        );
    }

    #[test]
    fn inline_line_requires_separator_and_description() {
        assert!(parse("JustAnIdentifier\n").is_empty());
    }

    #[test]
    fn inline_duplicates_of_fenced_symbols_are_suppressed() {
        let text = "```cerberusx\nMoveTo(x,y) - move the cursor\n```\n";
        let symbols = parse(text);

        // The fenced line also matches the inline grammar; only one symbol results.
        assert_eq!(symbols.len(), 1);
    }

    #[test]
    fn fence_and_inline_accumulate_distinct_names() {
        let text = "```cerberusx\nMoveTo(x,y) - move\n```\nSetAlpha(a) - set alpha\n";
        let symbols = parse(text);

        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].name, "MoveTo");
        assert_eq!(symbols[1].name, "SetAlpha");
    }

    // === Cascade-wide properties ===

    #[test]
    fn plain_prose_yields_nothing() {
        let text = "This paragraph documents nothing in particular.\nIt keeps going.\n";
        assert!(parse(text).is_empty());
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn binary_looking_input_never_panics() {
        let text = "\u{0}\u{1}\u{2}```\u{fffd}---\u{7f}";
        let _ = parse(text);
    }

    #[test]
    fn parse_is_idempotent() {
        let text = "---\nname: Draw\nsignature: (x,y)\n---\n```cerberusx\nMoveTo(x,y) - move\n```\n";
        assert_eq!(parse(text), parse(text));
    }

    #[test]
    fn command_line_grammar_rejects_leading_digits() {
        assert!(parse_command_line("123abc - nope").is_none());
    }

    #[test]
    fn command_line_grammar_accepts_all_documented_shapes() {
        let full = parse_command_line("foo(arg1, arg2) - description").unwrap();
        assert_eq!(full.name, "foo");
        assert_eq!(full.signature.as_deref(), Some("(arg1, arg2)"));
        assert_eq!(full.description.as_deref(), Some("description"));

        let bare = parse_command_line("foo").unwrap();
        assert_eq!(bare.name, "foo");
        assert!(bare.signature.is_none());
        assert!(bare.description.is_none());
    }
}
