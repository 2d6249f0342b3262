//! Splitting strategies for atomic unit extraction.

use std::sync::LazyLock;

use regex::Regex;

/// Marker opening a clause or proviso: a bracketed alphanumeric token used
/// for sub-clause numbering ("(1)", "(a)", "(viii)"), or the phrase that
/// introduces a proviso.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CLAUSE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\w+\)|Provided that").expect("valid regex"));

/// Header opening a definition entry: a parenthesized number immediately
/// followed by the quoted defined term, e.g. `(1) "advertisement"`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DEFINITION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\(\d+\)\s*".+?""#).expect("valid regex"));

/// Trait for marker-based fragment splitters.
///
/// Implementations segment normalized section text into raw fragments in
/// appearance order. Splitting is total: malformed input yields an empty or
/// singleton list, never an error.
pub trait SplitStrategy {
    /// Split normalized text into trimmed, non-empty fragments.
    fn split(&self, text: &str) -> Vec<String>;
}

/// Splitter for operative sections: clauses and provisos.
///
/// Every marker starts a new accumulating fragment; text between markers
/// (or preceding the first marker) is appended to the currently open
/// fragment.
pub struct ClauseProvisoStrategy;

impl SplitStrategy for ClauseProvisoStrategy {
    fn split(&self, text: &str) -> Vec<String> {
        let mut fragments: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut last_end = 0;

        for marker in CLAUSE_MARKER.find_iter(text) {
            append_part(&mut current, &text[last_end..marker.start()]);

            if !current.is_empty() {
                fragments.push(std::mem::take(&mut current));
            }
            current.push_str(marker.as_str());
            last_end = marker.end();
        }

        append_part(&mut current, &text[last_end..]);
        if !current.is_empty() {
            fragments.push(current);
        }

        fragments
    }
}

/// Splitter for definitions sections.
///
/// Alternates between headers (the numbered quoted term) and bodies (text
/// up to the next header); each header is paired with its following body.
/// A header with no body before the next header, and any text before the
/// first header, are dropped.
pub struct DefinitionStrategy;

impl SplitStrategy for DefinitionStrategy {
    fn split(&self, text: &str) -> Vec<String> {
        let mut definitions: Vec<String> = Vec::new();
        let mut header: Option<&str> = None;
        let mut last_end = 0;

        for m in DEFINITION_HEADER.find_iter(text) {
            if let Some(h) = header {
                let body = text[last_end..m.start()].trim();
                if !body.is_empty() {
                    definitions.push(format!("{h} {body}"));
                }
            }
            header = Some(m.as_str());
            last_end = m.end();
        }

        if let Some(h) = header {
            let body = text[last_end..].trim();
            if !body.is_empty() {
                definitions.push(format!("{h} {body}"));
            }
        }

        definitions
    }
}

/// Append a trimmed inter-marker segment to the open fragment with a single
/// joining space.
fn append_part(current: &mut String, part: &str) {
    let part = part.trim();
    if part.is_empty() {
        return;
    }
    if !current.is_empty() {
        current.push(' ');
    }
    current.push_str(part);
}
