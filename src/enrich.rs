//! Classification and context enrichment of raw fragments.
//!
//! Atomic units are too small to be independently meaningful to a
//! retrieval pipeline, so each unit's embedding target is denormalized
//! with its structural coordinates — and, for provisos, a snippet of the
//! governing clause — rather than the bare fragment.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{ANCHOR_SNIPPET_CHARS, UNKNOWN_TERM};
use crate::text::snippet;
use crate::types::{AtomicUnit, UnitType};

/// First double-quoted phrase in a definition fragment, e.g. `"consumer"`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static QUOTED_TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(.+?)""#).expect("valid regex"));

/// Structural coordinates of the section being enriched.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    /// Enclosing chapter heading.
    pub chapter_name: &'a str,

    /// Section id; null ids render as an empty string in the context.
    pub section_id: Option<&'a str>,

    /// Refined section title.
    pub title: &'a str,
}

impl SectionContext<'_> {
    /// The "Chapter: ... | Section: ..." prefix shared by all unit contexts.
    fn location(&self) -> String {
        format!(
            "Chapter: {} | Section: {} {}",
            self.chapter_name,
            self.section_id.unwrap_or(""),
            self.title
        )
    }
}

/// Build clause/proviso units from the clause splitter's fragments.
///
/// A fragment is a proviso iff it starts with the literal word "Provided".
/// Provisos with a predecessor get an anchor snippet of the preceding
/// fragment so their dependency on the governing clause survives standalone
/// retrieval.
#[must_use]
pub fn enrich_clause_fragments(fragments: &[String], ctx: &SectionContext<'_>) -> Vec<AtomicUnit> {
    fragments
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let is_proviso = text.starts_with("Provided");
            let unit_type = if is_proviso {
                UnitType::Proviso
            } else {
                UnitType::Clause
            };

            let anchor = if is_proviso && i > 0 {
                format!(
                    "[Context from Preceding Clause: {}...] ",
                    snippet(&fragments[i - 1], ANCHOR_SNIPPET_CHARS)
                )
            } else {
                String::new()
            };

            AtomicUnit {
                chunk_index: i,
                unit_type,
                term: None,
                text: text.clone(),
                enriched_context: format!("{} | Content: {anchor}{text}", ctx.location()),
                parent_section_id: ctx.section_id.map(str::to_string),
            }
        })
        .collect()
}

/// Build definition units from the definition splitter's fragments.
///
/// Definitions are self-contained by construction, so no anchor is added.
#[must_use]
pub fn enrich_definition_fragments(
    fragments: &[String],
    ctx: &SectionContext<'_>,
) -> Vec<AtomicUnit> {
    fragments
        .iter()
        .enumerate()
        .map(|(i, text)| AtomicUnit {
            chunk_index: i,
            unit_type: UnitType::Definition,
            term: Some(extract_term(text)),
            text: text.clone(),
            enriched_context: format!("{} | Definition: {text}", ctx.location()),
            parent_section_id: ctx.section_id.map(str::to_string),
        })
        .collect()
}

/// Extract the defined term: the first double-quoted substring.
#[must_use]
pub fn extract_term(fragment: &str) -> String {
    QUOTED_TERM
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| UNKNOWN_TERM.to_string(), |m| m.as_str().to_string())
}
