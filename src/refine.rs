//! Title refinement: extract section ids from scraped titles.
//!
//! Scraped section titles carry a "Section N." prefix and each section a
//! scrape URL. Refinement splits the prefix into an id, cleans the title,
//! and drops the URL, producing the "clean" JSON the chunker consumes.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::{CleanChapter, CleanSection};

/// "Section 2A. Definitions." → id "2A", title "Definitions.".
///
/// The id group is alphanumeric to catch inserted sections like "2A";
/// dot-matches-newline because scraped titles occasionally wrap.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECTION_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^Section\s+(\w+)\.(.*)").expect("valid regex"));

/// A section as scraped from the source site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSection {
    /// Scraped title, "Section N." prefix included.
    #[serde(default)]
    pub title: String,

    /// Raw section body.
    #[serde(default)]
    pub content: String,

    /// Scrape URL; dropped during refinement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A chapter as scraped from the source site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawChapter {
    /// Chapter heading; absent in some scrapes.
    #[serde(default)]
    pub chapter_name: Option<String>,

    /// Sections in source order.
    #[serde(default)]
    pub sections: Vec<RawSection>,
}

/// Refine every chapter, preserving chapter and section order.
#[must_use]
pub fn refine_chapters(chapters: &[RawChapter]) -> Vec<CleanChapter> {
    chapters
        .iter()
        .map(|chapter| CleanChapter {
            chapter_name: chapter.chapter_name.clone(),
            sections: chapter.sections.iter().map(refine_section).collect(),
        })
        .collect()
}

/// Refine a single section title.
///
/// A title that does not match the "Section N." prefix keeps its verbatim
/// title and gets a null id — a degraded but recoverable state for the
/// chunker and for downstream parent lookups.
#[must_use]
pub fn refine_section(raw: &RawSection) -> CleanSection {
    if let Some(caps) = SECTION_TITLE.captures(&raw.title) {
        if let (Some(id), Some(rest)) = (caps.get(1), caps.get(2)) {
            return CleanSection {
                section: Some(id.as_str().to_string()),
                title: rest.as_str().trim().to_string(),
                content: raw.content.clone(),
            };
        }
    }

    tracing::warn!(
        title = %raw.title,
        "title does not match the \"Section N.\" prefix, id set to null"
    );
    CleanSection {
        section: None,
        title: raw.title.clone(),
        content: raw.content.clone(),
    }
}
