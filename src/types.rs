//! Core data types for lexsplit.
//!
//! These model a statute as chapters of sections, and each section's
//! retrieval-ready decomposition into atomic units.

use serde::{Deserialize, Serialize};

/// Kinds of atomic unit a section can decompose into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    /// Numbered or lettered operative clause, e.g. "(1)", "(a)".
    Clause,

    /// Exception or qualification starting with "Provided that".
    Proviso,

    /// Quoted-term definition entry from a definitions section.
    Definition,
}

impl UnitType {
    /// Get the string value used in JSON output and document metadata.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clause => "clause",
            Self::Proviso => "proviso",
            Self::Definition => "definition",
        }
    }
}

/// The smallest independently retrievable fragment of statutory text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomicUnit {
    /// 0-based order of appearance within the section.
    pub chunk_index: usize,

    /// Classification of this unit.
    pub unit_type: UnitType,

    /// Defined term, present only for definition units ("Unknown" when the
    /// fragment carries no quoted phrase).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,

    /// The raw fragment, trimmed.
    pub text: String,

    /// Denormalized, search-optimized representation embedding the unit's
    /// structural coordinates (and, for provisos, its governing clause).
    pub enriched_context: String,

    /// Id of the enclosing section, copied verbatim (null when the section
    /// title did not yield an id).
    pub parent_section_id: Option<String>,
}

/// A section with its original text and decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Extracted section number (e.g. "2", "2A"); null on prefix mismatch.
    pub section_id: Option<String>,

    /// Section title without the "Section N." prefix.
    pub title: String,

    /// Full section text as scraped, line breaks intact.
    pub original_content: String,

    /// Atomic units in appearance order.
    pub atomic_units: Vec<AtomicUnit>,
}

/// A chapter grouping sections.
///
/// Identity is the name; uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter heading, e.g. "CHAPTER I Preliminary".
    pub chapter_name: String,

    /// Sections in source order.
    pub sections: Vec<Section>,
}

/// Chunker input: a section from the refined ("clean") statute JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanSection {
    /// Section id extracted by the refiner; null on prefix mismatch.
    #[serde(default)]
    pub section: Option<String>,

    /// Refined title.
    #[serde(default)]
    pub title: String,

    /// Raw section body.
    #[serde(default)]
    pub content: String,
}

/// Chunker input: a chapter from the refined statute JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanChapter {
    /// Chapter heading; absent in some scrapes.
    #[serde(default)]
    pub chapter_name: Option<String>,

    /// Sections in source order.
    #[serde(default)]
    pub sections: Vec<CleanSection>,
}
