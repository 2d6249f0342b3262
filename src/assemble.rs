//! Parent/child document assembly for downstream indexing.
//!
//! Parents carry the full section text for context expansion; children
//! carry the enriched unit text that actually gets indexed. The two
//! collections are parallel and follow source traversal order — downstream
//! indexes rely on stable ordering for diffability across regenerations.

use serde::{Deserialize, Serialize};

use crate::types::{AtomicUnit, Chapter, Section, UnitType};

/// `doc_type` marker for parent documents.
pub const PARENT_DOC_TYPE: &str = "parent";

/// `doc_type` marker for child documents.
pub const CHILD_DOC_TYPE: &str = "child";

/// Metadata for a parent document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentMetadata {
    /// Lookup key for retrieve-then-expand; null in degraded sections.
    pub section_id: Option<String>,

    /// Refined section title.
    pub title: String,

    /// Enclosing chapter heading.
    pub chapter_name: String,

    /// Always "parent".
    pub doc_type: String,
}

/// Full section text, keyed for the lookup store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentDocument {
    /// The section's original content, line breaks intact.
    pub content: String,

    pub metadata: ParentMetadata,
}

impl ParentDocument {
    fn new(chapter_name: &str, section: &Section) -> Self {
        Self {
            content: section.original_content.clone(),
            metadata: ParentMetadata {
                section_id: section.section_id.clone(),
                title: section.title.clone(),
                chapter_name: chapter_name.to_string(),
                doc_type: PARENT_DOC_TYPE.to_string(),
            },
        }
    }
}

/// Metadata for a child document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildMetadata {
    /// Back-reference to the enclosing section.
    pub parent_section_id: Option<String>,

    pub unit_type: UnitType,

    /// The unit's position within its section.
    pub chunk_index: usize,

    /// Always "child".
    pub doc_type: String,
}

/// An atomic unit's enriched context, ready for vector/keyword indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildDocument {
    /// The enriched context string (the embedding target).
    pub content: String,

    pub metadata: ChildMetadata,
}

impl ChildDocument {
    fn new(unit: &AtomicUnit) -> Self {
        Self {
            content: unit.enriched_context.clone(),
            metadata: ChildMetadata {
                parent_section_id: unit.parent_section_id.clone(),
                unit_type: unit.unit_type,
                chunk_index: unit.chunk_index,
                doc_type: CHILD_DOC_TYPE.to_string(),
            },
        }
    }
}

/// The assembler's output: both collections in source traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSet {
    pub parent_documents: Vec<ParentDocument>,
    pub child_documents: Vec<ChildDocument>,
}

impl DocumentSet {
    /// Number of parent documents (one per section).
    #[must_use]
    pub fn parent_count(&self) -> usize {
        self.parent_documents.len()
    }

    /// Number of child documents (one per atomic unit).
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.child_documents.len()
    }
}

/// Walk chapters → sections → units and emit the parallel collections.
#[must_use]
pub fn assemble_documents(chapters: &[Chapter]) -> DocumentSet {
    let mut parent_documents = Vec::new();
    let mut child_documents = Vec::new();

    for chapter in chapters {
        for section in &chapter.sections {
            parent_documents.push(ParentDocument::new(&chapter.chapter_name, section));
            for unit in &section.atomic_units {
                child_documents.push(ChildDocument::new(unit));
            }
        }
    }

    DocumentSet {
        parent_documents,
        child_documents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_chapters() -> Vec<Chapter> {
        vec![Chapter {
            chapter_name: "CHAPTER I Preliminary".to_string(),
            sections: vec![
                Section {
                    section_id: Some("1".to_string()),
                    title: "Short title.".to_string(),
                    original_content: "This Act may be called\nthe Act.".to_string(),
                    atomic_units: vec![AtomicUnit {
                        chunk_index: 0,
                        unit_type: UnitType::Clause,
                        term: None,
                        text: "This Act may be called the Act.".to_string(),
                        enriched_context: "Chapter: CHAPTER I Preliminary | Section: 1 \
                                           Short title. | Content: This Act may be called the Act."
                            .to_string(),
                        parent_section_id: Some("1".to_string()),
                    }],
                },
                Section {
                    section_id: Some("4".to_string()),
                    title: "Repealed.".to_string(),
                    original_content: String::new(),
                    atomic_units: Vec::new(),
                },
            ],
        }]
    }

    #[test]
    fn test_one_parent_per_section() {
        let set = assemble_documents(&sample_chapters());

        assert_eq!(set.parent_count(), 2);
        assert_eq!(set.child_count(), 1);
    }

    #[test]
    fn test_parent_carries_original_content() {
        let set = assemble_documents(&sample_chapters());

        assert_eq!(
            set.parent_documents[0].content,
            "This Act may be called\nthe Act."
        );
        assert_eq!(set.parent_documents[0].metadata.doc_type, "parent");
        assert_eq!(
            set.parent_documents[0].metadata.chapter_name,
            "CHAPTER I Preliminary"
        );
    }

    #[test]
    fn test_child_carries_enriched_context() {
        let set = assemble_documents(&sample_chapters());

        let child = &set.child_documents[0];
        assert!(child.content.starts_with("Chapter: CHAPTER I Preliminary"));
        assert_eq!(child.metadata.doc_type, "child");
        assert_eq!(child.metadata.parent_section_id, Some("1".to_string()));
        assert_eq!(child.metadata.unit_type, UnitType::Clause);
        assert_eq!(child.metadata.chunk_index, 0);
    }

    #[test]
    fn test_child_parent_linkage_holds() {
        let chapters = sample_chapters();
        let set = assemble_documents(&chapters);

        for child in &set.child_documents {
            assert!(set
                .parent_documents
                .iter()
                .any(|p| p.metadata.section_id == child.metadata.parent_section_id));
        }
    }

    #[test]
    fn test_serialized_shape() {
        let set = assemble_documents(&sample_chapters());
        let json = serde_json::to_value(&set).unwrap();

        assert!(json["parent_documents"].is_array());
        assert!(json["child_documents"].is_array());
        assert_eq!(json["child_documents"][0]["metadata"]["unit_type"], "clause");
    }
}
