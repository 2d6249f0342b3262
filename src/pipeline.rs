//! The chunking pipeline: refined chapters in, chapters with atomic units out.

use crate::config::UNKNOWN_CHAPTER;
use crate::enrich::{enrich_clause_fragments, enrich_definition_fragments, SectionContext};
use crate::splitting::{
    ClauseProvisoStrategy, DefinitionStrategy, SectionRole, SectionRolePolicy, SplitStrategy,
};
use crate::text::normalize_text;
use crate::types::{Chapter, CleanChapter, CleanSection, Section};

/// Chunk every chapter of a refined statute.
///
/// Chapters, sections, and units keep their source order. Per-section
/// problems (missing id, empty content, no recognizable markers) degrade to
/// a null id or an empty unit list and never abort the run.
#[must_use]
pub fn chunk_chapters(chapters: &[CleanChapter], policy: &SectionRolePolicy) -> Vec<Chapter> {
    chapters
        .iter()
        .map(|chapter| chunk_chapter(chapter, policy))
        .collect()
}

fn chunk_chapter(chapter: &CleanChapter, policy: &SectionRolePolicy) -> Chapter {
    let chapter_name = chapter
        .chapter_name
        .clone()
        .unwrap_or_else(|| UNKNOWN_CHAPTER.to_string());

    let sections = chapter
        .sections
        .iter()
        .map(|section| chunk_section(&chapter_name, section, policy))
        .collect();

    Chapter {
        chapter_name,
        sections,
    }
}

/// Chunk a single section according to its role.
#[must_use]
pub fn chunk_section(
    chapter_name: &str,
    section: &CleanSection,
    policy: &SectionRolePolicy,
) -> Section {
    let normalized = normalize_text(&section.content);
    let ctx = SectionContext {
        chapter_name,
        section_id: section.section.as_deref(),
        title: &section.title,
    };

    let atomic_units = match policy.role_for(section.section.as_deref()) {
        SectionRole::Definitions => {
            let fragments = DefinitionStrategy.split(&normalized);
            enrich_definition_fragments(&fragments, &ctx)
        }
        SectionRole::Standard => {
            let fragments = ClauseProvisoStrategy.split(&normalized);
            enrich_clause_fragments(&fragments, &ctx)
        }
    };

    if atomic_units.is_empty() {
        tracing::warn!(
            section = section.section.as_deref().unwrap_or("?"),
            title = %section.title,
            "section produced no atomic units"
        );
    } else {
        tracing::debug!(
            section = section.section.as_deref().unwrap_or("?"),
            units = atomic_units.len(),
            "section chunked"
        );
    }

    Section {
        section_id: section.section.clone(),
        title: section.title.clone(),
        original_content: section.content.clone(),
        atomic_units,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UnitType;

    fn section(id: Option<&str>, title: &str, content: &str) -> CleanSection {
        CleanSection {
            section: id.map(String::from),
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_standard_section_uses_clause_strategy() {
        let sec = section(
            Some("35"),
            "Manner in which complaint shall be made.",
            "(1) A complaint may be filed.\nProvided that the fee is paid.",
        );
        let result = chunk_section("CHAPTER IV", &sec, &SectionRolePolicy::default());

        assert_eq!(result.section_id, Some("35".to_string()));
        assert_eq!(result.atomic_units.len(), 2);
        assert_eq!(result.atomic_units[0].unit_type, UnitType::Clause);
        assert_eq!(result.atomic_units[1].unit_type, UnitType::Proviso);
        // Original content keeps its line break; unit text does not.
        assert!(result.original_content.contains('\n'));
        assert_eq!(
            result.atomic_units[1].text,
            "Provided that the fee is paid."
        );
    }

    #[test]
    fn test_definitions_section_uses_definition_strategy() {
        let sec = section(
            Some("2"),
            "Definitions.",
            r#"In this Act,— (1) "advertisement" means any publicity; (7) "consumer" means any person who buys goods."#,
        );
        let result = chunk_section("CHAPTER I", &sec, &SectionRolePolicy::default());

        assert_eq!(result.atomic_units.len(), 2);
        assert!(result
            .atomic_units
            .iter()
            .all(|u| u.unit_type == UnitType::Definition));
        assert_eq!(result.atomic_units[0].term, Some("advertisement".to_string()));
        assert_eq!(result.atomic_units[1].term, Some("consumer".to_string()));
    }

    #[test]
    fn test_empty_content_yields_no_units() {
        let sec = section(Some("4"), "Repealed.", "");
        let result = chunk_section("CHAPTER I", &sec, &SectionRolePolicy::default());

        assert!(result.atomic_units.is_empty());
    }

    #[test]
    fn test_null_id_section_still_chunks() {
        let sec = section(None, "Odd heading", "Some operative text without markers.");
        let result = chunk_section("CHAPTER I", &sec, &SectionRolePolicy::default());

        assert_eq!(result.section_id, None);
        assert_eq!(result.atomic_units.len(), 1);
        assert_eq!(result.atomic_units[0].parent_section_id, None);
    }

    #[test]
    fn test_missing_chapter_name_gets_placeholder() {
        let chapters = vec![CleanChapter {
            chapter_name: None,
            sections: vec![section(Some("1"), "Short title.", "This Act may be cited.")],
        }];
        let result = chunk_chapters(&chapters, &SectionRolePolicy::default());

        assert_eq!(result[0].chapter_name, "Unknown Chapter");
        assert!(result[0].sections[0].atomic_units[0]
            .enriched_context
            .starts_with("Chapter: Unknown Chapter |"));
    }

    #[test]
    fn test_custom_policy_switches_strategy() {
        let content = r#"(1) "term" means something."#;
        let sec = section(Some("5"), "Interpretation.", content);

        let standard = chunk_section("C", &sec, &SectionRolePolicy::default());
        assert_eq!(standard.atomic_units[0].unit_type, UnitType::Clause);

        let policy = SectionRolePolicy::new(["5"]);
        let defs = chunk_section("C", &sec, &policy);
        assert_eq!(defs.atomic_units[0].unit_type, UnitType::Definition);
    }

    #[test]
    fn test_source_order_preserved() {
        let chapters = vec![
            CleanChapter {
                chapter_name: Some("CHAPTER I".to_string()),
                sections: vec![
                    section(Some("1"), "First.", "Text one."),
                    section(Some("3"), "Third.", "Text three."),
                ],
            },
            CleanChapter {
                chapter_name: Some("CHAPTER II".to_string()),
                sections: vec![section(Some("9"), "Ninth.", "Text nine.")],
            },
        ];
        let result = chunk_chapters(&chapters, &SectionRolePolicy::default());

        let ids: Vec<Option<&str>> = result
            .iter()
            .flat_map(|c| c.sections.iter().map(|s| s.section_id.as_deref()))
            .collect();
        assert_eq!(ids, vec![Some("1"), Some("3"), Some("9")]);
    }
}
