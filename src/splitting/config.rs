//! Section-role classification.
//!
//! Which splitting strategy applies to a section is a declared policy, not a
//! hard-coded literal: the statute's definitions section(s) are listed by id
//! and everything else is treated as a standard operative section.

use crate::config::DEFAULT_DEFINITIONS_SECTION;

/// Structural role of a section, deciding its splitting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionRole {
    /// Operative section: split into clauses and provisos.
    Standard,

    /// Definitions section: split into quoted-term definition entries.
    Definitions,
}

/// Policy mapping section ids to roles.
#[derive(Debug, Clone)]
pub struct SectionRolePolicy {
    definition_sections: Vec<String>,
}

impl SectionRolePolicy {
    /// Create a policy with the given definitions-section ids.
    #[must_use]
    pub fn new(definition_sections: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            definition_sections: definition_sections.into_iter().map(Into::into).collect(),
        }
    }

    /// Replace the definitions-section ids.
    #[must_use]
    pub fn with_definition_sections(
        mut self,
        ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.definition_sections = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Classify a section by its id.
    ///
    /// A section without an id is always `Standard`: role membership is
    /// declared by id, and an unidentified section cannot match.
    #[must_use]
    pub fn role_for(&self, section_id: Option<&str>) -> SectionRole {
        match section_id {
            Some(id) if self.definition_sections.iter().any(|d| d == id) => {
                SectionRole::Definitions
            }
            _ => SectionRole::Standard,
        }
    }
}

impl Default for SectionRolePolicy {
    /// Policy for Indian central acts: section 2 holds the definitions.
    fn default() -> Self {
        Self::new([DEFAULT_DEFINITIONS_SECTION])
    }
}
