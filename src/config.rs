//! Configuration constants for lexsplit.

/// Placeholder used when a chapter carries no name.
pub const UNKNOWN_CHAPTER: &str = "Unknown Chapter";

/// Section id that holds the statute's definitions by default.
///
/// In the Consumer Protection Act 2019 (and most Indian central acts),
/// section 2 is the definitions section. Override via
/// `SectionRolePolicy::with_definition_sections` or the CLI flag.
pub const DEFAULT_DEFINITIONS_SECTION: &str = "2";

/// Maximum number of characters of the preceding clause carried into a
/// proviso's enriched context.
pub const ANCHOR_SNIPPET_CHARS: usize = 200;

/// Fallback term for definition units without a quoted phrase.
pub const UNKNOWN_TERM: &str = "Unknown";

/// Indentation used for JSON output files.
pub const JSON_INDENT: &[u8] = b"    ";
