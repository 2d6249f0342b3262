//! lexsplit - Split statutory acts into retrieval-ready atomic units.
//!
//! This crate ingests a statute as hierarchical JSON (chapters → sections)
//! and decomposes each section into atomic units — clauses, provisos, and
//! definitions — each carrying an enriched context string that makes the
//! unit independently interpretable by a downstream retrieval pipeline,
//! plus a back-reference to its parent section.
//!
//! # Example
//!
//! ```
//! use lexsplit::{chunk_chapters, CleanChapter, CleanSection, SectionRolePolicy};
//!
//! let chapters = vec![CleanChapter {
//!     chapter_name: Some("CHAPTER IV".to_string()),
//!     sections: vec![CleanSection {
//!         section: Some("35".to_string()),
//!         title: "Manner in which complaint shall be made.".to_string(),
//!         content: "(1) A complaint may be filed with the District Commission.".to_string(),
//!     }],
//! }];
//!
//! let chunked = chunk_chapters(&chapters, &SectionRolePolicy::default());
//! assert_eq!(chunked[0].sections[0].atomic_units.len(), 1);
//! ```
//!
//! # Architecture
//!
//! The pipeline stages, in data-flow order:
//!
//! - [`refine`]: split "Section N." title prefixes into ids, drop scrape URLs
//! - [`text`]: line-break normalization
//! - [`splitting`]: marker-based fragment splitting (clause/proviso and
//!   definition strategies) plus the section-role policy
//! - [`enrich`]: fragment classification and context enrichment
//! - [`pipeline`]: the chapter → section → unit walk
//! - [`assemble`]: parent/child document assembly for indexing
//! - [`json`]: input loading and atomic output writing
//! - [`cli`]: command-line interface
//! - [`config`]: constants
//! - [`error`]: error types and Result alias

pub mod assemble;
pub mod cli;
pub mod config;
pub mod enrich;
pub mod error;
pub mod json;
pub mod pipeline;
pub mod refine;
pub mod splitting;
pub mod text;
pub mod types;

// Re-export the pipeline operations
pub use assemble::{assemble_documents, ChildDocument, DocumentSet, ParentDocument};
pub use pipeline::chunk_chapters;
pub use refine::refine_chapters;

// Re-export commonly used items
pub use error::{LexsplitError, Result};
pub use splitting::{SectionRole, SectionRolePolicy};
pub use types::{AtomicUnit, Chapter, CleanChapter, CleanSection, Section, UnitType};
