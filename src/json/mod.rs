//! JSON input and output.
//!
//! Reading tolerates a single chapter object where an array is expected;
//! writing is atomic (temp file, sync, rename) with human-readable
//! indentation and non-ASCII preserved unescaped.

mod reader;
mod writer;

pub use reader::read_chapters;
pub use writer::{save_json, to_json_string};
