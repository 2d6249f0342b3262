//! Input file loading.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{LexsplitError, Result};

/// A chapter array, or a single chapter object normalized to one element.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Read a JSON file holding an array of chapter-like records, or a single
/// record (normalized to a one-element vector).
///
/// A missing file and invalid JSON are fatal and reported with the path;
/// nothing has been written at that point, so aborting leaves no partial
/// output behind.
pub fn read_chapters<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(LexsplitError::InputNotFound(path.to_path_buf()));
    }

    let data = fs::read_to_string(path)?;
    let parsed: OneOrMany<T> =
        serde_json::from_str(&data).map_err(|source| LexsplitError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(match parsed {
        OneOrMany::Many(chapters) => chapters,
        OneOrMany::One(chapter) => vec![chapter],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CleanChapter;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_chapter_array() {
        let file = write_temp(r#"[{"chapter_name": "CHAPTER I", "sections": []}]"#);
        let chapters: Vec<CleanChapter> = read_chapters(file.path()).unwrap();

        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].chapter_name, Some("CHAPTER I".to_string()));
    }

    #[test]
    fn test_read_single_chapter_normalized_to_array() {
        let file = write_temp(r#"{"chapter_name": "CHAPTER I", "sections": []}"#);
        let chapters: Vec<CleanChapter> = read_chapters(file.path()).unwrap();

        assert_eq!(chapters.len(), 1);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_chapters::<CleanChapter>(Path::new("does-not-exist.json")).unwrap_err();

        assert!(matches!(err, LexsplitError::InputNotFound(_)));
    }

    #[test]
    fn test_read_invalid_json() {
        let file = write_temp("{not json");
        let err = read_chapters::<CleanChapter>(file.path()).unwrap_err();

        assert!(matches!(err, LexsplitError::JsonParse { .. }));
    }
}
