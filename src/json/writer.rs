//! Atomic JSON output.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::JSON_INDENT;
use crate::error::Result;

/// Serialize a value with 4-space indentation and a trailing newline.
///
/// serde_json writes struct fields in declaration order and leaves
/// non-ASCII characters unescaped, so repeated runs over identical input
/// are byte-identical.
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String> {
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    #[allow(clippy::expect_used)] // serde_json always emits valid UTF-8
    let mut content = String::from_utf8(buf).expect("serde_json output is UTF-8");
    content.push('\n');
    Ok(content)
}

/// Save a value as a JSON file.
///
/// Uses the atomic write pattern: writes to a temp file, syncs to disk,
/// then renames. A crash mid-write cannot corrupt an existing output file.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let content = to_json_string(value)?;

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let file_name = path
        .file_name()
        .map_or_else(|| "output.json".to_string(), |n| n.to_string_lossy().into_owned());
    let temp_path = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_path, path)?;

    Ok(())
}
