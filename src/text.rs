//! Text normalization utilities shared by the splitting strategies.

/// Collapse line breaks into single spaces and trim the ends.
///
/// Statute text scraped from HTML arrives with arbitrary CRLF/LF breaks in
/// the middle of sentences. Marker-based splitting needs one continuous
/// line. Case, punctuation, and internal multi-space runs are preserved.
///
/// # Examples
/// ```
/// use lexsplit::text::normalize_text;
///
/// assert_eq!(normalize_text("a\r\nb\nc"), "a b c");
/// assert_eq!(normalize_text("  padded  "), "padded");
/// ```
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.replace("\r\n", " ").replace('\n', " ").trim().to_string()
}

/// First `max_chars` characters of `text`, counted in code points.
///
/// Indexing by characters rather than bytes keeps the cut safe for
/// Devanagari and other multi-byte scripts that appear in Indian statutes.
#[must_use]
pub fn snippet(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
