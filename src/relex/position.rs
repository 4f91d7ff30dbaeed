//! Line/column lookup over a source prefix

/// Returns the 1-based (line, column) of `offset` in `text`.
///
/// The offset is a byte offset and must lie on a character boundary (offsets
/// produced by matching always do). Columns count characters, not bytes, so
/// positions stay consistent for multi-byte text.
pub fn coordinates(text: &str, offset: usize) -> (usize, usize) {
    let prefix = &text[..offset];
    let line = prefix.matches('\n').count() + 1;
    let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
    let column = prefix[line_start..].chars().count() + 1;
    (line, column)
}
