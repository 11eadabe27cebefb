//! Line-ending normalization.
//!
//! Documents are processed with `\n` line endings only. `\r\n` and a lone `\r`
//! both become `\n`, so a rewritten file never mixes endings.

use std::borrow::Cow;

/// Converts `\r\n` and lone `\r` line endings to `\n`.
///
/// Returns the input unchanged (borrowed) when it contains no `\r`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    let normalized = ["\r\n", "\r"]
        .iter()
        .fold(text.to_string(), |acc, &ending| acc.replace(ending, "\n"));
    Cow::Owned(normalized)
}
