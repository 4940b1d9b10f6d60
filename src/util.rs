//! Text decoding and newline helpers.

use std::borrow::Cow;

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. Falls back to Windows-1252 (common in old manuscripts)
///
/// # Returns
///
/// The decoded string. Uses `Cow<str>` to avoid allocation when the input is
/// valid UTF-8.
///
/// # Examples
///
/// ```
/// use chapbook::util::decode_text;
///
/// assert_eq!(decode_text("Hello, World!".as_bytes()), "Hello, World!");
/// assert_eq!(decode_text(b"caf\xe9"), "caf\u{e9}");
/// ```
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    // Try UTF-8 first (handles BOM automatically)
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    // Fallback: Windows-1252 (superset of ISO-8859-1)
    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Normalize line endings to `\n`.
///
/// Converts `\r\n` and bare `\r` so the rest of the pipeline only ever sees
/// `\n`-separated lines, no matter which platform produced the manuscript.
/// Borrows the input unchanged when it contains no `\r`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if memchr::memchr(b'\r', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = memchr::memchr(b'\r', rest.as_bytes()) {
        out.push_str(&rest[..pos]);
        out.push('\n');
        let mut next = pos + 1;
        if rest.as_bytes().get(next) == Some(&b'\n') {
            next += 1;
        }
        rest = &rest[next..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

// ============================================================================
// Tests
// ============================================================================
