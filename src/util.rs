//! Text helpers shared by the source readers and the generators.

use std::borrow::Cow;

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. If malformed, tries the hint encoding
/// 3. Falls back to Windows-1252 (common in manuscripts saved by older editors)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Escape XML special characters.
///
/// Borrows the input unchanged when nothing needs escaping.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape `s` when `enabled`, otherwise pass it through untouched.
pub fn escape_if(s: &str, enabled: bool) -> Cow<'_, str> {
    if enabled {
        escape_xml(s)
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Hello & World"), "Hello &amp; World");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_escape_xml_borrows_clean_input() {
        assert!(matches!(escape_xml("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_if_disabled() {
        assert_eq!(escape_if("<b>", false), "<b>");
        assert_eq!(escape_if("<b>", true), "&lt;b&gt;");
    }

    #[test]
    fn test_decode_utf8_with_bom() {
        let bytes = b"\xEF\xBB\xBFChapter 1";
        assert_eq!(decode_text(bytes, None), "Chapter 1");
    }

    #[test]
    fn test_decode_falls_back_to_windows_1252() {
        // "café" in Windows-1252
        let bytes = b"caf\xE9";
        assert_eq!(decode_text(bytes, None), "café");
    }
}
