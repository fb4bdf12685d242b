//! Character encoding detection for HTML snapshots read from disk.
//!
//! Pages saved by browsers or crawlers are not always UTF-8. The declared
//! charset is taken from the first `<meta>` that carries one, and the bytes
//! are decoded with `encoding_rs` (WHATWG label rules, lossy).

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes of the document head examined for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>/]+)"#).expect("valid regex")
});

/// Charset declared in the head of `html`, UTF-8 when none is recognized.
#[must_use]
pub fn declared_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use legal_docs_scanner::encoding::decode_html;
///
/// let html = b"<meta charset=\"iso-8859-1\"><a href=\"/cgu\">Mentions l\xE9gales</a>";
/// assert!(decode_html(html).contains("Mentions légales"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = declared_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_utf8() {
        assert_eq!(declared_encoding(b"<html><body>x</body></html>"), UTF_8);
    }

    #[test]
    fn reads_meta_charset() {
        let html = br#"<head><meta charset="windows-1252"></head>"#;
        assert_eq!(declared_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn reads_http_equiv_content_type() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        // WHATWG maps ISO-8859-1 to windows-1252.
        assert_eq!(declared_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let html = br#"<meta charset="klingon">"#;
        assert_eq!(declared_encoding(html), UTF_8);
    }

    #[test]
    fn decodes_latin1_accents() {
        let html = b"<meta charset=\"iso-8859-1\"><p>Confidentialit\xE9</p>";
        assert!(decode_html(html).contains("Confidentialité"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let html = b"<p>ok \xFF</p>";
        assert!(decode_html(html).contains('\u{FFFD}'));
    }
}
