//! Character encoding detection and transcoding.
//!
//! Product pages in the ruble zone are still served as `windows-1251` or
//! `KOI8-R` now and then. Raw bytes are decoded to UTF-8 before parsing so the
//! currency glyphs and Cyrillic text reach the extractors intact.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Bytes of the document head searched for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// `<meta charset="...">` or `<meta http-equiv="Content-Type" content="...; charset=...">`
#[allow(clippy::expect_used)]
static CHARSET_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;/>]+)"#).expect("valid regex")
});

/// Detect the character encoding of an HTML document.
///
/// A byte order mark wins, then the first charset declaration in the head.
/// Unknown labels and undeclared documents fall back to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn declared_charset(head: &str) -> Option<String> {
    CHARSET_DECLARATION
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Malformed sequences become U+FFFD rather than failing the page.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);

    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced malformed byte sequences");
    }

    decoded.into_owned()
}
