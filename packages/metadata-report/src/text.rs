//! Text normalization for extracted metadata values.
//!
//! ArcGIS stores rich-text fields (abstract, use limitation, credits) as
//! escaped HTML inside the XML, so a decoded element value can still contain
//! tags and entities.

use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern for an inline markup tag.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// Decode HTML entities, strip tags and collapse whitespace.
///
/// Entities are decoded before tags are stripped, so escaped markup such as
/// `&lt;p&gt;` is removed as well.
///
/// # Examples
/// ```
/// use metadata_report::text::sanitize;
///
/// assert_eq!(sanitize("A <b>bold</b> &amp; italic"), "A bold & italic");
/// assert_eq!(sanitize("  spread \n  out  "), "spread out");
/// ```
pub fn sanitize(text: &str) -> String {
    let decoded = html_escape::decode_html_entities(text);
    let stripped = TAG_PATTERN.replace_all(&decoded, "");
    collapse_whitespace(&stripped)
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_tags_and_decodes_entities() {
        assert_eq!(sanitize("A <b>bold</b> &amp; italic"), "A bold & italic");
    }

    #[test]
    fn test_sanitize_removes_escaped_markup() {
        let raw = "&lt;DIV STYLE=\"text-align:Left;\"&gt;&lt;P&gt;Soil map&lt;/P&gt;&lt;/DIV&gt;";
        assert_eq!(sanitize(raw), "Soil map");
    }

    #[test]
    fn test_sanitize_named_and_numeric_entities() {
        assert_eq!(sanitize("caf&eacute; &#169; 2024&nbsp;"), "café © 2024");
    }

    #[test]
    fn test_sanitize_blank_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("  <br/>  "), "");
    }

    #[test]
    fn test_sanitize_keeps_plain_text() {
        assert_eq!(sanitize("National Soil Map"), "National Soil Map");
        assert_eq!(sanitize("a < b"), "a < b");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a\t\tb\n c "), "a b c");
    }
}
