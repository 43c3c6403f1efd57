// Extractor: isolates the book body and title from archive boilerplate.
//
// Gutenberg plaintext mirrors wrap each book in a licence header and footer.
// The book itself sits between a "*** START OF THE PROJECT GUTENBERG EBOOK"
// line and a matching "*** END OF ..." line, and the start line carries the
// title. Callers lowercase the document first, so the markers here are
// lowercase literals.

use std::sync::OnceLock;

use regex_lite::Regex;
use tracing::debug;

/// Literal that opens the book body. The title follows it on the same line.
pub const START_MARKER: &str = "*** start of the project gutenberg ebook";

/// Literal that closes the book body.
pub const END_MARKER: &str = "*** end of the project gutenberg ebook";

// regex-lite's `\s` is ASCII-only, so the Unicode space separators are
// listed explicitly.
const TITLE_PATTERN: &str = r"\*\*\* start of the project gutenberg ebook[\s\x{85}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}](.*?)(;|\*\*\*)";

fn title_regex() -> &'static Regex {
    static TITLE_RE: OnceLock<Regex> = OnceLock::new();
    TITLE_RE.get_or_init(|| Regex::new(TITLE_PATTERN).expect("valid title pattern"))
}

/// The result of one extraction pass over a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<'a> {
    /// Title captured from the start marker line, if present
    pub title: Option<String>,
    /// Text between the markers, or the whole document when either is missing
    pub body: &'a str,
    /// Whether both markers were found
    pub bounded: bool,
}

/// Extract the title and the body from a lowercased document.
///
/// Each marker's first occurrence is located independently. When the end
/// marker comes before the start marker's end, the body is empty rather than
/// reordered.
pub fn extract(document: &str) -> Extraction<'_> {
    let title = find_title(document);

    let (body, bounded) = match (document.find(START_MARKER), document.find(END_MARKER)) {
        (Some(start), Some(end)) => {
            let body_start = start + START_MARKER.len();
            let body = if end > body_start {
                &document[body_start..end]
            } else {
                ""
            };
            (body, true)
        }
        _ => (document, false),
    };

    debug!(
        has_title = title.is_some(),
        bounded,
        body_bytes = body.len(),
        document_bytes = document.len(),
        "Extracted document"
    );

    Extraction {
        title,
        body,
        bounded,
    }
}

/// Find the title on the start marker line.
///
/// The capture ends at the first `;` or `***` on that line. Blank captures
/// count as no title.
pub fn find_title(document: &str) -> Option<String> {
    let caps = title_regex().captures(document)?;
    let title = caps.get(1)?.as_str().trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_marker_is_forty_bytes() {
        assert_eq!(START_MARKER.len(), 40);
    }

    #[test]
    fn test_title_stops_at_triple_asterisk() {
        let doc = "*** start of the project gutenberg ebook moby dick; or, the whale ***";
        // The semicolon comes first.
        assert_eq!(find_title(doc).as_deref(), Some("moby dick"));

        let doc = "*** start of the project gutenberg ebook  pride and prejudice  ***\nbody";
        assert_eq!(find_title(doc).as_deref(), Some("pride and prejudice"));
    }

    #[test]
    fn test_title_after_non_breaking_space() {
        let doc = "*** start of the project gutenberg ebook\u{a0}dracula ***\nbody";
        assert_eq!(find_title(doc).as_deref(), Some("dracula"));

        let doc = "*** start of the project gutenberg ebook\u{3000}dracula ***";
        assert_eq!(find_title(doc).as_deref(), Some("dracula"));
    }

    #[test]
    fn test_title_does_not_cross_lines() {
        let doc = "*** start of the project gutenberg ebook dracula\nchapter one ***";
        assert_eq!(find_title(doc), None);
    }

    #[test]
    fn test_blank_title_is_absent() {
        let doc = "*** start of the project gutenberg ebook   ***";
        assert_eq!(find_title(doc), None);
    }

    #[test]
    fn test_end_before_start_yields_empty_body() {
        let doc = "*** end of the project gutenberg ebook x *** start of the project gutenberg ebook y ***";
        let extraction = extract(doc);
        assert!(extraction.bounded);
        assert_eq!(extraction.body, "");
    }
}
