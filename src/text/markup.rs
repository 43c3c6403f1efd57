// Markup stripping: HTML mirrors are rendered to plain text before ranking.
//
// Tags disappear and entities such as `&amp;` are decoded, so only the page's
// visible text reaches the extractor. Plain-text documents pass through
// untouched.

use std::borrow::Cow;
use std::io::Cursor;

use tracing::{debug, warn};

/// Line width handed to the renderer. Wide enough that no marker line is
/// ever wrapped.
const RENDER_WIDTH: usize = 100_000;

/// Whether a document looks like an HTML page rather than plain text.
pub fn is_html(document: &str) -> bool {
    document.trim_start_matches('\u{feff}').trim_start().starts_with('<')
}

/// Render HTML to plain text. Non-HTML input is returned as-is.
///
/// A document the renderer rejects is kept raw.
pub fn to_plain_text(document: &str) -> Cow<'_, str> {
    if !is_html(document) {
        return Cow::Borrowed(document);
    }

    match html2text::from_read(Cursor::new(document.as_bytes()), RENDER_WIDTH) {
        Ok(text) => {
            debug!(
                html_bytes = document.len(),
                text_bytes = text.len(),
                "Rendered HTML to text"
            );
            Cow::Owned(text)
        }
        Err(e) => {
            warn!(error = %e, "HTML rendering failed, ranking raw markup");
            Cow::Borrowed(document)
        }
    }
}
