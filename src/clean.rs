//! Visible-text extraction from page HTML.
//!
//! The document is parsed with `scraper`, every text node outside
//! `<script>`, `<style>` and `<noscript>` is taken in document order, and
//! each one is split into lines that are trimmed and kept only when
//! non-empty.

use scraper::{Html, Node};
use tracing::{debug, instrument};

/// Elements whose text content never reaches the output.
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

/// Extract the visible text of `html` as trimmed, non-empty lines.
#[instrument(level = "debug", skip_all, fields(bytes = html.len()))]
pub fn clean_html(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut lines = Vec::new();

    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
            Node::Element(elem) => HIDDEN_ELEMENTS.contains(&elem.name()),
            _ => false,
        });
        if hidden {
            continue;
        }

        lines.extend(
            text.split(is_line_boundary)
                .map(trim_line)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    debug!(lines = lines.len(), "Extracted visible text");
    lines
}

/// Strip whitespace plus the `\x1f` unit separator from both ends.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{1f}')
}

/// Line separators: `\n`, `\r` and the Unicode line/paragraph breaks.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
