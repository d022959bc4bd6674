//! HTML assembly: the third pipeline pass and the public entry points.
//!
//! The assembler is a fold over the block sequence. Each block renders to
//! its own sibling fragment, so a paragraph wrapper can never end up around
//! heading, list, code, or rule output; correct nesting is constructed
//! directly instead of patched afterwards.

use notedown_core::{Block, Diagnostics, segment_with_diagnostics};

use crate::escape::encode_text;
use crate::inline::format_inline;

/// An HTML segment paired with the block it was rendered from.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFragment<'a> {
    /// The rendered HTML for this block.
    pub html: String,
    /// The source block.
    pub block: &'a Block,
}

/// Renders each block to a fragment, preserving block order.
pub fn assemble(blocks: &[Block]) -> Vec<RenderedFragment<'_>> {
    blocks
        .iter()
        .map(|block| RenderedFragment {
            html: render_block(block),
            block,
        })
        .collect()
}

/// Converts a document to HTML.
///
/// Total: every input string has a defined output, and malformed constructs
/// degrade to literal text rather than errors.
pub fn render_html(input: &str) -> String {
    let (html, diagnostics) = render_html_with_diagnostics(input);
    if diagnostics.has_warnings() {
        // Reduce noise: callers that care about warnings use the
        // diagnostics-returning entry point.
        log::debug!("conversion produced {} warning(s)", diagnostics.count());
    }
    html
}

/// Converts a document to HTML, returning segmentation warnings beside it.
///
/// The warnings never influence the HTML; they exist for callers that want
/// to surface authoring mistakes (an unclosed fence, say) at build time.
pub fn render_html_with_diagnostics(input: &str) -> (String, Diagnostics) {
    let (blocks, diagnostics) = segment_with_diagnostics(input);
    let html: String = assemble(&blocks)
        .iter()
        .map(|fragment| fragment.html.as_str())
        .collect();
    (html, diagnostics)
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => {
            format!("<h{level}>{}</h{level}>", format_inline(text))
        }
        Block::CodeFence { lang, body } => render_code_fence(lang.as_deref(), body),
        Block::ListRun { items } => render_list_run(items),
        Block::HorizontalRule => "<hr />".to_string(),
        Block::TextRun { text } => render_text_run(text),
    }
}

/// Renders a fence body verbatim, entity-escaping HTML-meaningful bytes.
///
/// No inline rule ever touches the body; escaping here is the only
/// transformation it receives.
fn render_code_fence(lang: Option<&str>, body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 32);
    out.push_str("<pre><code");
    if let Some(lang) = lang {
        out.push_str(" class=\"language-");
        out.push_str(&html_escape::encode_double_quoted_attribute(lang));
        out.push('"');
    }
    out.push('>');
    out.push_str(&encode_text(body));
    out.push_str("</code></pre>");
    out
}

fn render_list_run(items: &[String]) -> String {
    let mut out = String::from("<ul>");
    for item in items {
        out.push_str("<li>");
        out.push_str(&format_inline(item));
        out.push_str("</li>");
    }
    out.push_str("</ul>");
    out
}

/// Wraps each blank-line-separated sub-run in `<p>`.
fn render_text_run(text: &str) -> String {
    let mut out = String::new();
    for sub_run in text.split("\n\n").filter(|s| !s.trim().is_empty()) {
        out.push_str("<p>");
        out.push_str(&format_inline(sub_run));
        out.push_str("</p>");
    }
    out
}
