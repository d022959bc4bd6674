//! Typed blocks produced by the segmenter.

use serde::Serialize;

/// A classified unit of document structure.
///
/// Blocks are produced fresh for every conversion call and carry no identity
/// beyond it. The concatenation of block source spans reconstructs the input
/// document, minus the marker syntax consumed during classification and the
/// blank lines separating blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    /// A `#`/`##`/`###` line.
    Heading {
        /// Heading level (1-3).
        level: u8,
        /// Text after the marker and its space, verbatim.
        text: String,
    },
    /// A fenced code region, opaque to inline formatting.
    CodeFence {
        /// Language tag from the opening delimiter, if present.
        lang: Option<String>,
        /// Verbatim body (lines joined with `\n`).
        body: String,
    },
    /// A maximal run of consecutive `- ` lines.
    ListRun {
        /// One entry per line, marker stripped.
        items: Vec<String>,
    },
    /// A line consisting solely of `---`.
    HorizontalRule,
    /// A maximal run of non-blank lines matching no other block kind.
    TextRun {
        /// The run's text (lines joined with `\n`).
        text: String,
    },
}

impl Block {
    /// Returns true for blocks whose text participates in inline formatting.
    ///
    /// Fence bodies and rules never do; this is the invariant the whole
    /// pipeline is built around.
    pub fn is_inline_eligible(&self) -> bool {
        matches!(
            self,
            Block::Heading { .. } | Block::ListRun { .. } | Block::TextRun { .. }
        )
    }
}
