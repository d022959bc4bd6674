#![deny(missing_docs)]
//! Notedown HTML engine: inline formatting, assembly, and post-store
//! plumbing on top of `notedown-core` segmentation.

/// HTML entity escaping.
pub mod escape;
/// Inline emphasis/code formatting (the second pipeline pass).
pub mod inline;
/// Post records and document-store plumbing.
pub mod post;
/// HTML assembly (the third pipeline pass) and the top-level entry points.
pub mod render;

pub use inline::format_inline;
pub use post::{
    Post, PostError, RenderStats, RenderedPost, load_posts, partition_featured, render_posts,
};
pub use render::{RenderedFragment, assemble, render_html, render_html_with_diagnostics};
