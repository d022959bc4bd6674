//! Post records and document-store plumbing.
//!
//! The document store supplies serialized post records; the converter only
//! ever reads `body`. The helpers here mirror what the site does with the
//! records around conversion: load the store export, split out featured
//! posts for the listing page, and render every body at build time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::{render_html, render_html_with_diagnostics};

/// One document-store record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Stable identifier, used as the post's URL segment.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short listing blurb.
    pub excerpt: String,
    /// Raw markup body; the only field the converter reads.
    #[serde(alias = "content")]
    pub body: String,
    /// Publication date as supplied by the store.
    pub date: String,
    /// Pre-computed read-time label (e.g. "8 min read").
    pub read_time: String,
    /// Topic tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the listing page should feature this post.
    #[serde(default)]
    pub featured: bool,
}

impl Post {
    /// Converts this post's body to HTML.
    pub fn render_body(&self) -> String {
        render_html(&self.body)
    }
}

/// Errors from loading a document-store export.
#[derive(Debug, Error)]
pub enum PostError {
    /// The store export was not a valid JSON array of records.
    #[error("invalid post store export: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses a document-store export (a JSON array of records).
pub fn load_posts(json: &str) -> Result<Vec<Post>, PostError> {
    Ok(serde_json::from_str(json)?)
}

/// Splits records into (featured, regular), preserving store order.
pub fn partition_featured(posts: &[Post]) -> (Vec<&Post>, Vec<&Post>) {
    posts.iter().partition(|post| post.featured)
}

/// One rendered post body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPost {
    /// Identifier copied from the record.
    pub id: String,
    /// Converted HTML body.
    pub html: String,
    /// Rendered descriptions of any segmentation warnings.
    pub warnings: Vec<String>,
}

/// Statistics for a whole-store render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderStats {
    /// Number of posts rendered.
    pub total: usize,
    /// How many posts produced at least one warning.
    pub with_warnings: usize,
    /// Wall-clock time for the whole batch in milliseconds.
    pub processing_time_ms: f64,
}

/// Renders every post body in store order.
///
/// Conversion is total, so there is no per-post failure path; warnings ride
/// along per post and are tallied in the stats.
pub fn render_posts(posts: &[Post]) -> (Vec<RenderedPost>, RenderStats) {
    let started = std::time::Instant::now();
    let mut with_warnings = 0usize;

    let rendered = posts
        .iter()
        .map(|post| {
            let (html, diagnostics) = render_html_with_diagnostics(&post.body);
            if diagnostics.has_warnings() {
                with_warnings += 1;
            }
            RenderedPost {
                id: post.id.clone(),
                html,
                warnings: diagnostics
                    .warnings
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            }
        })
        .collect();

    let stats = RenderStats {
        total: posts.len(),
        with_warnings,
        processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
    };
    (rendered, stats)
}
