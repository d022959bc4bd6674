use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

use notedown_core::segment;
use notedown_html::{load_posts, render_html_with_diagnostics, render_posts};

// ============================================================================
// Conversion API
// ============================================================================

/// Converts a document body to HTML.
///
/// Total: any string in, HTML string out. Segmentation warnings are dropped;
/// use [`render_document`] to receive them.
#[wasm_bindgen]
pub fn render_html(source: &str) -> String {
    notedown_html::render_html(source)
}

/// Result of converting one document with its warnings attached.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResult {
    /// Converted HTML.
    pub html: String,
    /// Rendered warning messages (empty for clean input).
    pub warnings: Vec<String>,
}

/// Converts a document body, returning `{ html, warnings }`.
#[wasm_bindgen]
pub fn render_document(source: &str) -> Result<JsValue, JsError> {
    let (html, diagnostics) = render_html_with_diagnostics(source);
    let result = DocumentResult {
        html,
        warnings: diagnostics
            .warnings
            .iter()
            .map(ToString::to_string)
            .collect(),
    };
    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ============================================================================
// Block Parser API
// ============================================================================

/// Parses a document into its structured block sequence.
///
/// Returns a JavaScript array of tagged block objects, e.g.
/// `{type: "heading", level: 1, text: "Hi"}` or
/// `{type: "codeFence", lang: "js", body: "let x = 1;"}`, so the page shell
/// can do its own per-block presentation instead of taking joined HTML.
#[wasm_bindgen(js_name = parse_blocks)]
pub fn parse_blocks(input: &str) -> Result<JsValue, JsError> {
    let blocks = segment(input);
    serde_wasm_bindgen::to_value(&blocks)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ============================================================================
// Store API
// ============================================================================

/// Result of rendering a whole store export.
#[derive(Debug, Clone, Serialize)]
pub struct StoreRenderResult {
    /// Rendered posts in store order.
    pub posts: Vec<notedown_html::RenderedPost>,
    /// Batch statistics.
    pub stats: notedown_html::RenderStats,
}

/// Renders every post body in a document-store export (a JSON array of
/// records), returning `{ posts, stats }`.
///
/// Unlike conversion itself, loading the store is fallible: a malformed
/// export surfaces as a `JsError`.
#[wasm_bindgen(js_name = render_store)]
pub fn render_store(json: &str) -> Result<JsValue, JsError> {
    let posts = load_posts(json).map_err(|e| JsError::new(&e.to_string()))?;
    let (rendered, stats) = render_posts(&posts);
    let result = StoreRenderResult {
        posts: rendered,
        stats,
    };
    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
