#![deny(missing_docs)]
//! Notedown core: the block model and segmentation pass for the constrained
//! markup dialect.

/// Typed block model for segmented documents.
pub mod block;
/// Parse diagnostics (non-fatal warnings).
pub mod diagnostics;
/// Fence delimiter detection utilities.
pub mod fence;
/// Block segmentation (the first pipeline pass).
pub mod segment;

pub use block::Block;
pub use diagnostics::{Diagnostics, ParseWarning};
pub use fence::{FenceDelimiter, is_closing_delimiter, parse_fence_delimiter};
pub use segment::{segment, segment_with_diagnostics};
