//! Block segmentation: the first pipeline pass.
//!
//! One ordered scan over the document's lines classifies every line run into
//! exactly one [`Block`]. Fences are checked first so their bodies stay
//! opaque to everything downstream; text runs are the fallback and absorb
//! whatever no other rule claims.

use crate::block::Block;
use crate::diagnostics::{Diagnostics, ParseWarning};
use crate::fence::{is_closing_delimiter, parse_fence_delimiter};

/// Splits a document into typed blocks.
///
/// Empty input yields an empty block list. Never fails: malformed constructs
/// degrade per the rules on [`segment_with_diagnostics`].
pub fn segment(input: &str) -> Vec<Block> {
    segment_with_diagnostics(input).0
}

/// Splits a document into typed blocks, collecting non-fatal warnings.
///
/// An unterminated fence extends to end of document and records an
/// [`ParseWarning::UnclosedFence`]; it is never silently dropped.
pub fn segment_with_diagnostics(input: &str) -> (Vec<Block>, Diagnostics) {
    let lines: Vec<&str> = input.lines().collect();
    let mut blocks = Vec::new();
    let mut diagnostics = Diagnostics::new();
    let mut i = 0usize;

    while i < lines.len() {
        let line = lines[i];

        if let Some(delimiter) = parse_fence_delimiter(line) {
            let body_start = i + 1;
            let mut j = body_start;
            while j < lines.len() && !is_closing_delimiter(lines[j]) {
                j += 1;
            }
            if j == lines.len() {
                log::debug!(
                    "unclosed code fence at line {}; extending to end of document",
                    i + 1
                );
                diagnostics.add_warning(ParseWarning::UnclosedFence { line: i + 1 });
            }
            blocks.push(Block::CodeFence {
                lang: delimiter.lang,
                body: lines[body_start..j].join("\n"),
            });
            // Step past the closing delimiter when one was found.
            i = if j < lines.len() { j + 1 } else { j };
            continue;
        }

        if let Some((level, text)) = parse_heading(line) {
            blocks.push(Block::Heading {
                level,
                text: text.to_string(),
            });
            i += 1;
            continue;
        }

        if let Some(first) = parse_list_item(line) {
            let mut items = vec![first.to_string()];
            let mut j = i + 1;
            while j < lines.len() {
                match parse_list_item(lines[j]) {
                    Some(item) => {
                        items.push(item.to_string());
                        j += 1;
                    }
                    None => break,
                }
            }
            blocks.push(Block::ListRun { items });
            i = j;
            continue;
        }

        if is_horizontal_rule(line) {
            blocks.push(Block::HorizontalRule);
            i += 1;
            continue;
        }

        if line.trim().is_empty() {
            i += 1;
            continue;
        }

        // Fallback: extend the text run until a blank line or the start of a
        // higher-priority block.
        let start = i;
        let mut j = i;
        while j < lines.len() && is_text_line(lines[j]) {
            j += 1;
        }
        blocks.push(Block::TextRun {
            text: lines[start..j].join("\n"),
        });
        i = j;
    }

    (blocks, diagnostics)
}

/// Parses a `#`, `##`, or `###` heading line (marker, then a space).
fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if !(1..=3).contains(&hashes) {
        return None;
    }
    let text = line[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, text))
}

/// Parses a `- ` list item line, returning the item text.
fn parse_list_item(line: &str) -> Option<&str> {
    line.strip_prefix("- ")
}

/// A horizontal rule is a line consisting solely of `---`.
fn is_horizontal_rule(line: &str) -> bool {
    line == "---"
}

fn is_text_line(line: &str) -> bool {
    !line.trim().is_empty()
        && parse_fence_delimiter(line).is_none()
        && parse_heading(line).is_none()
        && parse_list_item(line).is_none()
        && !is_horizontal_rule(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_blocks() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn blank_lines_alone_yield_no_blocks() {
        assert!(segment("\n\n\n").is_empty());
    }

    #[test]
    fn classifies_heading_levels() {
        let blocks = segment("# One\n## Two\n### Three");
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 1,
                    text: "One".to_string()
                },
                Block::Heading {
                    level: 2,
                    text: "Two".to_string()
                },
                Block::Heading {
                    level: 3,
                    text: "Three".to_string()
                },
            ]
        );
    }

    #[test]
    fn four_hashes_fall_through_to_text() {
        let blocks = segment("#### Deep");
        assert_eq!(
            blocks,
            vec![Block::TextRun {
                text: "#### Deep".to_string()
            }]
        );
    }

    #[test]
    fn heading_requires_a_space_after_the_marker() {
        let blocks = segment("#Hi");
        assert!(matches!(blocks[0], Block::TextRun { .. }));
    }

    #[test]
    fn fence_body_is_captured_verbatim() {
        let blocks = segment("```js\nlet x = 1;\n# not a heading\n- not a list\n```");
        assert_eq!(
            blocks,
            vec![Block::CodeFence {
                lang: Some("js".to_string()),
                body: "let x = 1;\n# not a heading\n- not a list".to_string(),
            }]
        );
    }

    #[test]
    fn fence_preserves_blank_lines_in_body() {
        let blocks = segment("```\na\n\nb\n```");
        assert_eq!(
            blocks,
            vec![Block::CodeFence {
                lang: None,
                body: "a\n\nb".to_string(),
            }]
        );
    }

    #[test]
    fn unterminated_fence_extends_to_end_of_document() {
        let (blocks, diagnostics) = segment_with_diagnostics("intro\n\n```rust\nfn main() {}");
        assert_eq!(
            blocks,
            vec![
                Block::TextRun {
                    text: "intro".to_string()
                },
                Block::CodeFence {
                    lang: Some("rust".to_string()),
                    body: "fn main() {}".to_string(),
                },
            ]
        );
        assert_eq!(diagnostics.count(), 1);
        assert_eq!(diagnostics.warnings[0].line(), 3);
    }

    #[test]
    fn tagged_delimiter_does_not_close_an_open_fence() {
        let blocks = segment("```\naaa\n```js\nbbb\n```");
        assert_eq!(
            blocks,
            vec![Block::CodeFence {
                lang: None,
                body: "aaa\n```js\nbbb".to_string(),
            }]
        );
    }

    #[test]
    fn closed_fence_produces_no_warnings() {
        let (_, diagnostics) = segment_with_diagnostics("```\ncode\n```");
        assert!(!diagnostics.has_warnings());
    }

    #[test]
    fn list_run_collects_consecutive_items() {
        let blocks = segment("- a\n- b\n- c");
        assert_eq!(
            blocks,
            vec![Block::ListRun {
                items: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            }]
        );
    }

    #[test]
    fn blank_line_splits_list_runs() {
        let blocks = segment("- a\n\n- b");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], Block::ListRun { .. }));
        assert!(matches!(blocks[1], Block::ListRun { .. }));
    }

    #[test]
    fn horizontal_rule_is_exact() {
        assert_eq!(segment("---"), vec![Block::HorizontalRule]);
        assert_eq!(
            segment("----"),
            vec![Block::TextRun {
                text: "----".to_string()
            }]
        );
    }

    #[test]
    fn text_run_ends_at_a_blank_line() {
        let blocks = segment("one\ntwo\n\nthree");
        assert_eq!(
            blocks,
            vec![
                Block::TextRun {
                    text: "one\ntwo".to_string()
                },
                Block::TextRun {
                    text: "three".to_string()
                },
            ]
        );
    }

    #[test]
    fn text_run_ends_where_a_higher_priority_block_starts() {
        let blocks = segment("para\n# Head\nmore");
        assert_eq!(
            blocks,
            vec![
                Block::TextRun {
                    text: "para".to_string()
                },
                Block::Heading {
                    level: 1,
                    text: "Head".to_string()
                },
                Block::TextRun {
                    text: "more".to_string()
                },
            ]
        );
    }

    #[test]
    fn mixed_document_preserves_block_order() {
        let input = "# Title\n\nintro text\n\n- a\n- b\n\n---\n\n```py\nx = 1\n```\n\noutro";
        let blocks = segment(input);
        assert_eq!(blocks.len(), 6);
        assert!(matches!(blocks[0], Block::Heading { level: 1, .. }));
        assert!(matches!(blocks[1], Block::TextRun { .. }));
        assert!(matches!(blocks[2], Block::ListRun { .. }));
        assert!(matches!(blocks[3], Block::HorizontalRule));
        assert!(matches!(blocks[4], Block::CodeFence { .. }));
        assert!(matches!(blocks[5], Block::TextRun { .. }));
    }

    #[test]
    fn no_line_is_assigned_to_more_than_one_block() {
        // A list line directly after a paragraph belongs to the list, not the
        // text run.
        let blocks = segment("para\n- item");
        assert_eq!(
            blocks,
            vec![
                Block::TextRun {
                    text: "para".to_string()
                },
                Block::ListRun {
                    items: vec!["item".to_string()],
                },
            ]
        );
    }

    #[test]
    fn empty_heading_and_item_text_are_allowed() {
        let blocks = segment("# \n- ");
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 1,
                    text: String::new()
                },
                Block::ListRun {
                    items: vec![String::new()],
                },
            ]
        );
    }
}
