//! Fence delimiter detection.
//!
//! The dialect's fences are deliberately strict: a delimiter is a line of
//! exactly three backticks, optionally followed by a language tag on the
//! opening line. Indented fences, longer marker runs, and tilde fences are
//! not delimiters and fall through to ordinary text handling.

/// A parsed fence delimiter line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceDelimiter {
    /// Language tag following the backticks, if present.
    pub lang: Option<String>,
}

/// Parses a line as a fence delimiter (` ``` ` or ` ```lang `).
///
/// The language tag is a single `[A-Za-z0-9_]+` word; trailing whitespace is
/// tolerated. Anything else after the backticks disqualifies the line.
pub fn parse_fence_delimiter(line: &str) -> Option<FenceDelimiter> {
    let rest = line.strip_prefix("```")?.trim_end();
    if rest.starts_with('`') {
        // Four or more backticks.
        return None;
    }
    if rest.is_empty() {
        return Some(FenceDelimiter { lang: None });
    }
    if rest
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_')
    {
        return Some(FenceDelimiter {
            lang: Some(rest.to_string()),
        });
    }
    None
}

/// Returns true if the line closes an open fence.
///
/// Only a bare ``` line closes; a delimiter carrying a language tag opens a
/// new fence, it never closes one.
pub fn is_closing_delimiter(line: &str) -> bool {
    matches!(parse_fence_delimiter(line), Some(FenceDelimiter { lang: None }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_delimiter_parses_without_language() {
        let delimiter = parse_fence_delimiter("```").unwrap();
        assert_eq!(delimiter.lang, None);
    }

    #[test]
    fn language_tag_is_captured() {
        let delimiter = parse_fence_delimiter("```js").unwrap();
        assert_eq!(delimiter.lang.as_deref(), Some("js"));
    }

    #[test]
    fn trailing_whitespace_is_tolerated() {
        assert!(parse_fence_delimiter("```  ").is_some());
        let delimiter = parse_fence_delimiter("```rust ").unwrap();
        assert_eq!(delimiter.lang.as_deref(), Some("rust"));
    }

    #[test]
    fn indented_line_is_not_a_delimiter() {
        assert!(parse_fence_delimiter("  ```").is_none());
        assert!(parse_fence_delimiter("\t```js").is_none());
    }

    #[test]
    fn longer_marker_runs_are_rejected() {
        assert!(parse_fence_delimiter("````").is_none());
        assert!(parse_fence_delimiter("````markdown").is_none());
    }

    #[test]
    fn two_backticks_are_rejected() {
        assert!(parse_fence_delimiter("``").is_none());
    }

    #[test]
    fn trailing_junk_disqualifies_the_line() {
        assert!(parse_fence_delimiter("```js foo").is_none());
        assert!(parse_fence_delimiter("```c++").is_none());
    }

    #[test]
    fn only_bare_delimiters_close() {
        assert!(is_closing_delimiter("```"));
        assert!(is_closing_delimiter("``` "));
        assert!(!is_closing_delimiter("```js"));
        assert!(!is_closing_delimiter("code"));
    }
}
