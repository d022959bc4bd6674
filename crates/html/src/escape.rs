//! HTML entity escaping.
//!
//! The text escaper is idempotent: an `&` that already begins a character
//! entity is left alone, so text that has been through the converter once
//! never picks up `&amp;lt;`-style double escapes on a second pass.

/// Escapes `<`, `>`, and entity-starting `&` for HTML text content.
pub fn encode_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, c) in input.char_indices() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' if !starts_entity(&input[i..]) => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
    out
}

/// Returns true if the slice begins with a complete character entity
/// (`&name;`, `&#digits;`, or `&#xhex;`).
fn starts_entity(s: &str) -> bool {
    let rest = match s.strip_prefix('&') {
        Some(rest) => rest,
        None => return false,
    };
    let Some(end) = rest.find(';') else {
        return false;
    };
    let name = &rest[..end];
    if name.is_empty() {
        return false;
    }
    if let Some(digits) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        return !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit());
    }
    if let Some(digits) = name.strip_prefix('#') {
        return !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
    }
    name.bytes().all(|b| b.is_ascii_alphanumeric())
}
