//! Source-span discovery for override blocks
//!
//! Locates the exact byte span of a `"key": { ... }` member inside the
//! document's `overrides` object. The quoted key is found textually, then
//! the value object is scanned with a string- and escape-aware brace
//! counter, so braces inside quoted strings never confuse the match.

use regex::Regex;

/// Byte span of an override key-block in the raw source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideSpan {
    /// Byte offset of the key's opening quote
    pub offset: usize,
    /// Length through the closing brace and an immediately trailing comma
    pub length: usize,
    /// Whether the block spans more than one source line
    pub multiline: bool,
}

/// A located `"key": { ... }` member
struct KeyBlock {
    key_offset: usize,
    open: usize,
    close: usize,
}

/// Find the span of `key`'s override block in `source`.
///
/// Returns `None` when the `overrides` object or the key-block cannot be
/// located; callers emit the diagnostic without a fix in that case.
pub fn find_override_span(source: &str, key: &str) -> Option<OverrideSpan> {
    let overrides = find_key_block(source, "overrides", 0, source.len())?;
    let block = find_key_block(source, key, overrides.open + 1, overrides.close)?;

    let mut end = block.close + 1;
    if source.as_bytes().get(end) == Some(&b',') {
        end += 1;
    }

    Some(OverrideSpan {
        offset: block.key_offset,
        length: end - block.key_offset,
        multiline: source[block.key_offset..end].contains('\n'),
    })
}

/// Locate `"key" :` followed by an object, within `source[start..end]`
fn find_key_block(source: &str, key: &str, start: usize, end: usize) -> Option<KeyBlock> {
    let pattern = Regex::new(&format!(r#""{}"\s*:"#, regex::escape(key))).ok()?;

    for found in pattern.find_iter(&source[start..end]) {
        let key_offset = start + found.start();
        let after_colon = start + found.end();
        let open = after_colon
            + source[after_colon..end]
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(0);
        if source.as_bytes().get(open) != Some(&b'{') {
            continue;
        }
        if let Some(close) = object_end(source, open) {
            return Some(KeyBlock {
                key_offset,
                open,
                close,
            });
        }
    }
    None
}

/// Byte offset of the `}` closing the object opened at `open`
fn object_end(source: &str, open: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(open) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
        } else {
            match b {
                b'"' => in_string = true,
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
        }
    }
    None
}

/// Convert a byte offset into a 1-based (line, column) pair
pub fn offset_to_position(source: &str, offset: usize) -> (usize, usize) {
    let clamped = offset.min(source.len());
    let before = &source[..clamped];
    let line = before.matches('\n').count() + 1;
    let column = match before.rfind('\n') {
        Some(newline) => clamped - newline,
        None => clamped + 1,
    };
    (line, column)
}
