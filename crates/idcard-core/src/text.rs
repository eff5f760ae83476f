//! # Character-Offset Substrings
//!
//! Substring helpers that index by `char`, not by byte. Out-of-range
//! offsets never panic: they either fall back to the whole input
//! ([`sub_string`]) or return `None` ([`char_span`]).

/// Byte offset of the `n`th character, or `s.len()` when `n` equals the
/// character count. `None` past the end.
fn byte_offset(s: &str, n: usize) -> Option<usize> {
    s.char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(s.len()))
        .nth(n)
}

/// Take `length` characters starting at character `start`.
///
/// - An empty input yields `""`.
/// - When `start + length` runs past the end, the whole input is returned
///   unchanged rather than a truncated tail.
/// - `None` for `length` means "through the end"; a `start` past the end
///   again returns the whole input.
///
/// ```
/// use idcard_core::text::sub_string;
///
/// assert_eq!(sub_string("身份证号码", 2, Some(2)), "证号");
/// assert_eq!(sub_string("abcdef", 4, None), "ef");
/// assert_eq!(sub_string("abc", 2, Some(5)), "abc");
/// ```
pub fn sub_string(s: &str, start: usize, length: Option<usize>) -> &str {
    if s.is_empty() {
        return "";
    }
    let count = s.chars().count();
    let len = match length {
        Some(len) if start.saturating_add(len) > count => return s,
        Some(len) => len,
        None if start > count => return s,
        None => count - start,
    };
    match (byte_offset(s, start), byte_offset(s, start + len)) {
        (Some(from), Some(to)) => &s[from..to],
        _ => s,
    }
}

/// Characters `from` through `to`, both inclusive.
///
/// Returns `None` unless `from <= to` and `to` is a valid character index.
///
/// ```
/// use idcard_core::text::char_span;
///
/// assert_eq!(char_span("110101199003071233", 6, 13), Some("19900307"));
/// assert_eq!(char_span("abc", 1, 3), None);
/// ```
pub fn char_span(s: &str, from: usize, to: usize) -> Option<&str> {
    if from > to {
        return None;
    }
    let start = byte_offset(s, from)?;
    let end = byte_offset(s, to.checked_add(1)?)?;
    Some(&s[start..end])
}
