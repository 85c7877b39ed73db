//! Character-level masking primitives.
//!
//! Every primitive here operates on Unicode scalar values, never on bytes, so
//! multi-byte input such as Cyrillic names is counted one `char` per position
//! and never split mid-character. The field policies in [`crate::Masker`]
//! are built entirely from these three functions.

/// Default character used to mask sensitive characters.
pub const MASK_CHAR: char = '*';

/// Replaces the half-open `char` range `[start, end)` of `value` with `fragment`.
///
/// Both bounds are clamped into `[0, len]` and swapped if `start > end`, so
/// the call never indexes out of bounds and the argument order does not
/// matter. The fragment is inserted verbatim and does not need to match the
/// width of the replaced range.
///
/// An empty `value` always yields an empty string, even when `fragment` is not
/// empty.
///
/// # Example
/// ```
/// use masker::policy::text::overlay;
///
/// assert_eq!(overlay("abcdefg", "***", 1, 5), "a***fg");
/// assert_eq!(overlay("abcdefg", "***", 5, 1), "a***fg");
/// assert_eq!(overlay("abcdefg", "***", 30, 31), "abcdefg***");
/// ```
#[must_use]
pub fn overlay(value: &str, fragment: &str, start: isize, end: isize) -> String {
    let chars: Vec<char> = value.chars().collect();
    let total = chars.len();
    if total == 0 {
        return String::new();
    }

    let mut start = clamp_index(start, total);
    let mut end = clamp_index(end, total);
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }

    let mut overlaid = String::with_capacity(value.len() + fragment.len());
    overlaid.extend(&chars[..start]);
    overlaid.push_str(fragment);
    overlaid.extend(&chars[end..]);
    overlaid
}

fn clamp_index(index: isize, total: usize) -> usize {
    // Negative indices fail the conversion and clamp to zero.
    usize::try_from(index).map_or(0, |index| index.min(total))
}

/// Masks every character except the first and, if `keep_last` is set, the last.
///
/// The output has exactly as many characters as the input. A single-character
/// value is returned unchanged since its only character is the first one.
#[must_use]
pub fn mask_except_first_last(value: &str, mask_char: char, keep_last: bool) -> String {
    let last = value.chars().count().saturating_sub(1);
    value
        .chars()
        .enumerate()
        .map(|(idx, ch)| {
            if idx == 0 || (keep_last && idx == last) {
                ch
            } else {
                mask_char
            }
        })
        .collect()
}

/// Masks every character except the final `count`.
///
/// If `count` covers the whole value, nothing is masked. The output has
/// exactly as many characters as the input.
#[must_use]
pub fn mask_except_last(value: &str, mask_char: char, count: usize) -> String {
    let masked = value.chars().count().saturating_sub(count);
    value
        .chars()
        .enumerate()
        .map(|(idx, ch)| if idx < masked { mask_char } else { ch })
        .collect()
}
