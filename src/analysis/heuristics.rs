//! Stateless per-text detectors for empty outputs, source copies and
//! degenerate repetition.

use crate::errors::{Error, Result};

/// `count / total * 100`, refusing a zero denominator.
pub fn percentage(count: usize, total: usize, metric: &'static str) -> Result<f64> {
    if total == 0 {
        return Err(Error::EmptyInput { metric });
    }
    Ok(count as f64 / total as f64 * 100.0)
}

/// Share of entries that are empty strings.
pub fn percent_empty<S: AsRef<str>>(texts: &[S]) -> Result<f64> {
    let empty = texts.iter().filter(|t| t.as_ref().is_empty()).count();
    percentage(empty, texts.len(), "empty_output")
}

/// Share of position-aligned pairs whose trimmed source occurs verbatim inside
/// the trimmed translation.
///
/// Only `min(len)` pairs are compared, but the denominator is always the
/// number of sources. Containment is case and punctuation sensitive.
pub fn percent_source_copy<S: AsRef<str>, T: AsRef<str>>(
    sources: &[S],
    translations: &[T],
) -> Result<f64> {
    let copies = sources
        .iter()
        .zip(translations)
        .filter(|(s, t)| is_source_copy(s.as_ref(), t.as_ref()))
        .count();
    percentage(copies, sources.len(), "source_copy")
}

pub fn is_source_copy(source: &str, translation: &str) -> bool {
    translation.trim().contains(source.trim())
}

/// Whether `s` is made of one shorter pattern repeated, e.g. `abab`.
///
/// Uses the rotation test: `s` is periodic iff it occurs inside `s + s` with
/// the first and last character removed. Empty and one-character strings are
/// never repeated.
pub fn is_repeated_substring(s: &str) -> bool {
    let mut chars = s.chars();
    let (first, last) = match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => (first, last),
        _ => return false,
    };

    let doubled = format!("{s}{s}");
    let inner = &doubled[first.len_utf8()..doubled.len() - last.len_utf8()];
    inner.contains(s)
}
