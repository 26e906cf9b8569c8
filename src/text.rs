//! Text helpers used to normalize color input.
//!
//! Every helper is total: missing prefixes, suffixes or substrings leave the
//! input untouched, and unparsable numbers fall back to zero.

use std::borrow::Cow;

/// Extension trait with fail-safe trimming and parsing helpers for `str`
pub trait TextExt {
    /// Trims leading and trailing whitespace, newlines included
    fn trimmed(&self) -> &str;

    /// Length in Unicode scalar values rather than bytes
    fn char_len(&self) -> usize;

    /// Strips `prefix` if present
    fn removing_prefix(&self, prefix: &str) -> &str;

    /// Strips `suffix` if present
    fn removing_suffix(&self, suffix: &str) -> &str;

    /// Removes the first occurrence of `needle`, borrowing when there is none
    fn removing_first_occurrence(&self, needle: &str) -> Cow<'_, str>;

    /// Parses the trimmed text as an integer, or 0
    fn to_fail_safe_int(&self) -> i64;

    /// Parses the trimmed text as a finite float, or 0.0
    fn to_fail_safe_float(&self) -> f32;
}

impl TextExt for str {
    #[inline]
    fn trimmed(&self) -> &str {
        self.trim()
    }

    #[inline]
    fn char_len(&self) -> usize {
        self.chars().count()
    }

    fn removing_prefix(&self, prefix: &str) -> &str {
        self.strip_prefix(prefix).unwrap_or(self)
    }

    fn removing_suffix(&self, suffix: &str) -> &str {
        self.strip_suffix(suffix).unwrap_or(self)
    }

    fn removing_first_occurrence(&self, needle: &str) -> Cow<'_, str> {
        if needle.is_empty() || !self.contains(needle) {
            return Cow::Borrowed(self);
        }
        Cow::Owned(self.replacen(needle, "", 1))
    }

    fn to_fail_safe_int(&self) -> i64 {
        self.trim().parse().unwrap_or(0)
    }

    fn to_fail_safe_float(&self) -> f32 {
        self.trim()
            .parse()
            .ok()
            .filter(|v: &f32| v.is_finite())
            .unwrap_or(0.0)
    }
}
