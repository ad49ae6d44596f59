//! Dotted path splitting and array index parsing.
//!
//! A path is split on every `.`; there is no escaping. A key that itself
//! contains a `.` can therefore never be addressed, and empty segments (`"a..b"`,
//! a trailing `.`) are passed through as `""` and fail whatever lookup they hit.
//!
//! Array segments are parsed in two ranges:
//!
//! - **Navigation and overwrite** accept `0..=32767` (non-negative `i16`).
//! - **Removal** accepts any `usize` written as bare digits; out-of-bounds
//!   indices are still rejected by the bounds check that follows.
//!
//! Navigation parses like a signed integer, so `"+1"` selects index 1 and
//! `"-0"` selects index 0. Removal rejects any sign prefix.

use crate::error::{DjsonError, Result};

/// Largest index accepted while walking a path or overwriting an element.
pub const MAX_INDEX: usize = i16::MAX as usize;

/// A borrowed dotted path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Path<'p> {
    raw: &'p str,
}

impl<'p> Path<'p> {
    pub fn parse(raw: &'p str) -> Self {
        Self { raw }
    }

    pub fn as_str(&self) -> &'p str {
        self.raw
    }

    /// Segments from left to right. Always yields at least one segment.
    pub fn segments(&self) -> std::str::Split<'p, char> {
        self.raw.split('.')
    }

    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Split at the last `.` into the parent path and the terminal segment.
    ///
    /// The parent is `None` for a single-segment path, meaning the parent is
    /// the root document itself.
    ///
    /// ```
    /// use djson_core::Path;
    ///
    /// let (parent, last) = Path::parse("a.b.1").split_last();
    /// assert_eq!(parent.map(|p| p.as_str()), Some("a.b"));
    /// assert_eq!(last, "1");
    /// ```
    pub fn split_last(&self) -> (Option<Path<'p>>, &'p str) {
        match self.raw.rsplit_once('.') {
            Some((parent, last)) => (Some(Path::parse(parent)), last),
            None => (None, self.raw),
        }
    }
}

impl<'p> From<&'p str> for Path<'p> {
    fn from(raw: &'p str) -> Self {
        Path::parse(raw)
    }
}

/// Parse a segment as an array index for navigation or overwrite.
pub fn parse_index(segment: &str) -> Result<usize> {
    match segment.parse::<i16>() {
        Ok(n) if n >= 0 => Ok(n as usize),
        _ => Err(DjsonError::IndexParse {
            segment: segment.to_owned(),
        }),
    }
}

/// Parse a segment as an array index for removal.
///
/// Only bare digits are accepted; a `+` or `-` sign is rejected.
pub fn parse_removal_index(segment: &str) -> Result<usize> {
    let unsigned = segment.bytes().next().is_some_and(|b| b.is_ascii_digit());
    match segment.parse::<usize>() {
        Ok(n) if unsigned => Ok(n),
        _ => Err(DjsonError::IndexParse {
            segment: segment.to_owned(),
        }),
    }
}
