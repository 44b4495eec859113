//! Source offsets of segments
//!
//! Every segment remembers where it came from in the statement text so that a
//! rewriter can splice replacement text in without reformatting the rest.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive character range in the statement text.
///
/// `start` is the offset of the first character and `stop` the offset of the
/// last one, so a single-character token has `start == stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub stop: usize,
}

impl Span {
    pub fn new(start: usize, stop: usize) -> Self {
        Self { start, stop }
    }

    /// Span covering one character.
    pub fn at(offset: usize) -> Self {
        Self {
            start: offset,
            stop: offset,
        }
    }

    /// Number of characters covered; zero for an inverted span.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.stop - self.start + 1
    }

    /// Inverted spans (`stop < start`) cover nothing.
    pub fn is_empty(&self) -> bool {
        self.stop < self.start
    }

    /// Checks whether `offset` falls inside the span.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.stop
    }

    /// Checks whether `other` lies completely inside this span.
    pub fn encloses(&self, other: Span) -> bool {
        self.start <= other.start && other.stop <= self.stop
    }

    /// Smallest span covering both spans.
    pub fn merge(&self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.stop.max(other.stop))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.stop)
    }
}

/// Conversion into a [`Span`]
pub trait ToSpan {
    fn to_span(&self) -> Span;
}

impl ToSpan for Span {
    fn to_span(&self) -> Span {
        *self
    }
}

impl ToSpan for (usize, usize) {
    fn to_span(&self) -> Span {
        Span::new(self.0, self.1)
    }
}
