use std::iter::FusedIterator;
use std::ops;

use crate::errors::InvertedRangeError;

/// Counts from zero up to, but excluding, `end`.
///
/// Shorthand for `Range::new(0, end)`.
pub fn range(end: usize) -> Range {
    Range::new(0, end)
}

/// An ascending run of integers, `start..end`.
///
/// The descriptor only holds its two bounds. Every call to [`Range::iter`]
/// starts a fresh traversal, so the same `Range` can be walked any number of
/// times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawRange")
)]
pub struct Range {
    start: usize,
    end: usize,
}

impl Range {
    /// Panics when `start > end`.
    #[track_caller]
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "range start {start} is past its end {end}");
        log::trace!("range {start}..{end}");

        Self { start, end }
    }

    pub fn try_new(start: usize, end: usize) -> Result<Self, InvertedRangeError> {
        if start > end {
            return Err(InvertedRangeError::new(start, end));
        }

        Ok(Self::new(start, end))
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, value: usize) -> bool {
        self.start <= value && value < self.end
    }

    pub fn iter(&self) -> RangeIter {
        RangeIter {
            current: self.start,
            end: self.end,
        }
    }

    /// A fresh pair of traversal states, one at `start` and one at `end`.
    ///
    /// Advancing the first until it compares equal to the second visits every
    /// value of the range.
    pub fn cursors(&self) -> (RangeIter, RangeIter) {
        let end = RangeIter {
            current: self.end,
            end: self.end,
        };

        (self.iter(), end)
    }
}

impl From<usize> for Range {
    fn from(end: usize) -> Self {
        range(end)
    }
}

impl TryFrom<ops::Range<usize>> for Range {
    type Error = InvertedRangeError;

    fn try_from(value: ops::Range<usize>) -> Result<Self, Self::Error> {
        Range::try_new(value.start, value.end)
    }
}

impl From<Range> for ops::Range<usize> {
    fn from(value: Range) -> Self {
        value.start..value.end
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRange {
    start: usize,
    end: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRange> for Range {
    type Error = InvertedRangeError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Range::try_new(raw.start, raw.end)
    }
}

impl IntoIterator for Range {
    type Item = usize;
    type IntoIter = RangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Range {
    type Item = usize;
    type IntoIter = RangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A position inside a [`Range`].
///
/// Two states are equal when they sit on the same value; where they stop is
/// not compared.
#[derive(Debug, Clone)]
pub struct RangeIter {
    current: usize,
    end: usize,
}

impl RangeIter {
    /// The value this state currently points at.
    pub fn get(&self) -> usize {
        self.current
    }

    /// Moves one value forward. Stepping past `usize::MAX` stays put.
    pub fn advance(&mut self) {
        self.current = self.current.saturating_add(1);
    }
}

impl PartialEq for RangeIter {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl Eq for RangeIter {}

impl Iterator for RangeIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.current >= self.end {
            return None;
        }

        let value = self.current;
        self.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<usize> {
        if self.current >= self.end {
            return None;
        }

        self.current = self.current.saturating_add(n).min(self.end);
        self.next()
    }

    fn count(self) -> usize {
        self.len()
    }

    fn last(mut self) -> Option<usize> {
        self.next_back()
    }
}

impl DoubleEndedIterator for RangeIter {
    fn next_back(&mut self) -> Option<usize> {
        if self.current >= self.end {
            return None;
        }

        self.end -= 1;
        Some(self.end)
    }
}

impl ExactSizeIterator for RangeIter {
    fn len(&self) -> usize {
        self.end.saturating_sub(self.current)
    }
}

impl FusedIterator for RangeIter {}
