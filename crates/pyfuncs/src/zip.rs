use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use crate::indexable::Sources;

/// Walks several indexable containers side by side.
///
/// `sources` is a tuple of borrowed containers, `(&a, &b, ...)`. The
/// resulting descriptor stops at the shortest container; extra elements of
/// longer containers are skipped.
pub fn zip<S: Sources>(sources: S) -> Zip<S> {
    Zip::new(sources)
}

/// Borrowed containers that are walked in lockstep.
///
/// The containers are not owned and must outlive the descriptor along with
/// every traversal started from it. The length is taken once, when the
/// descriptor is built.
///
/// Each copy of a `Zip` is its own descriptor: traversal states taken from a
/// copy never compare equal to states taken from the original.
#[derive(Clone, Copy)]
pub struct Zip<S> {
    sources: S,
    len: usize,
}

impl<S: Sources> Zip<S> {
    pub fn new(sources: S) -> Self {
        let len = sources.min_len();

        if sources.same_len() {
            log::trace!("zip over {} sources of length {len}", S::ARITY);
        } else {
            log::debug!(
                "zip over {} sources of unequal length, truncated to {len}",
                S::ARITY
            );
        }

        Self { sources, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn arity(&self) -> usize {
        S::ARITY
    }

    pub fn sources(&self) -> S {
        self.sources
    }

    /// The tuple at `index`, or `None` when `index` is past the shortest
    /// container.
    pub fn get(&self, index: usize) -> Option<S::Item> {
        (index < self.len).then(|| self.sources.fetch(index))
    }

    pub fn iter(&self) -> ZipIter<'_, S> {
        ZipIter {
            zip: self,
            index: 0,
            end: self.len,
        }
    }

    /// A fresh pair of traversal states, one at index zero and one at the
    /// length.
    pub fn cursors(&self) -> (ZipIter<'_, S>, ZipIter<'_, S>) {
        let end = ZipIter {
            zip: self,
            index: self.len,
            end: self.len,
        };

        (self.iter(), end)
    }
}

impl<S: Sources> fmt::Debug for Zip<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zip")
            .field("arity", &S::ARITY)
            .field("len", &self.len)
            .finish()
    }
}

impl<'z, S: Sources> IntoIterator for &'z Zip<S> {
    type Item = S::Item;
    type IntoIter = ZipIter<'z, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A position inside a [`Zip`].
///
/// States compare equal only when they come from the very same descriptor
/// and sit on the same index. States from two separate `zip` calls are never
/// equal, even over the same containers.
pub struct ZipIter<'z, S> {
    zip: &'z Zip<S>,
    index: usize,
    end: usize,
}

impl<S: Sources> ZipIter<'_, S> {
    pub fn position(&self) -> usize {
        self.index
    }

    /// The tuple this state currently points at, or `None` at the end.
    pub fn get(&self) -> Option<S::Item> {
        (self.index < self.end).then(|| self.zip.sources.fetch(self.index))
    }

    pub fn advance(&mut self) {
        self.index = self.index.saturating_add(1);
    }
}

impl<S> Clone for ZipIter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            zip: self.zip,
            index: self.index,
            end: self.end,
        }
    }
}

impl<S> fmt::Debug for ZipIter<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZipIter")
            .field("zip", &ptr::from_ref(self.zip))
            .field("index", &self.index)
            .field("end", &self.end)
            .finish()
    }
}

impl<S> PartialEq for ZipIter<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.zip, other.zip) && self.index == other.index
    }
}

impl<S> Eq for ZipIter<'_, S> {}

impl<S: Sources> Iterator for ZipIter<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.index >= self.end {
            return None;
        }

        let item = self.zip.sources.fetch(self.index);
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<S::Item> {
        if self.index >= self.end {
            return None;
        }

        self.index = self.index.saturating_add(n).min(self.end);
        self.next()
    }
}

impl<S: Sources> DoubleEndedIterator for ZipIter<'_, S> {
    fn next_back(&mut self) -> Option<S::Item> {
        if self.index >= self.end {
            return None;
        }

        self.end -= 1;
        Some(self.zip.sources.fetch(self.end))
    }
}

impl<S: Sources> ExactSizeIterator for ZipIter<'_, S> {
    fn len(&self) -> usize {
        self.end.saturating_sub(self.index)
    }
}

impl<S: Sources> FusedIterator for ZipIter<'_, S> {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{ZipIter, zip};

    #[test]
    fn test_zip_equal_lengths() {
        let numbers = [1, 2, 3];
        let letters = ["a", "b", "c"];

        let pairs: Vec<_> = zip((&numbers, &letters)).iter().collect();
        assert_eq!(pairs, vec![(&1, &"a"), (&2, &"b"), (&3, &"c")]);
    }

    #[test]
    fn test_zip_truncates_to_shortest() {
        let numbers = vec![1, 2];
        let letters = ["a", "b", "c"];
        let zipped = zip((&numbers, &letters));

        assert_eq!(zipped.len(), 2);
        assert_eq!(zipped.arity(), 2);
        assert_eq!(zipped.iter().collect::<Vec<_>>(), vec![(&1, &"a"), (&2, &"b")]);
    }

    #[test]
    fn test_zip_empty_source() {
        let numbers = [1, 2, 3];
        let empty: Vec<char> = Vec::new();
        let zipped = zip((&numbers, &empty, &numbers));

        assert!(zipped.is_empty());
        assert_eq!(zipped.iter().next(), None);
        assert_eq!(zipped.get(0), None);
    }

    #[test]
    fn test_zip_cursors() {
        let a = [10, 20, 30];
        let b = [1.0, 2.0, 3.0];
        let zipped = zip((&a, &b));
        let (mut cursor, end) = zipped.cursors();
        let mut sums = Vec::new();

        while cursor != end {
            let (x, y) = cursor.get().unwrap();
            sums.push(f64::from(*x) + y);
            cursor.advance();
        }

        assert_eq!(sums, vec![11.0, 22.0, 33.0]);
        assert_eq!(end.get(), None);
        assert_eq!(end.position(), 3);
    }

    #[test]
    fn test_zip_iter_equality_uses_descriptor_identity() {
        let a = [1, 2, 3];
        let b = [4, 5, 6];
        let first = zip((&a, &b));
        let second = zip((&a, &b));

        assert_eq!(first.iter(), first.iter());
        assert!(first.iter() != second.iter());

        let mut advanced = first.iter();
        advanced.advance();
        assert!(advanced != first.iter());
    }

    #[test]
    fn test_zip_reverse() {
        let a = [1, 2, 3, 4];
        let b = ["w", "x", "y"];

        let reversed: Vec<_> = zip((&a, &b)).iter().rev().collect();
        assert_eq!(reversed, vec![(&3, &"y"), (&2, &"x"), (&1, &"w")]);
    }

    #[test]
    fn test_zip_single_source() {
        let a = vec![String::from("only")];
        let zipped = zip((&a,));

        assert_eq!(zipped.get(0), Some((&String::from("only"),)));
        assert_eq!(zipped.iter().len(), 1);
    }

    #[test]
    fn test_zip_get_after_next_back() {
        let a = [1, 2];
        let b = [3, 4];
        let zipped = zip((&a, &b));
        let mut iter = zipped.iter();

        assert_eq!(iter.next_back(), Some((&2, &4)));
        assert_eq!(iter.get(), Some((&1, &3)));
        assert_eq!(iter.next(), Some((&1, &3)));
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.get(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_zip_advance_saturates() {
        let a = [1, 2, 3];
        let zipped = zip((&a,));
        let mut iter = ZipIter {
            zip: &zipped,
            index: usize::MAX,
            end: zipped.len(),
        };

        iter.advance();
        assert_eq!(iter.position(), usize::MAX);
        assert_eq!(iter.get(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_zip_nth_leaves_advanced_cursor_in_place() {
        let a = [1, 2];
        let zipped = zip((&a,));
        let (_, mut end) = zipped.cursors();
        end.advance();

        assert_eq!(end.nth(0), None);
        assert_eq!(end.position(), 3);
    }

    #[test]
    fn test_zip_copy_is_a_distinct_descriptor() {
        let a = [1, 2];
        let zipped = zip((&a,));
        let copy = zipped;

        assert_eq!(copy.len(), zipped.len());
        assert!(zipped.iter() != copy.iter());
    }
}
