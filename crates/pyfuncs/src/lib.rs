//! Python-style iteration helpers.
//!
//! [`range`] walks an ascending run of integers and [`zip()`] walks several
//! indexable containers side by side, stopping at the shortest one.
//!
//! ```
//! use pyfuncs::{range, zip};
//!
//! let numbers = [1, 2, 3];
//! let letters = ["a", "b"];
//!
//! let squares: Vec<_> = range(3).into_iter().map(|i| i * i).collect();
//! assert_eq!(squares, [0, 1, 4]);
//!
//! let pairs: Vec<_> = zip((&numbers, &letters)).iter().collect();
//! assert_eq!(pairs, [(&1, &"a"), (&2, &"b")]);
//! ```

pub mod errors;
pub mod indexable;
pub mod range;
pub mod zip;

pub use errors::InvertedRangeError;
pub use indexable::{Indexable, Sources};
pub use range::{Range, RangeIter, range};
pub use zip::{Zip, ZipIter, zip};

/// Builds a [`Range`] with either one bound or two.
///
/// `range!(end)` counts from zero, `range!(start, end)` from `start`. Both
/// panic when `start > end`.
///
/// ```
/// let collected: Vec<usize> = pyfuncs::range!(2, 5).into_iter().collect();
/// assert_eq!(collected, [2, 3, 4]);
/// ```
#[macro_export]
macro_rules! range {
    ($end:expr $(,)?) => {
        $crate::range($end)
    };
    ($start:expr, $end:expr $(,)?) => {
        $crate::Range::new($start, $end)
    };
}

/// Borrows every argument and zips them.
///
/// `zip!(a, b, c)` is shorthand for `zip((&a, &b, &c))`.
///
/// ```
/// let ids = vec![7, 8, 9];
/// let names = ["x", "y", "z"];
///
/// for (id, name) in &pyfuncs::zip!(ids, names) {
///     assert!(*id >= 7 && !name.is_empty());
/// }
/// ```
#[macro_export]
macro_rules! zip {
    ($($source:expr),+ $(,)?) => {
        $crate::zip(($(&$source,)+))
    };
}
