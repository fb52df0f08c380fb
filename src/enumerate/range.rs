use std::iter::FusedIterator;

use super::Sequence;
use crate::cursor::Cursor;
use crate::position::Position;

/// A range of `(index, element)` pairs, bounded by a begin [`Cursor`] and the end sentinel. See
/// [`enumerate`] and [`enumerate_between`].
///
/// Iteration follows the usual cursor protocol: compare the begin cursor against the end, read it,
/// then advance it.
#[derive(Debug, Clone)]
pub struct Enumerate<P> {
    pub(crate) begin: Cursor<P>,
    pub(crate) end: Cursor<P>,
}

impl<P: Position> Enumerate<P> {
    /// Returns a copy of the cursor at the front of the remaining range.
    pub fn begin(&self) -> Cursor<P> {
        self.begin.clone()
    }

    /// Returns a copy of the end cursor, which is always the sentinel.
    pub fn end(&self) -> Cursor<P> {
        self.end.clone()
    }

    /// Splits the range into its begin and end cursors.
    pub fn into_cursors(self) -> (Cursor<P>, Cursor<P>) {
        (self.begin, self.end)
    }
}

impl<P: Position> Iterator for Enumerate<P> {
    type Item = (usize, P::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.begin == self.end {
            return None;
        }
        let item = self.begin.read();
        self.begin.move_next();
        Some(item)
    }
}

impl<P: Position> FusedIterator for Enumerate<P> {}

/// Enumerates every element of `sequence`, pairing each with its index.
///
/// # Examples
/// ```
/// # use enumeration::enumerate;
/// let values = vec![123, 0, 42];
/// let pairs: Vec<_> = enumerate(&values).collect();
/// assert_eq!(pairs, [(0, &123), (1, &0), (2, &42)]);
/// ```
///
/// A temporary can be enumerated for as long as it lives:
/// ```
/// # use enumeration::enumerate;
/// for (index, value) in enumerate(&vec![-1, -2]) {
///     assert_eq!(*value, -(index as i32) - 1);
/// }
/// ```
///
/// But the range can't outlive it:
/// ```compile_fail
/// # use enumeration::enumerate;
/// let range = enumerate(&vec![-1, -2]);
/// drop(range.count());
/// ```
pub fn enumerate<S: Sequence>(sequence: S) -> Enumerate<S::Pos> {
    let (start, end) = sequence.bounds();
    enumerate_between(start, end)
}

/// Enumerates the elements from `start` up to (but excluding) `end`. Indices start from 0 at
/// `start`, wherever that is within the underlying sequence.
///
/// # Examples
/// ```
/// # use enumeration::enumerate_between;
/// # use enumeration::position::{self, SlicePos};
/// let values = [123, 0, 1, 42];
/// let inner = enumerate_between(
///     position::next(SlicePos::start(&values)),
///     position::prev(SlicePos::end(&values)),
/// );
/// assert_eq!(inner.collect::<Vec<_>>(), [(0, &0), (1, &1)]);
/// ```
pub fn enumerate_between<P: Position>(start: P, end: P) -> Enumerate<P> {
    Enumerate {
        begin: Cursor::new(start, end),
        end: Cursor::sentinel(),
    }
}
