use std::fmt::{self, Debug, Formatter};
use std::ptr;

use super::{BidirectionalPosition, Position};
use crate::util::error::{BeforeStart, PastEnd};
use crate::util::result::ResultExtension;

/// A bidirectional [`Position`] within a borrowed slice.
///
/// A SlicePos remembers the slice it was created from, so that positions into two different slices
/// are never equal, even if the slices hold the same values. Slices are identified by address and
/// length.
///
/// Because zero-sized types and empty slices don't have unique addresses, two distinct slices of
/// either kind may compare as the same slice.
pub struct SlicePos<'a, T> {
    pub(crate) slice: &'a [T],
    pub(crate) offset: usize,
}

impl<'a, T> SlicePos<'a, T> {
    /// Creates a position at the first element of `slice`.
    pub const fn start(slice: &'a [T]) -> SlicePos<'a, T> {
        SlicePos { slice, offset: 0 }
    }

    /// Creates a position one past the last element of `slice`.
    pub const fn end(slice: &'a [T]) -> SlicePos<'a, T> {
        SlicePos {
            slice,
            offset: slice.len(),
        }
    }

    /// Creates a position at `offset` within `slice`. The offset isn't checked until the position
    /// is read.
    pub const fn at(slice: &'a [T], offset: usize) -> SlicePos<'a, T> {
        SlicePos { slice, offset }
    }

    /// Returns the offset of this position from the start of its slice.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the slice this position points into.
    pub const fn slice(&self) -> &'a [T] {
        self.slice
    }
}

impl<'a, T> Position for SlicePos<'a, T> {
    type Item = &'a T;

    /// Returns a reference to the element at this position.
    ///
    /// # Panics
    /// Panics if the position is at or past the end of its slice.
    fn get(&self) -> Self::Item {
        self.slice.get(self.offset).ok_or(PastEnd).throw()
    }

    fn step_forward(&mut self) {
        self.offset += 1;
    }
}

impl<'a, T> BidirectionalPosition for SlicePos<'a, T> {
    /// # Panics
    /// Panics if the position is already at the start of its slice.
    fn step_backward(&mut self) {
        self.offset = self.offset.checked_sub(1).ok_or(BeforeStart).throw();
    }
}

impl<'a, T> Clone for SlicePos<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SlicePos<'a, T> {}

impl<'a, T> PartialEq for SlicePos<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.slice, other.slice) && self.offset == other.offset
    }
}

impl<'a, T> Eq for SlicePos<'a, T> {}

impl<'a, T> Debug for SlicePos<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlicePos")
            .field("slice", &self.slice.as_ptr())
            .field("len", &self.slice.len())
            .field("offset", &self.offset)
            .finish()
    }
}
