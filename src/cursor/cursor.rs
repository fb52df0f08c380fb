use derive_more::IsVariant;

use crate::position::{BidirectionalPosition, Position};
use crate::util::error::{BeforeStart, CursorError, PastEnd, SentinelAccess};
use crate::util::log::trace;
use crate::util::result::ResultExtension;

/// A cursor over a pair of [`Position`]s that keeps count of how far it has moved.
///
/// A Cursor is either bound to a range, holding its current position and the end of that range, or
/// it is the end sentinel. The sentinel holds nothing, it exists only to be compared against: any
/// bound cursor which has reached the end of its range is equal to it. This means a single
/// [`Cursor::sentinel`] can end any traversal without knowing where the range finishes.
///
/// Two bound cursors are equal when they are at the same index, position and end. Cursors over
/// different sequences are never equal, even when the sequences have the same contents.
///
/// Cursors have value semantics: cloning a cursor copies its index and position, and moving the
/// clone has no effect on the original.
///
/// # Examples
/// ```
/// # use enumeration::cursor::Cursor;
/// # use enumeration::position::SlicePos;
/// let values = [10, 20];
/// let mut cursor = Cursor::new(SlicePos::start(&values), SlicePos::end(&values));
/// assert_eq!(cursor.read(), (0, &10));
/// cursor.move_next();
/// assert_eq!(cursor.read(), (1, &20));
/// cursor.move_next();
/// assert_eq!(cursor, Cursor::sentinel());
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<P> {
    pub(crate) index: usize,
    pub(crate) state: CursorState<P>,
}

#[derive(Debug, Clone, IsVariant)]
pub(crate) enum CursorState<P> {
    Sentinel,
    Bound(CursorContents<P>),
}

#[derive(Debug, Clone)]
pub(crate) struct CursorContents<P> {
    pub pos: P,
    pub end: P,
}

use CursorState::*;

impl<P: Position> CursorContents<P> {
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.end
    }
}

impl<P> Cursor<P> {
    /// Creates the end sentinel. This is also the [`Default`] Cursor.
    pub const fn sentinel() -> Cursor<P> {
        Cursor {
            index: 0,
            state: Sentinel,
        }
    }

    /// Returns the number of elements the cursor has moved past, or [`None`] for the sentinel.
    pub const fn index(&self) -> Option<usize> {
        match self.state {
            Sentinel => None,
            Bound(_) => Some(self.index),
        }
    }

    /// Returns true if this cursor is the end sentinel.
    pub const fn is_sentinel(&self) -> bool {
        self.state.is_sentinel()
    }

    /// Returns true if this cursor is bound to a range.
    pub const fn is_bound(&self) -> bool {
        self.state.is_bound()
    }

    /// Returns the current position of a bound cursor.
    pub const fn position(&self) -> Option<&P> {
        match &self.state {
            Sentinel => None,
            Bound(CursorContents { pos, .. }) => Some(pos),
        }
    }

    /// Returns the end of the range a bound cursor is traversing.
    pub const fn end_position(&self) -> Option<&P> {
        match &self.state {
            Sentinel => None,
            Bound(CursorContents { end, .. }) => Some(end),
        }
    }
}

impl<P: Position> Cursor<P> {
    /// Creates a cursor at index 0, positioned at `start` and bounded by `end`. Both positions must
    /// belong to the same sequence, with `end` reachable from `start`.
    pub fn new(start: P, end: P) -> Cursor<P> {
        trace!("binding enumerating cursor");
        Cursor {
            index: 0,
            state: Bound(CursorContents { pos: start, end }),
        }
    }

    /// Returns true if the cursor is bound and has reached the end of its range. An exhausted
    /// cursor is equal to the sentinel.
    pub fn is_exhausted(&self) -> bool {
        match &self.state {
            Sentinel => false,
            Bound(contents) => contents.is_exhausted(),
        }
    }

    /// Reads the current index and element, or returns an error if the cursor is the sentinel or is
    /// exhausted.
    ///
    /// # Examples
    /// ```
    /// # use enumeration::cursor::{Cursor, CursorError};
    /// # use enumeration::position::SlicePos;
    /// let empty: [u8; 0] = [];
    /// let cursor = Cursor::new(SlicePos::start(&empty), SlicePos::end(&empty));
    /// assert!(cursor.try_read().is_err_and(|e| e.is_past_end()));
    /// assert!(Cursor::<SlicePos<u8>>::sentinel().try_read().is_err_and(|e| e.is_sentinel_access()));
    /// ```
    pub fn try_read(&self) -> Result<(usize, P::Item), CursorError> {
        match &self.state {
            Sentinel => Err(SentinelAccess.into()),
            Bound(contents) if contents.is_exhausted() => Err(PastEnd.into()),
            Bound(CursorContents { pos, .. }) => Ok((self.index, pos.get())),
        }
    }

    /// Reads the current index and element.
    ///
    /// The cursor must be checked against the end of its range before reading, the same as any
    /// other traversal.
    ///
    /// # Panics
    /// Panics if the cursor is the sentinel or has been exhausted.
    pub fn read(&self) -> (usize, P::Item) {
        self.try_read().throw()
    }

    /// Advances the cursor by one element, incrementing its index. Does nothing for the sentinel.
    ///
    /// Moving an exhausted cursor isn't checked, whether that is valid depends on the position.
    pub fn move_next(&mut self) -> &mut Self {
        match &mut self.state {
            Sentinel => trace!("ignoring advance of the end sentinel"),
            Bound(CursorContents { pos, .. }) => {
                self.index += 1;
                pos.step_forward();
            },
        }
        self
    }
}

impl<P: BidirectionalPosition> Cursor<P> {
    /// Moves the cursor back by one element, decrementing its index. Does nothing for the sentinel.
    ///
    /// # Panics
    /// Panics if the cursor is at index 0, as there is no previous element in its range.
    pub fn move_prev(&mut self) -> &mut Self {
        match &mut self.state {
            Sentinel => trace!("ignoring retreat of the end sentinel"),
            Bound(CursorContents { pos, .. }) => {
                self.index = self.index.checked_sub(1).ok_or(BeforeStart).throw();
                pos.step_backward();
            },
        }
        self
    }
}

impl<P> Default for Cursor<P> {
    fn default() -> Self {
        Self::sentinel()
    }
}

impl<P: Position> PartialEq for Cursor<P> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (Sentinel, Sentinel) => true,
            (Bound(contents), Sentinel) | (Sentinel, Bound(contents)) => contents.is_exhausted(),
            (Bound(a), Bound(b)) => self.index == other.index && a.pos == b.pos && a.end == b.end,
        }
    }
}
