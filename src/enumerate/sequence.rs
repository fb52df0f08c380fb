use crate::position::{BidirectionalPosition, Position, Reversed, SlicePos};

#[cfg(feature = "cons")]
use crate::cons::{ConsList, ConsPos};

/// Anything which can provide a start and end [`Position`] for traversal.
///
/// Sequences are usually references, so that the positions can borrow from the underlying data.
pub trait Sequence {
    /// The type of position marking places in this sequence.
    type Pos: Position;

    /// Returns the position of the first element and the position one past the last element.
    fn bounds(self) -> (Self::Pos, Self::Pos);
}

impl<'a, T> Sequence for &'a [T] {
    type Pos = SlicePos<'a, T>;

    fn bounds(self) -> (Self::Pos, Self::Pos) {
        (SlicePos::start(self), SlicePos::end(self))
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Pos = SlicePos<'a, T>;

    fn bounds(self) -> (Self::Pos, Self::Pos) {
        self.as_slice().bounds()
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Pos = SlicePos<'a, T>;

    fn bounds(self) -> (Self::Pos, Self::Pos) {
        self.as_slice().bounds()
    }
}

#[cfg(feature = "cons")]
impl<'a, T> Sequence for &'a ConsList<T> {
    type Pos = ConsPos<'a, T>;

    fn bounds(self) -> (Self::Pos, Self::Pos) {
        (self.start(), self.end())
    }
}

/// An explicit pair of positions is a sequence in its own right.
impl<P: Position> Sequence for (P, P) {
    type Pos = P;

    fn bounds(self) -> (Self::Pos, Self::Pos) {
        self
    }
}

/// A [`Sequence`] traversed back to front. Only sequences with bidirectional positions can be
/// reversed.
///
/// # Examples
/// ```
/// # use enumeration::{enumerate, Rev};
/// let values = vec![1, 2, 3];
/// let pairs: Vec<_> = enumerate(Rev(&values)).collect();
/// assert_eq!(pairs, [(0, &3), (1, &2), (2, &1)]);
/// ```
///
/// A [`ConsList`](crate::cons::ConsList) can only be walked forwards, so it can't be reversed:
/// ```compile_fail
/// # use enumeration::{enumerate, Rev};
/// # use enumeration::cons::ConsList;
/// let list = ConsList::from_iter([1, 2, 3]);
/// let pairs: Vec<_> = enumerate(Rev(&list)).collect();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Rev<S>(pub S);

impl<S> Sequence for Rev<S>
where
    S: Sequence,
    S::Pos: BidirectionalPosition,
{
    type Pos = Reversed<S::Pos>;

    fn bounds(self) -> (Self::Pos, Self::Pos) {
        let (start, end) = self.0.bounds();
        (Reversed::new(end), Reversed::new(start))
    }
}
