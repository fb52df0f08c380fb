/// A marker for a place in a sequence which can be moved forward one step at a time.
///
/// Two positions compare equal if and only if they refer to the same place in the same sequence.
/// The end of a sequence is represented by a position one past its final element, which must never
/// be read.
pub trait Position: Clone + PartialEq {
    /// The value produced when reading the position, usually a reference into the sequence.
    type Item;

    /// Reads the element at this position.
    ///
    /// # Panics
    /// Implementations may panic if the position is at (or past) the end of its sequence.
    fn get(&self) -> Self::Item;

    /// Moves the position forward by one element.
    fn step_forward(&mut self);
}

/// A [`Position`] which can also be moved backward.
pub trait BidirectionalPosition: Position {
    /// Moves the position backward by one element.
    fn step_backward(&mut self);
}

/// Returns the position following `pos`.
///
/// # Examples
/// ```
/// # use enumeration::position::{self, Position, SlicePos};
/// let values = [1, 2, 3];
/// let second = position::next(SlicePos::start(&values));
/// assert_eq!(*second.get(), 2);
/// ```
pub fn next<P: Position>(mut pos: P) -> P {
    pos.step_forward();
    pos
}

/// Returns the position preceding `pos`.
///
/// # Examples
/// ```
/// # use enumeration::position::{self, Position, SlicePos};
/// let values = [1, 2, 3];
/// let last = position::prev(SlicePos::end(&values));
/// assert_eq!(*last.get(), 3);
/// ```
pub fn prev<P: BidirectionalPosition>(mut pos: P) -> P {
    pos.step_backward();
    pos
}
