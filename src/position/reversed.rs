use super::{BidirectionalPosition, Position};

/// A [`Position`] adaptor which walks a bidirectional position backwards.
///
/// Like a reverse iterator, a Reversed position wraps a base position one past the element it
/// refers to. Wrapping the end of a sequence therefore gives the start of the reversed sequence, and
/// wrapping the start gives its end.
///
/// # Examples
/// ```
/// # use enumeration::position::{Position, Reversed, SlicePos};
/// let values = [1, 2, 3];
/// let mut pos = Reversed::new(SlicePos::end(&values));
/// assert_eq!(*pos.get(), 3);
/// pos.step_forward();
/// assert_eq!(*pos.get(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reversed<P> {
    base: P,
}

impl<P: BidirectionalPosition> Reversed<P> {
    /// Creates a reversed position over `base`, referring to the element just before it.
    pub const fn new(base: P) -> Reversed<P> {
        Reversed { base }
    }

    /// Returns the wrapped base position.
    pub const fn base(&self) -> &P {
        &self.base
    }

    pub fn into_base(self) -> P {
        self.base
    }
}

impl<P: BidirectionalPosition> Position for Reversed<P> {
    type Item = P::Item;

    fn get(&self) -> Self::Item {
        super::prev(self.base.clone()).get()
    }

    fn step_forward(&mut self) {
        self.base.step_backward();
    }
}

impl<P: BidirectionalPosition> BidirectionalPosition for Reversed<P> {
    fn step_backward(&mut self) {
        self.base.step_forward();
    }
}
