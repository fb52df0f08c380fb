//! The enumerate adaptor: [`enumerate`] and [`enumerate_between`] wrap a sequence, or a pair of
//! positions, in an [`Enumerate`] range which yields `(index, element)` pairs.
//!
//! Nothing is copied out of the sequence. The range only holds positions, which borrow from the
//! sequence they point into, so the borrow checker ensures a range never outlives a temporary
//! sequence it was built from.

mod range;
mod sequence;

pub use range::*;
pub use sequence::*;
