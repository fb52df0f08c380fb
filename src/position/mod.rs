//! Position markers: opaque handles to a place in some underlying sequence, roughly equivalent to a
//! pointer into that sequence.
//!
//! Positions come in two capability tiers. Every [`Position`] can step forward, while a
//! [`BidirectionalPosition`] can also step back. Anything built on top of a position (such as a
//! [`Cursor`](crate::cursor::Cursor)) only offers backward movement when the position does, so a
//! forward-only sequence can never be traversed in reverse by accident: it just doesn't compile.
//!
//! Equality between positions is identity, not content. Two positions are equal when they point to
//! the same place in the same sequence.

mod position;
mod reversed;
mod slice;
mod tests;

pub use position::*;
pub use reversed::*;
pub use slice::*;
