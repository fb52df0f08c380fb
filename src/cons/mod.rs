//! A singly-linked cons list and its forward-only [`ConsPos`] position.
//!
//! [`ConsList`] can only be walked front to back, which makes it the natural example of a sequence
//! whose positions are a plain [`Position`](crate::position::Position) and never a
//! [`BidirectionalPosition`](crate::position::BidirectionalPosition).

mod list;
mod position;
mod tests;

pub use list::*;
pub use position::*;
