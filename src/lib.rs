//! An enumerate adaptor built on positions rather than iterators.
//!
//! [`enumerate`] takes a sequence and produces a lazy range of `(index, element)` pairs, without
//! copying anything out of the sequence. It is built from three small pieces:
//! - [`position`]: markers for a place in a sequence, which can step forward and sometimes back.
//! - [`cursor`]: a [`Cursor`] pairs a position with a running index. The default Cursor is a
//!   sentinel which compares equal to any cursor that has reached the end of its range, so every
//!   range can share the same end.
//! - [`enumerate`](mod@enumerate): the functions which bind a cursor to a sequence, or to an
//!   explicit pair of positions for sub-ranges and reversed traversal.
//!
//! # Capabilities
//! A cursor can only move backwards if its positions can. This is enforced through the trait bounds
//! on [`Cursor::move_prev`] and [`Rev`], so a forward-only sequence such as a
//! [`ConsList`](cons::ConsList) is rejected at compile time rather than failing at runtime.
//!
//! # Error Handling
//! Reading a cursor which is the sentinel or has run past its end is a bug in the caller, so the
//! plain methods panic with a descriptive message. Where that isn't acceptable, `try_` variants
//! return a [`CursorError`](cursor::CursorError) instead. The error types are small structs that
//! implement [`Error`](std::error::Error), grouped into an enum for static dispatch.
//!
//! # Features
//! - `cons` (default): the forward-only [`cons::ConsList`].
//! - `tracing`: emits `trace` level events through the `tracing` crate when cursors are bound or
//!   when the sentinel is asked to move.
//!
//! # Examples
//! ```
//! use enumeration::{enumerate, enumerate_between, Rev};
//! use enumeration::position::{self, SlicePos};
//!
//! let values = vec![123, 0, 1, 2, 3, 4, 5, 42];
//!
//! for (index, value) in enumerate(&values) {
//!     println!("{index} -> {value}");
//! }
//!
//! let reversed: Vec<_> = enumerate(Rev(&values)).map(|(i, v)| (i, *v)).collect();
//! assert_eq!(reversed[0], (0, 42));
//!
//! let inner = enumerate_between(
//!     position::next(SlicePos::start(&values)),
//!     position::prev(SlicePos::end(&values)),
//! );
//! assert_eq!(inner.count(), 6);
//! ```

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "cons")]
pub mod cons;
pub mod cursor;
pub mod enumerate;
pub mod position;

pub(crate) mod util;

#[doc(inline)]
pub use cursor::Cursor;
#[doc(inline)]
pub use enumerate::{Enumerate, Rev, Sequence, enumerate, enumerate_between};
