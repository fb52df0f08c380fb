//! The enumerating [`Cursor`], pairing a running index with a [`Position`](crate::position::Position).

mod cursor;
mod tests;

pub use cursor::*;
pub use crate::util::error::{BeforeStart, CursorError, PastEnd, SentinelAccess};
