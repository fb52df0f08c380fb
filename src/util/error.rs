use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

/// An error raised when the end sentinel is asked for a value. The sentinel holds no position, so
/// there is nothing for it to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentinelAccess;

impl Display for SentinelAccess {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to read through the end sentinel!")
    }
}

impl Error for SentinelAccess {}

/// An error raised when a position is read after it has reached the end of its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PastEnd;

impl Display for PastEnd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to read past the end of a sequence!")
    }
}

impl Error for PastEnd {}

/// An error raised when a position or cursor is moved back from the first element it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeforeStart;

impl Display for BeforeStart {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to move before the start of a sequence!")
    }
}

impl Error for BeforeStart {}

/// Every way a [`Cursor`](crate::cursor::Cursor) can be misused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum CursorError {
    /// The cursor is the end sentinel.
    SentinelAccess(SentinelAccess),
    /// The cursor has been exhausted.
    PastEnd(PastEnd),
    /// The cursor is at index 0 and can't retreat.
    BeforeStart(BeforeStart),
}
