#![warn(missing_docs)]

pub mod error;
pub mod log;
pub mod panic;
pub mod result;
