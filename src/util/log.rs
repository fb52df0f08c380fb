//! Trace events for cursor lifecycles. Compiled away entirely unless the `tracing` feature is on.

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {
        ()
    };
}

pub(crate) use trace;
