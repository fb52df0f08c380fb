use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps an [`Ok`] value, otherwise panics with the message of the contained error. Only
    /// available for error types, so that the panic message is always the error's own [`Display`]
    /// output.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    ///
    /// [`Display`]: std::fmt::Display
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}
