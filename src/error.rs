//! # Error Handling
//!
//! This module defines the error type returned by the session runner. It uses
//! the `thiserror` library so every variant renders as a single readable line,
//! which is exactly what the binary prints after the `Error: ` prefix.
//!
//! Failures of the simulated work step are not represented here: they are
//! reported inside the interactive session and surface as
//! [`Outcome::Failed`](crate::session::Outcome::Failed) instead of an error.

use thiserror::Error;

/// Main error type for starter-cli operations
#[derive(Error, Debug)]
pub enum Error {
    /// The selection prompt failed for a reason other than cancellation,
    /// e.g. stdin is not attached to a terminal.
    #[error("{0}")]
    Prompt(#[from] dialoguer::Error),

    /// Writing to the output stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for starter-cli operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_prompt_error_display_wraps_io_message() {
        let err = Error::from(dialoguer::Error::from(io::Error::new(
            io::ErrorKind::NotConnected,
            "not a terminal",
        )));
        assert_eq!(err.to_string(), "IO error: not a terminal");
    }

    #[test]
    fn test_io_error_display() {
        let err = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "I/O error: pipe closed");
    }
}
