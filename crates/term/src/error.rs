//! Session-level errors.

use std::io;

/// Fatal errors; each one ends the session.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    /// Raw mode could not be entered or the size could not be queried.
    #[error("terminal unavailable: {0}")]
    TerminalUnavailable(#[source] io::Error),

    /// The input stream failed or closed mid-session.
    #[error("error reading input: {0}")]
    InputReadFailure(#[source] io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages_and_sources() {
        let err = TermError::TerminalUnavailable(io::Error::other("not a tty"));
        assert_eq!(err.to_string(), "terminal unavailable: not a tty");
        assert!(err.source().is_some());

        let err = TermError::InputReadFailure(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
        assert_eq!(err.to_string(), "error reading input: input stream closed");
    }

    #[test]
    fn test_io_conversion() {
        let err: TermError = io::Error::other("boom").into();
        assert!(matches!(err, TermError::Io(_)));
    }
}
