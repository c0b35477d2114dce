//! Error types for Loip operations.
//!
//! A small `thiserror`-based hierarchy covering the two things that can
//! actually go wrong: invalid generation counts and terminal I/O. Clipboard
//! failures exist as a variant but never escape the adapter boundary.

use thiserror::Error;

/// Result type alias for Loip operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Loip operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Generation count must be at least 1.
    ///
    /// A zero character budget would also never terminate the accumulation
    /// loop, so it is rejected up front.
    #[error("count must be at least 1, got {count}")]
    InvalidCount {
        /// The rejected count value.
        count: usize,
    },

    /// Clipboard backend failure. Confined to the clipboard adapter, which
    /// reports it as a `false` copy outcome rather than propagating.
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// I/O errors on the terminal streams.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_count_display() {
        let err = Error::InvalidCount { count: 0 };
        assert_eq!(err.to_string(), "count must be at least 1, got 0");
    }

    #[test]
    fn test_clipboard_display() {
        let err = Error::Clipboard("no display server".to_string());
        assert_eq!(err.to_string(), "clipboard error: no display server");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
