//! Pagination error types.
//!
//! Invalid or missing request parameters never produce an error: they fall
//! back to defaults and clamps. What remains is a small set of failures that
//! must reach the caller:
//!
//! - Malformed queryable input, such as a deferred source that returns more
//!   items than the requested page size
//! - Failures of the backing store, carried unchanged as the error source
//! - Invalid configuration

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// Type alias for boxed errors that are Send + Sync.
pub type BoxedError = Box<dyn StdError + Send + Sync>;

/// Result type alias for pagination operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error kind enumeration for categorizing pagination errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The queryable input cannot be paginated.
    InvalidInput,
    /// The backing store failed while counting or fetching.
    Source,
    /// Configuration-related errors.
    Config,
}

impl ErrorKind {
    /// Returns the error kind as a string for categorization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::Source => "source",
            Self::Config => "config",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pagination error with structured information.
#[derive(Debug, thiserror::Error)]
#[error("{kind} error: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
    #[source]
    source: Option<BoxedError>,
}

impl Error {
    #[inline]
    fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attaches a source error to this error.
    ///
    /// The source is stored as-is, so callers can downcast it back to the
    /// backing store's own error type.
    #[inline]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error kind.
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the attached source error downcast to `E`, if it is one.
    #[must_use]
    pub fn source_as<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.as_deref().and_then(|s| s.downcast_ref::<E>())
    }

    /// Creates a new invalid input error.
    #[inline]
    pub fn invalid_input(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    /// Creates a new backing store error for the named operation.
    #[inline]
    pub fn source_failure(
        operation: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        let operation = operation.into();
        let message = message.into();
        Self::new(ErrorKind::Source, format!("{}: {}", operation, message))
    }

    /// Creates a new configuration error.
    #[inline]
    pub fn config(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Config, message)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn error_kind_display() {
        assert_eq!(ErrorKind::InvalidInput.to_string(), "invalid_input");
        assert_eq!(ErrorKind::Source.to_string(), "source");
        assert_eq!(ErrorKind::Config.to_string(), "config");
    }

    #[test]
    fn error_display_includes_kind_and_message() {
        let error = Error::invalid_input("page has 20 items, page size is 15");
        assert_eq!(
            error.to_string(),
            "invalid_input error: page has 20 items, page size is 15"
        );
        assert_eq!(error.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn source_failure_keeps_original_error() {
        let error = Error::source_failure("count", "connection reset")
            .with_source(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));

        assert_eq!(error.kind(), ErrorKind::Source);
        assert_eq!(error.message(), "count: connection reset");
        assert!(StdError::source(&error).is_some());

        let io_error = error.source_as::<io::Error>().map(io::Error::kind);
        assert_eq!(io_error, Some(io::ErrorKind::ConnectionReset));
        assert!(error.source_as::<fmt::Error>().is_none());
    }
}
