//! Error types for form execution.

use thiserror::Error;

/// Errors that can occur while running a form.
///
/// Validation failures produced while the user is typing never surface
/// here: they live on the field (see [`Field::error`](crate::Field::error))
/// and only block navigation. This type covers the ways a whole run can end
/// without a result.
///
/// # Recovery Strategies
///
/// | Error Variant | Recovery Strategy |
/// |--------------|-------------------|
/// | [`UserAborted`](FormError::UserAborted) | Normal exit, not an error condition |
/// | [`Validation`](FormError::Validation) | Show error message, allow retry |
/// | [`Io`](FormError::Io) | Check terminal, fall back to accessible mode |
///
/// # Note on Clone and PartialEq
///
/// The `Io` variant stores a `String` message rather than the underlying
/// `io::Error` so the type can derive `Clone` and `PartialEq`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// User aborted the form with Ctrl+C.
    ///
    /// Applications should treat this as a normal exit path.
    #[error("user aborted")]
    UserAborted,

    /// A value was rejected by a field's validator.
    ///
    /// Recoverable: show the message and let the user correct their input.
    #[error("validation error: {0}")]
    Validation(String),

    /// IO error during form operations.
    ///
    /// Occurs mostly in accessible mode, where stdin/stdout are read and
    /// written line by line.
    #[error("io error: {0}")]
    Io(String),
}

impl FormError {
    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an IO error with the given message.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Returns true if this is a user-initiated abort.
    pub fn is_user_abort(&self) -> bool {
        matches!(self, Self::UserAborted)
    }

    /// Returns true if this error is recoverable (validation errors).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FormError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// A specialized [`Result`] type for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_error_display() {
        assert_eq!(FormError::UserAborted.to_string(), "user aborted");
        assert_eq!(
            FormError::validation("too long").to_string(),
            "validation error: too long"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: FormError = io.into();
        assert_eq!(err, FormError::Io("pipe closed".into()));
        assert!(!err.is_recoverable());
    }
}
