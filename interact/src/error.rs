//! # Errors
//!
//! Every fallible operation of an [`Actor`](crate::Actor) returns an
//! [`InteractError`]. Callers can tell apart a broken stream, a rejected
//! answer and an operator who gave up.
//!
//! ```rust
//! use interact::InteractError;
//!
//! fn describe(err: &InteractError) -> &'static str {
//!     match err {
//!         InteractError::Io(_) => "the input or output stream failed",
//!         InteractError::Validation(_) => "the answer was rejected",
//!         InteractError::Canceled => "the operator gave up",
//!     }
//! }
//!
//! assert_eq!(describe(&InteractError::Canceled), "the operator gave up");
//! ```
use std::io;
use thiserror::Error;

/// Errors returned by prompts and confirmations.
///
/// - [`Io`](InteractError::Io): reading from the input or writing to the output
///   failed. Running out of input shows up as [`io::ErrorKind::UnexpectedEof`].
/// - [`Validation`](InteractError::Validation): one of the checks rejected the
///   answer. Holds the check's message.
/// - [`Canceled`](InteractError::Canceled): the operator declined to try again
///   after a failed answer.
#[derive(Debug, Error)]
pub enum InteractError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{0}")]
    Validation(String),
    #[error("Command aborted")]
    Canceled,
}

impl InteractError {
    /// `true` when the input stream has no more lines to give.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}
