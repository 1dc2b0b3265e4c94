//! Error types for the shell chrome layer.

use thiserror::Error;

/// Errors produced by shell chrome operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChromeError {
    /// A required collaborator was not supplied to the presenter builder.
    ///
    /// This is fatal to the calling setup code: the presenter cannot operate
    /// without its toolbar, drawer, and chrome provider.
    #[error("required collaborator `{0}` was not provided")]
    MissingCollaborator(&'static str),

    /// An operation was attempted on a presenter that has been disposed.
    ///
    /// This signals a programming error in the host; disposed presenters
    /// never silently proceed.
    #[error("presenter has already been disposed")]
    Disposed,
}

/// Result type for shell chrome operations.
pub type ChromeResult<T> = Result<T, ChromeError>;
