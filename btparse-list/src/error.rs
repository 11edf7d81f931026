//! # List Error Type
//!
//! [`ListError`] is the single error surface of the list recognizer. It covers
//! the two ways input can be rejected:
//!
//! - **Lexical**: a character no token rule accepts
//!   ([`ListError::InvalidCharacter`]),
//! - **Syntactic**: a token of the wrong kind for the production being parsed
//!   ([`ListError::UnexpectedToken`]),
//!
//! plus misuse of the speculation protocol ([`ListError::Speculation`]), which
//! indicates a bug in grammar code rather than bad input.
use crate::token::{Expected, ListToken};
use btparse::{MarkerError, Position};
use thiserror::Error;

/// # Examples
/// ```rust
/// # use btparse_list::{parse, ListError};
/// let err = parse("[a, /b = c]").unwrap_err();
/// assert!(matches!(err, ListError::InvalidCharacter { character: '/', .. }));
/// assert_eq!(err.to_string(), "invalid character '/' at 1:5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("invalid character {character:?} at {position}")]
    InvalidCharacter { character: char, position: Position },

    #[error("expecting {expected}; found {found}")]
    UnexpectedToken {
        expected: Expected,
        found: ListToken,
    },

    #[error("speculation error: {0}")]
    Speculation(#[from] MarkerError),
}

impl ListError {
    /// Source position the error points at.
    pub fn position(&self) -> Option<Position> {
        match self {
            ListError::InvalidCharacter { position, .. } => Some(*position),
            ListError::UnexpectedToken { found, .. } => Some(found.span.start),
            ListError::Speculation(_) => None,
        }
    }
}
