//! Errors raised by the speculation protocol itself.
//!
//! Grammar failures (a token that does not fit a production, a character no
//! lexer rule accepts) belong to the concrete language and are defined there.
//! [`MarkerError`] covers misuse of the marker stack: releasing without a
//! mark, seeking to a position the buffer has already discarded, or an
//! attempt that leaves markers outstanding. These signal a bug in the grammar
//! code, not bad input. The buffer remembers each one it raises, so
//! [`Parser::speculate`] re-raises it instead of treating the attempt as a
//! rejected alternative.
//!
//! [`Parser::speculate`]: crate::Parser::speculate
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    /// `release` or `commit` was called with an empty marker stack.
    #[error("release without a matching mark")]
    Unbalanced,

    /// The marker refers to a token the buffer no longer (or does not yet)
    /// hold, typically one already compacted away.
    #[error("marker {marker} is outside the lookahead buffer (base {base})")]
    Stale { marker: usize, base: usize },

    /// A speculative attempt returned with a different marker depth than it
    /// was entered with.
    #[error("speculative attempt left marker depth {found}, expected {expected}")]
    Nesting { expected: usize, found: usize },
}
