//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! Runtime for hand-written LL(k) parsers with backtracking.
//!
//! `btparse` supplies the machinery under a recursive-descent grammar:
//!  * [`Lexer`] / [`LexerCtx`]: character scanning with position tracking
//!  * [`Lookahead`]: a growing token buffer giving arbitrary lookahead
//!  * [`Marker`] and [`Lookahead::mark`] / [`release`](Lookahead::release) /
//!    [`commit`](Lookahead::commit): speculation with exact rewind
//!  * [`Parser`]: `match_token` and `speculate` helpers for grammar code
//!
//! Tokens are pulled from the lexer at most once each; rewinding after a
//! failed alternative only moves an index, so backtracking never re-lexes.

mod cursor;
mod error;
mod lexer;
mod lookahead;
mod parser;
mod speculate;

#[cfg(test)]
mod test_lexer;

pub use crate::cursor::{LexerCursor, Position, Span};
pub use crate::error::MarkerError;
pub use crate::lexer::{Lexer, LexerCtx, LexerStats, Token};
pub use crate::lookahead::{Lookahead, LookaheadStats};
pub use crate::parser::{Parser, ParserCtx, ParserStats};
pub use crate::speculate::Marker;
