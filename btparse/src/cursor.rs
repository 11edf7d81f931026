//! Source positions and the scan cursor that tracks them.
//!
//! Lexers built on [`LexerCtx`](crate::LexerCtx) advance a [`LexerCursor`]
//! one character at a time. The cursor keeps the absolute character offset and
//! a [`Span`] covering the lexeme currently being scanned, so every token can
//! be stamped with its location without the lexer doing any bookkeeping.
use std::fmt;

/// A 0-based line/column position in source text.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// 0-based line number.
    pub line: usize,
    /// 0-based column number (character position in the line).
    pub column: usize,
}

impl Position {
    /// Creates a new `Position`.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Renders the position 1-based, the way editors report it.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A half-open source range: `[start, end)`.
///
/// Invariants are not enforced here, but it is conventional for `start <= end`
/// in lexicographic `(line, column)` ordering.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Creates a new `Span`.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Start (or restart) this span at its current `end` position (empty span at end).
    /// Effect: span(x,y, z,w) -> span(z,w, z,w)
    pub fn collapse(&mut self) {
        self.start = self.end;
    }
}

/// Tracks the current scan offset and the span of the pending lexeme.
#[derive(Debug, Clone, Default)]
pub struct LexerCursor {
    /// Number of characters consumed so far.
    pub pos: usize,
    /// Span of the lexeme under construction; `end` is the scan position.
    pub span: Span,
}

impl LexerCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance past character `c`, moving to the next line on `'\n'`.
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.span.end.line += 1;
            self.span.end.column = 0;
        } else {
            self.span.end.column += 1;
        }
        self.pos += 1;
    }

    /// Position of the next unscanned character.
    #[inline]
    pub fn position(&self) -> Position {
        self.span.end
    }
}

/// Build an `Span` inline from 0-based line/column coordinates.
///
/// # Examples
///
/// ```rust
/// # use btparse::span;
/// let s = span!(0, 0, 1, 4);
/// assert_eq!(s.end.column, 4);
/// ```
#[macro_export]
macro_rules! span {
    ($line_start:expr, $col_start:expr, $line_end:expr, $col_end:expr) => {
        $crate::Span {
            start: $crate::Position {
                line: $line_start,
                column: $col_start,
            },
            end: $crate::Position {
                line: $line_end,
                column: $col_end,
            },
        }
    };
}
