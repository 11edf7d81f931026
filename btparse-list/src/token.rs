//! # List Tokens
//!
//! This module defines the token vocabulary of the list language:
//!
//! - [`TokenKind`]: the closed set of token kinds, with display names taken
//!   from a static table,
//! - [`ListToken`]: a concrete token pairing a kind, its source text and its
//!   [`Span`], implementing [`btparse::Token`],
//! - [`Expected`]: what a production was looking for when it failed.
use btparse::{Span, Token};
use smartstring::alias::String;
use std::fmt;

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    End = 0,
    Name = 1,
    Comma = 2,
    LBracket = 3,
    RBracket = 4,
    Equals = 5,
}

/// Display names, indexed by `TokenKind as usize`.
static TOKEN_NAMES: [&str; TokenKind::COUNT] =
    ["<EOF>", "NAME", "COMMA", "LBRACK", "RBRACK", "EQUALS"];

impl TokenKind {
    pub const COUNT: usize = 6;

    #[inline]
    pub fn name(self) -> &'static str {
        TOKEN_NAMES[self as usize]
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token produced by [`ListLexer`](crate::ListLexer).
///
/// `text` is the matched source text; it is non-empty for every kind except
/// [`TokenKind::End`], whose text is the placeholder `<EOF>`.
///
/// # Example
/// ```rust
/// # use btparse_list::{ListToken, TokenKind};
/// # use btparse::{Token, span};
/// let tok = ListToken::new(TokenKind::Name, "abc", span!(0, 0, 0, 3));
/// assert_eq!(tok.token_id(), TokenKind::Name);
/// assert_eq!(tok.to_string(), "<'abc',NAME>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListToken {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl ListToken {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn end(span: Span) -> Self {
        Self::new(TokenKind::End, TokenKind::End.name(), span)
    }
}

impl Token for ListToken {
    type TokenID = TokenKind;

    fn token_id(&self) -> Self::TokenID {
        self.kind
    }

    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for ListToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<'{}',{}>", self.text, self.kind)
    }
}

/// The token kinds a failed production would have accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Kind(TokenKind),
    OneOf(&'static [TokenKind]),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => write!(f, "{kind}"),
            Expected::OneOf(kinds) => {
                for (i, kind) in kinds.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" or ")?;
                    }
                    write!(f, "{kind}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use btparse::span;

    #[test]
    fn names_follow_the_table() {
        assert_eq!(TokenKind::End.name(), "<EOF>");
        assert_eq!(TokenKind::LBracket.to_string(), "LBRACK");
        assert_eq!(TokenKind::Equals.name(), "EQUALS");
    }

    #[test]
    fn end_token_displays_placeholder() {
        let tok = ListToken::end(span!(0, 3, 0, 3));
        assert_eq!(tok.kind, TokenKind::End);
        assert_eq!(tok.to_string(), "<'<EOF>',<EOF>>");
    }

    #[test]
    fn expected_sets_render_with_or() {
        let e = Expected::OneOf(&[TokenKind::Name, TokenKind::LBracket]);
        assert_eq!(e.to_string(), "NAME or LBRACK");
        assert_eq!(Expected::Kind(TokenKind::RBracket).to_string(), "RBRACK");
    }
}
