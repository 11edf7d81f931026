//! # List Lexer
//!
//! [`ListLexer`] turns a character stream into [`ListToken`]s:
//!
//! - spaces, tabs, newlines and carriage returns are skipped,
//! - `,` `[` `]` `=` are single-character tokens,
//! - a maximal run of ASCII letters is a [`TokenKind::Name`],
//! - end of input yields [`TokenKind::End`], again on every later call.
//!
//! Any other character fails with [`ListError::InvalidCharacter`] and leaves
//! the scan position on the offending character.
use crate::error::ListError;
use crate::token::{ListToken, TokenKind};
use btparse::{Lexer, LexerCtx};
use std::iter::FusedIterator;

#[inline]
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

#[inline]
fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub struct ListLexer<I> {
    ctx: LexerCtx<I>,
}

impl<I> ListLexer<I>
where
    I: FusedIterator<Item = char>,
{
    pub fn new(input: I) -> Self {
        Self {
            ctx: LexerCtx::new(input),
        }
    }

    fn single(&mut self, kind: TokenKind) -> ListToken {
        self.ctx.accum();
        self.ctx.consume();
        ListToken::new(kind, self.ctx.take_str(), self.ctx.span())
    }

    fn name(&mut self) -> ListToken {
        self.ctx.accum();
        self.ctx.consume_while(is_letter);
        ListToken::new(TokenKind::Name, self.ctx.take_str(), self.ctx.span())
    }
}

impl<I> Lexer for ListLexer<I>
where
    I: FusedIterator<Item = char>,
{
    type Input = I;
    type Token = ListToken;
    type Error = ListError;

    fn ctx(&self) -> &LexerCtx<Self::Input> {
        &self.ctx
    }
    fn ctx_mut(&mut self) -> &mut LexerCtx<Self::Input> {
        &mut self.ctx
    }

    fn scan(&mut self) -> Result<ListToken, ListError> {
        self.ctx.consume_while(is_whitespace);
        self.ctx.begin();
        let token = match self.ctx.current() {
            None => ListToken::end(self.ctx.span()),
            Some(',') => self.single(TokenKind::Comma),
            Some('[') => self.single(TokenKind::LBracket),
            Some(']') => self.single(TokenKind::RBracket),
            Some('=') => self.single(TokenKind::Equals),
            Some(c) if is_letter(c) => self.name(),
            Some(c) => {
                return Err(ListError::InvalidCharacter {
                    character: c,
                    position: self.ctx.position(),
                });
            }
        };
        Ok(token)
    }
}
