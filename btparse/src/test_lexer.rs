//! A single-character lexer used by the runtime's unit tests.
//!
//! Every lowercase ASCII letter is its own token whose id is the letter,
//! spaces are skipped, end of input is `'$'`, and any other character is
//! returned as the error value.
use crate::cursor::Span;
use crate::lexer::{Lexer, LexerCtx, Token};
use std::str::Chars;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharToken {
    pub id: char,
    pub span: Span,
}

impl Token for CharToken {
    type TokenID = char;

    fn token_id(&self) -> Self::TokenID {
        self.id
    }
    fn span(&self) -> Span {
        self.span
    }
}

pub struct CharLexer<'a> {
    ctx: LexerCtx<Chars<'a>>,
    scans: usize,
}

impl<'a> CharLexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            ctx: LexerCtx::new(source.chars()),
            scans: 0,
        }
    }

    /// Calls to `scan`, failed ones included.
    pub fn scans(&self) -> usize {
        self.scans
    }
}

impl<'a> Lexer for CharLexer<'a> {
    type Input = Chars<'a>;
    type Token = CharToken;
    type Error = char;

    fn ctx(&self) -> &LexerCtx<Self::Input> {
        &self.ctx
    }
    fn ctx_mut(&mut self) -> &mut LexerCtx<Self::Input> {
        &mut self.ctx
    }

    fn scan(&mut self) -> Result<Self::Token, Self::Error> {
        self.scans += 1;
        self.ctx.consume_while(|c| c == ' ');
        self.ctx.begin();
        let id = match self.ctx.current() {
            None => '$',
            Some(c) if c.is_ascii_lowercase() => {
                self.ctx.consume();
                c
            }
            Some(c) => return Err(c),
        };
        Ok(CharToken {
            id,
            span: self.ctx.span(),
        })
    }
}
