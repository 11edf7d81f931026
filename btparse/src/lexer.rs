use crate::cursor::{LexerCursor, Position, Span};
use smartstring::alias::String;
use std::fmt::Debug;
use std::iter::FusedIterator;
use std::mem;

pub trait Token: Clone + Debug {
    type TokenID: Copy + Debug + Eq;

    fn token_id(&self) -> Self::TokenID;
    fn span(&self) -> Span;
}

/// A character-level tokenizer.
///
/// Implementors supply [`scan`](Lexer::scan), which reads exactly one token
/// from the [`LexerCtx`]. Once input is exhausted, `scan` must keep returning
/// the end-of-input token on every call rather than failing. Callers go
/// through [`next_token`](Lexer::next_token), which also keeps the stats.
///
/// Errors are `Clone` so a [`Lookahead`](crate::Lookahead) can replay a
/// failure without scanning the same position again.
pub trait Lexer {
    type Input: FusedIterator<Item = char>;
    type Token: Token;
    type Error: Clone + Debug;

    fn ctx(&self) -> &LexerCtx<Self::Input>;
    fn ctx_mut(&mut self) -> &mut LexerCtx<Self::Input>;

    fn scan(&mut self) -> Result<Self::Token, Self::Error>;

    fn stats(&self) -> LexerStats {
        self.ctx().stats.clone()
    }

    #[inline]
    fn next_token(&mut self) -> Result<Self::Token, Self::Error> {
        let token = self.scan()?;
        self.ctx_mut().stats.tokens += 1;
        log::trace!("TOKEN #{}: {:?}", self.ctx().stats.tokens, token);
        Ok(token)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LexerStats {
    pub chars: usize,
    pub tokens: usize,
}

/// Scan state shared by every lexer: the input, the character under the
/// cursor, and the text accumulated for the pending lexeme.
pub struct LexerCtx<I> {
    input: I,
    current: Option<char>,
    cursor: LexerCursor,

    accum_flag: bool,
    pub buffer: String,

    stats: LexerStats,
}

impl<I> LexerCtx<I>
where
    I: FusedIterator<Item = char>,
{
    pub fn new(mut input: I) -> Self {
        let current = input.next();
        Self {
            input,
            current,
            cursor: LexerCursor::new(),
            accum_flag: false,
            buffer: String::new(),
            stats: LexerStats::default(),
        }
    }

    /// The character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Span from the last [`begin`](Self::begin) to the scan position.
    #[inline]
    pub fn span(&self) -> Span {
        self.cursor.span
    }

    /// Move past the current character. A no-op at end of input.
    pub fn consume(&mut self) {
        let Some(c) = self.current else {
            return;
        };
        if self.accum_flag {
            self.buffer.push(c);
        }
        self.cursor.advance(c);
        self.stats.chars += 1;
        self.current = self.input.next();
    }

    /// Consume characters while `pred` holds.
    pub fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.current.is_some_and(&pred) {
            self.consume();
        }
    }

    /// Start a new lexeme at the scan position.
    pub fn begin(&mut self) {
        self.cursor.span.collapse();
        self.clear();
    }

    /// Record consumed characters into [`buffer`](Self::buffer).
    pub fn accum(&mut self) {
        self.accum_flag = true;
    }

    pub fn clear(&mut self) {
        self.accum_flag = false;
        self.buffer.clear();
    }

    pub fn take_str(&mut self) -> String {
        self.accum_flag = false;
        mem::take(&mut self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[derive(Debug, Clone, PartialEq)]
    struct XToken {
        token_id: char,
        text: String,
        span: Span,
    }
    impl Token for XToken {
        type TokenID = char;

        fn token_id(&self) -> Self::TokenID {
            self.token_id
        }
        fn span(&self) -> Span {
            self.span
        }
    }

    /// Words become `'w'` tokens, end of input becomes `'$'`.
    struct XLexer<I> {
        ctx: LexerCtx<I>,
    }

    impl<I> Lexer for XLexer<I>
    where
        I: FusedIterator<Item = char>,
    {
        type Input = I;
        type Token = XToken;
        type Error = char;

        fn ctx(&self) -> &LexerCtx<Self::Input> {
            &self.ctx
        }
        fn ctx_mut(&mut self) -> &mut LexerCtx<Self::Input> {
            &mut self.ctx
        }

        fn scan(&mut self) -> Result<Self::Token, Self::Error> {
            let ctx = self.ctx_mut();
            ctx.consume_while(|c| c == ' ');
            ctx.begin();
            match ctx.current() {
                None => Ok(XToken {
                    token_id: '$',
                    text: String::new(),
                    span: ctx.span(),
                }),
                Some(c) if c.is_ascii_alphabetic() => {
                    ctx.accum();
                    ctx.consume_while(|c| c.is_ascii_alphabetic());
                    Ok(XToken {
                        token_id: 'w',
                        text: ctx.take_str(),
                        span: ctx.span(),
                    })
                }
                Some(c) => Err(c),
            }
        }
    }

    #[test]
    fn scans_words_with_spans() {
        init_logger();
        let mut lexer = XLexer {
            ctx: LexerCtx::new("ab  cde".chars()),
        };
        let t = lexer.next_token().unwrap();
        assert_eq!(t.text.as_str(), "ab");
        assert_eq!(t.span, span!(0, 0, 0, 2));
        let t = lexer.next_token().unwrap();
        assert_eq!(t.text.as_str(), "cde");
        assert_eq!(t.span, span!(0, 4, 0, 7));
        assert_eq!(lexer.stats().chars, 7);
        assert_eq!(lexer.stats().tokens, 2);
    }

    #[test]
    fn end_of_input_repeats() {
        let mut lexer = XLexer {
            ctx: LexerCtx::new("a".chars()),
        };
        assert_eq!(lexer.next_token().unwrap().token_id, 'w');
        for _ in 0..3 {
            assert_eq!(lexer.next_token().unwrap().token_id, '$');
        }
        assert_eq!(lexer.stats().chars, 1);
    }

    #[test]
    fn error_leaves_cursor_on_offending_char() {
        let mut lexer = XLexer {
            ctx: LexerCtx::new("a ?".chars()),
        };
        lexer.next_token().unwrap();
        assert_eq!(lexer.next_token(), Err('?'));
        assert_eq!(lexer.ctx().current(), Some('?'));
        assert_eq!(lexer.stats().tokens, 1);
    }
}
