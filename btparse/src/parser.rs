use crate::error::MarkerError;
use crate::lexer::{Lexer, Token};
use crate::lookahead::Lookahead;
use std::fmt::Debug;

type TokenOf<P> = <<P as Parser>::Lexer as Lexer>::Token;
type TokenIdOf<P> = <TokenOf<P> as Token>::TokenID;

/// A hand-written recursive-descent parser over a [`Lookahead`] buffer.
///
/// Implementors own a [`ParserCtx`] and say how a failed
/// [`match_token`](Parser::match_token) is reported; the grammar procedures
/// are ordinary methods that call the provided helpers below.
pub trait Parser {
    type Lexer: Lexer;
    type Error: Debug + From<<Self::Lexer as Lexer>::Error> + From<MarkerError>;

    fn ctx(&self) -> &ParserCtx<Self::Lexer>;
    fn ctx_mut(&mut self) -> &mut ParserCtx<Self::Lexer>;

    /// Builds the error for a token of the wrong kind.
    fn mismatch(&self, expected: TokenIdOf<Self>, found: &TokenOf<Self>) -> Self::Error;

    fn stats(&self) -> ParserStats {
        self.ctx().stats.clone()
    }

    #[inline]
    fn is_speculating(&self) -> bool {
        self.ctx().lookahead.is_speculating()
    }

    /// The `n`-th unconsumed token, 1-based.
    #[inline]
    fn token_at(&mut self, n: usize) -> Result<&TokenOf<Self>, Self::Error> {
        Ok(self.ctx_mut().lookahead.token_at(n)?)
    }

    #[inline]
    fn kind_at(&mut self, n: usize) -> Result<TokenIdOf<Self>, Self::Error> {
        Ok(self.ctx_mut().lookahead.kind_at(n)?)
    }

    #[inline]
    fn consume(&mut self) -> Result<(), Self::Error> {
        Ok(self.ctx_mut().lookahead.consume()?)
    }

    /// Consume the current token if it is `expected`, otherwise fail with
    /// [`mismatch`](Parser::mismatch) and leave the position unchanged.
    fn match_token(&mut self, expected: TokenIdOf<Self>) -> Result<TokenOf<Self>, Self::Error> {
        let token = self.token_at(1)?.clone();
        if token.token_id() != expected {
            return Err(self.mismatch(expected, &token));
        }
        self.consume()?;
        self.ctx_mut().stats.matches += 1;
        Ok(token)
    }

    /// Try one grammar alternative.
    ///
    /// Marks the current position and runs `attempt`. On success the marker is
    /// committed and the alternative's value returned as `Some`. On failure
    /// the buffer is rewound to the mark, the error is dropped, and `None` is
    /// returned so the caller can try the next alternative.
    ///
    /// Some failures are not rejections. They are returned as errors, with
    /// the marker stack restored to its depth on entry:
    ///  * a lexer failure, since no alternative can read past a position the
    ///    lexer cannot tokenize
    ///  * a [`MarkerError`] raised inside the attempt, including an attempt
    ///    that returns with a different marker depth than it was given
    ///    ([`MarkerError::Nesting`])
    fn speculate<T, F>(&mut self, attempt: F) -> Result<Option<T>, Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<T, Self::Error>,
    {
        let depth = self.ctx().lookahead.depth();
        if depth == 0 {
            self.ctx_mut().lookahead.fault = None;
        }
        let marker = self.ctx_mut().lookahead.mark();
        self.ctx_mut().stats.speculations += 1;

        let outcome = attempt(self);

        let lookahead = &mut self.ctx_mut().lookahead;
        let found = lookahead.depth();
        if found != depth + 1 {
            let err = lookahead.violation(MarkerError::Nesting {
                expected: depth + 1,
                found,
            });
            lookahead.unwind(depth);
            return Err(err.into());
        }
        if let Some(fault) = lookahead.fault.clone() {
            lookahead.unwind(depth);
            return Err(fault.into());
        }

        match outcome {
            Ok(value) => {
                self.ctx_mut().lookahead.commit()?;
                self.ctx_mut().stats.commits += 1;
                Ok(Some(value))
            }
            Err(err) => {
                self.ctx_mut().lookahead.release()?;
                if let Some(failure) = self.ctx().lookahead.failure().cloned() {
                    log::debug!(
                        "alternative from token {} hit a lexer failure: {:?}",
                        marker.index(),
                        failure
                    );
                    return Err(failure.into());
                }
                log::debug!(
                    "alternative from token {} rejected: {:?}",
                    marker.index(),
                    err
                );
                self.ctx_mut().stats.rewinds += 1;
                Ok(None)
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParserStats {
    pub matches: usize,
    pub speculations: usize,
    pub commits: usize,
    pub rewinds: usize,
}

pub struct ParserCtx<L>
where
    L: Lexer,
{
    pub lookahead: Lookahead<L>,
    pub stats: ParserStats,
}

impl<L> ParserCtx<L>
where
    L: Lexer,
{
    pub fn new(lexer: L) -> Self {
        Self {
            lookahead: Lookahead::new(lexer),
            stats: ParserStats::default(),
        }
    }
}
