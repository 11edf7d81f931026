//! The lookahead buffer between a [`Lexer`] and the grammar.
//!
//! [`Lookahead`] decouples the tokens the grammar has consumed from the
//! tokens physically read from the source. Tokens are pulled from the lexer on
//! demand and stored in a growing buffer, so a rule can inspect any number of
//! tokens ahead and the speculation protocol ([`Lookahead::mark`] and friends) can
//! rewind over them without lexing anything twice.
//!
//! Positions are exposed as *absolute* token indices: index `i` always names
//! the `i`-th token the lexer produced. Internally the buffer keeps only a
//! window of that sequence starting at `base`; the consumed prefix is dropped
//! (compacted) whenever no marker is outstanding.
//!
//! A lexer failure is sticky. The error is kept for the position one past the
//! last token fetched and replayed on every later request that reaches it, so
//! the lexer is asked for each position at most once no matter how often the
//! parser rewinds.
use crate::error::MarkerError;
use crate::lexer::{Lexer, Token};

#[derive(Debug, Clone, Default)]
pub struct LookaheadStats {
    /// Tokens pulled from the lexer.
    pub fetched: usize,
    /// Compaction passes that discarded at least one token.
    pub compactions: usize,
    /// Tokens dropped by compaction.
    pub discarded: usize,
}

pub struct Lookahead<L>
where
    L: Lexer,
{
    lexer: L,
    tokens: Vec<L::Token>,
    /// Absolute index of `tokens[0]`.
    base: usize,
    /// Index of the next unconsumed token, relative to `base`.
    pos: usize,
    /// Outstanding markers, as absolute indices.
    pub(crate) markers: Vec<usize>,
    /// Lexer failure at absolute index `fetched()`.
    failure: Option<L::Error>,
    /// Last marker protocol violation, kept for [`Parser::speculate`].
    ///
    /// [`Parser::speculate`]: crate::Parser::speculate
    pub(crate) fault: Option<MarkerError>,
    stats: LookaheadStats,
}

impl<L> Lookahead<L>
where
    L: Lexer,
{
    pub fn new(lexer: L) -> Self {
        Self::with_capacity(lexer, 0)
    }

    /// Creates a buffer with room for `capacity` tokens before it reallocates.
    pub fn with_capacity(lexer: L, capacity: usize) -> Self {
        Self {
            lexer,
            tokens: Vec::with_capacity(capacity),
            base: 0,
            pos: 0,
            markers: Vec::new(),
            failure: None,
            fault: None,
            stats: LookaheadStats::default(),
        }
    }

    pub fn lexer(&self) -> &L {
        &self.lexer
    }

    pub fn stats(&self) -> LookaheadStats {
        self.stats.clone()
    }

    /// Absolute index of the next unconsumed token.
    #[inline]
    pub fn index(&self) -> usize {
        self.base + self.pos
    }

    /// Number of tokens pulled from the lexer so far, which is also one past
    /// the highest absolute index ever buffered.
    #[inline]
    pub fn fetched(&self) -> usize {
        self.base + self.tokens.len()
    }

    /// Tokens currently held, consumed or not.
    pub fn buffered(&self) -> &[L::Token] {
        &self.tokens
    }

    /// Ensure tokens at `index() .. index() + n` are buffered.
    pub fn sync(&mut self, n: usize) -> Result<(), L::Error> {
        let needed = self.pos + n;
        if needed > self.tokens.len() {
            self.fill(needed - self.tokens.len())?;
        }
        Ok(())
    }

    /// Pull `n` more tokens from the lexer, or replay its recorded failure.
    fn fill(&mut self, n: usize) -> Result<(), L::Error> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        for _ in 0..n {
            match self.lexer.next_token() {
                Ok(token) => {
                    log::trace!("FILL [{}]: {:?}", self.fetched(), token);
                    self.tokens.push(token);
                    self.stats.fetched += 1;
                }
                Err(err) => {
                    log::trace!("FILL [{}]: failed: {:?}", self.fetched(), err);
                    self.failure = Some(err.clone());
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// The lexer failure recorded at absolute index [`fetched`](Self::fetched),
    /// if the lexer has failed.
    pub fn failure(&self) -> Option<&L::Error> {
        self.failure.as_ref()
    }

    /// The `n`-th unconsumed token, 1-based.
    ///
    /// Panics if `n` is zero.
    pub fn token_at(&mut self, n: usize) -> Result<&L::Token, L::Error> {
        assert!(n > 0, "lookahead depth is 1-based");
        self.sync(n)?;
        Ok(&self.tokens[self.pos + n - 1])
    }

    /// Kind of the `n`-th unconsumed token, 1-based.
    #[inline]
    pub fn kind_at(&mut self, n: usize) -> Result<<L::Token as Token>::TokenID, L::Error> {
        Ok(self.token_at(n)?.token_id())
    }

    /// Step past the current token.
    pub fn consume(&mut self) -> Result<(), L::Error> {
        self.sync(1)?;
        self.pos += 1;
        if !self.is_speculating() {
            self.compact();
        }
        Ok(())
    }

    #[inline]
    pub fn is_speculating(&self) -> bool {
        !self.markers.is_empty()
    }

    /// Drop the consumed prefix once it makes up at least half the buffer.
    ///
    /// Does nothing while a marker is outstanding: markers hold absolute
    /// indices that must stay resolvable.
    pub(crate) fn compact(&mut self) {
        if self.is_speculating() || self.pos == 0 || self.pos * 2 < self.tokens.len() {
            return;
        }
        let n = self.pos;
        self.tokens.drain(..n);
        self.base += n;
        self.pos = 0;
        self.stats.compactions += 1;
        self.stats.discarded += n;
        log::trace!("COMPACT: dropped {}, base now {}", n, self.base);
    }

    /// Move to absolute `index` without bounds checks against `base`.
    #[inline]
    pub(crate) fn rewind_to(&mut self, index: usize) {
        self.pos = index - self.base;
    }

    #[inline]
    pub(crate) fn base(&self) -> usize {
        self.base
    }
}
