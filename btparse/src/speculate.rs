//! Marker stack and rewind for speculative parsing.
//!
//! A grammar rule whose alternatives cannot be told apart by fixed lookahead
//! tries them in turn: [`mark`](Lookahead::mark) the position, run the
//! alternative, then either [`commit`](Lookahead::commit) (keep what it
//! consumed) or [`release`](Lookahead::release) (rewind to the mark). Rewinding
//! is only an index reset, since every token the attempt looked at is still in
//! the buffer.
//!
//! Markers nest strictly. While any marker is outstanding the buffer is never
//! compacted, so every outstanding marker stays resolvable.
use crate::error::MarkerError;
use crate::lexer::Lexer;
use crate::lookahead::Lookahead;

/// A saved buffer position: the absolute index of the token that was next
/// when [`Lookahead::mark`] was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Marker(usize);

impl Marker {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl<L> Lookahead<L>
where
    L: Lexer,
{
    /// Number of outstanding markers.
    #[inline]
    pub fn depth(&self) -> usize {
        self.markers.len()
    }

    /// Push the current position and enter (or nest deeper into) speculation.
    pub fn mark(&mut self) -> Marker {
        let index = self.index();
        self.markers.push(index);
        log::trace!("MARK {} (depth {})", index, self.markers.len());
        Marker(index)
    }

    /// Pop the innermost marker and rewind to it, undoing every consume since
    /// the matching [`mark`](Self::mark).
    pub fn release(&mut self) -> Result<Marker, MarkerError> {
        let index = self.pop_marker()?;
        log::trace!("RELEASE {} (depth {})", index, self.markers.len());
        let marker = Marker(index);
        self.seek(marker)?;
        Ok(marker)
    }

    /// Pop the innermost marker but keep the current position.
    ///
    /// Leaving the outermost marker ends speculation, at which point the
    /// consumed prefix becomes eligible for compaction.
    pub fn commit(&mut self) -> Result<Marker, MarkerError> {
        let index = self.pop_marker()?;
        log::trace!(
            "COMMIT {} at {} (depth {})",
            index,
            self.index(),
            self.markers.len()
        );
        self.compact();
        Ok(Marker(index))
    }

    /// Rewind (or fast-forward) to `marker`.
    ///
    /// The target must still be buffered: not before the buffer base, and not
    /// past the furthest token fetched.
    pub fn seek(&mut self, marker: Marker) -> Result<(), MarkerError> {
        let base = self.base();
        if marker.0 < base || marker.0 > self.fetched() {
            return Err(self.violation(MarkerError::Stale {
                marker: marker.0,
                base,
            }));
        }
        self.rewind_to(marker.0);
        Ok(())
    }

    fn pop_marker(&mut self) -> Result<usize, MarkerError> {
        match self.markers.pop() {
            Some(index) => Ok(index),
            None => Err(self.violation(MarkerError::Unbalanced)),
        }
    }

    /// Remember `err` so an enclosing speculative attempt cannot mistake it
    /// for an ordinary rejection.
    pub(crate) fn violation(&mut self, err: MarkerError) -> MarkerError {
        log::debug!("marker protocol violation: {}", err);
        self.fault = Some(err.clone());
        err
    }

    /// Drop markers above `depth` without moving the position.
    pub(crate) fn unwind(&mut self, depth: usize) {
        self.markers.truncate(depth);
        self.compact();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_lexer::{CharLexer, init_logger};

    #[test]
    fn release_restores_cursor_and_buffer() {
        init_logger();
        let mut la = Lookahead::new(CharLexer::new("abcdef"));
        la.consume().unwrap();
        la.sync(2).unwrap();
        let before_index = la.index();
        let before_tokens = la.buffered().to_vec();

        let marker = la.mark();
        assert_eq!(marker.index(), before_index);
        assert!(la.is_speculating());
        la.consume().unwrap();
        la.consume().unwrap();
        assert_eq!(la.kind_at(2).unwrap(), 'e');

        assert_eq!(la.release().unwrap(), marker);
        assert!(!la.is_speculating());
        assert_eq!(la.index(), before_index);
        assert_eq!(&la.buffered()[..before_tokens.len()], &before_tokens[..]);
        assert_eq!(la.kind_at(1).unwrap(), 'b');
    }

    #[test]
    fn no_compaction_while_speculating() {
        let mut la = Lookahead::new(CharLexer::new("abcdef"));
        la.mark();
        for _ in 0..5 {
            la.consume().unwrap();
        }
        assert_eq!(la.stats().compactions, 0);
        assert_eq!(la.buffered().len(), 5);
        la.release().unwrap();
        assert_eq!(la.index(), 0);
    }

    #[test]
    fn rewinds_never_lex_twice() {
        let mut la = Lookahead::new(CharLexer::new("abcd"));
        for _ in 0..3 {
            la.mark();
            while la.kind_at(1).unwrap() != '$' {
                la.consume().unwrap();
            }
            la.release().unwrap();
        }
        assert_eq!(la.fetched(), 5);
        assert_eq!(la.lexer().stats().tokens, 5);
    }

    #[test]
    fn nested_markers_unwind_in_order() {
        let mut la = Lookahead::new(CharLexer::new("abcd"));
        let outer = la.mark();
        la.consume().unwrap();
        let inner = la.mark();
        la.consume().unwrap();
        assert_eq!(la.depth(), 2);
        assert_eq!(la.release().unwrap(), inner);
        assert_eq!(la.index(), 1);
        assert_eq!(la.release().unwrap(), outer);
        assert_eq!(la.index(), 0);
    }

    #[test]
    fn commit_keeps_position_and_compacts_at_top_level() {
        let mut la = Lookahead::new(CharLexer::new("abc"));
        la.mark();
        la.consume().unwrap();
        la.consume().unwrap();
        la.commit().unwrap();
        assert_eq!(la.index(), 2);
        assert_eq!(la.stats().compactions, 1);
        assert_eq!(la.kind_at(1).unwrap(), 'c');
    }

    #[test]
    fn inner_commit_keeps_outer_marker_resolvable() {
        let mut la = Lookahead::new(CharLexer::new("abc"));
        la.mark();
        la.mark();
        la.consume().unwrap();
        la.commit().unwrap();
        assert_eq!(la.stats().compactions, 0);
        la.consume().unwrap();
        la.release().unwrap();
        assert_eq!(la.index(), 0);
        assert_eq!(la.kind_at(1).unwrap(), 'a');
    }

    #[test]
    fn release_without_mark_is_unbalanced() {
        let mut la = Lookahead::new(CharLexer::new("a"));
        assert_eq!(la.release(), Err(MarkerError::Unbalanced));
        assert_eq!(la.commit(), Err(MarkerError::Unbalanced));
    }

    #[test]
    fn seek_to_compacted_position_is_stale() {
        let mut la = Lookahead::new(CharLexer::new("abc"));
        let marker = la.mark();
        la.consume().unwrap();
        la.commit().unwrap();
        la.consume().unwrap();
        assert_eq!(
            la.seek(marker),
            Err(MarkerError::Stale { marker: 0, base: 2 })
        );
    }
}
