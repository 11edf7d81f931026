//! # List Parser
//!
//! Recursive-descent recognizer for the list language:
//!
//! ```text
//! statement -> list '=' list | list
//! list      -> '[' elements ']'
//! elements  -> element (',' element)*
//! element   -> NAME '=' NAME | NAME | list '=' list | list
//! ```
//!
//! `element` is decided with two tokens of lookahead; a nested list becomes an
//! assignment element when the token after it is `=`. The two `statement`
//! alternatives share an arbitrarily long `list` prefix, so no fixed lookahead
//! separates them; the assignment form is tried speculatively and, if it
//! fails, the buffer is rewound and the bare list is parsed instead.
use crate::ast::{Element, List, Statement};
use crate::error::ListError;
use crate::lexer::ListLexer;
use crate::token::{Expected, ListToken, TokenKind};
use btparse::{Parser, ParserCtx};
use std::iter::FusedIterator;

/// Tokens that can start an `element`.
const ELEMENT_START: &[TokenKind] = &[TokenKind::Name, TokenKind::LBracket];

pub struct ListParser<I>
where
    I: FusedIterator<Item = char>,
{
    ctx: ParserCtx<ListLexer<I>>,
}

impl<I> ListParser<I>
where
    I: FusedIterator<Item = char>,
{
    pub fn new(input: I) -> Self {
        Self {
            ctx: ParserCtx::new(ListLexer::new(input)),
        }
    }

    /// Parse one statement and require that it spans the whole input.
    pub fn parse(&mut self) -> Result<Statement, ListError> {
        let statement = self.statement()?;
        self.match_token(TokenKind::End)?;
        log::debug!(
            "parsed {} tokens; {:?}; {:?}",
            self.ctx.lookahead.fetched(),
            self.stats(),
            self.ctx.lookahead.stats()
        );
        Ok(statement)
    }

    /// `statement -> list '=' list | list`
    pub fn statement(&mut self) -> Result<Statement, ListError> {
        if let Some((target, value)) = self.speculate(Self::assign)? {
            return Ok(Statement::Assign { target, value });
        }
        Ok(Statement::List(self.list()?))
    }

    fn assign(&mut self) -> Result<(List, List), ListError> {
        let target = self.list()?;
        self.match_token(TokenKind::Equals)?;
        let value = self.list()?;
        Ok((target, value))
    }

    /// `list -> '[' elements ']'`
    pub fn list(&mut self) -> Result<List, ListError> {
        self.match_token(TokenKind::LBracket)?;
        let elements = self.elements()?;
        self.match_token(TokenKind::RBracket)?;
        Ok(List { elements })
    }

    fn elements(&mut self) -> Result<Vec<Element>, ListError> {
        let mut elements = vec![self.element()?];
        while self.kind_at(1)? == TokenKind::Comma {
            self.match_token(TokenKind::Comma)?;
            elements.push(self.element()?);
        }
        Ok(elements)
    }

    fn element(&mut self) -> Result<Element, ListError> {
        match self.kind_at(1)? {
            TokenKind::Name if self.kind_at(2)? == TokenKind::Equals => {
                let name = self.match_token(TokenKind::Name)?;
                self.match_token(TokenKind::Equals)?;
                let value = self.match_token(TokenKind::Name)?;
                Ok(Element::Pair(name.text, value.text))
            }
            TokenKind::Name => Ok(Element::Name(self.match_token(TokenKind::Name)?.text)),
            TokenKind::LBracket => {
                let target = self.list()?;
                if self.kind_at(1)? != TokenKind::Equals {
                    return Ok(Element::List(target));
                }
                self.match_token(TokenKind::Equals)?;
                let value = self.list()?;
                Ok(Element::Assign { target, value })
            }
            _ => Err(ListError::UnexpectedToken {
                expected: Expected::OneOf(ELEMENT_START),
                found: self.token_at(1)?.clone(),
            }),
        }
    }
}

impl<I> Parser for ListParser<I>
where
    I: FusedIterator<Item = char>,
{
    type Lexer = ListLexer<I>;
    type Error = ListError;

    fn ctx(&self) -> &ParserCtx<Self::Lexer> {
        &self.ctx
    }
    fn ctx_mut(&mut self) -> &mut ParserCtx<Self::Lexer> {
        &mut self.ctx
    }

    fn mismatch(&self, expected: TokenKind, found: &ListToken) -> ListError {
        ListError::UnexpectedToken {
            expected: Expected::Kind(expected),
            found: found.clone(),
        }
    }
}
