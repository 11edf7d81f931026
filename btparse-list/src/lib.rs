//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! # btparse-list
//!
//! A backtracking recognizer for a small list language, built on **btparse**.
//! Statements are either a bracketed list of names and `name = name` pairs, or
//! an assignment between two such lists:
//!
//! ```text
//! [a, b = c, [d, e]]
//! [a, b] = [c, d]
//! ```
//!
//! Both statement forms begin with a list of unbounded length, so the parser
//! tries the assignment speculatively and rewinds to parse a bare list when
//! that fails. Tokens are lexed once and replayed from the lookahead buffer.
//!
//! ## Example
//!
//! ```rust
//! use btparse_list::{parse, Statement};
//!
//! let stat = parse("[a,b] = [c,d]").unwrap();
//! assert!(matches!(stat, Statement::Assign { .. }));
//! assert_eq!(stat.to_string(), "[a, b] = [c, d]");
//! ```
//!
//! ## Modules
//!
//! - [`token`]: token kinds and the [`ListToken`] type
//! - [`lexer`]: [`ListLexer`], character-level tokenization
//! - [`parser`]: [`ListParser`], the grammar procedures
//! - [`ast`]: the syntax tree built on success
//! - [`error`]: [`ListError`]
pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{Element, List, Statement};
pub use error::ListError;
pub use lexer::ListLexer;
pub use parser::ListParser;
pub use token::{Expected, ListToken, TokenKind};

use btparse::Lexer;

/// Parse `source` as a single statement spanning the whole input.
pub fn parse(source: &str) -> Result<Statement, ListError> {
    ListParser::new(source.chars()).parse()
}

/// Lex `source` up to and including the end-of-input token.
pub fn tokenize(source: &str) -> Result<Vec<ListToken>, ListError> {
    let mut lexer = ListLexer::new(source.chars());
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let end = token.kind == TokenKind::End;
        tokens.push(token);
        if end {
            return Ok(tokens);
        }
    }
}
