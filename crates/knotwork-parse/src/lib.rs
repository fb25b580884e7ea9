//! # knotwork-parse
//!
//! Tokenizer and recursive-descent parser for curve equations.
//!
//! Turns untrusted source text such as `sin(t) + 2*sin(2*t)` into an
//! immutable [`Expression`] over the free parameter `t`. The grammar is
//! closed: every identifier must resolve against the lexicon in
//! `knotwork-core`, so there is nothing to escape to — no member access,
//! no call indirection, no host names. Anything unparseable is returned as
//! a [`ParseError`], never thrown.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod lexer;
mod parser;
#[cfg(test)]
mod proptests;
pub mod token;

pub use error::ParseError;
pub use lexer::tokenize;

use knotwork_core::{ExprArena, ExprHandle};

/// Upper bound on equation source length, in bytes.
///
/// Bounds worst-case tokenize/parse cost on hostile input.
pub const MAX_SOURCE_LEN: usize = 500;

/// A compiled equation over the free parameter `t`.
///
/// Immutable once constructed: the only way to obtain one is a successful
/// [`Expression::parse`], after which it can be evaluated any number of
/// times with no shared mutable state. The nodes live in a private arena;
/// repeated subtrees are stored once.
#[derive(Clone, Debug)]
pub struct Expression {
    source: String,
    arena: ExprArena,
    root: ExprHandle,
}

impl Expression {
    /// Parses an equation source string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] for empty or over-long input, identifiers
    /// outside the lexicon, malformed literals, unbalanced parentheses,
    /// wrong function arity, and misplaced operators.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let tokens = lexer::tokenize(source)?;
        let mut arena = ExprArena::new();
        let root = parser::parse_tokens(&tokens, &mut arena)?;
        Ok(Self {
            source: source.to_string(),
            arena,
            root,
        })
    }

    /// The original source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The arena holding this expression's nodes.
    #[must_use]
    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    /// The handle of the root node.
    #[must_use]
    pub fn root(&self) -> ExprHandle {
        self.root
    }

    /// The number of distinct nodes in this expression.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }
}

/// Parses an equation source string. Convenience alias for
/// [`Expression::parse`].
///
/// # Errors
///
/// See [`Expression::parse`].
pub fn parse(source: &str) -> Result<Expression, ParseError> {
    Expression::parse(source)
}
