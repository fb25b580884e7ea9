//! Lexical tokens.

use knotwork_core::{Constant, Function};

/// A token with its byte position in the source string.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Byte offset of the first character of the token.
    pub position: usize,
}

/// The kinds of token the equation grammar knows about.
///
/// Identifiers are resolved against the lexicon during tokenization, so an
/// out-of-set name never reaches the parser.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// A numeric literal. Always finite and non-negative; a leading minus
    /// is a separate [`TokenKind::Minus`].
    Number(f64),
    /// The free parameter `t`.
    Parameter,
    /// A named constant.
    Constant(Constant),
    /// An allowed function name.
    Function(Function),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^` or `**`
    Caret,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,` (argument separator)
    Comma,
}
