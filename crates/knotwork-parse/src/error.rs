//! Parse-time errors.

use thiserror::Error;

use crate::MAX_SOURCE_LEN;

/// Errors produced while tokenizing or parsing an equation.
///
/// Every variant is recoverable: the caller gets a description of what went
/// wrong and where, and nothing is evaluated. Positions are byte offsets
/// into the source string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The source was empty or all whitespace.
    #[error("equation is empty")]
    Empty,

    /// The source exceeded the length cap.
    #[error("equation is longer than {MAX_SOURCE_LEN} characters")]
    TooLong,

    /// An identifier outside the closed lexicon. This is the core safety
    /// boundary: `Math`, `eval`, `window` and friends all land here.
    #[error("unknown symbol `{name}` at position {position}")]
    UnknownSymbol {
        /// The offending identifier.
        name: String,
        /// Byte offset of the identifier.
        position: usize,
    },

    /// A character with no meaning in the grammar.
    #[error("unexpected character `{ch}` at position {position}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        position: usize,
    },

    /// A numeric literal that does not scan as a decimal number.
    #[error("malformed number `{text}` at position {position}")]
    MalformedNumber {
        /// The offending literal text.
        text: String,
        /// Byte offset of the literal.
        position: usize,
    },

    /// Parentheses that do not pair up.
    #[error("unbalanced parentheses")]
    UnbalancedParens,

    /// A function applied to the wrong number of arguments.
    #[error("`{func}` expects {expected} argument(s), found {found}")]
    WrongArity {
        /// The function name.
        func: &'static str,
        /// The arity of the function.
        expected: usize,
        /// The number of arguments supplied.
        found: usize,
    },

    /// A function name not followed by an argument list.
    #[error("`{func}` must be followed by `(` at position {position}")]
    MissingArgumentList {
        /// The function name.
        func: &'static str,
        /// Byte offset just past the function name.
        position: usize,
    },

    /// A token that cannot occur at this point in the grammar, e.g. a
    /// leading `*` or two operands in a row.
    #[error("unexpected token at position {position}")]
    UnexpectedToken {
        /// Byte offset of the token.
        position: usize,
    },

    /// The source ended where an operand was still required, e.g. a
    /// trailing operator.
    #[error("equation ends unexpectedly")]
    UnexpectedEnd,
}
