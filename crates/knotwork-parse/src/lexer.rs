//! The tokenizer.
//!
//! Turns a source string into a flat token list, resolving identifiers
//! against the closed lexicon as it goes. Rejection happens here for
//! unknown symbols, stray characters and malformed literals; structural
//! problems (arity, balance, operator placement) are the parser's job.

use knotwork_core::{Constant, Function, PARAMETER};

use crate::error::ParseError;
use crate::token::{Token, TokenKind};
use crate::MAX_SOURCE_LEN;

/// Tokenizes an equation source string.
///
/// # Errors
///
/// Returns [`ParseError`] for empty or over-long input, unknown symbols,
/// malformed numeric literals, and characters outside the grammar.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    if source.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    if source.len() > MAX_SOURCE_LEN {
        return Err(ParseError::TooLong);
    }

    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let ch = bytes[pos] as char;

        match ch {
            ' ' | '\t' | '\n' | '\r' => {
                pos += 1;
            }
            '0'..='9' | '.' => {
                let start = pos;
                while pos < bytes.len() && matches!(bytes[pos] as char, '0'..='9' | '.') {
                    pos += 1;
                }
                let text = &source[start..pos];
                let value: f64 = text.parse().map_err(|_| ParseError::MalformedNumber {
                    text: text.to_string(),
                    position: start,
                })?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    position: start,
                });
            }
            'a'..='z' | 'A'..='Z' | '_' => {
                let start = pos;
                while pos < bytes.len()
                    && matches!(bytes[pos] as char, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_')
                {
                    pos += 1;
                }
                let name = &source[start..pos];
                let kind = resolve_identifier(name).ok_or_else(|| ParseError::UnknownSymbol {
                    name: name.to_string(),
                    position: start,
                })?;
                tokens.push(Token {
                    kind,
                    position: start,
                });
            }
            '*' => {
                // `**` is an alternate spelling of `^`.
                let start = pos;
                let kind = if bytes.get(pos + 1) == Some(&b'*') {
                    pos += 2;
                    TokenKind::Caret
                } else {
                    pos += 1;
                    TokenKind::Star
                };
                tokens.push(Token {
                    kind,
                    position: start,
                });
            }
            _ => {
                let kind = match ch {
                    '+' => TokenKind::Plus,
                    '-' => TokenKind::Minus,
                    '/' => TokenKind::Slash,
                    '^' => TokenKind::Caret,
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    ',' => TokenKind::Comma,
                    _ => {
                        // Report the full character, not a lone UTF-8 byte.
                        let ch = source[pos..].chars().next().unwrap_or(ch);
                        return Err(ParseError::UnexpectedChar { ch, position: pos });
                    }
                };
                tokens.push(Token {
                    kind,
                    position: pos,
                });
                pos += 1;
            }
        }
    }

    Ok(tokens)
}

/// Resolves an identifier against the lexicon.
fn resolve_identifier(name: &str) -> Option<TokenKind> {
    if name == PARAMETER {
        return Some(TokenKind::Parameter);
    }
    if let Some(constant) = Constant::from_name(name) {
        return Some(TokenKind::Constant(constant));
    }
    Function::from_name(name).map(TokenKind::Function)
}
