//! The recursive-descent parser.
//!
//! Grammar, loosest to tightest binding:
//!
//! ```text
//! expr   := term (('+' | '-') term)*          left-associative
//! term   := unary (('*' | '/') unary)*        left-associative
//! unary  := '-' unary | power
//! power  := atom ('^' unary)?                 right-associative
//! atom   := Number | 't' | 'pi' | 'e'
//!         | Function '(' expr (',' expr)* ')'
//!         | '(' expr ')'
//! ```
//!
//! `^` binds tighter than unary minus, so `-t^2` parses as `-(t^2)` and
//! `2^-3` is legal. Association order is baked into the node structure, so
//! the evaluator needs no precedence knowledge of its own.

use knotwork_core::{ExprArena, ExprHandle};
use smallvec::SmallVec;

use crate::error::ParseError;
use crate::token::{Token, TokenKind};

/// Parses a token list into an arena, returning the root handle.
pub(crate) fn parse_tokens(
    tokens: &[Token],
    arena: &mut ExprArena,
) -> Result<ExprHandle, ParseError> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        arena,
    };
    let root = parser.parse_expr()?;
    match parser.peek() {
        None => Ok(root),
        // A dangling `)` is a balance problem, anything else is trailing
        // garbage.
        Some(token) if token.kind == TokenKind::RParen => Err(ParseError::UnbalancedParens),
        Some(token) => Err(ParseError::UnexpectedToken {
            position: token.position,
        }),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    arena: &'a mut ExprArena,
}

impl<'a> Parser<'a> {
    // Token references borrow from the token slice, not from `self`, so
    // holding one across an arena mutation is fine.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the next token if it matches `kind`.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().map(|t| &t.kind) == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_expr(&mut self) -> Result<ExprHandle, ParseError> {
        let mut lhs = self.parse_term()?;
        loop {
            if self.eat(&TokenKind::Plus) {
                let rhs = self.parse_term()?;
                lhs = self.arena.add(lhs, rhs);
            } else if self.eat(&TokenKind::Minus) {
                let rhs = self.parse_term()?;
                lhs = self.arena.sub(lhs, rhs);
            } else {
                return Ok(lhs);
            }
        }
    }

    fn parse_term(&mut self) -> Result<ExprHandle, ParseError> {
        let mut lhs = self.parse_unary()?;
        loop {
            if self.eat(&TokenKind::Star) {
                let rhs = self.parse_unary()?;
                lhs = self.arena.mul(lhs, rhs);
            } else if self.eat(&TokenKind::Slash) {
                let rhs = self.parse_unary()?;
                lhs = self.arena.div(lhs, rhs);
            } else {
                return Ok(lhs);
            }
        }
    }

    fn parse_unary(&mut self) -> Result<ExprHandle, ParseError> {
        if self.eat(&TokenKind::Minus) {
            let arg = self.parse_unary()?;
            return Ok(self.arena.neg(arg));
        }
        self.parse_power()
    }

    fn parse_power(&mut self) -> Result<ExprHandle, ParseError> {
        let base = self.parse_atom()?;
        if self.eat(&TokenKind::Caret) {
            // Right-associative: the exponent re-enters at unary level so
            // both `2^3^2` = `2^(3^2)` and `2^-3` work.
            let exp = self.parse_unary()?;
            return Ok(self.arena.pow(base, exp));
        }
        Ok(base)
    }

    fn parse_atom(&mut self) -> Result<ExprHandle, ParseError> {
        let token = self.bump().ok_or(ParseError::UnexpectedEnd)?;
        let position = token.position;
        match token.kind.clone() {
            TokenKind::Number(value) => Ok(self.arena.number(value)),
            TokenKind::Parameter => Ok(self.arena.parameter()),
            TokenKind::Constant(constant) => Ok(self.arena.constant(constant)),
            TokenKind::Function(func) => self.parse_call(func, position),
            TokenKind::LParen => {
                let inner = self.parse_expr()?;
                self.expect_rparen()?;
                Ok(inner)
            }
            _ => Err(ParseError::UnexpectedToken { position }),
        }
    }

    fn parse_call(
        &mut self,
        func: knotwork_core::Function,
        name_position: usize,
    ) -> Result<ExprHandle, ParseError> {
        if !self.eat(&TokenKind::LParen) {
            return Err(ParseError::MissingArgumentList {
                func: func.name(),
                position: name_position,
            });
        }

        let mut args: SmallVec<[ExprHandle; 2]> = SmallVec::new();
        args.push(self.parse_expr()?);
        while self.eat(&TokenKind::Comma) {
            args.push(self.parse_expr()?);
        }
        self.expect_rparen()?;

        if args.len() != func.arity() {
            return Err(ParseError::WrongArity {
                func: func.name(),
                expected: func.arity(),
                found: args.len(),
            });
        }
        Ok(self.arena.call(func, args))
    }

    fn expect_rparen(&mut self) -> Result<(), ParseError> {
        match self.bump() {
            Some(token) if token.kind == TokenKind::RParen => Ok(()),
            Some(token) => Err(ParseError::UnexpectedToken {
                position: token.position,
            }),
            None => Err(ParseError::UnbalancedParens),
        }
    }
}
