//! Expression node types.
//!
//! This module defines the node enum stored in the arena. Compound nodes
//! hold handles to their operands rather than owning them, so an expression
//! is a DAG of small, `Copy`-friendly records.

use smallvec::SmallVec;

use crate::handle::ExprHandle;
use crate::lexicon::{Constant, Function};

/// Inline argument storage for call nodes. Two slots cover every allowed
/// function (`pow` is the only binary one).
pub type CallArgs = SmallVec<[ExprHandle; 2]>;

/// An expression node stored in the arena.
///
/// Binary operators are stored as explicit pairs so that the association
/// order fixed by the parser (left for `+ - * /`, right for `^`) is
/// structural: the evaluator reproduces IEEE-754 results without any
/// ordering convention of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprNode {
    // === Atoms ===
    /// A numeric literal, stored as its IEEE-754 bit pattern.
    ///
    /// Bits rather than `f64` keep the node `Eq + Hash` for interning. The
    /// lexer only produces finite non-negative literals, so there is exactly
    /// one bit pattern per literal value.
    Number(u64),

    /// The free parameter `t`.
    Parameter,

    /// A named constant (`pi` or `e`).
    Constant(Constant),

    // === Compound expressions ===
    /// Sum: `lhs + rhs`.
    Add(ExprHandle, ExprHandle),

    /// Difference: `lhs - rhs`.
    Sub(ExprHandle, ExprHandle),

    /// Product: `lhs * rhs`.
    Mul(ExprHandle, ExprHandle),

    /// Quotient: `lhs / rhs`.
    Div(ExprHandle, ExprHandle),

    /// Power: `base ^ exp`.
    Pow {
        /// The base of the power.
        base: ExprHandle,
        /// The exponent.
        exp: ExprHandle,
    },

    /// Negation: `-expr`.
    Neg(ExprHandle),

    /// A function application: `f(arg, ...)`.
    ///
    /// Invariant: `args.len() == func.arity()`, enforced by the parser.
    Call {
        /// The function being applied.
        func: Function,
        /// The arguments.
        args: CallArgs,
    },
}

impl ExprNode {
    /// Creates a numeric literal node from its value.
    #[must_use]
    pub fn number(value: f64) -> Self {
        ExprNode::Number(value.to_bits())
    }

    /// Returns true if this node is an atom (no children).
    #[must_use]
    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            ExprNode::Number(_) | ExprNode::Parameter | ExprNode::Constant(_)
        )
    }

    /// Returns the children of this node.
    #[must_use]
    pub fn children(&self) -> CallArgs {
        match self {
            ExprNode::Number(_) | ExprNode::Parameter | ExprNode::Constant(_) => SmallVec::new(),
            ExprNode::Add(lhs, rhs)
            | ExprNode::Sub(lhs, rhs)
            | ExprNode::Mul(lhs, rhs)
            | ExprNode::Div(lhs, rhs) => smallvec::smallvec![*lhs, *rhs],
            ExprNode::Pow { base, exp } => smallvec::smallvec![*base, *exp],
            ExprNode::Neg(arg) => smallvec::smallvec![*arg],
            ExprNode::Call { args, .. } => args.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_atom() {
        assert!(ExprNode::number(4.2).is_atom());
        assert!(ExprNode::Parameter.is_atom());
        assert!(ExprNode::Constant(Constant::Pi).is_atom());
        assert!(!ExprNode::Neg(ExprHandle::new(0)).is_atom());
    }

    #[test]
    fn test_number_bits_round_trip() {
        let node = ExprNode::number(0.1);
        match node {
            ExprNode::Number(bits) => assert_eq!(f64::from_bits(bits), 0.1),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_children() {
        let a = ExprHandle::new(0);
        let b = ExprHandle::new(1);
        assert_eq!(ExprNode::Add(a, b).children().as_slice(), &[a, b]);
        assert_eq!(ExprNode::Neg(a).children().as_slice(), &[a]);
        assert!(ExprNode::Parameter.children().is_empty());
    }
}
