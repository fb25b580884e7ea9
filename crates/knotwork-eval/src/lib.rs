//! # knotwork-eval
//!
//! Closed tree-walk interpreter for compiled equations.
//!
//! Evaluation is a pure function of the expression tree and the parameter
//! value. Domain violations — `asin` outside [-1, 1], `log` of a
//! non-positive number, division by zero — follow IEEE-754 semantics and
//! come back as `NaN` or `±inf` sentinels rather than errors, so batch
//! sampling loops can continue past a bad sample point. The walk touches
//! nothing but the tree and `t`: the interpreter has no way to express a
//! side effect.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use knotwork_core::{ExprArena, ExprHandle, ExprNode, Function};
use knotwork_parse::Expression;

/// Evaluates a compiled expression at a parameter value.
///
/// Deterministic: repeated calls with the same expression and `t` return
/// bit-identical results. Never panics for expressions produced by
/// `knotwork-parse`; non-finite results signal domain violations and must
/// be checked by callers that require finiteness.
#[must_use]
pub fn evaluate(expr: &Expression, t: f64) -> f64 {
    value_at(expr.arena(), expr.root(), t)
}

/// Evaluates the subtree rooted at `handle` against an explicit arena.
///
/// # Panics
///
/// Panics if `handle` did not come from `arena`, or if a call node violates
/// the parser's arity invariant. Both are programming-contract violations,
/// not input conditions: neither can be produced through [`Expression`].
#[must_use]
pub fn value_at(arena: &ExprArena, handle: ExprHandle, t: f64) -> f64 {
    match arena.get(handle) {
        ExprNode::Number(bits) => f64::from_bits(*bits),
        ExprNode::Parameter => t,
        ExprNode::Constant(constant) => constant.value(),
        ExprNode::Add(lhs, rhs) => value_at(arena, *lhs, t) + value_at(arena, *rhs, t),
        ExprNode::Sub(lhs, rhs) => value_at(arena, *lhs, t) - value_at(arena, *rhs, t),
        ExprNode::Mul(lhs, rhs) => value_at(arena, *lhs, t) * value_at(arena, *rhs, t),
        ExprNode::Div(lhs, rhs) => value_at(arena, *lhs, t) / value_at(arena, *rhs, t),
        ExprNode::Pow { base, exp } => value_at(arena, *base, t).powf(value_at(arena, *exp, t)),
        ExprNode::Neg(arg) => -value_at(arena, *arg, t),
        ExprNode::Call { func, args } => {
            // Arity holds by the parser invariant on call nodes.
            let first = value_at(arena, args[0], t);
            apply(*func, first, || value_at(arena, args[1], t))
        }
    }
}

/// Applies a lexicon function to evaluated arguments.
///
/// The second argument is computed lazily since only `pow` needs it.
fn apply(func: Function, first: f64, second: impl FnOnce() -> f64) -> f64 {
    match func {
        Function::Sin => first.sin(),
        Function::Cos => first.cos(),
        Function::Tan => first.tan(),
        Function::Asin => first.asin(),
        Function::Acos => first.acos(),
        Function::Atan => first.atan(),
        Function::Sinh => first.sinh(),
        Function::Cosh => first.cosh(),
        Function::Tanh => first.tanh(),
        Function::Sqrt => first.sqrt(),
        Function::Pow => first.powf(second()),
        Function::Abs => first.abs(),
        Function::Floor => first.floor(),
        Function::Ceil => first.ceil(),
        Function::Round => first.round(),
        Function::Exp => first.exp(),
        Function::Log => first.ln(),
        Function::Log10 => first.log10(),
    }
}
