//! The closed lexicon of symbols an equation may reference.
//!
//! This is the single authoritative safety boundary of the engine: a parsed
//! equation can only mention the free parameter, the constants below, and
//! the functions below. Anything else is rejected at parse time, so the
//! evaluator never needs a denylist.

use std::fmt;

/// The name of the free parameter every equation ranges over.
pub const PARAMETER: &str = "t";

/// A function from the allowed set.
///
/// All functions are unary except [`Function::Pow`], which takes a base and
/// an exponent. Arity is checked at parse time, so an interned call node
/// always carries exactly [`Function::arity`] arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// Arcsine. Produces NaN outside [-1, 1].
    Asin,
    /// Arccosine. Produces NaN outside [-1, 1].
    Acos,
    /// Arctangent.
    Atan,
    /// Hyperbolic sine.
    Sinh,
    /// Hyperbolic cosine.
    Cosh,
    /// Hyperbolic tangent.
    Tanh,
    /// Square root. Produces NaN for negative arguments.
    Sqrt,
    /// `pow(base, exponent)`. The only binary function.
    Pow,
    /// Absolute value.
    Abs,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceil,
    /// Round half away from zero.
    Round,
    /// Natural exponential.
    Exp,
    /// Natural logarithm. Produces NaN/-inf for non-positive arguments.
    Log,
    /// Base-10 logarithm. Produces NaN/-inf for non-positive arguments.
    Log10,
}

impl Function {
    /// Every allowed function, in lexicon order.
    ///
    /// Exposed so callers and tests can enumerate the complete set.
    pub const ALL: [Function; 18] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Asin,
        Function::Acos,
        Function::Atan,
        Function::Sinh,
        Function::Cosh,
        Function::Tanh,
        Function::Sqrt,
        Function::Pow,
        Function::Abs,
        Function::Floor,
        Function::Ceil,
        Function::Round,
        Function::Exp,
        Function::Log,
        Function::Log10,
    ];

    /// Looks up a function by its source-level name.
    ///
    /// Returns `None` for any name outside the allowed set.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "tan" => Some(Function::Tan),
            "asin" => Some(Function::Asin),
            "acos" => Some(Function::Acos),
            "atan" => Some(Function::Atan),
            "sinh" => Some(Function::Sinh),
            "cosh" => Some(Function::Cosh),
            "tanh" => Some(Function::Tanh),
            "sqrt" => Some(Function::Sqrt),
            "pow" => Some(Function::Pow),
            "abs" => Some(Function::Abs),
            "floor" => Some(Function::Floor),
            "ceil" => Some(Function::Ceil),
            "round" => Some(Function::Round),
            "exp" => Some(Function::Exp),
            "log" => Some(Function::Log),
            "log10" => Some(Function::Log10),
            _ => None,
        }
    }

    /// The source-level name of this function.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Sinh => "sinh",
            Function::Cosh => "cosh",
            Function::Tanh => "tanh",
            Function::Sqrt => "sqrt",
            Function::Pow => "pow",
            Function::Abs => "abs",
            Function::Floor => "floor",
            Function::Ceil => "ceil",
            Function::Round => "round",
            Function::Exp => "exp",
            Function::Log => "log",
            Function::Log10 => "log10",
        }
    }

    /// The number of arguments this function takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Function::Pow => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named mathematical constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constant {
    /// The circle constant π.
    Pi,
    /// Euler's number.
    E,
}

impl Constant {
    /// Both allowed constants.
    pub const ALL: [Constant; 2] = [Constant::Pi, Constant::E];

    /// Looks up a constant by its source-level name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(Constant::Pi),
            "e" => Some(Constant::E),
            _ => None,
        }
    }

    /// The source-level name of this constant.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }

    /// The numeric value of this constant.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_is_closed() {
        // Names from the host environment of the original visualizer must
        // never resolve.
        for name in ["Math", "eval", "window", "document", "x", "ln", "T"] {
            assert_eq!(Function::from_name(name), None, "{name}");
            assert_eq!(Constant::from_name(name), None, "{name}");
        }
    }

    #[test]
    fn test_name_round_trip() {
        for func in Function::ALL {
            assert_eq!(Function::from_name(func.name()), Some(func));
        }
        for constant in Constant::ALL {
            assert_eq!(Constant::from_name(constant.name()), Some(constant));
        }
    }

    #[test]
    fn test_arity() {
        assert_eq!(Function::Pow.arity(), 2);
        let unary = Function::ALL.iter().filter(|f| f.arity() == 1).count();
        assert_eq!(unary, Function::ALL.len() - 1);
    }

    #[test]
    fn test_constant_values() {
        assert!((Constant::Pi.value() - 3.141_592_653_589_793).abs() < 1e-15);
        assert!((Constant::E.value() - 2.718_281_828_459_045).abs() < 1e-15);
    }
}
