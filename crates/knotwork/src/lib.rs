//! # Knotwork
//!
//! The equation core of a knot-theory visualizer, rebuilt the hard way.
//!
//! Knotwork turns an untrusted string such as `sin(t) + 2*sin(2*t)` into a
//! compiled, safely evaluable function of one real parameter, and decides
//! whether a triple of such equations denotes a renderable closed space
//! curve. The original system assembled dynamically evaluated code by token
//! substitution; here the allowed-symbol set is enforced structurally by a
//! closed grammar, so there is no denylist and nothing to escape to.
//!
//! ## Quick Start
//!
//! ```rust
//! use knotwork::prelude::*;
//!
//! let expr = Expression::parse("sin(t) + 2*sin(2*t)").unwrap();
//! assert_eq!(evaluate(&expr, 0.0), 0.0);
//!
//! let verdict = validate("sin(t) + 2*sin(2*t)", "cos(t) - 2*cos(2*t)", "-sin(3*t)");
//! assert!(verdict.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use knotwork_catalog as catalog;
pub use knotwork_core as core;
pub use knotwork_eval as eval;
pub use knotwork_parse as parse;
pub use knotwork_validate as validate;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use knotwork_catalog::{CurveSketch, KnotInvariants, KnotKind};
    pub use knotwork_core::{Constant, Function, PARAMETER};
    pub use knotwork_eval::evaluate;
    pub use knotwork_parse::{Expression, ParseError};
    pub use knotwork_validate::{
        validate, Axis, CurveDefinition, Diagnostic, DiagnosticKind, ValidationVerdict,
    };
}
