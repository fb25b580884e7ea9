//! Curve definitions: a compiled equation per spatial axis.

use knotwork_eval::evaluate;
use knotwork_parse::{Expression, ParseError};
use thiserror::Error;

use crate::diagnostic::Axis;

/// Failure to compile an equation triple into a curve.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{axis} equation: {source}")]
pub struct CurveError {
    /// The first axis whose equation failed to parse.
    pub axis: Axis,
    /// The underlying parse failure.
    #[source]
    pub source: ParseError,
}

/// A parametric space curve: one compiled equation per axis.
///
/// Exists only if all three equations parse; whether the triple denotes a
/// *renderable* curve is the stronger property established by
/// [`crate::validate`].
#[derive(Clone, Debug)]
pub struct CurveDefinition {
    x: Expression,
    y: Expression,
    z: Expression,
}

impl CurveDefinition {
    /// Compiles an equation triple.
    ///
    /// # Errors
    ///
    /// Returns the parse failure of the first axis (in x, y, z order) that
    /// does not compile.
    pub fn parse(x: &str, y: &str, z: &str) -> Result<Self, CurveError> {
        let compile = |axis: Axis, source: &str| {
            Expression::parse(source).map_err(|err| CurveError { axis, source: err })
        };
        Ok(Self {
            x: compile(Axis::X, x)?,
            y: compile(Axis::Y, y)?,
            z: compile(Axis::Z, z)?,
        })
    }

    /// The compiled equation for one axis.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> &Expression {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Evaluates all three equations at a parameter value.
    ///
    /// Components may be non-finite; see `knotwork-eval` for the sentinel
    /// convention.
    #[must_use]
    pub fn point(&self, t: f64) -> [f64; 3] {
        [
            evaluate(&self.x, t),
            evaluate(&self.y, t),
            evaluate(&self.z, t),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reports_first_failing_axis() {
        let err = CurveDefinition::parse("t", "q", "also bad").unwrap_err();
        assert_eq!(err.axis, Axis::Y);
        assert!(matches!(err.source, ParseError::UnknownSymbol { .. }));
    }

    #[test]
    fn test_point_evaluates_all_axes() {
        let curve = CurveDefinition::parse("cos(t)", "sin(t)", "t / 3").unwrap();
        let [x, y, z] = curve.point(0.0);
        assert_eq!(x, 1.0);
        assert_eq!(y, 0.0);
        assert_eq!(z, 0.0);
    }

    #[test]
    fn test_axis_accessor() {
        let curve = CurveDefinition::parse("1", "2", "3").unwrap();
        assert_eq!(curve.axis(Axis::Z).source(), "3");
    }
}
