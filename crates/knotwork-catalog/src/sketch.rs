//! Open-curve sketches offered as starting points for custom equations.
//!
//! These are the editor presets of the visualizer, not knots: the spiral
//! and helix deliberately do not close, so running them through the
//! validator trips the periodicity check. They are kept in the catalog
//! because they are useful seeds for experimentation.

use std::fmt;

use crate::knots::EquationTriple;

/// A non-knot preset curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveSketch {
    /// An Archimedean-style spiral growing with `t`.
    Spiral,
    /// A circular helix climbing in z.
    Helix,
    /// A closed Lissajous curve.
    Lissajous,
}

impl CurveSketch {
    /// Every sketch, in catalog order.
    pub const ALL: [CurveSketch; 3] = [
        CurveSketch::Spiral,
        CurveSketch::Helix,
        CurveSketch::Lissajous,
    ];

    /// The catalog identifier of this sketch.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CurveSketch::Spiral => "spiral",
            CurveSketch::Helix => "helix",
            CurveSketch::Lissajous => "lissajous",
        }
    }

    /// The equations of this sketch.
    #[must_use]
    pub fn equations(self) -> EquationTriple {
        match self {
            CurveSketch::Spiral => EquationTriple {
                x: "t * cos(t)",
                y: "t * sin(t)",
                z: "t",
            },
            CurveSketch::Helix => EquationTriple {
                x: "cos(t)",
                y: "sin(t)",
                z: "t / 3",
            },
            CurveSketch::Lissajous => EquationTriple {
                x: "sin(3*t)",
                y: "sin(2*t)",
                z: "sin(5*t)",
            },
        }
    }

    /// Whether this sketch closes over the standard period.
    #[must_use]
    pub fn is_closed(self) -> bool {
        matches!(self, CurveSketch::Lissajous)
    }
}

impl fmt::Display for CurveSketch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use knotwork_validate::{validate, DiagnosticKind};

    use super::*;

    #[test]
    fn test_lissajous_validates_cleanly() {
        let eq = CurveSketch::Lissajous.equations();
        let verdict = validate(eq.x, eq.y, eq.z);
        assert!(verdict.is_valid(), "{:?}", verdict.diagnostics());
    }

    #[test]
    fn test_open_sketches_fail_only_on_periodicity() {
        for sketch in [CurveSketch::Spiral, CurveSketch::Helix] {
            let eq = sketch.equations();
            let verdict = validate(eq.x, eq.y, eq.z);
            assert!(!verdict.is_valid(), "{sketch}");
            assert_eq!(verdict.hard_errors().count(), 0, "{sketch}");
            assert!(
                verdict
                    .diagnostics()
                    .iter()
                    .all(|d| d.kind == DiagnosticKind::Geometry),
                "{sketch}"
            );
        }
    }

    #[test]
    fn test_closure_flag_matches_validator() {
        for sketch in CurveSketch::ALL {
            let eq = sketch.equations();
            assert_eq!(validate(eq.x, eq.y, eq.z).is_valid(), sketch.is_closed());
        }
    }
}
