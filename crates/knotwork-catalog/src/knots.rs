//! The closed set of built-in knots and their equations.

use std::fmt;

use knotwork_validate::CurveDefinition;

use crate::invariants::KnotInvariants;

/// One equation per spatial axis, as source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquationTriple {
    /// The x-axis equation.
    pub x: &'static str,
    /// The y-axis equation.
    pub y: &'static str,
    /// The z-axis equation.
    pub z: &'static str,
}

/// A built-in knot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KnotKind {
    /// The trefoil knot, 3₁.
    Trefoil,
    /// The figure-eight knot, 4₁.
    FigureEight,
    /// The cinquefoil knot, 5₁.
    Cinquefoil,
    /// The Hopf link.
    HopfLink,
    /// The (2, 7) torus knot.
    TorusKnot,
}

impl KnotKind {
    /// Every built-in knot, in catalog order.
    pub const ALL: [KnotKind; 5] = [
        KnotKind::Trefoil,
        KnotKind::FigureEight,
        KnotKind::Cinquefoil,
        KnotKind::HopfLink,
        KnotKind::TorusKnot,
    ];

    /// The catalog identifier of this knot.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            KnotKind::Trefoil => "trefoil",
            KnotKind::FigureEight => "figure-eight",
            KnotKind::Cinquefoil => "cinquefoil",
            KnotKind::HopfLink => "hopf-link",
            KnotKind::TorusKnot => "torus-knot",
        }
    }

    /// Looks up a knot by its catalog identifier.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        KnotKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The parametric equations of this knot over `t ∈ [0, 2π]`.
    #[must_use]
    pub fn equations(self) -> EquationTriple {
        match self {
            KnotKind::Trefoil => EquationTriple {
                x: "sin(t) + 2*sin(2*t)",
                y: "cos(t) - 2*cos(2*t)",
                z: "-sin(3*t)",
            },
            KnotKind::FigureEight => EquationTriple {
                x: "(2 + cos(2*t)) * cos(3*t)",
                y: "(2 + cos(2*t)) * sin(3*t)",
                z: "sin(4*t)",
            },
            KnotKind::Cinquefoil => EquationTriple {
                x: "cos(2*t) * (3 + cos(5*t))",
                y: "sin(2*t) * (3 + cos(5*t))",
                z: "sin(5*t)",
            },
            KnotKind::HopfLink => EquationTriple {
                x: "cos(t) * (2 + cos(2*t))",
                y: "sin(t) * (2 + cos(2*t))",
                z: "sin(2*t)",
            },
            KnotKind::TorusKnot => EquationTriple {
                x: "cos(2*t) * (3 + cos(7*t))",
                y: "sin(2*t) * (3 + cos(7*t))",
                z: "sin(7*t)",
            },
        }
    }

    /// The precomputed invariants of this knot.
    #[must_use]
    pub fn invariants(self) -> KnotInvariants {
        crate::invariants::for_kind(self)
    }

    /// Compiles this knot's equations into a curve definition.
    ///
    /// # Panics
    ///
    /// Panics if a built-in equation fails to parse, which would be a
    /// defect in the catalog itself; the test suite validates every entry.
    #[must_use]
    pub fn definition(self) -> CurveDefinition {
        let eq = self.equations();
        CurveDefinition::parse(eq.x, eq.y, eq.z).expect("built-in knot equations parse")
    }
}

impl fmt::Display for KnotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
