//! Precomputed topological invariants.
//!
//! These are lookup values, not computed ones: crossing numbers and
//! polynomials of the built-in knots are mathematical facts baked in at
//! compile time. Custom curves get an estimated placeholder, as the
//! invariant computation itself is out of scope.

use crate::knots::KnotKind;

/// Topological invariants of a knot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnotInvariants {
    /// Minimal crossing number.
    pub crossing_number: u32,
    /// Writhe of the standard diagram.
    pub writhe: i32,
    /// Seifert genus.
    pub genus: u32,
    /// Alexander polynomial, display form.
    pub alexander_polynomial: &'static str,
    /// Jones polynomial, display form.
    pub jones_polynomial: &'static str,
}

impl KnotInvariants {
    /// Placeholder invariants reported for custom curves.
    pub const CUSTOM_ESTIMATE: KnotInvariants = KnotInvariants {
        crossing_number: 3,
        writhe: 0,
        genus: 1,
        alexander_polynomial: "Custom (not computed)",
        jones_polynomial: "Custom (not computed)",
    };
}

/// The invariants of a built-in knot.
#[must_use]
pub fn for_kind(kind: KnotKind) -> KnotInvariants {
    match kind {
        KnotKind::Trefoil => KnotInvariants {
            crossing_number: 3,
            writhe: 0,
            genus: 1,
            alexander_polynomial: "t - 1 + t⁻¹",
            jones_polynomial: "q + q³ - q⁴",
        },
        KnotKind::FigureEight => KnotInvariants {
            crossing_number: 4,
            writhe: 0,
            genus: 1,
            alexander_polynomial: "-t + 3 - t⁻¹",
            jones_polynomial: "q⁻² - q⁻¹ + 1 - q + q²",
        },
        KnotKind::Cinquefoil => KnotInvariants {
            crossing_number: 5,
            writhe: 0,
            genus: 2,
            alexander_polynomial: "t² - t + 1 - t⁻¹ + t⁻²",
            jones_polynomial: "q² + q⁴ - q⁵ + q⁶ - q⁷",
        },
        KnotKind::HopfLink => KnotInvariants {
            crossing_number: 2,
            writhe: 0,
            genus: 0,
            alexander_polynomial: "0",
            jones_polynomial: "-q⁻¹ - q",
        },
        KnotKind::TorusKnot => KnotInvariants {
            crossing_number: 7,
            writhe: 0,
            genus: 3,
            alexander_polynomial: "t³ - t² + t - 1 + t⁻¹ - t⁻² + t⁻³",
            jones_polynomial: "q³ + q⁵ - q⁶ + q⁷ - q⁸ + q⁹ - q¹⁰",
        },
    }
}

/// Invariants for a named catalog entry, or the custom estimate for
/// anything else.
#[must_use]
pub fn for_name(name: &str) -> KnotInvariants {
    KnotKind::from_name(name).map_or(KnotInvariants::CUSTOM_ESTIMATE, for_kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_crossing_numbers() {
        assert_eq!(for_kind(KnotKind::Trefoil).crossing_number, 3);
        assert_eq!(for_kind(KnotKind::FigureEight).crossing_number, 4);
        assert_eq!(for_kind(KnotKind::Cinquefoil).crossing_number, 5);
        assert_eq!(for_kind(KnotKind::HopfLink).crossing_number, 2);
        assert_eq!(for_kind(KnotKind::TorusKnot).crossing_number, 7);
    }

    #[test]
    fn test_unknown_name_gets_estimate() {
        assert_eq!(for_name("my-custom-curve"), KnotInvariants::CUSTOM_ESTIMATE);
        assert_eq!(for_name("trefoil"), for_kind(KnotKind::Trefoil));
    }

    #[test]
    fn test_genus_bound() {
        // Seifert's inequality: 2g ≤ c - 1 for the knots here.
        for kind in KnotKind::ALL {
            let inv = for_kind(kind);
            assert!(2 * inv.genus <= inv.crossing_number - 1, "{kind}");
        }
    }
}
