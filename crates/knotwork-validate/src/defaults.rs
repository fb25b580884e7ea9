//! Tuning constants for the validation pipeline.
//!
//! Collected in one place so tests and embedders see the same numbers the
//! pipeline uses.

use std::f64::consts::PI;

/// The parameter period a closed curve must honor: `f(0) ≈ f(PERIOD)`.
pub const PERIOD: f64 = 2.0 * PI;

/// Canonical sample points for the per-axis finiteness check.
pub const SAMPLE_POINTS: [f64; 4] = [0.0, PI / 2.0, PI, 3.0 * PI / 2.0];

/// Absolute tolerance for the closure check `|f(0) - f(2π)|`.
pub const PERIODICITY_TOLERANCE: f64 = 0.01;

/// Number of evenly spaced samples over `[0, 2π)` for the joint geometry
/// checks.
pub const GEOMETRY_SAMPLE_COUNT: usize = 10;

/// Componentwise tolerance under which all sampled points count as one
/// point (a degenerate curve).
pub const DEGENERACY_TOLERANCE: f64 = 0.001;

/// Largest coordinate magnitude the downstream renderer is expected to
/// survive.
pub const MAGNITUDE_LIMIT: f64 = 1000.0;
