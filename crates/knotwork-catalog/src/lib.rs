//! # knotwork-catalog
//!
//! Read-only catalog of built-in curves.
//!
//! The per-knot data — parametric equations, crossing number, polynomial
//! strings — is immutable configuration, not computation: it is modeled as
//! a mapping from a closed enumeration of knot identifiers to descriptor
//! records, all `'static`. The catalog also carries the open-curve sketches
//! the visualizer offers as starting points for custom equations, and the
//! polyline sampling a renderer consumes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod invariants;
pub mod knots;
pub mod sample;
pub mod sketch;

pub use invariants::KnotInvariants;
pub use knots::{EquationTriple, KnotKind};
pub use sample::{sample_curve, DEFAULT_SEGMENTS};
pub use sketch::CurveSketch;
