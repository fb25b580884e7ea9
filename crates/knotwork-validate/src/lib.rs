//! # knotwork-validate
//!
//! Decides whether an equation triple denotes a safe, well-behaved, closed
//! space curve.
//!
//! [`validate`] runs a staged pipeline — emptiness, parenthesis balance,
//! parse, sample evaluation, periodicity, joint geometry — and returns a
//! [`ValidationVerdict`] whose diagnostics appear in stage order, and in
//! axis order (x, y, z) within a stage. That ordering is a contract so
//! callers and tests can assert on it.
//!
//! Validation is a pure function of its three input strings: no shared
//! state, no I/O, statically bounded sampling loops. Re-validating on every
//! keystroke needs no locking; debouncing is the caller's concern.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod curve;
pub mod defaults;
pub mod diagnostic;

pub use curve::{CurveDefinition, CurveError};
pub use diagnostic::{Axis, Diagnostic, DiagnosticKind, ValidationVerdict};

use knotwork_eval::evaluate;
use knotwork_parse::Expression;
use log::debug;

use crate::defaults::{
    DEGENERACY_TOLERANCE, GEOMETRY_SAMPLE_COUNT, MAGNITUDE_LIMIT, PERIOD, PERIODICITY_TOLERANCE,
    SAMPLE_POINTS,
};

/// Checks that parentheses pair up: the running count never goes negative
/// and ends at zero.
///
/// Purely lexical and independent of the parser, so an unbalanced equation
/// is rejected before any parse work happens.
#[must_use]
pub fn balanced_parens(source: &str) -> bool {
    let mut depth: i64 = 0;
    for ch in source.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Validates an equation triple as a renderable closed curve.
///
/// Returns a verdict that is valid if and only if every stage passed; see
/// the crate docs for the stage list and diagnostic ordering. Geometry
/// findings (periodicity, degeneracy, magnitude) count against validity
/// here, but carry [`DiagnosticKind::Geometry`] so callers can treat them
/// as soft warnings.
#[must_use]
pub fn validate(x: &str, y: &str, z: &str) -> ValidationVerdict {
    let sources = [(Axis::X, x), (Axis::Y, y), (Axis::Z, z)];
    let mut diagnostics = Vec::new();

    // Tracks which axes continue through the per-axis stages.
    let mut alive = [true; 3];

    // Stage 1: emptiness.
    for (slot, (axis, source)) in sources.iter().enumerate() {
        if source.trim().is_empty() {
            debug!("{axis} axis rejected: empty");
            diagnostics.push(Diagnostic::syntax(
                *axis,
                format!("{axis} equation cannot be empty"),
            ));
            alive[slot] = false;
        }
    }

    // Stage 2: parenthesis balance.
    for (slot, (axis, source)) in sources.iter().enumerate() {
        if alive[slot] && !balanced_parens(source) {
            debug!("{axis} axis rejected: unbalanced parentheses");
            diagnostics.push(Diagnostic::syntax(
                *axis,
                format!("{axis} equation has unbalanced parentheses"),
            ));
            alive[slot] = false;
        }
    }

    // Stage 3: parse.
    let mut compiled: [Option<Expression>; 3] = [None, None, None];
    for (slot, (axis, source)) in sources.iter().enumerate() {
        if !alive[slot] {
            continue;
        }
        match Expression::parse(source) {
            Ok(expr) => compiled[slot] = Some(expr),
            Err(err) => {
                debug!("{axis} axis rejected: {err}");
                diagnostics.push(Diagnostic::syntax(
                    *axis,
                    format!("{axis} equation cannot be parsed: {err}"),
                ));
                alive[slot] = false;
            }
        }
    }

    // Stage 4: evaluation at the canonical sample points.
    let mut finite = [true; 3];
    for (slot, (axis, _)) in sources.iter().enumerate() {
        let Some(expr) = &compiled[slot] else {
            finite[slot] = false;
            continue;
        };
        if SAMPLE_POINTS.iter().any(|&t| !evaluate(expr, t).is_finite()) {
            debug!("{axis} axis rejected: non-finite sample value");
            diagnostics.push(Diagnostic::evaluation(
                *axis,
                format!("{axis} equation produces invalid values"),
            ));
            finite[slot] = false;
        }
    }

    // Stage 5: periodicity. Runs for every parsed axis. NaN endpoints
    // compare false and stay silent; an infinite endpoint also fails the
    // closure check, matching the evaluation diagnostic above.
    for (slot, (axis, _)) in sources.iter().enumerate() {
        let Some(expr) = &compiled[slot] else {
            continue;
        };
        let start = evaluate(expr, 0.0);
        let end = evaluate(expr, PERIOD);
        if (start - end).abs() > PERIODICITY_TOLERANCE {
            debug!("{axis} axis flagged: f(0) = {start}, f(2π) = {end}");
            diagnostics.push(Diagnostic::geometry(
                Some(*axis),
                format!("{axis} equation may not be periodic (curve might not close)"),
            ));
        }
    }

    // Stage 6: joint geometry. Needs every axis parsed and finite at the
    // canonical samples, otherwise the joint sample cannot be computed.
    // `finite` is false for any axis that failed an earlier stage.
    if finite.iter().all(|&ok| ok) {
        if let [Some(ex), Some(ey), Some(ez)] = &compiled {
            joint_geometry(ex, ey, ez, &mut diagnostics);
        }
    }

    debug!("validation produced {} diagnostic(s)", diagnostics.len());
    ValidationVerdict::new(diagnostics)
}

/// Degeneracy and magnitude checks over a joint sample of the curve.
fn joint_geometry(x: &Expression, y: &Expression, z: &Expression, out: &mut Vec<Diagnostic>) {
    let mut points = [[0.0f64; 3]; GEOMETRY_SAMPLE_COUNT];
    for (i, point) in points.iter_mut().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let t = (i as f64 / GEOMETRY_SAMPLE_COUNT as f64) * PERIOD;
        *point = [evaluate(x, t), evaluate(y, t), evaluate(z, t)];
    }

    let first = points[0];
    let degenerate = points.iter().all(|p| {
        (0..3).all(|c| (p[c] - first[c]).abs() < DEGENERACY_TOLERANCE)
    });
    if degenerate {
        debug!("curve rejected: all joint samples coincide");
        out.push(Diagnostic::geometry(
            None,
            "Equations produce a degenerate curve (all points are the same)".to_string(),
        ));
    }

    let oversized = points
        .iter()
        .any(|p| p.iter().any(|&c| c.abs() > MAGNITUDE_LIMIT));
    if oversized {
        debug!("curve rejected: coordinate magnitude beyond {MAGNITUDE_LIMIT}");
        out.push(Diagnostic::geometry(
            None,
            "Equations produce extremely large values that may cause rendering issues".to_string(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_good_trefoil() {
        let verdict = validate("sin(t) + 2*sin(2*t)", "cos(t) - 2*cos(2*t)", "-sin(3*t)");
        assert!(verdict.is_valid(), "{:?}", verdict.diagnostics());
        assert!(verdict.diagnostics().is_empty());
    }

    #[test]
    fn test_empty_axis() {
        let verdict = validate("", "cos(t)", "sin(t)");
        assert!(!verdict.is_valid());
        // The empty axis is excluded from later stages, so exactly one
        // diagnostic, tagged x.
        assert_eq!(verdict.diagnostics().len(), 1);
        let diagnostic = &verdict.diagnostics()[0];
        assert_eq!(diagnostic.axis, Some(Axis::X));
        assert_eq!(diagnostic.kind, DiagnosticKind::Syntax);
        assert_eq!(diagnostic.message, "X equation cannot be empty");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let verdict = validate("cos(t)", "   ", "sin(t)");
        assert_eq!(verdict.diagnostics().len(), 1);
        assert_eq!(verdict.diagnostics()[0].axis, Some(Axis::Y));
    }

    #[test]
    fn test_unbalanced_parens() {
        let verdict = validate("sin(t", "cos(t)", "sin(t)");
        assert!(!verdict.is_valid());
        assert_eq!(verdict.diagnostics().len(), 1);
        assert_eq!(
            verdict.diagnostics()[0].message,
            "X equation has unbalanced parentheses"
        );
    }

    #[test]
    fn test_balanced_parens_lexical() {
        assert!(balanced_parens("sin(t) * (1 + cos(t))"));
        assert!(!balanced_parens("sin(t"));
        assert!(!balanced_parens(")t("));
        assert!(!balanced_parens("(()"));
    }

    #[test]
    fn test_parse_failure_names_axis_and_reason() {
        let verdict = validate("sin(t)", "Math.sin(t)", "cos(t)");
        assert_eq!(verdict.diagnostics().len(), 1);
        let diagnostic = &verdict.diagnostics()[0];
        assert_eq!(diagnostic.axis, Some(Axis::Y));
        assert_eq!(diagnostic.kind, DiagnosticKind::Syntax);
        assert!(diagnostic.message.starts_with("Y equation cannot be parsed:"));
        assert!(diagnostic.message.contains("Math"));
    }

    #[test]
    fn test_non_finite_samples() {
        // 1/sin(t) blows up at t = 0 and t = π.
        let verdict = validate("1 / sin(t)", "cos(t)", "sin(t)");
        assert!(!verdict.is_valid());
        let invalid: Vec<_> = verdict
            .diagnostics()
            .iter()
            .filter(|d| d.kind == DiagnosticKind::Evaluation)
            .collect();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].message, "X equation produces invalid values");
    }

    #[test]
    fn test_non_periodic_axis() {
        let verdict = validate("t", "cos(t)", "sin(t)");
        assert!(!verdict.is_valid());
        assert_eq!(verdict.diagnostics().len(), 1);
        let diagnostic = &verdict.diagnostics()[0];
        assert_eq!(diagnostic.axis, Some(Axis::X));
        assert_eq!(diagnostic.kind, DiagnosticKind::Geometry);
        assert!(diagnostic.is_warning());
        assert_eq!(
            diagnostic.message,
            "X equation may not be periodic (curve might not close)"
        );
    }

    #[test]
    fn test_degenerate_curve() {
        let verdict = validate("1", "1", "1");
        assert!(!verdict.is_valid());
        assert_eq!(verdict.diagnostics().len(), 1);
        let diagnostic = &verdict.diagnostics()[0];
        assert_eq!(diagnostic.axis, None);
        assert_eq!(
            diagnostic.message,
            "Equations produce a degenerate curve (all points are the same)"
        );
    }

    #[test]
    fn test_oversized_curve() {
        let verdict = validate("pow(t, 50)", "0", "0");
        assert!(!verdict.is_valid());
        assert!(verdict.diagnostics().iter().any(|d| d.message
            == "Equations produce extremely large values that may cause rendering issues"));
    }

    #[test]
    fn test_joint_stage_skipped_when_axis_broken() {
        // z does not parse, so the (degenerate) joint sample is never
        // computed and no geometry diagnostic appears for it.
        let verdict = validate("1", "1", "oops");
        assert_eq!(verdict.diagnostics().len(), 1);
        assert_eq!(verdict.diagnostics()[0].axis, Some(Axis::Z));
    }

    #[test]
    fn test_diagnostic_ordering_is_stage_then_axis() {
        let verdict = validate("", "sin(t", "q");
        let messages: Vec<_> = verdict
            .diagnostics()
            .iter()
            .map(|d| (d.axis, d.kind))
            .collect();
        assert_eq!(
            messages,
            vec![
                (Some(Axis::X), DiagnosticKind::Syntax), // stage 1: empty
                (Some(Axis::Y), DiagnosticKind::Syntax), // stage 2: balance
                (Some(Axis::Z), DiagnosticKind::Syntax), // stage 3: parse
            ]
        );
    }

    #[test]
    fn test_axis_order_within_stage() {
        let verdict = validate("t", "", "t + 1");
        // Stage 1 rejects y; stage 5 then flags x and z in that order.
        assert_eq!(verdict.diagnostics()[0].axis, Some(Axis::Y));
        assert_eq!(verdict.diagnostics()[1].axis, Some(Axis::X));
        assert_eq!(verdict.diagnostics()[2].axis, Some(Axis::Z));
        assert_eq!(verdict.diagnostics().len(), 3);
    }

    #[test]
    fn test_idempotent() {
        let run = || validate("t * cos(t)", "t * sin(t)", "t");
        assert_eq!(run(), run());
    }

    #[test]
    fn test_non_strict_filtering() {
        // A helix is open: hard errors are absent, only the closure
        // warning counts against it.
        let verdict = validate("cos(t)", "sin(t)", "t / 3");
        assert!(!verdict.is_valid());
        assert_eq!(verdict.hard_errors().count(), 0);
        assert_eq!(verdict.warnings().count(), 1);
    }
}
