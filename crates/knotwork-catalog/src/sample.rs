//! Polyline sampling for renderers.

use std::f64::consts::PI;

use knotwork_validate::CurveDefinition;

/// Default number of segments a renderer subdivides the period into.
pub const DEFAULT_SEGMENTS: usize = 400;

/// Samples a curve at `segments + 1` evenly spaced parameter values over
/// `[0, 2π]`, endpoints included.
///
/// For a closed curve the first and last points coincide up to the curve's
/// own periodicity, which is what a line-loop renderer wants. Non-finite
/// components are passed through untouched; feeding this a validated curve
/// is the caller's job.
#[must_use]
pub fn sample_curve(curve: &CurveDefinition, segments: usize) -> Vec<[f64; 3]> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = 2.0 * PI * (i as f64) / (segments as f64);
            curve.point(t)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::knots::KnotKind;

    use super::*;

    #[test]
    fn test_sample_count() {
        let curve = KnotKind::Trefoil.definition();
        assert_eq!(sample_curve(&curve, DEFAULT_SEGMENTS).len(), 401);
        assert_eq!(sample_curve(&curve, 10).len(), 11);
    }

    #[test]
    fn test_trefoil_samples_are_finite_and_closed() {
        let curve = KnotKind::Trefoil.definition();
        let points = sample_curve(&curve, DEFAULT_SEGMENTS);
        for p in &points {
            assert!(p.iter().all(|c| c.is_finite()));
        }
        let first = points[0];
        let last = points[points.len() - 1];
        for c in 0..3 {
            assert!((first[c] - last[c]).abs() < 1e-9, "component {c}");
        }
    }

    #[test]
    fn test_zero_segments_clamped() {
        let curve = KnotKind::Trefoil.definition();
        assert_eq!(sample_curve(&curve, 0).len(), 2);
    }
}
