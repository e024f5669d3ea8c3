//! Spline-based curve evaluation, display sampling and 1D LUT baking.
//!
//! Implements uniform Catmull-Rom interpolation through user-defined
//! control points. The same evaluator drives the on-screen curve trace and
//! any lookup table generated downstream.
//!
//! # Algorithm
//! Catmull-Rom splines (1974) provide C1 continuity through control points.
//! For each segment between P1 and P2, with neighbors P0 and P3:
//! ```text
//! q(t) = 0.5 × ((2×P1) + (-P0 + P2)×t + (2×P0 - 5×P1 + 4×P2 - P3)×t² + (-P0 + 3×P1 - 3×P2 + P3)×t³)
//! ```
//! At the ends of the sequence the missing neighbor reuses the nearest real
//! point (index clamping) rather than a mirrored phantom point.
//!
//! Output is never clamped here. [`sample_curve`] and
//! [`bake_curve_to_1d_lut`] clamp to `[0, 1]`; direct callers of
//! [`evaluate`] decide for themselves.
//!
//! # Complexity
//! - Evaluate: O(N) segment scan + O(1) interpolation
//! - Bake to 1D LUT: O(N × size)

use crate::point::ControlPoint;

/// Segments narrower than this are treated as degenerate (`t = 0`).
pub const SEGMENT_EPSILON: f32 = 1e-4;

/// Input positions at or inside these bounds count as boundary anchors when
/// baking a LUT.
const LUT_LOW_ANCHOR: f32 = 0.001;
const LUT_HIGH_ANCHOR: f32 = 0.999;

/// Evaluates a uniform Catmull-Rom spline through control points.
///
/// Control points must be sorted by x.
pub struct CurveEvaluator<'a> {
    pub control_points: &'a [ControlPoint],
}

impl CurveEvaluator<'_> {
    /// Evaluate the curve at `x`.
    ///
    /// The segment is the first one whose x-range contains `x`; when none
    /// does (x outside the control range) the last segment is extrapolated.
    ///
    /// Returns `x` (identity) if fewer than 2 control points.
    pub fn evaluate(&self, x: f32) -> f32 {
        let pts = self.control_points;
        let n = pts.len();
        if n < 2 {
            return x;
        }

        let seg = pts
            .windows(2)
            .position(|w| w[0].x <= x && x <= w[1].x)
            .unwrap_or(n - 2);

        let at = |i: isize| pts[i.clamp(0, n as isize - 1) as usize];
        let s = seg as isize;
        let p0 = at(s - 1);
        let p1 = at(s);
        let p2 = at(s + 1);
        let p3 = at(s + 2);

        let width = p2.x - p1.x;
        let t = if width > SEGMENT_EPSILON {
            (x - p1.x) / width
        } else {
            0.0
        };
        // The blend is only approximately P2 at t = 1; anchors must be exact.
        if t == 1.0 {
            return p2.y;
        }

        catmull_rom(p0.y, p1.y, p2.y, p3.y, t)
    }
}

/// Evaluate the spline through `points` at `x`. See [`CurveEvaluator`].
pub fn evaluate(points: &[ControlPoint], x: f32) -> f32 {
    CurveEvaluator {
        control_points: points,
    }
    .evaluate(x)
}

/// Catmull-Rom cubic interpolation between P1 and P2.
fn catmull_rom(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Sample the curve at `segments + 1` uniform positions over `[0, 1]`.
///
/// Sampled y values are clamped to `[0, 1]`, which is what the curve display
/// wants. Fewer than 2 control points yields the identity pair.
pub fn sample_curve(points: &[ControlPoint], segments: usize) -> Vec<ControlPoint> {
    if points.len() < 2 {
        return crate::point::identity_points();
    }
    let segments = segments.max(1);
    let evaluator = CurveEvaluator {
        control_points: points,
    };

    (0..=segments)
        .map(|i| {
            let x = i as f32 / segments as f32;
            ControlPoint::new(x, evaluator.evaluate(x).clamp(0.0, 1.0))
        })
        .collect()
}

/// Bake a set of curve control points into a 1D LUT.
///
/// The LUT maps uniformly-spaced inputs over `[0, 1]` to clamped curve
/// outputs. When the first or last anchor sits inside the unit range a flat
/// anchor at x = 0 / x = 1 is added so the table covers the whole domain.
///
/// Fewer than 2 control points produce an identity LUT.
pub fn bake_curve_to_1d_lut(control_points: &[ControlPoint], size: usize) -> Vec<f32> {
    let step = |i: usize| i as f32 / (size.saturating_sub(1)).max(1) as f32;

    if control_points.len() < 2 {
        return (0..size).map(step).collect();
    }

    let mut points = control_points.to_vec();
    crate::point::sort_by_x(&mut points);
    let first = points[0];
    if first.x > LUT_LOW_ANCHOR {
        points.insert(0, ControlPoint::new(0.0, first.y));
    }
    let last = points[points.len() - 1];
    if last.x < LUT_HIGH_ANCHOR {
        points.push(ControlPoint::new(1.0, last.y));
    }

    let evaluator = CurveEvaluator {
        control_points: &points,
    };

    (0..size)
        .map(|i| evaluator.evaluate(step(i)).clamp(0.0, 1.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::points_from;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_catmull_rom_endpoints() {
        // At t=0, should return p1; at t=1, should return p2
        let v = catmull_rom(0.0, 0.25, 0.75, 1.0, 0.0);
        assert!((v - 0.25).abs() < EPSILON);
        let v = catmull_rom(0.0, 0.25, 0.75, 1.0, 1.0);
        assert!((v - 0.75).abs() < EPSILON);
    }

    #[test]
    fn test_identity_evaluates_to_x() {
        let points = points_from(&[[0.0, 0.0], [1.0, 1.0]]);
        assert!((evaluate(&points, 0.0) - 0.0).abs() < EPSILON);
        assert!((evaluate(&points, 0.5) - 0.5).abs() < EPSILON);
        assert!((evaluate(&points, 1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_passes_through_every_anchor() {
        let points = points_from(&[
            [0.0, 0.1],
            [0.2, 0.05],
            [0.45, 0.7],
            [0.6, 0.3],
            [0.9, 0.95],
            [1.0, 0.8],
        ]);
        for p in &points {
            let y = evaluate(&points, p.x);
            assert!(
                y == p.y,
                "anchor ({}, {}): evaluated {y}",
                p.x,
                p.y
            );
        }
    }

    #[test]
    fn test_interior_anchor_is_exact_where_blend_rounds() {
        let points = points_from(&[[0.0, 0.0], [0.1823352, 0.3349071], [0.55, 0.41], [1.0, 1.0]]);
        assert_eq!(evaluate(&points, 0.1823352), 0.3349071);
        assert_eq!(evaluate(&points, 0.55), 0.41);
        assert_eq!(evaluate(&points, 1.0), 1.0);
    }

    #[test]
    fn test_fewer_than_two_points_is_identity() {
        assert!((evaluate(&[], 0.3) - 0.3).abs() < EPSILON);
        let one = points_from(&[[0.5, 0.9]]);
        assert!((evaluate(&one, 0.7) - 0.7).abs() < EPSILON);
    }

    #[test]
    fn test_degenerate_segment_uses_t_zero() {
        // Two points sharing x: the zero-width segment evaluates to its start.
        let points = points_from(&[[0.5, 0.2], [0.5, 0.8], [1.0, 1.0]]);
        let y = evaluate(&points, 0.5);
        assert!(y.is_finite());
        assert!((y - 0.2).abs() < EPSILON);
    }

    #[test]
    fn test_evaluate_does_not_clamp_overshoot() {
        // A sharp peak overshoots above 1.0 next to the anchor.
        let points = points_from(&[[0.0, 0.0], [0.4, 1.0], [0.5, 1.0], [0.6, 0.0], [1.0, 0.0]]);
        let peak = (0..=100)
            .map(|i| evaluate(&points, i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "expected overshoot, max was {peak}");

        let sampled = sample_curve(&points, 100);
        assert!(sampled.iter().all(|p| (0.0..=1.0).contains(&p.y)));
    }

    #[test]
    fn test_sample_curve_density_and_range() {
        let points = points_from(&[[0.0, 0.0], [1.0, 1.0]]);
        let samples = sample_curve(&points, 80);
        assert_eq!(samples.len(), 81);
        assert_eq!(samples[0].x, 0.0);
        assert_eq!(samples[80].x, 1.0);
    }

    #[test]
    fn test_bake_curve_to_1d_lut_identity() {
        let lut = bake_curve_to_1d_lut(&[], 256);
        assert_eq!(lut.len(), 256);
        assert!((lut[0] - 0.0).abs() < EPSILON);
        assert!((lut[255] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_bake_extends_interior_endpoints_flat() {
        let points = points_from(&[[0.2, 0.3], [0.8, 0.6]]);
        let lut = bake_curve_to_1d_lut(&points, 11);
        assert!((lut[0] - 0.3).abs() < EPSILON);
        assert!((lut[1] - 0.3).abs() < 0.03);
        assert!((lut[10] - 0.6).abs() < EPSILON);
    }

    #[test]
    fn test_bake_degenerate_sizes() {
        let points = points_from(&[[0.0, 0.2], [1.0, 1.0]]);
        assert!(bake_curve_to_1d_lut(&points, 0).is_empty());
        let single = bake_curve_to_1d_lut(&points, 1);
        assert_eq!(single.len(), 1);
        assert!((single[0] - 0.2).abs() < EPSILON);
    }
}
