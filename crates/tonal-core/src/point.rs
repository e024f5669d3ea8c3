//! Control points in normalized curve space.

use serde::{Deserialize, Serialize};

/// A curve anchor at `(x, y)` in `[0, 1] × [0, 1]`.
///
/// Points carry no identity beyond their position. They serialize as a
/// two-element array `[x, y]` to match the backing value format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct ControlPoint {
    pub x: f32,
    pub y: f32,
}

impl ControlPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Both coordinates clamped to `[0, 1]`; non-finite values map to `0`.
    pub fn clamped(self) -> Self {
        Self {
            x: unit(self.x),
            y: unit(self.y),
        }
    }

    /// Largest per-axis distance to `other`.
    pub fn chebyshev_distance(self, other: Self) -> f32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

fn unit(v: f32) -> f32 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

impl From<[f32; 2]> for ControlPoint {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<ControlPoint> for [f32; 2] {
    fn from(p: ControlPoint) -> Self {
        [p.x, p.y]
    }
}

/// The 2-point identity line `y = x`.
pub const IDENTITY: [ControlPoint; 2] = [ControlPoint::new(0.0, 0.0), ControlPoint::new(1.0, 1.0)];

/// Identity line as an owned sequence.
pub fn identity_points() -> Vec<ControlPoint> {
    IDENTITY.to_vec()
}

/// Build points from `[x, y]` literals.
pub fn points_from(pairs: &[[f32; 2]]) -> Vec<ControlPoint> {
    pairs.iter().copied().map(ControlPoint::from).collect()
}

/// Sort by x. Stable, so points sharing an x keep their relative order.
pub(crate) fn sort_by_x(points: &mut [ControlPoint]) {
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
}

/// Index of the point nearest to `target` whose per-axis distance is within
/// `epsilon`. An exact match always qualifies; ties go to the lowest index.
pub(crate) fn locate(points: &[ControlPoint], target: ControlPoint, epsilon: f32) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.chebyshev_distance(target)))
        .filter(|&(_, d)| d == 0.0 || d < epsilon)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}
