//! Curve model: owns the curve set and keeps the backing value in sync.
//!
//! Every mutating call re-encodes the backing value before returning, so a
//! host reading [`CurveModel::backing_value`] never sees a stale projection.
//! Invalid requests (stale index, removing below two points) are no-ops.

use crate::channel::Channel;
use crate::codec::encode_curves;
use crate::curve_set::{CurveSet, MIN_POINTS};
use crate::point::{self, ControlPoint};
use crate::presets::Preset;

#[derive(Debug, Clone)]
pub struct CurveModel {
    curves: CurveSet,
    backing: String,
}

impl Default for CurveModel {
    fn default() -> Self {
        Self::new(CurveSet::default())
    }
}

impl CurveModel {
    pub fn new(curves: CurveSet) -> Self {
        let mut model = Self {
            curves,
            backing: String::new(),
        };
        model.sync();
        model
    }

    pub fn curves(&self) -> &CurveSet {
        &self.curves
    }

    pub fn points(&self, channel: Channel) -> &[ControlPoint] {
        self.curves.points(channel)
    }

    /// Current serialized projection of the curves.
    pub fn backing_value(&self) -> &str {
        &self.backing
    }

    /// Insert `(x, y)` (clamped) into `channel` and return its index after
    /// re-sorting.
    ///
    /// The index is re-resolved by coordinate match within `match_epsilon`.
    /// Whether a click should add a point at all is the caller's decision.
    pub fn add_point(&mut self, channel: Channel, x: f32, y: f32, match_epsilon: f32) -> usize {
        let target = ControlPoint::new(x, y).clamped();
        let points = self.curves.points_mut(channel);
        points.push(target);
        point::sort_by_x(points);
        let index = point::locate(points, target, match_epsilon).unwrap_or(points.len() - 1);
        tracing::debug!(%channel, index, x = target.x, y = target.y, "added curve point");
        self.sync();
        index
    }

    /// Move the point at `index` to `(x, y)` (clamped), re-sort, and return
    /// where that point now sits.
    ///
    /// Moving across a neighbor's x changes the point's position in the
    /// sequence; the new index is the nearest coordinate match within
    /// `match_epsilon`. Returns `None` without mutating if `index` is stale.
    pub fn move_point(
        &mut self,
        channel: Channel,
        index: usize,
        x: f32,
        y: f32,
        match_epsilon: f32,
    ) -> Option<usize> {
        let target = ControlPoint::new(x, y).clamped();
        let points = self.curves.points_mut(channel);
        let slot = points.get_mut(index)?;
        *slot = target;
        point::sort_by_x(points);
        let new_index = point::locate(points, target, match_epsilon).unwrap_or(index);
        self.sync();
        Some(new_index)
    }

    /// Remove the point at `index`. Refused when the channel would drop
    /// below two points or the index is out of range.
    pub fn remove_point(&mut self, channel: Channel, index: usize) -> bool {
        let points = self.curves.points_mut(channel);
        if points.len() <= MIN_POINTS || index >= points.len() {
            tracing::debug!(%channel, index, len = points.len(), "point removal refused");
            return false;
        }
        points.remove(index);
        self.sync();
        true
    }

    /// Replace `channel` with the identity line.
    pub fn reset_channel(&mut self, channel: Channel) {
        *self.curves.points_mut(channel) = point::identity_points();
        self.sync();
    }

    /// Reset every channel to the identity line.
    pub fn reset_all(&mut self) {
        self.curves = CurveSet::default();
        self.sync();
    }

    /// Replace one channel's points (clamped and sorted; fewer than two
    /// points become the identity line).
    pub fn set_channel_points(&mut self, channel: Channel, points: Vec<ControlPoint>) {
        self.curves.set_points(channel, points);
        self.sync();
    }

    /// Overwrite all four channels with a copy of the preset.
    pub fn apply_preset(&mut self, preset: Preset) {
        self.curves = preset.curves();
        tracing::info!(preset = preset.name(), "applied curve preset");
        self.sync();
    }

    /// Bulk replace, e.g. after restoring a saved snapshot.
    pub fn replace_curves(&mut self, curves: CurveSet) {
        self.curves = curves;
        self.sync();
    }

    fn sync(&mut self) {
        match encode_curves(&self.curves) {
            Ok(encoded) => self.backing = encoded,
            Err(e) => tracing::warn!("failed to encode curves, backing value unchanged: {e}"),
        }
    }
}
