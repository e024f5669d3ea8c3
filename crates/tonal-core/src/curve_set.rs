//! Per-channel control-point sequences.

use serde::Serialize;

use crate::channel::Channel;
use crate::point::{self, ControlPoint};
use crate::spline::bake_curve_to_1d_lut;

/// Minimum number of control points a channel may hold.
pub const MIN_POINTS: usize = 2;

/// One ordered point sequence per channel.
///
/// Invariants: each sequence holds at least [`MIN_POINTS`] points, sorted by
/// ascending x. Mutation goes through [`crate::CurveModel`]; the fields are
/// private so the invariants cannot be bypassed.
///
/// Serializes to the backing value format
/// `{"rgb":[[x,y],...],"red":[...],"green":[...],"blue":[...]}`.
/// Decoding lives in [`crate::codec`] because it validates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSet {
    rgb: Vec<ControlPoint>,
    red: Vec<ControlPoint>,
    green: Vec<ControlPoint>,
    blue: Vec<ControlPoint>,
}

impl Default for CurveSet {
    fn default() -> Self {
        Self {
            rgb: point::identity_points(),
            red: point::identity_points(),
            green: point::identity_points(),
            blue: point::identity_points(),
        }
    }
}

impl CurveSet {
    /// Build a curve set from raw sequences.
    ///
    /// Points are clamped to the unit square and sorted. A sequence with
    /// fewer than [`MIN_POINTS`] points is replaced by the identity line.
    pub fn from_channels(
        rgb: Vec<ControlPoint>,
        red: Vec<ControlPoint>,
        green: Vec<ControlPoint>,
        blue: Vec<ControlPoint>,
    ) -> Self {
        Self {
            rgb: normalize(rgb),
            red: normalize(red),
            green: normalize(green),
            blue: normalize(blue),
        }
    }

    /// Points of one channel, sorted by x.
    pub fn points(&self, channel: Channel) -> &[ControlPoint] {
        match channel {
            Channel::Rgb => &self.rgb,
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    pub(crate) fn points_mut(&mut self, channel: Channel) -> &mut Vec<ControlPoint> {
        match channel {
            Channel::Rgb => &mut self.rgb,
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }

    /// Replace one channel, normalizing as in [`CurveSet::from_channels`].
    pub(crate) fn set_points(&mut self, channel: Channel, points: Vec<ControlPoint>) {
        *self.points_mut(channel) = normalize(points);
    }

    /// Iterate channels in selector order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &[ControlPoint])> {
        Channel::ALL.into_iter().map(|c| (c, self.points(c)))
    }

    /// Whether a channel holds more than the two default anchors.
    pub fn is_edited(&self, channel: Channel) -> bool {
        self.points(channel).len() > MIN_POINTS
    }

    /// Whether every channel is exactly the identity line.
    pub fn is_identity(&self) -> bool {
        self.iter().all(|(_, pts)| pts == point::IDENTITY.as_slice())
    }

    /// Bake every channel into a clamped 1D lookup table of `size` entries.
    pub fn bake_luts(&self, size: usize) -> ChannelLuts {
        ChannelLuts {
            rgb: bake_curve_to_1d_lut(&self.rgb, size),
            red: bake_curve_to_1d_lut(&self.red, size),
            green: bake_curve_to_1d_lut(&self.green, size),
            blue: bake_curve_to_1d_lut(&self.blue, size),
        }
    }
}

fn normalize(points: Vec<ControlPoint>) -> Vec<ControlPoint> {
    if points.len() < MIN_POINTS {
        return point::identity_points();
    }
    let mut points: Vec<ControlPoint> = points.into_iter().map(ControlPoint::clamped).collect();
    point::sort_by_x(&mut points);
    points
}

/// Baked lookup tables, one per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelLuts {
    pub rgb: Vec<f32>,
    pub red: Vec<f32>,
    pub green: Vec<f32>,
    pub blue: Vec<f32>,
}

impl ChannelLuts {
    pub fn lut(&self, channel: Channel) -> &[f32] {
        match channel {
            Channel::Rgb => &self.rgb,
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }
}
