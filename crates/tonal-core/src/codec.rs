//! Backing-value and snapshot encoding.
//!
//! The backing value is the JSON object the host stores for the curves
//! parameter: `{"rgb":[[0,0],[1,1]],"red":[...],"green":[...],"blue":[...]}`.
//! The snapshot wraps it with the active channel so a saved node reopens on
//! the channel it was left on.

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::curve_set::{CurveSet, MIN_POINTS};
use crate::error::CurveError;
use crate::point::ControlPoint;

/// Wire shape accepted on decode. Missing channels deserialize empty and
/// are resolved by [`RawCurveSet::validate`].
#[derive(Deserialize)]
struct RawCurveSet {
    #[serde(default)]
    rgb: Vec<ControlPoint>,
    #[serde(default)]
    red: Vec<ControlPoint>,
    #[serde(default)]
    green: Vec<ControlPoint>,
    #[serde(default)]
    blue: Vec<ControlPoint>,
}

impl RawCurveSet {
    /// The combined channel must be usable; a short component channel falls
    /// back to identity.
    fn validate(self) -> Result<CurveSet, CurveError> {
        if self.rgb.len() < MIN_POINTS {
            return Err(CurveError::TooFewPoints {
                channel: Channel::Rgb,
                count: self.rgb.len(),
            });
        }
        Ok(CurveSet::from_channels(
            self.rgb, self.red, self.green, self.blue,
        ))
    }
}

/// Encode a curve set as the backing value string.
pub fn encode_curves(curves: &CurveSet) -> Result<String, CurveError> {
    Ok(serde_json::to_string(curves)?)
}

/// Decode a backing value, rejecting malformed JSON and a combined channel
/// with fewer than two points.
pub fn decode_curves(encoded: &str) -> Result<CurveSet, CurveError> {
    let raw: RawCurveSet = serde_json::from_str(encoded)?;
    raw.validate()
}

/// Decode a backing value, falling back to identity curves on any error.
pub fn decode_curves_or_default(encoded: &str) -> CurveSet {
    match decode_curves(encoded) {
        Ok(curves) => curves,
        Err(e) => {
            tracing::warn!("ignoring backing value, using identity curves: {e}");
            CurveSet::default()
        }
    }
}

/// Node-level persisted editor state: curves plus the active channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorSnapshot {
    pub channel: Channel,
    pub points: CurveSet,
}

#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    channel: Channel,
    points: RawCurveSet,
}

impl EditorSnapshot {
    pub fn to_json(&self) -> Result<String, CurveError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(encoded: &str) -> Result<Self, CurveError> {
        let raw: RawSnapshot = serde_json::from_str(encoded)?;
        Ok(Self {
            channel: raw.channel,
            points: raw.points.validate()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{IDENTITY, points_from};

    #[test]
    fn test_encode_identity_layout() {
        let json = encode_curves(&CurveSet::default()).unwrap();
        assert_eq!(
            json,
            r#"{"rgb":[[0.0,0.0],[1.0,1.0]],"red":[[0.0,0.0],[1.0,1.0]],"green":[[0.0,0.0],[1.0,1.0]],"blue":[[0.0,0.0],[1.0,1.0]]}"#
        );
    }

    #[test]
    fn test_decode_accepts_integer_literals() {
        let set = decode_curves(
            r#"{"rgb":[[0,0],[0.5,0.6],[1,1]],"red":[[0,0],[1,1]],"green":[[0,0],[1,1]],"blue":[[0,0],[1,1]]}"#,
        )
        .unwrap();
        assert_eq!(
            set.points(Channel::Rgb),
            points_from(&[[0.0, 0.0], [0.5, 0.6], [1.0, 1.0]]).as_slice()
        );
    }

    #[test]
    fn test_decode_rejects_short_combined_channel() {
        let err = decode_curves(r#"{"rgb":[[0,0]]}"#).unwrap_err();
        assert!(matches!(
            err,
            CurveError::TooFewPoints {
                channel: Channel::Rgb,
                count: 1
            }
        ));
    }

    #[test]
    fn test_decode_backfills_missing_component_channels() {
        let set = decode_curves(r#"{"rgb":[[0,0.1],[1,0.9]],"red":[[0.5,0.5]]}"#).unwrap();
        assert_eq!(set.points(Channel::Red), IDENTITY.as_slice());
        assert_eq!(set.points(Channel::Blue), IDENTITY.as_slice());
    }

    #[test]
    fn test_lenient_decode_falls_back_on_garbage() {
        assert!(decode_curves_or_default("not json").is_identity());
        assert!(decode_curves_or_default(r#"{"rgb":[[0,0,0]]}"#).is_identity());
        assert!(decode_curves_or_default("").is_identity());
    }

    #[test]
    fn test_snapshot_keeps_channel() {
        let snapshot = EditorSnapshot {
            channel: Channel::Green,
            points: CurveSet::default(),
        };
        let json = snapshot.to_json().unwrap();
        assert!(json.starts_with(r#"{"channel":"green","points":{"rgb""#));
        assert_eq!(EditorSnapshot::from_json(&json).unwrap(), snapshot);
    }
}
