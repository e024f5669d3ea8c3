//! Editor configuration.

use serde::Deserialize;

/// Default pick radius (screen px) for control points.
const DEFAULT_HIT_RADIUS: f32 = 10.0;
/// Default coordinate tolerance when re-finding a freshly added point.
const DEFAULT_ADD_MATCH_EPSILON: f32 = 0.01;
/// Default coordinate tolerance when re-finding a dragged point.
const DEFAULT_DRAG_MATCH_EPSILON: f32 = 0.001;
/// Default number of spline segments per rendered curve.
const DEFAULT_RENDER_SEGMENTS: usize = 80;
/// Default LUT resolution handed to image consumers.
const DEFAULT_LUT_SIZE: usize = 256;
/// Default node size bounds.
const DEFAULT_MIN_WIDTH: f32 = 280.0;
const DEFAULT_MAX_WIDTH: f32 = 1024.0;
const DEFAULT_MIN_HEIGHT: f32 = 450.0;

/// Runtime configuration for the curve editor widget.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pick radius in screen pixels; a point is hit strictly inside it.
    pub hit_radius: f32,
    /// Tolerance used by add-point index resolution.
    pub add_match_epsilon: f32,
    /// Tolerance used by drag index resolution.
    pub drag_match_epsilon: f32,
    /// Uniform sample steps per drawn curve.
    pub render_segments: usize,
    /// Entries per baked channel LUT.
    pub lut_size: usize,
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit_radius: DEFAULT_HIT_RADIUS,
            add_match_epsilon: DEFAULT_ADD_MATCH_EPSILON,
            drag_match_epsilon: DEFAULT_DRAG_MATCH_EPSILON,
            render_segments: DEFAULT_RENDER_SEGMENTS,
            lut_size: DEFAULT_LUT_SIZE,
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
        }
    }
}

impl EditorConfig {
    /// Defaults, with `TONAL_HIT_RADIUS` and `TONAL_RENDER_SEGMENTS`
    /// overriding their fields when set and parseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            hit_radius: std::env::var("TONAL_HIT_RADIUS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|r: &f32| r.is_finite() && *r > 0.0)
                .unwrap_or(defaults.hit_radius),
            render_segments: std::env::var("TONAL_RENDER_SEGMENTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.render_segments),
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.hit_radius, 10.0);
        assert_eq!(config.render_segments, 80);
        assert_eq!(config.lut_size, 256);
        assert!(config.add_match_epsilon > config.drag_match_epsilon);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EditorConfig =
            serde_json::from_str(r#"{"hit_radius": 14.0, "lut_size": 1024}"#).unwrap();
        assert_eq!(config.hit_radius, 14.0);
        assert_eq!(config.lut_size, 1024);
        assert_eq!(config.render_segments, 80);
        assert_eq!(config.min_height, 450.0);
    }
}
