//! Tonal Core: domain layer for per-channel tone curves.
//!
//! This crate contains the control-point model, spline evaluation, the
//! preset catalog and the backing-value codec. No drawing, layout or host
//! framework dependencies.

pub mod channel;
pub mod codec;
pub mod curve_set;
pub mod error;
pub mod model;
pub mod point;
pub mod presets;
pub mod spline;

// Re-exports for convenience.
pub use channel::Channel;
pub use codec::{EditorSnapshot, decode_curves, decode_curves_or_default, encode_curves};
pub use curve_set::{ChannelLuts, CurveSet};
pub use error::CurveError;
pub use model::CurveModel;
pub use point::ControlPoint;
pub use presets::{Preset, auto_adjust_points};
pub use spline::{CurveEvaluator, bake_curve_to_1d_lut, evaluate, sample_curve};
