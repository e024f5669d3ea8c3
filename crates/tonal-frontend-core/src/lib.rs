//! Frontend core abstractions for Tonal widgets.
//!
//! Defines the [`Painter`] trait that abstracts over host drawing backends
//! (a node-graph canvas, a webview, a test recorder). Pointer events, screen
//! rectangles and the draw-command display list are also defined here so
//! widget crates never depend on a particular host framework.

pub mod draw;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use draw::{Color, DisplayList, DrawCommand, TextAlign};

// ── Errors ───────────────────────────────────────────────────────

/// Errors that can occur while replaying draw commands on a host.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("invalid draw command: {0}")]
    InvalidCommand(String),

    #[error("failed to encode display list: {0}")]
    Encode(#[from] serde_json::Error),
}

// ── Geometry ─────────────────────────────────────────────────────

/// Axis-aligned screen rectangle, origin top-left, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }
}

// ── Input events ─────────────────────────────────────────────────

/// Pointer event delivered by the host, in the same screen space as the
/// widget's last computed layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: Vec2,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }
}

/// Modifier keys the editor reacts to. Other keys a host reports are
/// dropped on decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Turns a click on a control point into a removal.
    #[serde(default)]
    pub shift: bool,
}

/// How a widget handled an input event.
///
/// An unconsumed event falls through to the host's default handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventReply {
    pub consumed: bool,
    pub redraw: bool,
}

impl EventReply {
    /// Not handled; let the host process it.
    pub const IGNORED: Self = Self {
        consumed: false,
        redraw: false,
    };
    /// Handled, nothing visible changed.
    pub const CONSUMED: Self = Self {
        consumed: true,
        redraw: false,
    };
    /// Handled, the widget needs a redraw.
    pub const REDRAW: Self = Self {
        consumed: true,
        redraw: true,
    };
}

// ── Backend trait ────────────────────────────────────────────────

/// Trait for host drawing surfaces that can replay a [`DisplayList`].
///
/// Coordinates are in the widget's screen space.
pub trait Painter {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), FrontendError>;

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) -> Result<(), FrontendError>;

    /// Rounded rectangle, optionally filled and/or outlined.
    fn round_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Color>,
    ) -> Result<(), FrontendError>;

    /// Straight line; `dash` is an on/off pattern in screen units.
    fn line(
        &mut self,
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
        dash: Option<[f32; 2]>,
    ) -> Result<(), FrontendError>;

    fn polyline(&mut self, points: &[Vec2], color: Color, width: f32) -> Result<(), FrontendError>;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), FrontendError>;

    fn text(
        &mut self,
        anchor: Vec2,
        text: &str,
        color: Color,
        size: f32,
        bold: bool,
        align: TextAlign,
    ) -> Result<(), FrontendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_inclusive() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(40.0, 60.0)));
        assert!(!r.contains(Vec2::new(40.1, 60.0)));
        assert!(!r.contains(Vec2::new(9.9, 30.0)));
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_pointer_event_modifiers() {
        let ev = PointerEvent::at(1.0, 2.0);
        assert!(!ev.modifiers.shift);
        assert!(ev.with_shift().modifiers.shift);
    }

    #[test]
    fn test_pointer_event_from_host_json() {
        let ev: PointerEvent = serde_json::from_str(
            r#"{"position":[12.5,40.0],"modifiers":{"shift":true,"ctrl":true,"meta":false}}"#,
        )
        .unwrap();
        assert_eq!(ev.position, Vec2::new(12.5, 40.0));
        assert!(ev.modifiers.shift);

        let ev: PointerEvent = serde_json::from_str(r#"{"position":[0.0,0.0]}"#).unwrap();
        assert_eq!(ev.modifiers, Modifiers::default());
    }
}
