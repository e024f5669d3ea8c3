//! Draw-command display list.
//!
//! Widgets build a [`DisplayList`] as a pure function of their state; the
//! host either replays it through a [`Painter`] or ships it as JSON to a
//! web frontend.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{FrontendError, Painter, Rect};

/// 8-bit sRGB color used by all draw commands.
pub type Color = palette::Srgb<u8>;

/// Horizontal text anchoring. Text is always vertically centered on the
/// anchor's baseline row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One primitive drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f32,
    },
    RoundRect {
        rect: Rect,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Color>,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
        dash: Option<[f32; 2]>,
    },
    Polyline {
        points: Vec<Vec2>,
        color: Color,
        width: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Text {
        anchor: Vec2,
        text: String,
        color: Color,
        size: f32,
        bold: bool,
        align: TextAlign,
    },
}

/// Ordered list of draw commands; later commands paint over earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Serialize for hosts that draw in a webview.
    pub fn to_json(&self) -> Result<String, FrontendError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Forward every command to `painter`, in order.
    ///
    /// Stops at the first backend error. Polylines with fewer than two
    /// points are rejected as invalid.
    pub fn replay<P: Painter + ?Sized>(&self, painter: &mut P) -> Result<(), FrontendError> {
        for command in &self.commands {
            match command {
                DrawCommand::FillRect { rect, color } => painter.fill_rect(*rect, *color)?,
                DrawCommand::StrokeRect { rect, color, width } => {
                    painter.stroke_rect(*rect, *color, *width)?
                }
                DrawCommand::RoundRect {
                    rect,
                    radius,
                    fill,
                    stroke,
                } => painter.round_rect(*rect, *radius, *fill, *stroke)?,
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    width,
                    dash,
                } => painter.line(*from, *to, *color, *width, *dash)?,
                DrawCommand::Polyline {
                    points,
                    color,
                    width,
                } => {
                    if points.len() < 2 {
                        return Err(FrontendError::InvalidCommand(format!(
                            "polyline with {} point(s)",
                            points.len()
                        )));
                    }
                    painter.polyline(points, *color, *width)?
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => painter.fill_circle(*center, *radius, *color)?,
                DrawCommand::Text {
                    anchor,
                    text,
                    color,
                    size,
                    bold,
                    align,
                } => painter.text(*anchor, text, *color, *size, *bold, *align)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts calls and fails on the n-th one.
    #[derive(Default)]
    struct CountingPainter {
        calls: usize,
        fail_at: Option<usize>,
    }

    impl CountingPainter {
        fn hit(&mut self) -> Result<(), FrontendError> {
            self.calls += 1;
            if Some(self.calls) == self.fail_at {
                return Err(FrontendError::Backend("surface lost".into()));
            }
            Ok(())
        }
    }

    impl Painter for CountingPainter {
        fn fill_rect(&mut self, _: Rect, _: Color) -> Result<(), FrontendError> {
            self.hit()
        }
        fn stroke_rect(&mut self, _: Rect, _: Color, _: f32) -> Result<(), FrontendError> {
            self.hit()
        }
        fn round_rect(
            &mut self,
            _: Rect,
            _: f32,
            _: Option<Color>,
            _: Option<Color>,
        ) -> Result<(), FrontendError> {
            self.hit()
        }
        fn line(
            &mut self,
            _: Vec2,
            _: Vec2,
            _: Color,
            _: f32,
            _: Option<[f32; 2]>,
        ) -> Result<(), FrontendError> {
            self.hit()
        }
        fn polyline(&mut self, _: &[Vec2], _: Color, _: f32) -> Result<(), FrontendError> {
            self.hit()
        }
        fn fill_circle(&mut self, _: Vec2, _: f32, _: Color) -> Result<(), FrontendError> {
            self.hit()
        }
        fn text(
            &mut self,
            _: Vec2,
            _: &str,
            _: Color,
            _: f32,
            _: bool,
            _: TextAlign,
        ) -> Result<(), FrontendError> {
            self.hit()
        }
    }

    fn sample_list() -> DisplayList {
        let white = Color::new(255, 255, 255);
        let mut list = DisplayList::new();
        list.push(DrawCommand::FillRect {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            color: white,
        });
        list.push(DrawCommand::Circle {
            center: Vec2::new(5.0, 5.0),
            radius: 2.0,
            color: white,
        });
        list.push(DrawCommand::Text {
            anchor: Vec2::ZERO,
            text: "RGB:2".into(),
            color: white,
            size: 10.0,
            bold: false,
            align: TextAlign::Left,
        });
        list
    }

    #[test]
    fn test_replay_forwards_every_command() {
        let mut painter = CountingPainter::default();
        sample_list().replay(&mut painter).unwrap();
        assert_eq!(painter.calls, 3);
    }

    #[test]
    fn test_replay_stops_on_backend_error() {
        let mut painter = CountingPainter {
            fail_at: Some(2),
            ..Default::default()
        };
        let err = sample_list().replay(&mut painter).unwrap_err();
        assert!(matches!(err, FrontendError::Backend(_)));
        assert_eq!(painter.calls, 2);
    }

    #[test]
    fn test_replay_rejects_degenerate_polyline() {
        let mut list = DisplayList::new();
        list.push(DrawCommand::Polyline {
            points: vec![Vec2::ZERO],
            color: Color::new(0, 0, 0),
            width: 1.0,
        });
        let err = list.replay(&mut CountingPainter::default()).unwrap_err();
        assert!(matches!(err, FrontendError::InvalidCommand(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let list = sample_list();
        let json = list.to_json().unwrap();
        let back: DisplayList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
