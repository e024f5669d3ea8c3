//! Per-frame layout and screen/curve coordinate mapping.
//!
//! [`FrameLayout::compute`] is a pure function of the host frame. The
//! renderer and every pointer handler call it with the same frame, so hit
//! regions always match what was drawn.

use glam::Vec2;
use tonal_core::{Channel, ControlPoint};
use tonal_frontend_core::Rect;

use crate::config::EditorConfig;
use crate::theme;

/// Node geometry supplied by the host for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostFrame {
    pub width: f32,
    pub height: f32,
    /// Distance from the node top to the bottom of the last sibling control.
    pub header_offset: f32,
    pub collapsed: bool,
}

impl HostFrame {
    pub fn new(width: f32, height: f32, header_offset: f32) -> Self {
        Self {
            width,
            height,
            header_offset,
            collapsed: false,
        }
    }
}

/// Header offset for a node whose visible sibling controls have the given
/// heights. Zero-height (hidden) controls take no space.
pub fn header_offset_for(sibling_heights: &[f32]) -> f32 {
    sibling_heights
        .iter()
        .filter(|h| **h > 0.0)
        .fold(theme::TITLE_HEIGHT, |acc, h| acc + h + theme::SIBLING_SPACING)
}

/// Clamp a requested node size to the editor's bounds.
pub fn clamp_node_size(size: [f32; 2], config: &EditorConfig) -> [f32; 2] {
    [
        size[0].clamp(config.min_width, config.max_width),
        size[1].max(config.min_height),
    ]
}

// ── Curve area ──────────────────────────────────────────────────────────────

/// The square plot, in screen space. Normalized y grows upwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveArea {
    pub origin: Vec2,
    pub size: f32,
}

impl CurveArea {
    /// Screen position to normalized curve space, clamped to [0, 1].
    pub fn to_normalized(&self, screen: Vec2) -> Vec2 {
        let rel = (screen - self.origin) / self.size;
        Vec2::new(rel.x.clamp(0.0, 1.0), (1.0 - rel.y).clamp(0.0, 1.0))
    }

    pub fn to_screen(&self, normalized: Vec2) -> Vec2 {
        Vec2::new(
            self.origin.x + normalized.x * self.size,
            self.origin.y + self.size - normalized.y * self.size,
        )
    }

    pub fn point_to_screen(&self, point: ControlPoint) -> Vec2 {
        self.to_screen(Vec2::new(point.x, point.y))
    }

    pub fn contains(&self, screen: Vec2) -> bool {
        self.rect().contains(screen)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, self.size, self.size)
    }
}

// ── Buttons ─────────────────────────────────────────────────────────────────

/// Operations bound to the action button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AutoAdjust,
    ClearChannel,
    ResetAll,
}

impl Action {
    /// Button order, left to right.
    pub const ALL: [Action; 3] = [Action::AutoAdjust, Action::ClearChannel, Action::ResetAll];

    pub const fn label(self) -> &'static str {
        match self {
            Action::AutoAdjust => "Auto",
            Action::ClearChannel => "Clear",
            Action::ResetAll => "Reset All",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelButton {
    pub channel: Channel,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionButton {
    pub action: Action,
    pub rect: Rect,
}

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    Action(Action),
    Channel(Channel),
    Curve,
}

// ── Frame layout ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    pub curve: CurveArea,
    /// Baseline of the point-count readout row.
    pub info_y: f32,
    pub channel_buttons: [ChannelButton; 4],
    pub action_buttons: [ActionButton; 3],
}

impl FrameLayout {
    pub fn compute(frame: &HostFrame) -> Self {
        let top = frame.header_offset + theme::CURVE_TOP_PADDING;
        let available_w = frame.width - theme::SIDE_MARGIN * 2.0;
        let available_h = frame.height - top - theme::FOOTER_HEIGHT;
        let size = available_w
            .min(available_h)
            .min(theme::MAX_CURVE_SIZE)
            .max(theme::MIN_CURVE_SIZE);

        let x = (frame.width - size) / 2.0;
        let curve = CurveArea {
            origin: Vec2::new(x, top),
            size,
        };

        let info_y = top + size + theme::INFO_ROW_GAP;

        let channel_y = info_y + theme::CHANNEL_ROW_GAP;
        let channel_w = (size - theme::BUTTON_GAP * 3.0) / 4.0;
        let channel_buttons = std::array::from_fn(|i| ChannelButton {
            channel: Channel::ALL[i],
            rect: Rect::new(
                x + i as f32 * (channel_w + theme::BUTTON_GAP),
                channel_y,
                channel_w,
                theme::CHANNEL_BUTTON_HEIGHT,
            ),
        });

        let action_y = channel_y + theme::CHANNEL_BUTTON_HEIGHT + theme::ACTION_ROW_GAP;
        let action_w = (size - theme::BUTTON_GAP * 2.0) / 3.0;
        let action_buttons = std::array::from_fn(|i| ActionButton {
            action: Action::ALL[i],
            rect: Rect::new(
                x + i as f32 * (action_w + theme::BUTTON_GAP),
                action_y,
                action_w,
                theme::ACTION_BUTTON_HEIGHT,
            ),
        });

        Self {
            curve,
            info_y,
            channel_buttons,
            action_buttons,
        }
    }

    /// Resolve a pointer position. Action buttons take priority over
    /// channel buttons, which take priority over the plot.
    pub fn hit(&self, pos: Vec2) -> Option<Hit> {
        if let Some(button) = self.action_buttons.iter().find(|b| b.rect.contains(pos)) {
            return Some(Hit::Action(button.action));
        }
        if let Some(button) = self.channel_buttons.iter().find(|b| b.rect.contains(pos)) {
            return Some(Hit::Channel(button.channel));
        }
        self.curve.contains(pos).then_some(Hit::Curve)
    }

    pub fn channel_button(&self, channel: Channel) -> &ChannelButton {
        &self.channel_buttons[channel_index(channel)]
    }
}

fn channel_index(channel: Channel) -> usize {
    match channel {
        Channel::Rgb => 0,
        Channel::Red => 1,
        Channel::Green => 2,
        Channel::Blue => 3,
    }
}
