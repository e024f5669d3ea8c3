//! Dark node-editor theme constants.
//!
//! All colors, sizing, and spacing values used by the curve editor are
//! defined here so the layout and the renderer agree on geometry.

use tonal_core::Channel;
use tonal_frontend_core::Color;

// ── Curve area colors ───────────────────────────────────────────────────────

/// Curve plot background.
pub const CURVE_BG: Color = Color::new(0x1a, 0x1a, 0x1a);

/// Outline around the curve plot.
pub const CURVE_BORDER: Color = Color::new(0x44, 0x44, 0x44);

/// Quarter grid lines.
pub const CURVE_GRID_LINE: Color = Color::new(0x2a, 0x2a, 0x2a);

/// Dashed identity diagonal.
pub const CURVE_NEUTRAL_LINE: Color = Color::new(0x38, 0x38, 0x38);

/// On/off dash pattern of the identity diagonal.
pub const NEUTRAL_DASH: [f32; 2] = [4.0, 4.0];

/// Center dot drawn inside every control-point marker.
pub const MARKER_CENTER: Color = Color::new(0x00, 0x00, 0x00);

/// Curve stroke and marker color per channel.
pub const fn curve_color(channel: Channel) -> Color {
    match channel {
        Channel::Rgb => Color::new(0xff, 0xff, 0xff),
        Channel::Red => Color::new(0xff, 0x55, 0x55),
        Channel::Green => Color::new(0x55, 0xff, 0x55),
        Channel::Blue => Color::new(0x55, 0x88, 0xff),
    }
}

// ── Text colors ─────────────────────────────────────────────────────────────

/// Point-count readout color per channel.
pub const fn readout_color(channel: Channel) -> Color {
    match channel {
        Channel::Rgb => Color::new(0x88, 0x88, 0x88),
        Channel::Red => Color::new(0xff, 0x66, 0x66),
        Channel::Green => Color::new(0x66, 0xff, 0x66),
        Channel::Blue => Color::new(0x66, 0x88, 0xff),
    }
}

/// Usage hint at the right of the readout row.
pub const TEXT_HINT: Color = Color::new(0x55, 0x55, 0x55);

/// Label on the active channel button.
pub const TEXT_ACTIVE: Color = Color::new(0xff, 0xff, 0xff);

/// Label on inactive channel buttons.
pub const TEXT_DIM: Color = Color::new(0x99, 0x99, 0x99);

/// Label on action buttons.
pub const TEXT_ACTION: Color = Color::new(0xaa, 0xaa, 0xaa);

// ── Buttons ─────────────────────────────────────────────────────────────────

/// Idle button fill.
pub const BG_BUTTON: Color = Color::new(0x3a, 0x3a, 0x3a);

/// Button outline.
pub const BORDER_BUTTON: Color = Color::new(0x4a, 0x4a, 0x4a);

/// Badge on channels that carry edits.
pub const BADGE: Color = Color::new(0xaa, 0xaa, 0xaa);

/// Fill of the active channel button.
pub const fn channel_button_color(channel: Channel) -> Color {
    match channel {
        Channel::Rgb => Color::new(0x66, 0x66, 0x66),
        Channel::Red => Color::new(0xaa, 0x44, 0x44),
        Channel::Green => Color::new(0x44, 0xaa, 0x44),
        Channel::Blue => Color::new(0x44, 0x66, 0xaa),
    }
}

// ── Sizing ──────────────────────────────────────────────────────────────────

/// Height (px) of the node title bar.
pub const TITLE_HEIGHT: f32 = 30.0;

/// Vertical spacing (px) after each sibling control above the curve.
pub const SIBLING_SPACING: f32 = 4.0;

/// Padding (px) between the last sibling control and the curve plot.
pub const CURVE_TOP_PADDING: f32 = 25.0;

/// Horizontal margin (px) on each side of the curve plot.
pub const SIDE_MARGIN: f32 = 15.0;

/// Height (px) reserved below the plot for readout and button rows.
pub const FOOTER_HEIGHT: f32 = 95.0;

/// Bounds (px) of the square curve plot edge.
pub const MIN_CURVE_SIZE: f32 = 120.0;
pub const MAX_CURVE_SIZE: f32 = 500.0;

/// Gap (px) between the plot bottom and the readout row.
pub const INFO_ROW_GAP: f32 = 10.0;

/// Gap (px) between the readout row and the channel buttons.
pub const CHANNEL_ROW_GAP: f32 = 14.0;

/// Height (px) of a channel selector button.
pub const CHANNEL_BUTTON_HEIGHT: f32 = 22.0;

/// Gap (px) between the channel row and the action row.
pub const ACTION_ROW_GAP: f32 = 6.0;

/// Height (px) of an action button.
pub const ACTION_BUTTON_HEIGHT: f32 = 20.0;

/// Horizontal gap (px) between adjacent buttons.
pub const BUTTON_GAP: f32 = 3.0;

/// Corner radius (px) of every button.
pub const BUTTON_RADIUS: f32 = 3.0;

/// Badge radius (px) and its inset from the button's top-right corner.
pub const BADGE_RADIUS: f32 = 3.0;
pub const BADGE_INSET: f32 = 7.0;

/// Stroke widths (px) of the edited curve and of background channel curves.
pub const CURVE_LINE_WIDTH: f32 = 2.0;
pub const BACKGROUND_CURVE_WIDTH: f32 = 1.0;

/// Control-point marker radii (px).
pub const MARKER_RADIUS: f32 = 5.0;
pub const MARKER_CENTER_RADIUS: f32 = 2.0;

// ── Typography ──────────────────────────────────────────────────────────────

/// Font size for readouts and button labels.
pub const FONT_SIZE_LABEL: f32 = 10.0;

/// Horizontal offsets (px) of the per-channel point counts.
pub const READOUT_OFFSETS: [f32; 4] = [0.0, 48.0, 82.0, 116.0];

/// Usage hint shown at the right of the readout row.
pub const USAGE_HINT: &str = "Click:add | Drag:move | Shift:remove";
