//! Builds the editor's display list.

use glam::Vec2;
use tonal_core::{Channel, ControlPoint, sample_curve};
use tonal_frontend_core::{Color, DisplayList, DrawCommand, Rect, TextAlign};

use crate::config::EditorConfig;
use crate::layout::{CurveArea, FrameLayout};
use crate::state::EditorState;
use crate::theme;

/// Draw the plot, curves, readouts and buttons for one frame.
pub fn render(state: &EditorState, layout: &FrameLayout, config: &EditorConfig) -> DisplayList {
    let mut list = DisplayList::new();
    let area = &layout.curve;

    draw_plot(&mut list, area);

    let active = state.active_channel;
    if active.is_combined() {
        for channel in [Channel::Red, Channel::Green, Channel::Blue] {
            draw_curve(
                &mut list,
                area,
                state.model.points(channel),
                theme::curve_color(channel),
                theme::BACKGROUND_CURVE_WIDTH,
                config.render_segments,
            );
        }
    }
    let points = state.model.points(active);
    let color = theme::curve_color(active);
    draw_curve(
        &mut list,
        area,
        points,
        color,
        theme::CURVE_LINE_WIDTH,
        config.render_segments,
    );
    draw_markers(&mut list, area, points, color);

    draw_info_row(&mut list, state, layout);
    draw_channel_buttons(&mut list, state, layout);
    draw_action_buttons(&mut list, layout);

    list
}

fn draw_plot(list: &mut DisplayList, area: &CurveArea) {
    let rect = area.rect();
    list.push(DrawCommand::FillRect {
        rect,
        color: theme::CURVE_BG,
    });
    list.push(DrawCommand::StrokeRect {
        rect,
        color: theme::CURVE_BORDER,
        width: 1.0,
    });

    for i in 1..4 {
        let offset = area.size / 4.0 * i as f32;
        list.push(grid_line(
            Vec2::new(rect.x + offset, rect.y),
            Vec2::new(rect.x + offset, rect.bottom()),
        ));
        list.push(grid_line(
            Vec2::new(rect.x, rect.y + offset),
            Vec2::new(rect.right(), rect.y + offset),
        ));
    }

    list.push(DrawCommand::Line {
        from: area.to_screen(Vec2::ZERO),
        to: area.to_screen(Vec2::ONE),
        color: theme::CURVE_NEUTRAL_LINE,
        width: 1.0,
        dash: Some(theme::NEUTRAL_DASH),
    });
}

fn grid_line(from: Vec2, to: Vec2) -> DrawCommand {
    DrawCommand::Line {
        from,
        to,
        color: theme::CURVE_GRID_LINE,
        width: 1.0,
        dash: None,
    }
}

fn draw_curve(
    list: &mut DisplayList,
    area: &CurveArea,
    points: &[ControlPoint],
    color: Color,
    width: f32,
    segments: usize,
) {
    let samples: Vec<Vec2> = sample_curve(points, segments.max(1))
        .into_iter()
        .map(|p| area.point_to_screen(p))
        .collect();
    list.push(DrawCommand::Polyline {
        points: samples,
        color,
        width,
    });
}

fn draw_markers(list: &mut DisplayList, area: &CurveArea, points: &[ControlPoint], color: Color) {
    for p in points {
        let center = area.point_to_screen(*p);
        list.push(DrawCommand::Circle {
            center,
            radius: theme::MARKER_RADIUS,
            color,
        });
        list.push(DrawCommand::Circle {
            center,
            radius: theme::MARKER_CENTER_RADIUS,
            color: theme::MARKER_CENTER,
        });
    }
}

fn label(anchor: Vec2, text: String, color: Color, bold: bool, align: TextAlign) -> DrawCommand {
    DrawCommand::Text {
        anchor,
        text,
        color,
        size: theme::FONT_SIZE_LABEL,
        bold,
        align,
    }
}

fn draw_info_row(list: &mut DisplayList, state: &EditorState, layout: &FrameLayout) {
    let x = layout.curve.origin.x;
    for (channel, offset) in Channel::ALL.into_iter().zip(theme::READOUT_OFFSETS) {
        list.push(label(
            Vec2::new(x + offset, layout.info_y),
            format!("{}:{}", channel.short_label(), state.model.points(channel).len()),
            theme::readout_color(channel),
            false,
            TextAlign::Left,
        ));
    }
    list.push(label(
        Vec2::new(x + layout.curve.size, layout.info_y),
        theme::USAGE_HINT.to_string(),
        theme::TEXT_HINT,
        false,
        TextAlign::Right,
    ));
}

fn draw_channel_buttons(list: &mut DisplayList, state: &EditorState, layout: &FrameLayout) {
    for button in &layout.channel_buttons {
        let is_active = button.channel == state.active_channel;
        let fill = if is_active {
            theme::channel_button_color(button.channel)
        } else {
            theme::BG_BUTTON
        };
        push_button(list, button.rect, fill);

        if !is_active && state.model.curves().is_edited(button.channel) {
            list.push(DrawCommand::Circle {
                center: Vec2::new(
                    button.rect.right() - theme::BADGE_INSET,
                    button.rect.y + theme::BADGE_INSET,
                ),
                radius: theme::BADGE_RADIUS,
                color: theme::BADGE,
            });
        }

        list.push(label(
            button.rect.center(),
            button.channel.button_label().to_string(),
            if is_active {
                theme::TEXT_ACTIVE
            } else {
                theme::TEXT_DIM
            },
            true,
            TextAlign::Center,
        ));
    }
}

fn draw_action_buttons(list: &mut DisplayList, layout: &FrameLayout) {
    for button in &layout.action_buttons {
        push_button(list, button.rect, theme::BG_BUTTON);
        list.push(label(
            button.rect.center(),
            button.action.label().to_string(),
            theme::TEXT_ACTION,
            false,
            TextAlign::Center,
        ));
    }
}

fn push_button(list: &mut DisplayList, rect: Rect, fill: Color) {
    list.push(DrawCommand::RoundRect {
        rect,
        radius: theme::BUTTON_RADIUS,
        fill: Some(fill),
        stroke: Some(theme::BORDER_BUTTON),
    });
}
