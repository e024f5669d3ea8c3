//! Pointer interaction state machine.
//!
//! Handlers take the layout computed for the frame the pointer event belongs
//! to, mutate the editor state, and report what happened as a
//! [`PointerAction`]. Every curve mutation goes through [`CurveModel`], so the
//! backing value is current when a handler returns.
//!
//! [`CurveModel`]: tonal_core::CurveModel

use glam::Vec2;
use tonal_core::{Channel, ControlPoint, Preset, auto_adjust_points};
use tonal_frontend_core::{EventReply, PointerEvent};

use crate::config::EditorConfig;
use crate::layout::{Action, CurveArea, FrameLayout, Hit};
use crate::state::{DragState, EditorState};

/// Outcome of one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Not for this widget; the host keeps default handling.
    Ignored,
    AutoAdjusted,
    ChannelCleared,
    /// Every channel reset; the host preset selector must show `none`.
    ResetAll,
    ChannelSelected(Channel),
    PointRemoved(usize),
    DragStarted(usize),
    /// A point was inserted at this index and became the drag target.
    PointAdded(usize),
    PointMoved(usize),
    /// The dragged index no longer exists; nothing changed.
    DragStale,
    DragEnded,
}

impl PointerAction {
    pub fn reply(self) -> EventReply {
        match self {
            Self::Ignored => EventReply::IGNORED,
            Self::DragStarted(_) | Self::DragStale | Self::DragEnded => EventReply::CONSUMED,
            Self::AutoAdjusted
            | Self::ChannelCleared
            | Self::ResetAll
            | Self::ChannelSelected(_)
            | Self::PointRemoved(_)
            | Self::PointAdded(_)
            | Self::PointMoved(_) => EventReply::REDRAW,
        }
    }
}

/// Index of the control point nearest to `pos` whose screen distance is
/// strictly below `radius`. Ties resolve to the lowest index.
pub fn hit_test(points: &[ControlPoint], area: &CurveArea, pos: Vec2, radius: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in points.iter().enumerate() {
        let d = area.point_to_screen(*p).distance(pos);
        if d < radius && best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

pub fn pointer_down(
    state: &mut EditorState,
    layout: &FrameLayout,
    event: PointerEvent,
    config: &EditorConfig,
) -> PointerAction {
    let channel = state.active_channel;
    match layout.hit(event.position) {
        Some(Hit::Action(Action::AutoAdjust)) => {
            state
                .model
                .set_channel_points(channel, auto_adjust_points(channel));
            PointerAction::AutoAdjusted
        }
        Some(Hit::Action(Action::ClearChannel)) => {
            state.model.reset_channel(channel);
            PointerAction::ChannelCleared
        }
        Some(Hit::Action(Action::ResetAll)) => {
            state.model.reset_all();
            state.selected_preset = Preset::None;
            PointerAction::ResetAll
        }
        Some(Hit::Channel(selected)) => {
            if selected != state.active_channel {
                tracing::debug!(from = %state.active_channel, to = %selected, "switched channel");
            }
            state.active_channel = selected;
            PointerAction::ChannelSelected(selected)
        }
        Some(Hit::Curve) => press_curve(state, &layout.curve, event, config),
        None => PointerAction::Ignored,
    }
}

fn press_curve(
    state: &mut EditorState,
    area: &CurveArea,
    event: PointerEvent,
    config: &EditorConfig,
) -> PointerAction {
    let channel = state.active_channel;
    let points = state.model.points(channel);
    let hit = hit_test(points, area, event.position, config.hit_radius);
    let len = points.len();

    match hit {
        Some(index) if event.modifiers.shift && len > 2 => {
            state.model.remove_point(channel, index);
            tracing::debug!(%channel, index, "removed curve point");
            PointerAction::PointRemoved(index)
        }
        Some(index) => {
            state.drag = DragState::Dragging(index);
            tracing::debug!(%channel, index, "drag started");
            PointerAction::DragStarted(index)
        }
        None => {
            let n = area.to_normalized(event.position);
            let index = state
                .model
                .add_point(channel, n.x, n.y, config.add_match_epsilon);
            state.drag = DragState::Dragging(index);
            PointerAction::PointAdded(index)
        }
    }
}

pub fn pointer_move(
    state: &mut EditorState,
    layout: &FrameLayout,
    event: PointerEvent,
    config: &EditorConfig,
) -> PointerAction {
    let DragState::Dragging(index) = state.drag else {
        return PointerAction::Ignored;
    };
    let n = layout.curve.to_normalized(event.position);
    match state.model.move_point(
        state.active_channel,
        index,
        n.x,
        n.y,
        config.drag_match_epsilon,
    ) {
        Some(new_index) => {
            state.drag = DragState::Dragging(new_index);
            PointerAction::PointMoved(new_index)
        }
        None => PointerAction::DragStale,
    }
}

pub fn pointer_up(state: &mut EditorState) -> PointerAction {
    match state.drag {
        DragState::Dragging(index) => {
            state.drag = DragState::Idle;
            tracing::debug!(channel = %state.active_channel, index, "drag ended");
            PointerAction::DragEnded
        }
        DragState::Idle => PointerAction::Ignored,
    }
}
