//! Editor state owned by one curve widget instance.

use tonal_core::{Channel, CurveModel, EditorSnapshot, Preset};

/// Pointer drag state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// Dragging the point currently at this index of the active channel.
    Dragging(usize),
}

#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Channel the pointer edits and the markers belong to.
    pub active_channel: Channel,
    pub model: CurveModel,
    pub drag: DragState,
    /// Last preset chosen in the host's selector.
    pub selected_preset: Preset,
}

impl EditorState {
    pub fn new(model: CurveModel) -> Self {
        Self {
            model,
            ..Default::default()
        }
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            channel: self.active_channel,
            points: self.model.curves().clone(),
        }
    }

    /// Restore curves and channel; any drag in progress is dropped.
    pub fn restore(&mut self, snapshot: EditorSnapshot) {
        self.active_channel = snapshot.channel;
        self.model.replace_curves(snapshot.points);
        self.drag = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }
}
