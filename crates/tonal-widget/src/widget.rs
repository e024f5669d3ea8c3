//! Lifecycle hooks and the curves widget.
//!
//! A host adapter owns one boxed [`NodeWidget`] per node and forwards its
//! framework callbacks to these hooks. The widget never talks to the host
//! directly; outgoing requests are queued as [`HostNotification`]s.

use tonal_core::{
    ChannelLuts, CurveError, CurveModel, EditorSnapshot, Preset, decode_curves_or_default,
};
use tonal_frontend_core::{DisplayList, EventReply, FrontendError, Painter, PointerEvent};

use crate::config::EditorConfig;
use crate::interaction::{self, PointerAction};
use crate::layout::{FrameLayout, HostFrame, clamp_node_size};
use crate::registry::WidgetKind;
use crate::render;
use crate::state::{DragState, EditorState};

/// Errors surfaced to the host adapter.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Frontend(#[from] FrontendError),
}

/// Requests from the widget to sibling host controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostNotification {
    /// The host's preset selector should display this preset.
    PresetSelectionChanged(Preset),
}

/// Hooks a host adapter calls on a node widget.
pub trait NodeWidget {
    fn kind(&self) -> WidgetKind;

    /// Called once after construction with the node's stored backing value.
    fn on_create(&mut self, initial_backing: Option<&str>);

    fn on_draw(&self, frame: &HostFrame) -> DisplayList;

    fn on_pointer_down(&mut self, frame: &HostFrame, event: PointerEvent) -> EventReply;

    fn on_pointer_move(&mut self, frame: &HostFrame, event: PointerEvent) -> EventReply;

    fn on_pointer_up(&mut self, frame: &HostFrame, event: PointerEvent) -> EventReply;

    /// Returns the node size the host should apply.
    fn on_resize(&mut self, requested: [f32; 2]) -> [f32; 2];

    fn on_serialize(&self) -> Result<String, WidgetError>;

    fn on_deserialize(&mut self, encoded: &str) -> Result<(), WidgetError>;

    fn on_preset_selected(&mut self, name: &str) -> EventReply;

    /// Current value of the hidden curve parameter.
    fn backing_value(&self) -> &str;

    fn drain_notifications(&mut self) -> Vec<HostNotification>;

    /// Render and replay the frame on `painter`.
    fn paint(&self, frame: &HostFrame, painter: &mut dyn Painter) -> Result<(), WidgetError> {
        self.on_draw(frame).replay(painter)?;
        Ok(())
    }
}

/// Four-channel tone curve editor.
#[derive(Debug, Clone, Default)]
pub struct CurvesWidget {
    config: EditorConfig,
    state: EditorState,
    notifications: Vec<HostNotification>,
}

impl CurvesWidget {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Bake the current curves for an image consumer.
    pub fn luts(&self) -> ChannelLuts {
        self.state.model.curves().bake_luts(self.config.lut_size)
    }

    fn finish(&mut self, action: PointerAction) -> EventReply {
        if action == PointerAction::ResetAll {
            self.notifications
                .push(HostNotification::PresetSelectionChanged(Preset::None));
        }
        action.reply()
    }
}

impl NodeWidget for CurvesWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Curves
    }

    fn on_create(&mut self, initial_backing: Option<&str>) {
        let curves = initial_backing
            .map(decode_curves_or_default)
            .unwrap_or_default();
        self.state.model = CurveModel::new(curves);
        tracing::info!(
            edited = !self.state.model.curves().is_identity(),
            "created curves widget"
        );
    }

    fn on_draw(&self, frame: &HostFrame) -> DisplayList {
        if frame.collapsed {
            return DisplayList::new();
        }
        render::render(&self.state, &FrameLayout::compute(frame), &self.config)
    }

    fn on_pointer_down(&mut self, frame: &HostFrame, event: PointerEvent) -> EventReply {
        if frame.collapsed {
            return EventReply::IGNORED;
        }
        let layout = FrameLayout::compute(frame);
        let action = interaction::pointer_down(&mut self.state, &layout, event, &self.config);
        self.finish(action)
    }

    fn on_pointer_move(&mut self, frame: &HostFrame, event: PointerEvent) -> EventReply {
        let layout = FrameLayout::compute(frame);
        let action = interaction::pointer_move(&mut self.state, &layout, event, &self.config);
        self.finish(action)
    }

    fn on_pointer_up(&mut self, _frame: &HostFrame, _event: PointerEvent) -> EventReply {
        let action = interaction::pointer_up(&mut self.state);
        self.finish(action)
    }

    fn on_resize(&mut self, requested: [f32; 2]) -> [f32; 2] {
        clamp_node_size(requested, &self.config)
    }

    fn on_serialize(&self) -> Result<String, WidgetError> {
        Ok(self.state.snapshot().to_json()?)
    }

    fn on_deserialize(&mut self, encoded: &str) -> Result<(), WidgetError> {
        match EditorSnapshot::from_json(encoded) {
            Ok(snapshot) => {
                self.state.restore(snapshot);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("keeping current curves, snapshot rejected: {e}");
                Err(e.into())
            }
        }
    }

    fn on_preset_selected(&mut self, name: &str) -> EventReply {
        match name.parse::<Preset>() {
            Ok(preset) => {
                self.state.model.apply_preset(preset);
                self.state.selected_preset = preset;
                self.state.drag = DragState::Idle;
                EventReply::REDRAW
            }
            Err(e) => {
                tracing::warn!("{e}");
                EventReply::IGNORED
            }
        }
    }

    fn backing_value(&self) -> &str {
        self.state.model.backing_value()
    }

    fn drain_notifications(&mut self) -> Vec<HostNotification> {
        std::mem::take(&mut self.notifications)
    }
}
