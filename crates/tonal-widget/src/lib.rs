//! Tonal Widget: the interactive tone-curve editor.
//!
//! Layout, pointer interaction and rendering for a four-channel curve editor
//! embedded in a node graph. Hosts drive it through the [`NodeWidget`] hooks
//! and draw the returned [`DisplayList`](tonal_frontend_core::DisplayList)
//! with their own [`Painter`](tonal_frontend_core::Painter).

pub mod config;
pub mod interaction;
pub mod layout;
pub mod registry;
pub mod render;
pub mod state;
pub mod theme;
pub mod widget;

pub use config::EditorConfig;
pub use interaction::PointerAction;
pub use layout::{CurveArea, FrameLayout, HostFrame, header_offset_for};
pub use registry::{WidgetKind, WidgetRegistry};
pub use state::{DragState, EditorState};
pub use widget::{CurvesWidget, HostNotification, NodeWidget, WidgetError};
