//! Maps host node types to widget constructors.

use std::collections::HashMap;

use crate::config::EditorConfig;
use crate::widget::{CurvesWidget, NodeWidget};

/// Widget families this crate can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Curves,
}

impl WidgetKind {
    /// Node type name the host graph uses for this widget.
    pub const fn node_type(self) -> &'static str {
        match self {
            WidgetKind::Curves => "CurvesAdjustPro",
        }
    }
}

pub type WidgetConstructor = fn(&EditorConfig) -> Box<dyn NodeWidget>;

fn build_curves(config: &EditorConfig) -> Box<dyn NodeWidget> {
    Box::new(CurvesWidget::new(config.clone()))
}

/// Node-type lookup table, built once at host startup.
#[derive(Default)]
pub struct WidgetRegistry {
    by_node_type: HashMap<&'static str, (WidgetKind, WidgetConstructor)>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every widget this crate provides.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(WidgetKind::Curves, build_curves);
        registry
    }

    /// Register `kind` under its node type, replacing an earlier entry.
    pub fn register(&mut self, kind: WidgetKind, constructor: WidgetConstructor) {
        if self
            .by_node_type
            .insert(kind.node_type(), (kind, constructor))
            .is_some()
        {
            tracing::debug!(node_type = kind.node_type(), "replaced widget constructor");
        }
    }

    pub fn resolve(&self, node_type: &str) -> Option<WidgetKind> {
        self.by_node_type.get(node_type).map(|(kind, _)| *kind)
    }

    /// Construct the widget for `node_type`, or `None` if it has no widget.
    pub fn create(&self, node_type: &str, config: &EditorConfig) -> Option<Box<dyn NodeWidget>> {
        let (kind, constructor) = self.by_node_type.get(node_type)?;
        tracing::debug!(?kind, node_type, "creating widget");
        Some(constructor(config))
    }
}
