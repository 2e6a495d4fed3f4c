use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, Viewport};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub chart_kind: ChartKind,
    pub viewport: Viewport,
    pub bar_count: usize,
    pub series_count: usize,
    pub highlighted_index: Option<usize>,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    DataUpdated { bar_count: usize },
    BarPressed { index: usize },
    HighlightChanged { index: Option<usize> },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read chart context without mutating chart
/// internals directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
