use tracing::trace;

use crate::extensions::PluginEvent;
use crate::interaction::{BarPressEvent, GroupPressEvent, HitMap};

use super::Chart;

/// Callback fired when a single-value bar or its label is pressed.
pub type BarPressHandler = Box<dyn FnMut(&BarPressEvent) + 'static>;
/// Callback fired when a stacked or grouped bar or its label is pressed.
pub type GroupPressHandler = Box<dyn FnMut(&GroupPressEvent) + 'static>;

/// Category index under `(x, y)`, if any.
pub(super) fn resolve_press(hit_map: &HitMap, x: f64, y: f64) -> Option<usize> {
    let target = hit_map.hit_test(x, y)?;
    trace!(x, y, ?target, "press resolved");
    Some(target.index())
}

/// Highlights the pressed category and notifies plugins.
pub(super) fn record_press<C: Chart>(chart: &mut C, index: usize) {
    let changed = chart
        .runtime_mut()
        .interaction
        .set_highlighted_index(Some(index));
    chart.emit_plugin_event(PluginEvent::BarPressed { index });
    if changed {
        chart.emit_plugin_event(PluginEvent::HighlightChanged { index: Some(index) });
    }
}
