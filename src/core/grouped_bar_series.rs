use serde::{Deserialize, Serialize};

use crate::core::frame::PlotBand;
use crate::core::stacked_bar_series::PERCENTILE_BORDER;

/// Gap between neighbouring bars of one group.
pub const DEFAULT_ITEM_SPACING_PX: f64 = 3.0;
/// Every grouped bar is drawn at least this tall so zero values stay visible.
pub const GROUPED_BAR_MIN_HEIGHT_PX: f64 = 1.0;

/// Inputs for grouped (side by side) bar projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupedBarLayout {
    pub band: PlotBand,
    pub padding_right: f64,
    pub bar_width: f64,
    pub item_spacing: f64,
    pub squeeze: f64,
    pub percentile: bool,
}

/// One bar of a group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupedBar {
    pub series_index: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Last bar of its group; carries the rounded corners.
    pub is_last: bool,
}

impl GroupedBar {
    /// Anchor of the end-aligned value label drawn inside the bar top.
    #[must_use]
    pub fn value_label_anchor(&self) -> (f64, f64) {
        let dy = if self.height > 15.0 { 15.0 } else { 7.0 };
        (self.x + 7.0 + self.width / 2.0, self.y + dy)
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Geometry of one category slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGroup {
    pub index: usize,
    pub center_x: f64,
    pub bars: Vec<GroupedBar>,
}

/// Value at the top gridline: the largest single value, or 100 in percentile mode.
#[must_use]
pub fn grouped_border(groups: &[Vec<f64>], percentile: bool) -> f64 {
    if percentile {
        return PERCENTILE_BORDER;
    }
    groups
        .iter()
        .flat_map(|group| group.iter().copied())
        .fold(0.0, f64::max)
}

/// Total width covered by `count` bars and their spacing.
#[must_use]
pub fn group_span(bar_width: f64, item_spacing: f64, count: usize) -> f64 {
    let count = count as f64;
    (bar_width + item_spacing) * count + item_spacing * (count - 1.0).max(0.0)
}

/// Places each group's bars side by side around the group center.
#[must_use]
pub fn project_grouped_bars(groups: &[Vec<f64>], layout: GroupedBarLayout) -> Vec<BarGroup> {
    if groups.is_empty() {
        return Vec::new();
    }

    let border = grouped_border(groups, layout.percentile);
    let count = groups.len() as f64;
    let plot_height = layout.band.plot_height();
    let slot = (layout.band.width - layout.padding_right) / count;
    let pitch = layout.bar_width + layout.item_spacing;

    groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let denominator = if layout.percentile {
                group.iter().sum::<f64>()
            } else {
                border
            };
            let denominator = if denominator == 0.0 { 1.0 } else { denominator };

            let item_count = group.len();
            let center_x = (layout.padding_right
                + index as f64 * slot
                + layout.bar_width * item_count as f64 / 2.0)
                * layout.squeeze;
            let mid = group_span(layout.bar_width, layout.item_spacing, item_count) / 2.0;
            let last = item_count.saturating_sub(1);

            let bars = group
                .iter()
                .enumerate()
                .map(|(series_index, &value)| {
                    let height = plot_height * (value / denominator) + GROUPED_BAR_MIN_HEIGHT_PX;
                    GroupedBar {
                        series_index,
                        value,
                        x: center_x - (mid - pitch * series_index as f64),
                        y: plot_height - height + layout.band.padding_top,
                        width: layout.bar_width,
                        height,
                        is_last: series_index == last,
                    }
                })
                .collect();

            BarGroup {
                index,
                center_x,
                bars,
            }
        })
        .collect()
}
