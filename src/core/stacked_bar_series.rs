use serde::{Deserialize, Serialize};

use crate::core::frame::PlotBand;

/// Denominator used when every group sums to zero.
const FALLBACK_DENOMINATOR: f64 = 1.0;
/// Percentile charts always scale against 100.
pub const PERCENTILE_BORDER: f64 = 100.0;
/// Horizontal compression of the stacked plot when the legend is visible.
pub const STACKED_LEGEND_SQUEEZE: f64 = 0.7;
/// Segments shorter than this get their label nudged closer to the top edge.
const SEGMENT_LABEL_MIN_HEIGHT_PX: f64 = 15.0;

/// Inputs for stacked bar projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackedBarLayout {
    pub band: PlotBand,
    pub padding_right: f64,
    pub bar_width: f64,
    pub squeeze: f64,
    /// Each bar fills the plot height with its own sum as denominator.
    pub percentile: bool,
}

/// One stacked portion of a bar, belonging to series `series_index`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackedSegment {
    pub series_index: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Topmost segment of its bar; carries the rounded corners.
    pub is_top: bool,
}

impl StackedSegment {
    /// Anchor of the end-aligned value label drawn inside the segment.
    #[must_use]
    pub fn value_label_anchor(&self) -> (f64, f64) {
        let dy = if self.height > SEGMENT_LABEL_MIN_HEIGHT_PX {
            15.0
        } else {
            7.0
        };
        (self.x + 7.0 + self.width / 2.0, self.y + dy)
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Geometry of one stacked bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedBar {
    pub index: usize,
    pub x: f64,
    pub total_height: f64,
    pub segments: Vec<StackedSegment>,
}

/// Value at the top gridline: the largest group sum, or 100 in percentile mode.
#[must_use]
pub fn stacked_border(groups: &[Vec<f64>], percentile: bool) -> f64 {
    if percentile {
        return PERCENTILE_BORDER;
    }
    groups
        .iter()
        .map(|group| group.iter().sum::<f64>())
        .fold(0.0, f64::max)
}

/// Stacks each group's values from the plot bottom upward.
#[must_use]
pub fn project_stacked_bars(groups: &[Vec<f64>], layout: StackedBarLayout) -> Vec<StackedBar> {
    if groups.is_empty() {
        return Vec::new();
    }

    let border = stacked_border(groups, layout.percentile);
    let count = groups.len() as f64;
    let plot_height = layout.band.plot_height();
    let slot = (layout.band.width - layout.padding_right) / count;

    groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let denominator = if layout.percentile {
                group.iter().sum::<f64>()
            } else {
                border
            };
            let denominator = if denominator == 0.0 {
                FALLBACK_DENOMINATOR
            } else {
                denominator
            };

            let x = (layout.padding_right + index as f64 * slot + layout.bar_width / 2.0)
                * layout.squeeze;
            let mut stack_offset = layout.band.padding_top;
            let mut total_height = 0.0;
            let last = group.len().saturating_sub(1);

            let segments = group
                .iter()
                .enumerate()
                .map(|(series_index, &value)| {
                    let height = plot_height * (value / denominator);
                    let y = plot_height - height + stack_offset;
                    stack_offset -= height;
                    total_height += height;
                    StackedSegment {
                        series_index,
                        value,
                        x,
                        y,
                        width: layout.bar_width,
                        height,
                        is_top: series_index == last,
                    }
                })
                .collect();

            StackedBar {
                index,
                x,
                total_height,
                segments,
            }
        })
        .collect()
}
