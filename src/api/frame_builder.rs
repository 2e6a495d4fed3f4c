//! Stateless frame helpers shared by the chart builders.
//!
//! Each helper turns geometry from `core::frame` into styled primitives on a
//! panel. Chart builders decide which helpers run and with which inputs.

use crate::core::frame::{
    baseline_grid_line, horizontal_grid_lines, left_axis_line, value_axis_labels,
    vertical_grid_lines,
};
use crate::core::{
    AxisLabel, CategoryLabelPlacement, DEFAULT_X_LABELS_HEIGHT, PlotBand, ValueAxisLayout,
    ValueLabelPlacement, ValueScale,
};
use crate::interaction::{HitMap, HitRegion, HitTarget};
use crate::render::{CanvasLayerKind, Color, PanelFrame, RectPrimitive, TextHAlign};

use super::{AxisOptions, ChartConfig, ChartOptions, ChartStyle, LabelFormatters};

/// Category labels squeeze into the same share of the plot as the bars when
/// a legend is drawn beside them.
pub const LEGEND_LABEL_SQUEEZE: f64 = 0.71;

const LEGEND_SWATCH_PX: f64 = 16.0;
const LEGEND_ROW_PITCH_PX: f64 = 50.0;

/// Height subtracted from the viewport to get the bar area.
#[must_use]
pub fn category_labels_height(config: &ChartConfig) -> f64 {
    config
        .vertical_labels_height
        .unwrap_or(DEFAULT_X_LABELS_HEIGHT)
}

/// Everything a frame helper needs besides geometry.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub config: &'a ChartConfig,
    pub axis: &'a AxisOptions,
    pub options: &'a ChartOptions,
    pub formatters: &'a LabelFormatters,
    pub style: &'a ChartStyle,
    pub highlighted_index: Option<usize>,
}

/// Inner gridlines plus the optional vertical and outer lines of a vertical plot.
pub fn push_plot_grid(
    panel: &mut PanelFrame,
    band: PlotBand,
    data_len: usize,
    padding_right: f64,
    context: FrameContext<'_>,
) {
    if context.options.with_inner_lines {
        for line in horizontal_grid_lines(band, context.options.segments) {
            panel.push_line(CanvasLayerKind::Grid, context.style.grid_line(line));
        }
    }
    if context.options.with_vertical_lines {
        for line in vertical_grid_lines(band, data_len, context.axis.y_axis_interval) {
            panel.push_line(CanvasLayerKind::Grid, context.style.grid_line(line));
        }
    }
    if context.options.with_outer_lines {
        panel.push_line(
            CanvasLayerKind::Grid,
            context.style.grid_line(baseline_grid_line(band)),
        );
        panel.push_line(
            CanvasLayerKind::Grid,
            context.style.grid_line(left_axis_line(band, padding_right)),
        );
    }
}

/// Value labels of a vertical chart, right-aligned at `anchor_x`.
pub fn push_value_axis_labels(
    panel: &mut PanelFrame,
    values: &[f64],
    scale: ValueScale,
    layout: ValueAxisLayout,
    context: FrameContext<'_>,
) -> Vec<ValueLabelPlacement> {
    let placements = value_axis_labels(values, scale, layout);
    push_value_label_texts(panel, &placements, TextHAlign::Right, context);
    placements
}

/// Formats and pushes already placed value labels.
pub fn push_value_label_texts(
    panel: &mut PanelFrame,
    placements: &[ValueLabelPlacement],
    h_align: TextHAlign,
    context: FrameContext<'_>,
) {
    for placement in placements {
        let text = context
            .formatters
            .y_label(placement.value, context.config, context.axis);
        if text.is_empty() {
            continue;
        }
        panel.push_text(
            CanvasLayerKind::Labels,
            context.style.label(
                text,
                (placement.x, placement.y),
                h_align,
                context.config.horizontal_label_rotation,
                false,
            ),
        );
    }
}

/// Category labels with their press regions.
///
/// Multi-line labels stack downward. The x-axis prefix goes on the first
/// line and the suffix on the last.
pub fn push_category_labels(
    panel: &mut PanelFrame,
    placements: &[CategoryLabelPlacement],
    labels: &[AxisLabel],
    rotation_deg: f64,
    context: FrameContext<'_>,
    hit_map: &mut HitMap,
) {
    for placement in placements {
        let Some(label) = labels.get(placement.index) else {
            continue;
        };
        let lines = label.lines();
        let last = lines.len().saturating_sub(1);
        let highlighted = context.highlighted_index == Some(placement.index);

        for (line_index, line) in lines.iter().enumerate() {
            let mut text = String::new();
            if line_index == 0 {
                text.push_str(&context.axis.x_axis_label);
            }
            text.push_str(&context.formatters.x_label(line));
            if line_index == last {
                text.push_str(&context.axis.x_axis_suffix);
            }
            if text.is_empty() {
                continue;
            }
            panel.push_text(
                CanvasLayerKind::Labels,
                context.style.label(
                    text,
                    (placement.x, placement.line_y(line_index)),
                    TextHAlign::from(placement.anchor),
                    rotation_deg,
                    highlighted,
                ),
            );
        }

        hit_map.push(HitRegion::new(
            HitTarget::CategoryLabel {
                index: placement.index,
            },
            placement.hit_box(),
        ));
    }
}

/// Round swatches with their series names, stacked upward from the lower
/// right of the plot.
pub fn push_legend(panel: &mut PanelFrame, entries: &[(&str, Color)], context: FrameContext<'_>) {
    let (width, height) = (panel.width, panel.height);
    for (row, (name, color)) in entries.iter().enumerate() {
        let shift = row as f64 * LEGEND_ROW_PITCH_PX;
        panel.push_rect(
            CanvasLayerKind::Legend,
            RectPrimitive::new(
                width * 0.71,
                height * 0.7 - shift,
                LEGEND_SWATCH_PX,
                LEGEND_SWATCH_PX,
                *color,
            )
            .with_corner_radius(LEGEND_SWATCH_PX / 2.0),
        );
        if name.is_empty() {
            continue;
        }
        panel.push_text(
            CanvasLayerKind::Legend,
            context.style.label(
                *name,
                (width * 0.78, height * 0.76 - shift),
                TextHAlign::Left,
                0.0,
                false,
            ),
        );
    }
}
