use crate::core::frame::category_axis_labels;
use crate::core::{
    CategoryAxisLayout, DEFAULT_Y_LABELS_WIDTH, PlotBand, ValueAxisLayout, ValueScale,
};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ValueAxisMapping, ValueAxisOrientation};
use crate::interaction::HitMap;
use crate::render::{Color, PanelFrame, PanelKind};

use super::frame_builder::{
    FrameContext, LEGEND_LABEL_SQUEEZE, category_labels_height, push_category_labels,
    push_legend, push_plot_grid, push_value_axis_labels,
};
use super::{ChartRuntime, StackedBarChartData};

/// Bars squeeze into this share of the plot when a legend is drawn.
pub const LEGEND_BAR_SQUEEZE: f64 = 0.7;

/// Panel split shared by stacked and grouped charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct MultiSeriesLayout {
    pub(super) axis_width: f64,
    pub(super) band: PlotBand,
    pub(super) padding_right: f64,
    pub(super) bar_width: f64,
    pub(super) show_legend: bool,
}

impl MultiSeriesLayout {
    pub(super) fn resolve(
        runtime: &ChartRuntime,
        data: &StackedBarChartData,
        default_padding_top: f64,
        default_padding_right: f64,
    ) -> ChartResult<Self> {
        let viewport = runtime.viewport;
        let axis_width = if runtime.options.with_horizontal_labels {
            runtime.axis.y_labels_width.unwrap_or(DEFAULT_Y_LABELS_WIDTH)
        } else {
            0.0
        };
        let plot_width = viewport.width - axis_width;
        if !plot_width.is_finite() || plot_width <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let padding_top = runtime.config.padding_top.unwrap_or(default_padding_top);
        let band = PlotBand::new(
            plot_width,
            viewport.height,
            padding_top,
            category_labels_height(&runtime.config),
        );
        Ok(Self {
            axis_width,
            band,
            padding_right: runtime.config.padding_right.unwrap_or(default_padding_right),
            bar_width: runtime.config.effective_bar_width(),
            show_legend: !runtime.options.hide_legend && !data.legend.is_empty(),
        })
    }

    pub(super) fn bar_squeeze(self) -> f64 {
        if self.show_legend {
            LEGEND_BAR_SQUEEZE
        } else {
            1.0
        }
    }

    fn label_squeeze(self) -> f64 {
        if self.show_legend {
            LEGEND_LABEL_SQUEEZE
        } else {
            1.0
        }
    }

    /// Value-axis panel labelled from 0 to `border`, when the axis is shown.
    pub(super) fn value_axis_panel(
        self,
        border: f64,
        context: FrameContext<'_>,
    ) -> Option<PanelFrame> {
        if self.axis_width <= 0.0 {
            return None;
        }
        let mut panel = PanelFrame::new(
            PanelKind::ValueAxis,
            0.0,
            0.0,
            self.axis_width,
            self.band.height,
        );
        push_value_axis_labels(
            &mut panel,
            &[0.0, border],
            ValueScale::default(),
            ValueAxisLayout {
                band: self.band,
                segments: context.options.segments,
                anchor_x: self.axis_width - context.axis.y_labels_offset,
            },
            context,
        );
        Some(panel)
    }

    /// Plot panel with gridlines and category labels already drawn.
    pub(super) fn plot_panel(
        self,
        data: &StackedBarChartData,
        context: FrameContext<'_>,
        hit_map: &mut HitMap,
    ) -> PanelFrame {
        let mut panel = PanelFrame::new(
            PanelKind::Plot,
            self.axis_width,
            0.0,
            self.band.width,
            self.band.height,
        );
        push_plot_grid(
            &mut panel,
            self.band,
            data.groups.len(),
            self.padding_right,
            context,
        );
        if context.options.with_vertical_labels {
            let rotation = context.config.vertical_label_rotation;
            let placements = category_axis_labels(
                data.groups.len(),
                &context.axis.hide_points_at_index,
                CategoryAxisLayout {
                    band: self.band,
                    padding_right: self.padding_right,
                    horizontal_offset: self.bar_width,
                    squeeze: self.label_squeeze(),
                    x_labels_offset: context.axis.x_labels_offset,
                    rotation_deg: rotation,
                },
            );
            push_category_labels(
                &mut panel,
                &placements,
                &data.labels,
                rotation,
                context,
                hit_map,
            );
        }
        panel
    }

    pub(super) fn push_legend(
        self,
        panel: &mut PanelFrame,
        data: &StackedBarChartData,
        fallback: Color,
        context: FrameContext<'_>,
    ) {
        if !self.show_legend {
            return;
        }
        let entries: Vec<(&str, Color)> = data
            .legend
            .iter()
            .enumerate()
            .map(|(index, name)| (name.as_str(), data.series_color(index, fallback)))
            .collect();
        push_legend(panel, &entries, context);
    }

    /// Value axis running from 0 at the plot bottom to `border` at the top.
    pub(super) fn value_axis_mapping(self, border: f64) -> ValueAxisMapping {
        ValueAxisMapping {
            orientation: ValueAxisOrientation::Vertical,
            floor: 0.0,
            span: border,
            start_px: self.band.bottom_y(),
            end_px: self.band.padding_top,
        }
    }
}
