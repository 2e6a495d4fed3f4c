use tracing::{debug, trace};

use crate::core::{
    BarGeometry, BarLayout, CategoryAxisLayout, ChartKind, DEFAULT_Y_LABELS_WIDTH, PlotBand,
    ValueAxisLayout, Viewport, project_bar_series,
};
use crate::core::frame::category_axis_labels;
use crate::error::{ChartError, ChartResult};
use crate::extensions::{
    DecorationContext, PluginEvent, ValueAxisMapping, ValueAxisOrientation,
};
use crate::interaction::{BarPressEvent, HitMap, HitRegion, HitTarget};
use crate::render::{CanvasLayerKind, PanelFrame, PanelKind, RectPrimitive, RenderFrame, TextHAlign};

use super::defs_builder::{
    bar_fill, define_base_gradients, define_custom_color_gradients, push_background,
};
use super::frame_builder::{
    category_labels_height, push_category_labels, push_plot_grid, push_value_axis_labels,
};
use super::press_dispatch::{BarPressHandler, record_press, resolve_press};
use super::{
    AxisOptions, BarChartData, Chart, ChartConfig, ChartOptions, ChartRuntime, ChartStyle,
    LabelFormatters,
};

/// Space above the tallest bar when the configuration leaves it unset.
pub const BAR_CHART_PADDING_TOP_PX: f64 = 16.0;

/// Vertical chart with one bar per value.
pub struct BarChart {
    runtime: ChartRuntime,
    data: BarChartData,
    on_press: Option<BarPressHandler>,
}

/// Panel split and bar band resolved for one viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BarChartLayout {
    axis_width: f64,
    band: PlotBand,
    bars: BarLayout,
}

/// Everything one layout pass produces.
struct BarScene {
    frame: RenderFrame,
    hit_map: HitMap,
    bars: Vec<BarGeometry>,
}

impl BarChart {
    pub fn new(viewport: Viewport, data: BarChartData, config: ChartConfig) -> ChartResult<Self> {
        data.validate()?;
        let runtime = ChartRuntime::new(
            viewport,
            config,
            AxisOptions::default(),
            ChartOptions::default(),
        )?;
        debug!(bar_count = data.values.len(), "bar chart created");
        Ok(Self {
            runtime,
            data,
            on_press: None,
        })
    }

    pub fn with_axis_options(mut self, axis: AxisOptions) -> ChartResult<Self> {
        self.runtime.set_axis(axis)?;
        Ok(self)
    }

    pub fn with_options(mut self, options: ChartOptions) -> ChartResult<Self> {
        self.runtime.set_options(options)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_formatters(mut self, formatters: LabelFormatters) -> Self {
        self.runtime.set_formatters(formatters);
        self
    }

    #[must_use]
    pub fn with_on_press(mut self, handler: impl FnMut(&BarPressEvent) + 'static) -> Self {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub fn set_on_press(&mut self, handler: Option<BarPressHandler>) {
        self.on_press = handler;
    }

    #[must_use]
    pub fn data(&self) -> &BarChartData {
        &self.data
    }

    /// Replaces the data. The highlight is cleared when it no longer points
    /// at a bar.
    pub fn set_data(&mut self, data: BarChartData) -> ChartResult<()> {
        data.validate()?;
        let bar_count = data.values.len();
        self.data = data;
        if self
            .highlighted_index()
            .is_some_and(|index| index >= bar_count)
        {
            self.runtime.interaction.clear_highlight();
        }
        debug!(bar_count, "bar chart data updated");
        self.emit_plugin_event(PluginEvent::DataUpdated { bar_count });
        Ok(())
    }

    /// Resolved bar geometry in plot-panel coordinates.
    pub fn bar_geometry(&self) -> ChartResult<Vec<BarGeometry>> {
        let layout = self.layout()?;
        Ok(project_bar_series(
            &self.data.values,
            self.runtime.axis.value_scale(),
            layout.bars,
        ))
    }

    /// Presses the bar or category label under `(x, y)` in plot-panel
    /// coordinates.
    ///
    /// A hit fires the press callback once, highlights the category and
    /// returns the event. A miss returns `None` and fires nothing.
    pub fn press_at(&mut self, x: f64, y: f64) -> ChartResult<Option<BarPressEvent>> {
        let scene = self.compose()?;
        let Some(index) = resolve_press(&scene.hit_map, x, y) else {
            trace!(x, y, "bar chart press missed");
            return Ok(None);
        };
        let Some(bar) = scene.bars.get(index) else {
            return Ok(None);
        };
        let event = BarPressEvent {
            index,
            value: bar.value,
            x: bar.center_x,
            y: bar.top_y,
        };
        if let Some(handler) = self.on_press.as_mut() {
            handler(&event);
        }
        record_press(self, index);
        Ok(Some(event))
    }

    fn layout(&self) -> ChartResult<BarChartLayout> {
        let runtime = &self.runtime;
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
        let padding_top = runtime
            .config
            .padding_top
            .unwrap_or(BAR_CHART_PADDING_TOP_PX);
        let band = PlotBand::new(
            plot_width,
            viewport.height,
            padding_top,
            category_labels_height(&runtime.config),
        );
        let bars = BarLayout::new(band, runtime.config.effective_bar_width())?;
        Ok(BarChartLayout {
            axis_width,
            band,
            bars,
        })
    }

    fn compose(&self) -> ChartResult<BarScene> {
        let runtime = &self.runtime;
        let config = &runtime.config;
        let options = runtime.options;
        let layout = self.layout()?;
        let viewport = runtime.viewport;
        let values = &self.data.values;
        let scale = runtime.axis.value_scale();
        let style = ChartStyle::resolve(config);
        let context = runtime.frame_context(&style);

        let custom_colors = if options.with_custom_bar_color_from_data {
            self.data.bar_colors.as_deref().unwrap_or_default()
        } else {
            &[]
        };

        let mut frame = RenderFrame::new(viewport);
        define_base_gradients(&mut frame, config, viewport.height, &[None]);
        define_custom_color_gradients(&mut frame, &[custom_colors], options.flat_color);

        if layout.axis_width > 0.0 {
            let mut axis_panel =
                PanelFrame::new(PanelKind::ValueAxis, 0.0, 0.0, layout.axis_width, viewport.height);
            push_background(&mut axis_panel, config);
            push_value_axis_labels(
                &mut axis_panel,
                values,
                scale,
                ValueAxisLayout {
                    band: layout.band,
                    segments: options.segments,
                    anchor_x: layout.axis_width - runtime.axis.y_labels_offset,
                },
                context,
            );
            frame = frame.with_panel(axis_panel);
        }

        let mut plot = PanelFrame::new(
            PanelKind::Plot,
            layout.axis_width,
            0.0,
            layout.band.width,
            viewport.height,
        );
        push_background(&mut plot, config);
        push_plot_grid(&mut plot, layout.band, values.len(), 0.0, context);

        let mut hit_map = HitMap::new();
        if options.with_vertical_labels {
            let placements = category_axis_labels(
                values.len(),
                &runtime.axis.hide_points_at_index,
                CategoryAxisLayout {
                    band: layout.band,
                    padding_right: layout.bars.horizontal_padding(values.len()),
                    horizontal_offset: layout.bars.bar_width / 2.0,
                    squeeze: 1.0,
                    x_labels_offset: runtime.axis.x_labels_offset,
                    rotation_deg: config.vertical_label_rotation,
                },
            );
            push_category_labels(
                &mut plot,
                &placements,
                &self.data.labels,
                config.vertical_label_rotation,
                context,
                &mut hit_map,
            );
        }

        let bars = project_bar_series(values, scale, layout.bars);
        for bar in &bars {
            let fill = bar_fill(config, 0, bar.index, bar.index < custom_colors.len());
            plot.push_rect(
                CanvasLayerKind::Series,
                RectPrimitive::new(bar.left_x, bar.top_y, bar.width, bar.height, fill)
                    .with_corner_radius(config.bar_radius),
            );
            if options.show_bar_tops {
                let (x, y, width, height) = bar.top_marker();
                plot.push_rect(
                    CanvasLayerKind::Overlay,
                    RectPrimitive::new(x, y, width, height, style.accent_color),
                );
            }
            if options.show_values_on_top_of_bars {
                let text = runtime.formatters.top_bar_value(bar.value);
                if !text.is_empty() {
                    plot.push_text(
                        CanvasLayerKind::Overlay,
                        style.value_label(text, bar.value_label_anchor(), TextHAlign::Center),
                    );
                }
            }
            hit_map.push(HitRegion::new(
                HitTarget::Bar {
                    index: bar.index,
                    series: None,
                },
                (bar.left_x, bar.top_y, bar.width, bar.height),
            ));
        }

        let decoration = DecorationContext {
            chart_kind: ChartKind::Bar,
            viewport,
            plot_width: layout.band.width,
            plot_height: viewport.height,
            value_axis: ValueAxisMapping {
                orientation: ValueAxisOrientation::Vertical,
                floor: scale.axis_floor(values),
                span: scale.scaler(values),
                start_px: layout.band.bottom_y(),
                end_px: layout.band.padding_top,
            },
            bar_anchors: bars
                .iter()
                .map(|bar| (bar.index, bar.center_x, bar.value_y()))
                .collect(),
        };
        runtime.apply_decorators(&decoration, &mut plot);

        frame = frame.with_panel(plot);
        debug!(
            bar_count = bars.len(),
            gradients = frame.gradients.len(),
            "bar chart frame built"
        );
        Ok(BarScene {
            frame,
            hit_map,
            bars,
        })
    }
}

impl Chart for BarChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn runtime(&self) -> &ChartRuntime {
        &self.runtime
    }

    fn runtime_mut(&mut self) -> &mut ChartRuntime {
        &mut self.runtime
    }

    fn bar_count(&self) -> usize {
        self.data.values.len()
    }

    fn series_count(&self) -> usize {
        1
    }

    fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        self.compose().map(|scene| scene.frame)
    }
}
