use tracing::{debug, trace};

use crate::core::{
    ChartKind, StackedBar, StackedBarLayout, Viewport, project_stacked_bars, stacked_border,
};
use crate::error::ChartResult;
use crate::extensions::{DecorationContext, PluginEvent};
use crate::interaction::{GroupPressEvent, HitMap, HitRegion, HitTarget};
use crate::render::{CanvasLayerKind, RectPrimitive, RenderFrame, TextHAlign};

use super::defs_builder::define_base_gradients;
use super::multi_series_layout::MultiSeriesLayout;
use super::press_dispatch::{GroupPressHandler, record_press, resolve_press};
use super::{
    AxisOptions, Chart, ChartConfig, ChartOptions, ChartRuntime, ChartStyle, LabelFormatters,
    StackedBarChartData,
};

/// Space above the tallest stack when the configuration leaves it unset.
pub const STACKED_CHART_PADDING_TOP_PX: f64 = 15.0;

/// Vertical chart stacking each category's series on top of each other.
pub struct StackedBarChart {
    runtime: ChartRuntime,
    data: StackedBarChartData,
    on_press: Option<GroupPressHandler>,
}

struct StackedScene {
    frame: RenderFrame,
    hit_map: HitMap,
}

impl StackedBarChart {
    pub fn new(
        viewport: Viewport,
        data: StackedBarChartData,
        config: ChartConfig,
    ) -> ChartResult<Self> {
        data.validate()?;
        let runtime = ChartRuntime::new(
            viewport,
            config,
            AxisOptions::default(),
            ChartOptions::default(),
        )?;
        debug!(
            bar_count = data.groups.len(),
            series_count = data.series_count(),
            "stacked bar chart created"
        );
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
    pub fn with_on_press(mut self, handler: impl FnMut(&GroupPressEvent) + 'static) -> Self {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub fn set_on_press(&mut self, handler: Option<GroupPressHandler>) {
        self.on_press = handler;
    }

    #[must_use]
    pub fn data(&self) -> &StackedBarChartData {
        &self.data
    }

    pub fn set_data(&mut self, data: StackedBarChartData) -> ChartResult<()> {
        data.validate()?;
        let bar_count = data.groups.len();
        self.data = data;
        if self
            .highlighted_index()
            .is_some_and(|index| index >= bar_count)
        {
            self.runtime.interaction.clear_highlight();
        }
        debug!(bar_count, "stacked bar chart data updated");
        self.emit_plugin_event(PluginEvent::DataUpdated { bar_count });
        Ok(())
    }

    /// Resolved stacks in plot-panel coordinates.
    pub fn bar_geometry(&self) -> ChartResult<Vec<StackedBar>> {
        let layout = MultiSeriesLayout::resolve(
            &self.runtime,
            &self.data,
            STACKED_CHART_PADDING_TOP_PX,
            0.0,
        )?;
        Ok(project_stacked_bars(&self.data.groups, self.stacked_layout(layout)))
    }

    /// Presses the stack or category label under `(x, y)` in plot-panel
    /// coordinates and reports every series value of that category.
    pub fn press_at(&mut self, x: f64, y: f64) -> ChartResult<Option<GroupPressEvent>> {
        let scene = self.compose()?;
        let Some(index) = resolve_press(&scene.hit_map, x, y) else {
            trace!(x, y, "stacked bar chart press missed");
            return Ok(None);
        };
        let Some(values) = self.data.groups.get(index) else {
            return Ok(None);
        };
        let event = GroupPressEvent {
            index,
            values: values.clone(),
        };
        if let Some(handler) = self.on_press.as_mut() {
            handler(&event);
        }
        record_press(self, index);
        Ok(Some(event))
    }

    fn stacked_layout(&self, layout: MultiSeriesLayout) -> StackedBarLayout {
        StackedBarLayout {
            band: layout.band,
            padding_right: layout.padding_right,
            bar_width: layout.bar_width,
            squeeze: layout.bar_squeeze(),
            percentile: self.runtime.options.percentile,
        }
    }

    fn compose(&self) -> ChartResult<StackedScene> {
        let runtime = &self.runtime;
        let config = &runtime.config;
        let options = runtime.options;
        let viewport = runtime.viewport;
        let layout = MultiSeriesLayout::resolve(
            runtime,
            &self.data,
            STACKED_CHART_PADDING_TOP_PX,
            0.0,
        )?;
        let style = ChartStyle::resolve(config);
        let context = runtime.frame_context(&style);
        let border = stacked_border(&self.data.groups, options.percentile);

        let mut frame = RenderFrame::new(viewport);
        define_base_gradients(&mut frame, config, viewport.height, &[]);
        if let Some(axis_panel) = layout.value_axis_panel(border, context) {
            frame = frame.with_panel(axis_panel);
        }

        let mut hit_map = HitMap::new();
        let mut plot = layout.plot_panel(&self.data, context, &mut hit_map);

        let stacks = project_stacked_bars(&self.data.groups, self.stacked_layout(layout));
        for stack in &stacks {
            for segment in &stack.segments {
                let radius = if segment.is_top { config.bar_radius } else { 0.0 };
                plot.push_rect(
                    CanvasLayerKind::Series,
                    RectPrimitive::new(
                        segment.x,
                        segment.y,
                        segment.width,
                        segment.height,
                        self.data.series_color(segment.series_index, config.color),
                    )
                    .with_corner_radius(radius),
                );
                if !options.hide_legend {
                    let text = runtime.formatters.top_bar_value(segment.value);
                    if !text.is_empty() {
                        plot.push_text(
                            CanvasLayerKind::Overlay,
                            style.label(
                                text,
                                segment.value_label_anchor(),
                                TextHAlign::Right,
                                0.0,
                                false,
                            ),
                        );
                    }
                }
                hit_map.push(HitRegion::new(
                    HitTarget::Bar {
                        index: stack.index,
                        series: Some(segment.series_index),
                    },
                    (segment.x, segment.y, segment.width, segment.height),
                ));
            }
        }

        layout.push_legend(&mut plot, &self.data, config.color, context);

        let decoration = DecorationContext {
            chart_kind: ChartKind::StackedBar,
            viewport,
            plot_width: layout.band.width,
            plot_height: viewport.height,
            value_axis: layout.value_axis_mapping(border),
            bar_anchors: stacks
                .iter()
                .map(|stack| {
                    (
                        stack.index,
                        stack.x + layout.bar_width / 2.0,
                        layout.band.bottom_y() - stack.total_height,
                    )
                })
                .collect(),
        };
        runtime.apply_decorators(&decoration, &mut plot);

        frame = frame.with_panel(plot);
        debug!(
            bar_count = stacks.len(),
            series_count = self.data.series_count(),
            "stacked bar chart frame built"
        );
        Ok(StackedScene { frame, hit_map })
    }
}

impl Chart for StackedBarChart {
    fn kind(&self) -> ChartKind {
        ChartKind::StackedBar
    }

    fn runtime(&self) -> &ChartRuntime {
        &self.runtime
    }

    fn runtime_mut(&mut self) -> &mut ChartRuntime {
        &mut self.runtime
    }

    fn bar_count(&self) -> usize {
        self.data.groups.len()
    }

    fn series_count(&self) -> usize {
        self.data.series_count()
    }

    fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        self.compose().map(|scene| scene.frame)
    }
}
