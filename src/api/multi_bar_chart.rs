use tracing::{debug, trace};

use crate::core::{
    BarGroup, ChartKind, GroupedBarLayout, Viewport, grouped_border, project_grouped_bars,
};
use crate::error::ChartResult;
use crate::extensions::{DecorationContext, PluginEvent};
use crate::interaction::{GroupPressEvent, HitMap, HitRegion, HitTarget};
use crate::render::{CanvasLayerKind, RectPrimitive, RenderFrame, TextHAlign};

use super::defs_builder::{define_base_gradients, push_background};
use super::multi_series_layout::MultiSeriesLayout;
use super::press_dispatch::{GroupPressHandler, record_press, resolve_press};
use super::{
    AxisOptions, Chart, ChartConfig, ChartOptions, ChartRuntime, ChartStyle, LabelFormatters,
    StackedBarChartData,
};

/// Space above the tallest bar when the configuration leaves it unset.
pub const MULTI_BAR_CHART_PADDING_TOP_PX: f64 = 15.0;

/// Vertical chart drawing each category's series side by side.
pub struct MultiBarChart {
    runtime: ChartRuntime,
    data: StackedBarChartData,
    on_press: Option<GroupPressHandler>,
}

struct GroupedScene {
    frame: RenderFrame,
    hit_map: HitMap,
}

impl MultiBarChart {
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
            "multi bar chart created"
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
        debug!(bar_count, "multi bar chart data updated");
        self.emit_plugin_event(PluginEvent::DataUpdated { bar_count });
        Ok(())
    }

    /// Resolved bar groups in plot-panel coordinates.
    pub fn bar_geometry(&self) -> ChartResult<Vec<BarGroup>> {
        let layout = self.layout()?;
        Ok(project_grouped_bars(&self.data.groups, self.grouped_layout(layout)))
    }

    /// Presses the group or category label under `(x, y)` in plot-panel
    /// coordinates and reports every series value of that category.
    pub fn press_at(&mut self, x: f64, y: f64) -> ChartResult<Option<GroupPressEvent>> {
        let scene = self.compose()?;
        let Some(index) = resolve_press(&scene.hit_map, x, y) else {
            trace!(x, y, "multi bar chart press missed");
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

    fn layout(&self) -> ChartResult<MultiSeriesLayout> {
        let bar_width = self.runtime.config.effective_bar_width();
        MultiSeriesLayout::resolve(
            &self.runtime,
            &self.data,
            MULTI_BAR_CHART_PADDING_TOP_PX,
            bar_width,
        )
    }

    fn grouped_layout(&self, layout: MultiSeriesLayout) -> GroupedBarLayout {
        GroupedBarLayout {
            band: layout.band,
            padding_right: layout.padding_right,
            bar_width: layout.bar_width,
            item_spacing: self.runtime.config.item_spacing,
            squeeze: layout.bar_squeeze(),
            percentile: self.runtime.options.percentile,
        }
    }

    fn compose(&self) -> ChartResult<GroupedScene> {
        let runtime = &self.runtime;
        let config = &runtime.config;
        let options = runtime.options;
        let viewport = runtime.viewport;
        let layout = self.layout()?;
        let style = ChartStyle::resolve(config);
        let context = runtime.frame_context(&style);
        let border = grouped_border(&self.data.groups, options.percentile);

        let mut frame = RenderFrame::new(viewport);
        define_base_gradients(&mut frame, config, viewport.height, &[]);
        if let Some(mut axis_panel) = layout.value_axis_panel(border, context) {
            push_background(&mut axis_panel, config);
            frame = frame.with_panel(axis_panel);
        }

        let mut hit_map = HitMap::new();
        let mut plot = layout.plot_panel(&self.data, context, &mut hit_map);

        let groups = project_grouped_bars(&self.data.groups, self.grouped_layout(layout));
        for group in &groups {
            for bar in &group.bars {
                let radius = if bar.is_last { config.bar_radius } else { 0.0 };
                plot.push_rect(
                    CanvasLayerKind::Series,
                    RectPrimitive::new(
                        bar.x,
                        bar.y,
                        bar.width,
                        bar.height,
                        self.data.series_color(bar.series_index, config.color),
                    )
                    .with_corner_radius(radius),
                );
                if !options.hide_legend {
                    let text = runtime.formatters.top_bar_value(bar.value);
                    if !text.is_empty() {
                        plot.push_text(
                            CanvasLayerKind::Overlay,
                            style.label(
                                text,
                                bar.value_label_anchor(),
                                TextHAlign::Right,
                                0.0,
                                false,
                            ),
                        );
                    }
                }
                hit_map.push(HitRegion::new(
                    HitTarget::Bar {
                        index: group.index,
                        series: Some(bar.series_index),
                    },
                    (bar.x, bar.y, bar.width, bar.height),
                ));
            }
        }

        layout.push_legend(&mut plot, &self.data, config.color, context);

        let decoration = DecorationContext {
            chart_kind: ChartKind::MultiBar,
            viewport,
            plot_width: layout.band.width,
            plot_height: viewport.height,
            value_axis: layout.value_axis_mapping(border),
            bar_anchors: groups
                .iter()
                .map(|group| {
                    let top = group
                        .bars
                        .iter()
                        .map(|bar| bar.y)
                        .fold(layout.band.bottom_y(), f64::min);
                    (group.index, group.center_x, top)
                })
                .collect(),
        };
        runtime.apply_decorators(&decoration, &mut plot);

        frame = frame.with_panel(plot);
        debug!(
            bar_count = groups.len(),
            series_count = self.data.series_count(),
            "multi bar chart frame built"
        );
        Ok(GroupedScene { frame, hit_map })
    }
}

impl Chart for MultiBarChart {
    fn kind(&self) -> ChartKind {
        ChartKind::MultiBar
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
