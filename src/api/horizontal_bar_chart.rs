use tracing::{debug, trace};

use crate::core::frame::{
    inverted_category_labels, inverted_value_labels, inverted_vertical_grid_lines,
};
use crate::core::horizontal_bar_series::{
    DEFAULT_HORIZONTAL_LABELS_HEIGHT, HORIZONTAL_RIGHT_GUTTER_PX,
};
use crate::core::{
    ChartKind, DEFAULT_Y_LABELS_WIDTH, GridLine, HorizontalBarGeometry, InvertedFrameLayout,
    Viewport, project_horizontal_bars,
};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{
    DecorationContext, PluginEvent, ValueAxisMapping, ValueAxisOrientation,
};
use crate::interaction::{BarPressEvent, HitMap, HitRegion, HitTarget};
use crate::render::{CanvasLayerKind, PanelFrame, PanelKind, RectPrimitive, RenderFrame, TextHAlign};

use super::defs_builder::{
    bar_fill, define_base_gradients, define_custom_color_gradients, push_background,
};
use super::frame_builder::{push_category_labels, push_value_label_texts};
use super::press_dispatch::{BarPressHandler, record_press, resolve_press};
use super::{
    AxisOptions, Chart, ChartConfig, ChartOptions, ChartRuntime, ChartStyle,
    HorizontalBarChartData, LabelFormatters,
};

/// Horizontal chart: categories down the left edge, values growing rightward.
///
/// The plot panel spans the full width above a value-axis panel of
/// `vertical_labels_height`. Bars carry no top markers, whatever
/// `show_bar_tops` says.
pub struct HorizontalBarChart {
    runtime: ChartRuntime,
    data: HorizontalBarChartData,
    on_press: Option<BarPressHandler>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct HorizontalLayout {
    graph_height: f64,
    labels_height: f64,
    frame: InvertedFrameLayout,
    thickness: f64,
}

struct HorizontalScene {
    frame: RenderFrame,
    hit_map: HitMap,
    bars: Vec<HorizontalBarGeometry>,
}

impl HorizontalBarChart {
    pub fn new(
        viewport: Viewport,
        data: HorizontalBarChartData,
        config: ChartConfig,
    ) -> ChartResult<Self> {
        data.validate()?;
        let runtime = ChartRuntime::new(
            viewport,
            config,
            AxisOptions::default(),
            ChartOptions::default(),
        )?;
        debug!(bar_count = data.values().len(), "horizontal bar chart created");
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
    pub fn data(&self) -> &HorizontalBarChartData {
        &self.data
    }

    pub fn set_data(&mut self, data: HorizontalBarChartData) -> ChartResult<()> {
        data.validate()?;
        let bar_count = data.values().len();
        self.data = data;
        if self
            .highlighted_index()
            .is_some_and(|index| index >= bar_count)
        {
            self.runtime.interaction.clear_highlight();
        }
        debug!(bar_count, "horizontal bar chart data updated");
        self.emit_plugin_event(PluginEvent::DataUpdated { bar_count });
        Ok(())
    }

    /// Resolved bar geometry in plot-panel coordinates.
    pub fn bar_geometry(&self) -> ChartResult<Vec<HorizontalBarGeometry>> {
        let layout = self.layout()?;
        Ok(project_horizontal_bars(
            self.data.values(),
            self.runtime.axis.value_scale(),
            layout.frame,
            layout.thickness,
        ))
    }

    /// Presses the bar or category label under `(x, y)` in plot-panel
    /// coordinates.
    pub fn press_at(&mut self, x: f64, y: f64) -> ChartResult<Option<BarPressEvent>> {
        let scene = self.compose()?;
        let Some(index) = resolve_press(&scene.hit_map, x, y) else {
            trace!(x, y, "horizontal bar chart press missed");
            return Ok(None);
        };
        let Some(bar) = scene.bars.get(index) else {
            return Ok(None);
        };
        let event = BarPressEvent {
            index,
            value: bar.value,
            x: bar.value_x(),
            y: bar.center_y(),
        };
        if let Some(handler) = self.on_press.as_mut() {
            handler(&event);
        }
        record_press(self, index);
        Ok(Some(event))
    }

    fn layout(&self) -> ChartResult<HorizontalLayout> {
        let config = &self.runtime.config;
        let viewport = self.runtime.viewport;
        let labels_height = config
            .vertical_labels_height
            .unwrap_or(DEFAULT_HORIZONTAL_LABELS_HEIGHT);
        let graph_height = viewport.height - labels_height;
        let frame = InvertedFrameLayout {
            width: viewport.width - HORIZONTAL_RIGHT_GUTTER_PX,
            height: graph_height,
            padding_top: config.padding_top.unwrap_or(0.0),
            padding_right: config.padding_right.unwrap_or(0.0),
            labels_width: config
                .horizontal_labels_width
                .unwrap_or(DEFAULT_Y_LABELS_WIDTH),
        };
        if !graph_height.is_finite() || graph_height <= 0.0 || frame.plot_width() <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(HorizontalLayout {
            graph_height,
            labels_height,
            frame,
            thickness: config.effective_bar_width(),
        })
    }

    fn compose(&self) -> ChartResult<HorizontalScene> {
        let runtime = &self.runtime;
        let config = &runtime.config;
        let options = runtime.options;
        let viewport = runtime.viewport;
        let layout = self.layout()?;
        let values = self.data.values();
        let scale = runtime.axis.value_scale();
        let style = ChartStyle::resolve(config);
        let context = runtime.frame_context(&style);

        let custom_colors = match self.data.datasets.first() {
            Some(dataset) if options.with_custom_bar_color_from_data => {
                dataset.colors.as_deref().unwrap_or_default()
            }
            _ => &[],
        };
        let dataset_colors: Vec<_> = self
            .data
            .datasets
            .iter()
            .map(|dataset| dataset.color)
            .collect();

        let mut frame = RenderFrame::new(viewport);
        define_base_gradients(&mut frame, config, layout.graph_height, &dataset_colors);
        define_custom_color_gradients(&mut frame, &[custom_colors], options.flat_color);

        let mut plot = PanelFrame::new(PanelKind::Plot, 0.0, 0.0, viewport.width, layout.graph_height);
        push_background(&mut plot, config);

        if options.with_inner_lines {
            for line in
                inverted_vertical_grid_lines(layout.frame, options.segments, layout.graph_height)
            {
                plot.push_line(CanvasLayerKind::Grid, style.grid_line(line));
            }
        }
        if options.with_outer_lines {
            let x = layout.frame.labels_width;
            plot.push_line(
                CanvasLayerKind::Grid,
                style.grid_line(GridLine::new(
                    x,
                    layout.frame.padding_top,
                    x,
                    layout.graph_height,
                )),
            );
        }

        let mut hit_map = HitMap::new();
        // Category labels run down the left edge here, so the horizontal
        // toggle owns them and the vertical toggle owns the value axis below.
        if options.with_horizontal_labels {
            let placements = inverted_category_labels(
                values.len(),
                &runtime.axis.hide_points_at_index,
                layout.frame,
                layout.thickness + style.label_font_size / 3.0,
                runtime.axis.y_labels_offset,
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

        let bars = project_horizontal_bars(values, scale, layout.frame, layout.thickness);
        for bar in &bars {
            let fill = bar_fill(config, 0, bar.index, bar.index < custom_colors.len());
            plot.push_rect(
                CanvasLayerKind::Series,
                RectPrimitive::new(bar.x, bar.y, bar.length, bar.thickness, fill)
                    .with_corner_radius(config.bar_radius),
            );
            if options.show_values_on_top_of_bars {
                let text = runtime.formatters.top_bar_value(bar.value);
                if !text.is_empty() {
                    let (x, y, rightward) = bar.value_label_anchor(style.label_font_size);
                    let align = if rightward {
                        TextHAlign::Left
                    } else {
                        TextHAlign::Right
                    };
                    plot.push_text(
                        CanvasLayerKind::Overlay,
                        style.value_label(text, (x, y), align),
                    );
                }
            }
            hit_map.push(HitRegion::new(
                HitTarget::Bar {
                    index: bar.index,
                    series: None,
                },
                (bar.x, bar.y, bar.length, bar.thickness),
            ));
        }

        let decoration = DecorationContext {
            chart_kind: ChartKind::HorizontalBar,
            viewport,
            plot_width: viewport.width,
            plot_height: layout.graph_height,
            value_axis: ValueAxisMapping {
                orientation: ValueAxisOrientation::Horizontal,
                floor: scale.axis_floor(values),
                span: scale.scaler(values),
                start_px: layout.frame.labels_width,
                end_px: layout.frame.labels_width + layout.frame.plot_width(),
            },
            bar_anchors: bars
                .iter()
                .map(|bar| (bar.index, bar.value_x(), bar.center_y()))
                .collect(),
        };
        runtime.apply_decorators(&decoration, &mut plot);
        frame = frame.with_panel(plot);

        if options.with_vertical_labels {
            let mut axis_panel = PanelFrame::new(
                PanelKind::ValueAxis,
                0.0,
                layout.graph_height,
                viewport.width,
                layout.labels_height,
            );
            push_background(&mut axis_panel, config);
            let placements = inverted_value_labels(
                values,
                scale,
                layout.frame,
                options.segments,
                style.label_font_size + runtime.axis.x_labels_offset,
            );
            push_value_label_texts(&mut axis_panel, &placements, TextHAlign::Center, context);
            frame = frame.with_panel(axis_panel);
        }

        debug!(
            bar_count = bars.len(),
            gradients = frame.gradients.len(),
            "horizontal bar chart frame built"
        );
        Ok(HorizontalScene {
            frame,
            hit_map,
            bars,
        })
    }
}

impl Chart for HorizontalBarChart {
    fn kind(&self) -> ChartKind {
        ChartKind::HorizontalBar
    }

    fn runtime(&self) -> &ChartRuntime {
        &self.runtime
    }

    fn runtime_mut(&mut self) -> &mut ChartRuntime {
        &mut self.runtime
    }

    fn bar_count(&self) -> usize {
        self.data.values().len()
    }

    fn series_count(&self) -> usize {
        1
    }

    fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        self.compose().map(|scene| scene.frame)
    }
}
