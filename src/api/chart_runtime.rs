use tracing::{debug, warn};

use crate::core::{ChartKind, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{
    ChartDecorator, ChartPlugin, DecorationContext, PluginContext, PluginEvent,
};
use crate::interaction::InteractionState;
use crate::render::{PanelFrame, RenderFrame, Renderer};

use super::frame_builder::FrameContext;
use super::{AxisOptions, ChartConfig, ChartOptions, ChartStyle, LabelFormatters};

/// State shared by every chart kind: size, configuration, extensions and
/// the highlighted category.
pub struct ChartRuntime {
    pub(super) viewport: Viewport,
    pub(super) config: ChartConfig,
    pub(super) axis: AxisOptions,
    pub(super) options: ChartOptions,
    pub(super) formatters: LabelFormatters,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
    pub(super) decorators: Vec<Box<dyn ChartDecorator>>,
    pub(super) interaction: InteractionState,
}

impl ChartRuntime {
    pub fn new(
        viewport: Viewport,
        config: ChartConfig,
        axis: AxisOptions,
        options: ChartOptions,
    ) -> ChartResult<Self> {
        viewport.validate()?;
        config.validate()?;
        axis.validate()?;
        options.validate()?;
        Ok(Self {
            viewport,
            config,
            axis,
            options,
            formatters: LabelFormatters::default(),
            plugins: Vec::new(),
            decorators: Vec::new(),
            interaction: InteractionState::default(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn axis(&self) -> &AxisOptions {
        &self.axis
    }

    #[must_use]
    pub fn options(&self) -> ChartOptions {
        self.options
    }

    #[must_use]
    pub fn formatters(&self) -> &LabelFormatters {
        &self.formatters
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        viewport.validate()?;
        self.viewport = viewport;
        Ok(())
    }

    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn set_axis(&mut self, axis: AxisOptions) -> ChartResult<()> {
        axis.validate()?;
        self.axis = axis;
        Ok(())
    }

    pub fn set_options(&mut self, options: ChartOptions) -> ChartResult<()> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    pub fn set_formatters(&mut self, formatters: LabelFormatters) {
        self.formatters = formatters;
    }

    #[must_use]
    pub fn highlighted_index(&self) -> Option<usize> {
        self.interaction.highlighted_index()
    }

    pub(super) fn frame_context<'a>(&'a self, style: &'a ChartStyle) -> FrameContext<'a> {
        FrameContext {
            config: &self.config,
            axis: &self.axis,
            options: &self.options,
            formatters: &self.formatters,
            style,
            highlighted_index: self.interaction.highlighted_index(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent, context: PluginContext) {
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }

    /// Runs every decorator against the plot panel. A failing decorator is
    /// logged and skipped so the rest of the frame still renders.
    pub(super) fn apply_decorators(&self, context: &DecorationContext, panel: &mut PanelFrame) {
        for decorator in &self.decorators {
            if let Err(err) = decorator.decorate(context, panel) {
                warn!(
                    decorator = decorator.id(),
                    error = %err,
                    "skipping decorator that failed to draw"
                );
            }
        }
    }
}

/// Behavior shared by the four chart kinds.
///
/// Implementors provide their data-dependent pieces; rendering, highlight
/// handling and extension management come from the provided methods.
pub trait Chart {
    fn kind(&self) -> ChartKind;
    fn runtime(&self) -> &ChartRuntime;
    fn runtime_mut(&mut self) -> &mut ChartRuntime;

    /// Number of categories (bars or bar groups).
    fn bar_count(&self) -> usize;

    /// Number of series drawn per category.
    fn series_count(&self) -> usize;

    /// Lays the chart out into a backend-agnostic frame.
    fn build_render_frame(&self) -> ChartResult<RenderFrame>;

    fn plugin_context(&self) -> PluginContext {
        let runtime = self.runtime();
        PluginContext {
            chart_kind: self.kind(),
            viewport: runtime.viewport,
            bar_count: self.bar_count(),
            series_count: self.series_count(),
            highlighted_index: runtime.highlighted_index(),
        }
    }

    fn emit_plugin_event(&mut self, event: PluginEvent) {
        let context = self.plugin_context();
        self.runtime_mut().emit_plugin_event(event, context);
    }

    /// Builds the frame and hands it to `renderer`.
    fn render<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> ChartResult<()>
    where
        Self: Sized,
    {
        let frame = self.build_render_frame()?;
        renderer.render(&frame)?;
        debug!(
            chart_kind = ?self.kind(),
            panels = frame.panels.len(),
            rects = frame.rect_count(),
            texts = frame.text_count(),
            "chart rendered"
        );
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    fn highlighted_index(&self) -> Option<usize> {
        self.runtime().highlighted_index()
    }

    /// Highlights one category label, or clears the highlight with `None`.
    fn set_highlighted_index(&mut self, index: Option<usize>) -> ChartResult<()> {
        if let Some(index) = index {
            let count = self.bar_count();
            if index >= count {
                return Err(ChartError::InvalidData(format!(
                    "highlight index {index} out of range for {count} bars"
                )));
            }
        }
        if self.runtime_mut().interaction.set_highlighted_index(index) {
            self.emit_plugin_event(PluginEvent::HighlightChanged { index });
        }
        Ok(())
    }

    fn register_plugin(&mut self, plugin: Box<dyn ChartPlugin>) -> ChartResult<()> {
        self.runtime_mut().register_plugin(plugin)
    }

    fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        self.runtime_mut().unregister_plugin(plugin_id)
    }

    fn plugin_count(&self) -> usize {
        self.runtime().plugin_count()
    }

    fn has_plugin(&self, plugin_id: &str) -> bool {
        self.runtime().has_plugin(plugin_id)
    }

    fn register_decorator(&mut self, decorator: Box<dyn ChartDecorator>) -> ChartResult<()> {
        self.runtime_mut().register_decorator(decorator)
    }

    fn unregister_decorator(&mut self, decorator_id: &str) -> bool {
        self.runtime_mut().unregister_decorator(decorator_id)
    }

    fn decorator_count(&self) -> usize {
        self.runtime().decorator_count()
    }
}
