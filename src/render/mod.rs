mod frame;
mod gradient;
mod layer_stack;
mod layered_frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::RenderFrame;
pub use gradient::{GradientStop, GradientUnits, LinearGradient};
pub use layer_stack::{CanvasLayerKind, PanelKind};
pub use layered_frame::{LayerPrimitives, PanelFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, Paint, RectPrimitive, TextHAlign, TextPrimitive};
pub use svg_renderer::{SvgRenderStats, SvgRenderer, escape_xml};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart data and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
