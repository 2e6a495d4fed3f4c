use crate::core::{ChartKind, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{CanvasLayerKind, Color, LinePrimitive, PanelFrame, TextHAlign, TextPrimitive};

/// Which plot axis carries values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueAxisOrientation {
    /// Values grow upward (simple, stacked and grouped charts).
    Vertical,
    /// Values grow rightward (horizontal charts).
    Horizontal,
}

/// Linear value-to-pixel mapping matching the chart's gridlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAxisMapping {
    pub orientation: ValueAxisOrientation,
    /// Value at `start_px`.
    pub floor: f64,
    /// Value range covered between `start_px` and `end_px`.
    pub span: f64,
    pub start_px: f64,
    pub end_px: f64,
}

impl ValueAxisMapping {
    #[must_use]
    pub fn pixel_for(self, value: f64) -> f64 {
        let span = if self.span == 0.0 { 1.0 } else { self.span };
        self.start_px + (value - self.floor) / span * (self.end_px - self.start_px)
    }
}

/// Plot geometry handed to decorators.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorationContext {
    pub chart_kind: ChartKind,
    pub viewport: Viewport,
    pub plot_width: f64,
    pub plot_height: f64,
    pub value_axis: ValueAxisMapping,
    /// `(index, x, y)` of each bar's value end.
    pub bar_anchors: Vec<(usize, f64, f64)>,
}

/// Appends custom primitives to the plot panel after the chart is laid out.
///
/// Decorators write into [`CanvasLayerKind::Decoration`] so they always paint
/// on top of the chart.
pub trait ChartDecorator {
    fn id(&self) -> &str;
    fn decorate(&self, context: &DecorationContext, panel: &mut PanelFrame) -> ChartResult<()>;
}

/// Dashed target line across the plot at a fixed value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    id: String,
    value: f64,
    color: Color,
    label: Option<String>,
}

impl ReferenceLine {
    #[must_use]
    pub fn new(id: impl Into<String>, value: f64, color: Color) -> Self {
        Self {
            id: id.into(),
            value,
            color,
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl ChartDecorator for ReferenceLine {
    fn id(&self) -> &str {
        &self.id
    }

    fn decorate(&self, context: &DecorationContext, panel: &mut PanelFrame) -> ChartResult<()> {
        if !self.value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "reference line `{}` value must be finite",
                self.id
            )));
        }

        let at = context.value_axis.pixel_for(self.value);
        let (line, label_at) = match context.value_axis.orientation {
            ValueAxisOrientation::Vertical => (
                LinePrimitive::new(0.0, at, context.plot_width, at, 1.0, self.color),
                (context.plot_width, at - 4.0, TextHAlign::Right),
            ),
            ValueAxisOrientation::Horizontal => (
                LinePrimitive::new(at, 0.0, at, context.plot_height, 1.0, self.color),
                (at + 4.0, 12.0, TextHAlign::Left),
            ),
        };
        panel.push_line(CanvasLayerKind::Decoration, line.with_dash(&[4.0, 4.0]));

        if let Some(label) = self.label.as_deref().filter(|label| !label.is_empty()) {
            let (x, y, align) = label_at;
            panel.push_text(
                CanvasLayerKind::Decoration,
                TextPrimitive::new(label, x, y, 10.0, self.color, align),
            );
        }
        Ok(())
    }
}
