use super::{CanvasLayerKind, LinePrimitive, PanelKind, RectPrimitive, TextPrimitive};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn empty(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}

/// One independently sized drawing surface placed at `(x, y)` in the chart.
///
/// Primitives inside a panel use panel-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelFrame {
    pub kind: PanelKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub layers: Vec<LayerPrimitives>,
}

impl PanelFrame {
    /// Panel with every layer of [`CanvasLayerKind::CANONICAL_ORDER`], all empty.
    #[must_use]
    pub fn new(kind: PanelKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            kind,
            x,
            y,
            width,
            height,
            layers: CanvasLayerKind::CANONICAL_ORDER
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        self.layer_mut(kind).rects.push(rect);
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.layers.iter().flat_map(|layer| layer.lines.iter())
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.layers.iter().flat_map(|layer| layer.rects.iter())
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.layers.iter().flat_map(|layer| layer.texts.iter())
    }

    pub fn validate(&self) -> ChartResult<()> {
        if ![self.x, self.y, self.width, self.height]
            .iter()
            .all(|value| value.is_finite())
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(ChartError::InvalidData(format!(
                "{:?} panel bounds must be finite and >= 0",
                self.kind
            )));
        }
        for line in self.lines() {
            line.validate()?;
        }
        for rect in self.rects() {
            rect.validate()?;
        }
        for text in self.texts() {
            text.validate()?;
        }
        Ok(())
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> &mut LayerPrimitives {
        // Panels built through `new` always carry every kind.
        let index = match self.layers.iter().position(|layer| layer.kind == kind) {
            Some(index) => index,
            None => {
                self.layers.push(LayerPrimitives::empty(kind));
                self.layers.len() - 1
            }
        };
        &mut self.layers[index]
    }
}
