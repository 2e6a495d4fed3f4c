use indexmap::IndexMap;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinearGradient, Paint, PanelFrame, PanelKind};

/// Backend-agnostic scene for one chart draw pass.
///
/// Gradients keep insertion order so serialized output is stable.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub gradients: IndexMap<String, LinearGradient>,
    pub panels: Vec<PanelFrame>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            gradients: IndexMap::new(),
            panels: Vec::new(),
        }
    }

    /// Registers a gradient; a later definition with the same id replaces it.
    pub fn define_gradient(&mut self, gradient: LinearGradient) {
        self.gradients.insert(gradient.id.clone(), gradient);
    }

    #[must_use]
    pub fn with_panel(mut self, panel: PanelFrame) -> Self {
        self.panels.push(panel);
        self
    }

    #[must_use]
    pub fn panel(&self, kind: PanelKind) -> Option<&PanelFrame> {
        self.panels.iter().find(|panel| panel.kind == kind)
    }

    pub fn panel_mut(&mut self, kind: PanelKind) -> Option<&mut PanelFrame> {
        self.panels.iter_mut().find(|panel| panel.kind == kind)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for gradient in self.gradients.values() {
            gradient.validate()?;
        }
        for panel in &self.panels {
            panel.validate()?;
            for rect in panel.rects() {
                if let Paint::Gradient(id) = &rect.fill {
                    if !self.gradients.contains_key(id) {
                        return Err(ChartError::InvalidData(format!(
                            "rect references undefined gradient `{id}`"
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.panels.iter().map(|panel| panel.lines().count()).sum()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.panels.iter().map(|panel| panel.rects().count()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.panels.iter().map(|panel| panel.texts().count()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels
            .iter()
            .all(|panel| panel.layers.iter().all(|layer| layer.is_empty()))
    }
}
