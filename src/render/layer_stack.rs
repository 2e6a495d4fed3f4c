use serde::{Deserialize, Serialize};

/// Z-ordered primitive buckets inside one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Labels,
    Series,
    Overlay,
    Legend,
    Decoration,
}

impl CanvasLayerKind {
    /// Paint order shared by every panel.
    pub const CANONICAL_ORDER: [Self; 7] = [
        Self::Background,
        Self::Grid,
        Self::Labels,
        Self::Series,
        Self::Overlay,
        Self::Legend,
        Self::Decoration,
    ];
}

/// Which part of a chart a panel draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelKind {
    /// Value labels: left of a vertical plot, under a horizontal one.
    ValueAxis,
    Plot,
}
