use serde::{Deserialize, Serialize};

use crate::core::frame::PlotBand;
use crate::core::scale::ValueScale;
use crate::error::{ChartError, ChartResult};

/// Bar width used when the configuration leaves it unset.
pub const DEFAULT_BAR_WIDTH_PX: f64 = 32.0;
/// Height of the marker drawn at the value end of each bar.
pub const BAR_TOP_MARKER_HEIGHT_PX: f64 = 2.0;
const VALUE_LABEL_GAP_PX: f64 = 2.0;

/// Inputs for a simple vertical bar series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub band: PlotBand,
    /// Drawn bar width (`bar_width * bar_percentage`).
    pub bar_width: f64,
}

impl BarLayout {
    pub fn new(band: PlotBand, bar_width: f64) -> ChartResult<Self> {
        if !bar_width.is_finite() || bar_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "bar width must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { band, bar_width })
    }

    /// Equal gap left of every bar and after the last one.
    #[must_use]
    pub fn horizontal_padding(self, bar_count: usize) -> f64 {
        let empty = self.band.width - self.bar_width * bar_count as f64;
        empty / (bar_count as f64 + 1.0)
    }
}

/// Pixel geometry of one bar in plot-panel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub value: f64,
    pub left_x: f64,
    pub center_x: f64,
    /// Top edge of the drawn rectangle.
    pub top_y: f64,
    pub width: f64,
    /// Drawn (absolute) height.
    pub height: f64,
    /// Positive above the baseline, negative below.
    pub signed_height: f64,
    pub baseline_y: f64,
}

impl BarGeometry {
    /// Y of the edge that represents the value.
    #[must_use]
    pub fn value_y(&self) -> f64 {
        self.baseline_y - self.signed_height
    }

    /// Marker rectangle `(x, y, width, height)` at the value end.
    #[must_use]
    pub fn top_marker(&self) -> (f64, f64, f64, f64) {
        let y = if self.signed_height >= 0.0 {
            self.value_y()
        } else {
            self.value_y() - BAR_TOP_MARKER_HEIGHT_PX
        };
        (self.left_x, y, self.width, BAR_TOP_MARKER_HEIGHT_PX)
    }

    /// Anchor of the value label centered above the bar.
    #[must_use]
    pub fn value_label_anchor(&self) -> (f64, f64) {
        (self.center_x, self.value_y() - VALUE_LABEL_GAP_PX)
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left_x
            && x <= self.left_x + self.width
            && y >= self.top_y
            && y <= self.top_y + self.height
    }
}

/// Projects values into evenly spaced bars.
///
/// Slot `i` starts at `padding + i * (width - padding) / n`, where `padding`
/// is [`BarLayout::horizontal_padding`]. Heights follow [`ValueScale`].
#[must_use]
pub fn project_bar_series(values: &[f64], scale: ValueScale, layout: BarLayout) -> Vec<BarGeometry> {
    if values.is_empty() {
        return Vec::new();
    }

    let count = values.len() as f64;
    let padding = layout.horizontal_padding(values.len());
    let plot_height = layout.band.plot_height();
    let base = scale.base_height(values, plot_height);
    let slot = (layout.band.width - padding) / count;
    let baseline_y = base + layout.band.padding_top;

    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let signed_height = scale.bar_height(value, values, plot_height);
            let left_x = padding + index as f64 * slot;
            let top_y = if signed_height > 0.0 {
                base - signed_height
            } else {
                base
            } + layout.band.padding_top;

            BarGeometry {
                index,
                value,
                left_x,
                center_x: left_x + layout.bar_width / 2.0,
                top_y,
                width: layout.bar_width,
                height: signed_height.abs(),
                signed_height,
                baseline_y,
            }
        })
        .collect()
}
