use serde::{Deserialize, Serialize};

use crate::core::frame::InvertedFrameLayout;
use crate::core::scale::ValueScale;

/// Space kept free right of the longest bar for its value label.
pub const HORIZONTAL_RIGHT_GUTTER_PX: f64 = 40.0;
/// Category label band height used when the configuration leaves it unset.
pub const DEFAULT_HORIZONTAL_LABELS_HEIGHT: f64 = 16.0;
const VALUE_LABEL_GAP_PX: f64 = 2.0;

/// Geometry of one horizontal bar in plot-panel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalBarGeometry {
    pub index: usize,
    pub value: f64,
    /// Left edge of the drawn rectangle.
    pub x: f64,
    /// Top edge of the drawn rectangle.
    pub y: f64,
    /// Drawn (absolute) length.
    pub length: f64,
    /// Positive right of the baseline, negative left of it.
    pub signed_length: f64,
    pub thickness: f64,
    pub baseline_x: f64,
}

impl HorizontalBarGeometry {
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.thickness / 2.0
    }

    /// X of the edge that represents the value.
    #[must_use]
    pub fn value_x(&self) -> f64 {
        self.baseline_x + self.signed_length
    }

    /// Value label anchor just past the value end; `true` when it grows rightward.
    #[must_use]
    pub fn value_label_anchor(&self, font_size_px: f64) -> (f64, f64, bool) {
        let y = self.center_y() + font_size_px / 2.0;
        if self.signed_length >= 0.0 {
            (self.value_x() + VALUE_LABEL_GAP_PX, y, true)
        } else {
            (self.value_x() - VALUE_LABEL_GAP_PX, y, false)
        }
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.length && y >= self.y && y <= self.y + self.thickness
    }
}

/// Projects values into bars growing from the value baseline.
///
/// Non-negative data grows rightward from the labels column. Non-positive data
/// hangs leftward from the right edge, and mixed data grows from the zero line.
#[must_use]
pub fn project_horizontal_bars(
    values: &[f64],
    scale: ValueScale,
    layout: InvertedFrameLayout,
    thickness: f64,
) -> Vec<HorizontalBarGeometry> {
    if values.is_empty() {
        return Vec::new();
    }

    let plot_width = layout.plot_width();
    let baseline_x = layout.labels_width + plot_width - scale.base_height(values, plot_width);
    let slot = (layout.height - layout.padding_top) / values.len() as f64;

    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let signed_length = scale.bar_height(value, values, plot_width);
            let x = if signed_length >= 0.0 {
                baseline_x
            } else {
                baseline_x + signed_length
            };
            HorizontalBarGeometry {
                index,
                value,
                x,
                y: layout.padding_top + index as f64 * slot + thickness / 2.0,
                length: signed_length.abs(),
                signed_length,
                thickness,
                baseline_x,
            }
        })
        .collect()
}
