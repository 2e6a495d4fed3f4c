//! Shared chart-frame geometry: gridlines and axis label anchors.
//!
//! Every function here is pure. Chart builders feed in their panel sizes and
//! paddings and turn the returned placements into render primitives.

use serde::{Deserialize, Serialize};

use crate::core::scale::ValueScale;

/// Height reserved under the plot for category labels.
pub const DEFAULT_X_LABELS_HEIGHT: f64 = 20.0;
/// Width reserved left of the plot for value labels.
pub const DEFAULT_Y_LABELS_WIDTH: f64 = 64.0;
pub const DEFAULT_LABEL_FONT_SIZE_PX: f64 = 12.0;
/// Vertical distance between the lines of a multi-line category label.
pub const LABEL_LINE_SPACING_PX: f64 = 12.0;
/// Gap between the value-label anchor and the plot in inverted charts.
pub const INVERTED_LABEL_GAP_PX: f64 = 15.0;
const LABEL_HIT_BOX_PX: f64 = 20.0;

/// Gridline segment in panel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl GridLine {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Horizontal anchoring of a label relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelAnchor {
    Start,
    Middle,
    End,
}

impl LabelAnchor {
    /// Rotated category labels hang off their anchor instead of centering on it.
    #[must_use]
    pub fn for_rotation(rotation_deg: f64) -> Self {
        if rotation_deg == 0.0 {
            Self::Middle
        } else if rotation_deg < 0.0 {
            Self::End
        } else {
            Self::Start
        }
    }
}

/// Vertical extent of the plot area shared by the gridline helpers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotBand {
    pub width: f64,
    pub height: f64,
    pub padding_top: f64,
    pub labels_height: f64,
}

impl PlotBand {
    #[must_use]
    pub fn new(width: f64, height: f64, padding_top: f64, labels_height: f64) -> Self {
        Self {
            width,
            height,
            padding_top,
            labels_height,
        }
    }

    /// Height available to bars.
    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.height - self.labels_height
    }

    /// Y of the plot bottom edge in panel coordinates.
    #[must_use]
    pub fn bottom_y(self) -> f64 {
        self.plot_height() + self.padding_top
    }
}

/// `count + 1` evenly spaced horizontal gridlines spanning the full width.
#[must_use]
pub fn horizontal_grid_lines(band: PlotBand, count: usize) -> Vec<GridLine> {
    let count = count.max(1);
    let step = band.plot_height() / count as f64;
    (0..=count)
        .map(|i| {
            let y = step * i as f64 + band.padding_top;
            GridLine::new(0.0, y, band.width, y)
        })
        .collect()
}

/// The single line along the plot bottom.
#[must_use]
pub fn baseline_grid_line(band: PlotBand) -> GridLine {
    let y = band.bottom_y();
    GridLine::new(0.0, y, band.width, y)
}

/// Vertical gridlines, one per `interval` data points.
#[must_use]
pub fn vertical_grid_lines(band: PlotBand, data_len: usize, interval: usize) -> Vec<GridLine> {
    if data_len == 0 {
        return Vec::new();
    }
    let interval = interval.max(1);
    let slots = data_len as f64 / interval as f64;
    let count = data_len.div_ceil(interval);
    let bottom = band.bottom_y();
    (0..count)
        .map(|i| {
            let x = (band.width / slots * i as f64).floor();
            GridLine::new(x, 0.0, x, bottom)
        })
        .collect()
}

/// Left axis line at the plot's left padding.
#[must_use]
pub fn left_axis_line(band: PlotBand, padding_right: f64) -> GridLine {
    let x = padding_right.floor();
    GridLine::new(x, 0.0, x, band.bottom_y())
}

/// Anchor of one value-axis label before text formatting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueLabelPlacement {
    pub index: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Inputs for the value labels drawn in the y-axis panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueAxisLayout {
    pub band: PlotBand,
    pub segments: usize,
    /// X of the right-aligned label anchor.
    pub anchor_x: f64,
}

/// Number of value labels drawn for `segments` gridline segments.
#[must_use]
pub fn value_label_count(segments: usize) -> usize {
    if segments <= 1 { 1 } else { segments + 1 }
}

/// Value labels from the axis floor (bottom) to the top gridline.
///
/// With a single segment the label shows the raw first value and no
/// interpolation happens.
#[must_use]
pub fn value_axis_labels(
    values: &[f64],
    scale: ValueScale,
    layout: ValueAxisLayout,
) -> Vec<ValueLabelPlacement> {
    let segments = layout.segments.max(1);
    let band = layout.band;
    let step = band.plot_height() / segments as f64;

    (0..value_label_count(segments))
        .map(|i| {
            let value = if segments == 1 {
                values.first().copied().unwrap_or(0.0)
            } else {
                scale.gridline_value(values, i, segments)
            };
            let y = if segments == 1 && scale.from_zero {
                band.padding_top + 4.0
            } else {
                band.plot_height() - step * i as f64 + band.padding_top
            };
            ValueLabelPlacement {
                index: i,
                value,
                x: layout.anchor_x,
                y,
            }
        })
        .collect()
}

/// Anchor and hit box of one category label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryLabelPlacement {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub anchor: LabelAnchor,
}

impl CategoryLabelPlacement {
    /// Y of line `line` of a multi-line label.
    #[must_use]
    pub fn line_y(&self, line: usize) -> f64 {
        self.y + line as f64 * LABEL_LINE_SPACING_PX
    }

    /// Press target `(x, y, width, height)` sitting on the label baseline.
    #[must_use]
    pub fn hit_box(&self) -> (f64, f64, f64, f64) {
        let left = match self.anchor {
            LabelAnchor::Start => self.x,
            LabelAnchor::Middle => self.x - LABEL_HIT_BOX_PX / 2.0,
            LabelAnchor::End => self.x - LABEL_HIT_BOX_PX,
        };
        (left, self.y - LABEL_HIT_BOX_PX, LABEL_HIT_BOX_PX, LABEL_HIT_BOX_PX)
    }
}

/// Inputs for the category labels under a vertical plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryAxisLayout {
    pub band: PlotBand,
    pub padding_right: f64,
    /// Shift applied inside each slot, usually half a bar width.
    pub horizontal_offset: f64,
    /// Horizontal compression applied when a legend shares the plot.
    pub squeeze: f64,
    pub x_labels_offset: f64,
    pub rotation_deg: f64,
}

/// One label per category, skipping `hidden` indices.
#[must_use]
pub fn category_axis_labels(
    count: usize,
    hidden: &[usize],
    layout: CategoryAxisLayout,
) -> Vec<CategoryLabelPlacement> {
    if count == 0 {
        return Vec::new();
    }
    let band = layout.band;
    let slot = (band.width - layout.padding_right) / count as f64;
    let y = band.bottom_y() + DEFAULT_LABEL_FONT_SIZE_PX * 3.0 / 2.0 + layout.x_labels_offset;
    let anchor = LabelAnchor::for_rotation(layout.rotation_deg);

    (0..count)
        .filter(|i| !hidden.contains(i))
        .map(|i| CategoryLabelPlacement {
            index: i,
            x: (slot * i as f64 + layout.padding_right + layout.horizontal_offset) * layout.squeeze,
            y,
            anchor,
        })
        .collect()
}

/// Inputs for frames whose bars grow horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvertedFrameLayout {
    /// Plot panel width, labels column included.
    pub width: f64,
    /// Plot panel height.
    pub height: f64,
    pub padding_top: f64,
    pub padding_right: f64,
    /// Width of the category-label column left of the bars.
    pub labels_width: f64,
}

impl InvertedFrameLayout {
    /// Width available to bars.
    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.width - self.labels_width
    }

    fn gridline_x(self, index: usize, segments: usize) -> f64 {
        self.labels_width
            + self.padding_right
            + self.plot_width() / segments as f64 * index as f64
    }
}

/// `segments + 1` vertical gridlines across the bar area.
#[must_use]
pub fn inverted_vertical_grid_lines(
    layout: InvertedFrameLayout,
    segments: usize,
    bottom_y: f64,
) -> Vec<GridLine> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let x = layout.gridline_x(i, segments);
            GridLine::new(x, layout.padding_top, x, bottom_y)
        })
        .collect()
}

/// Right-aligned category labels in the column left of horizontal bars.
#[must_use]
pub fn inverted_category_labels(
    count: usize,
    hidden: &[usize],
    layout: InvertedFrameLayout,
    vertical_offset: f64,
    y_labels_offset: f64,
) -> Vec<CategoryLabelPlacement> {
    if count == 0 {
        return Vec::new();
    }
    let slot = (layout.height - layout.padding_top) / count as f64;
    let x = layout.labels_width - INVERTED_LABEL_GAP_PX + y_labels_offset;

    (0..count)
        .filter(|i| !hidden.contains(i))
        .map(|i| CategoryLabelPlacement {
            index: i,
            x,
            y: slot * i as f64 + layout.padding_top + vertical_offset,
            anchor: LabelAnchor::End,
        })
        .collect()
}

/// Value labels under the vertical gridlines of a horizontal chart.
#[must_use]
pub fn inverted_value_labels(
    values: &[f64],
    scale: ValueScale,
    layout: InvertedFrameLayout,
    segments: usize,
    baseline_y: f64,
) -> Vec<ValueLabelPlacement> {
    let segments = segments.max(1);
    (0..value_label_count(segments))
        .map(|i| {
            let value = if segments == 1 {
                values.first().copied().unwrap_or(0.0)
            } else {
                scale.gridline_value(values, i, segments)
            };
            let x = if segments == 1 && scale.from_zero {
                layout.padding_right + 4.0
            } else {
                layout.gridline_x(i, segments)
            };
            ValueLabelPlacement {
                index: i,
                value,
                x,
                y: baseline_y,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{LabelAnchor, PlotBand, horizontal_grid_lines, value_label_count};

    #[test]
    fn grid_lines_cover_plot_band() {
        let lines = horizontal_grid_lines(PlotBand::new(300.0, 220.0, 16.0, 20.0), 4);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].y1, 16.0);
        assert_eq!(lines[4].y1, 216.0);
    }

    #[test]
    fn single_segment_draws_single_label() {
        assert_eq!(value_label_count(1), 1);
        assert_eq!(value_label_count(4), 5);
    }

    #[test]
    fn anchor_follows_rotation_sign() {
        assert_eq!(LabelAnchor::for_rotation(0.0), LabelAnchor::Middle);
        assert_eq!(LabelAnchor::for_rotation(-45.0), LabelAnchor::End);
        assert_eq!(LabelAnchor::for_rotation(30.0), LabelAnchor::Start);
    }
}
