use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Feature toggles of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default = "enabled")]
    pub with_inner_lines: bool,
    /// Category labels.
    #[serde(default = "enabled")]
    pub with_vertical_labels: bool,
    /// Value labels.
    #[serde(default = "enabled")]
    pub with_horizontal_labels: bool,
    #[serde(default)]
    pub with_vertical_lines: bool,
    /// Baseline and left axis lines.
    #[serde(default)]
    pub with_outer_lines: bool,
    #[serde(default = "enabled")]
    pub show_bar_tops: bool,
    #[serde(default)]
    pub show_values_on_top_of_bars: bool,
    #[serde(default)]
    pub with_custom_bar_color_from_data: bool,
    /// Custom bar colors without the fade to transparent.
    #[serde(default)]
    pub flat_color: bool,
    #[serde(default = "default_segments")]
    pub segments: usize,
    #[serde(default)]
    pub hide_legend: bool,
    /// Stacked and grouped bars are scaled against 100.
    #[serde(default)]
    pub percentile: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            with_inner_lines: true,
            with_vertical_labels: true,
            with_horizontal_labels: true,
            with_vertical_lines: false,
            with_outer_lines: false,
            show_bar_tops: true,
            show_values_on_top_of_bars: false,
            with_custom_bar_color_from_data: false,
            flat_color: false,
            segments: default_segments(),
            hide_legend: false,
            percentile: false,
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn with_inner_lines(mut self, enabled: bool) -> Self {
        self.with_inner_lines = enabled;
        self
    }

    #[must_use]
    pub fn with_vertical_labels(mut self, enabled: bool) -> Self {
        self.with_vertical_labels = enabled;
        self
    }

    #[must_use]
    pub fn with_horizontal_labels(mut self, enabled: bool) -> Self {
        self.with_horizontal_labels = enabled;
        self
    }

    #[must_use]
    pub fn with_vertical_lines(mut self, enabled: bool) -> Self {
        self.with_vertical_lines = enabled;
        self
    }

    #[must_use]
    pub fn with_outer_lines(mut self, enabled: bool) -> Self {
        self.with_outer_lines = enabled;
        self
    }

    #[must_use]
    pub fn with_bar_tops(mut self, enabled: bool) -> Self {
        self.show_bar_tops = enabled;
        self
    }

    #[must_use]
    pub fn with_values_on_top_of_bars(mut self, enabled: bool) -> Self {
        self.show_values_on_top_of_bars = enabled;
        self
    }

    #[must_use]
    pub fn with_custom_bar_color_from_data(mut self, enabled: bool) -> Self {
        self.with_custom_bar_color_from_data = enabled;
        self
    }

    #[must_use]
    pub fn with_flat_color(mut self, enabled: bool) -> Self {
        self.flat_color = enabled;
        self
    }

    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    #[must_use]
    pub fn with_hide_legend(mut self, hidden: bool) -> Self {
        self.hide_legend = hidden;
        self
    }

    #[must_use]
    pub fn with_percentile(mut self, enabled: bool) -> Self {
        self.percentile = enabled;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.segments == 0 {
            return Err(ChartError::InvalidConfig(
                "`segments` must be >= 1".to_owned(),
            ));
        }
        Ok(())
    }
}

fn enabled() -> bool {
    true
}

fn default_segments() -> usize {
    4
}
