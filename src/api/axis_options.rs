use serde::{Deserialize, Serialize};

use crate::core::ValueScale;
use crate::error::{ChartError, ChartResult};

/// Axis range and label decoration options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    #[serde(default)]
    pub from_zero: bool,
    #[serde(default)]
    pub from_number: Option<f64>,
    /// Prefix of every value label.
    #[serde(default)]
    pub y_axis_label: String,
    #[serde(default)]
    pub y_axis_suffix: String,
    /// Prefix of every category label.
    #[serde(default)]
    pub x_axis_label: String,
    /// Appended to the last line of every category label.
    #[serde(default)]
    pub x_axis_suffix: String,
    /// Distance of value labels from the plot edge.
    #[serde(default = "default_y_labels_offset")]
    pub y_labels_offset: f64,
    #[serde(default)]
    pub x_labels_offset: f64,
    /// One vertical gridline every this many data points.
    #[serde(default = "default_y_axis_interval")]
    pub y_axis_interval: usize,
    #[serde(default)]
    pub hide_points_at_index: Vec<usize>,
    /// Width of the value-axis panel; 64 when unset.
    #[serde(default)]
    pub y_labels_width: Option<f64>,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            from_zero: false,
            from_number: None,
            y_axis_label: String::new(),
            y_axis_suffix: String::new(),
            x_axis_label: String::new(),
            x_axis_suffix: String::new(),
            y_labels_offset: default_y_labels_offset(),
            x_labels_offset: 0.0,
            y_axis_interval: default_y_axis_interval(),
            hide_points_at_index: Vec::new(),
            y_labels_width: None,
        }
    }
}

impl AxisOptions {
    #[must_use]
    pub fn with_from_zero(mut self, from_zero: bool) -> Self {
        self.from_zero = from_zero;
        self
    }

    #[must_use]
    pub fn with_from_number(mut self, from_number: Option<f64>) -> Self {
        self.from_number = from_number;
        self
    }

    #[must_use]
    pub fn with_y_axis_affixes(
        mut self,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        self.y_axis_label = prefix.into();
        self.y_axis_suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_x_axis_affixes(
        mut self,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        self.x_axis_label = prefix.into();
        self.x_axis_suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_label_offsets(mut self, y_labels_offset: f64, x_labels_offset: f64) -> Self {
        self.y_labels_offset = y_labels_offset;
        self.x_labels_offset = x_labels_offset;
        self
    }

    #[must_use]
    pub fn with_y_axis_interval(mut self, interval: usize) -> Self {
        self.y_axis_interval = interval;
        self
    }

    #[must_use]
    pub fn with_hidden_points(mut self, indices: Vec<usize>) -> Self {
        self.hide_points_at_index = indices;
        self
    }

    #[must_use]
    pub fn with_y_labels_width(mut self, width: f64) -> Self {
        self.y_labels_width = Some(width);
        self
    }

    #[must_use]
    pub fn value_scale(&self) -> ValueScale {
        ValueScale::new(self.from_zero, self.from_number)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(number) = self.from_number {
            if !number.is_finite() {
                return Err(ChartError::InvalidConfig(
                    "`from_number` must be finite".to_owned(),
                ));
            }
        }
        if !self.y_labels_offset.is_finite() || !self.x_labels_offset.is_finite() {
            return Err(ChartError::InvalidConfig(
                "label offsets must be finite".to_owned(),
            ));
        }
        if self.y_axis_interval == 0 {
            return Err(ChartError::InvalidConfig(
                "`y_axis_interval` must be >= 1".to_owned(),
            ));
        }
        if let Some(width) = self.y_labels_width {
            if !width.is_finite() || width < 0.0 {
                return Err(ChartError::InvalidConfig(
                    "`y_labels_width` must be finite and >= 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

fn default_y_labels_offset() -> f64 {
    12.0
}

fn default_y_axis_interval() -> usize {
    1
}
