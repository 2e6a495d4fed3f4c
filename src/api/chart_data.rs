use serde::{Deserialize, Serialize};

use crate::core::AxisLabel;
use crate::core::types::{validate_label_count, validate_values};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// One value per bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarChartData {
    #[serde(default)]
    pub labels: Vec<AxisLabel>,
    pub values: Vec<f64>,
    /// Per-bar colors used with `with_custom_bar_color_from_data`.
    #[serde(default)]
    pub bar_colors: Option<Vec<Color>>,
}

impl BarChartData {
    #[must_use]
    pub fn new(labels: Vec<AxisLabel>, values: Vec<f64>) -> Self {
        Self {
            labels,
            values,
            bar_colors: None,
        }
    }

    #[must_use]
    pub fn with_bar_colors(mut self, colors: Vec<Color>) -> Self {
        self.bar_colors = Some(colors);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_values(&self.values, "values")?;
        validate_label_count(&self.labels, self.values.len())?;
        validate_colors(self.bar_colors.as_deref().unwrap_or_default(), "bar_colors")
    }
}

/// Several series per bar, shared by stacked and grouped charts.
///
/// `groups[i][z]` is the value of series `z` in category `i`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackedBarChartData {
    #[serde(default)]
    pub labels: Vec<AxisLabel>,
    /// One entry per series.
    #[serde(default)]
    pub legend: Vec<String>,
    pub groups: Vec<Vec<f64>>,
    /// One color per series.
    #[serde(default)]
    pub bar_colors: Vec<Color>,
}

impl StackedBarChartData {
    #[must_use]
    pub fn new(labels: Vec<AxisLabel>, groups: Vec<Vec<f64>>) -> Self {
        Self {
            labels,
            legend: Vec::new(),
            groups,
            bar_colors: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_legend(mut self, legend: Vec<String>) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_bar_colors(mut self, colors: Vec<Color>) -> Self {
        self.bar_colors = colors;
        self
    }

    /// Largest number of series in any group.
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.groups.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Color of series `series_index`, falling back to `fallback`.
    #[must_use]
    pub fn series_color(&self, series_index: usize, fallback: Color) -> Color {
        self.bar_colors
            .get(series_index)
            .copied()
            .unwrap_or(fallback)
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (index, group) in self.groups.iter().enumerate() {
            validate_values(group, &format!("groups[{index}]"))?;
            if let Some(position) = group.iter().position(|value| *value < 0.0) {
                return Err(ChartError::InvalidData(format!(
                    "groups[{index}][{position}] must be >= 0"
                )));
            }
        }
        validate_label_count(&self.labels, self.groups.len())?;
        validate_colors(&self.bar_colors, "bar_colors")
    }
}

/// One series of a horizontal chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarDataset {
    pub values: Vec<f64>,
    /// Series color used for its fill gradient.
    #[serde(default)]
    pub color: Option<Color>,
    /// Per-bar colors used with `with_custom_bar_color_from_data`.
    #[serde(default)]
    pub colors: Option<Vec<Color>>,
}

impl BarDataset {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            color: None,
            colors: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }
}

/// Labelled datasets of a horizontal chart. Only the first dataset is drawn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HorizontalBarChartData {
    #[serde(default)]
    pub labels: Vec<AxisLabel>,
    pub datasets: Vec<BarDataset>,
}

impl HorizontalBarChartData {
    #[must_use]
    pub fn new(labels: Vec<AxisLabel>, datasets: Vec<BarDataset>) -> Self {
        Self { labels, datasets }
    }

    /// Values of the drawn dataset; empty when there is none.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        self.datasets
            .first()
            .map(|dataset| dataset.values.as_slice())
            .unwrap_or_default()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (index, dataset) in self.datasets.iter().enumerate() {
            validate_values(&dataset.values, &format!("datasets[{index}].values"))?;
            if let Some(color) = dataset.color {
                color.validate()?;
            }
            validate_colors(
                dataset.colors.as_deref().unwrap_or_default(),
                &format!("datasets[{index}].colors"),
            )?;
        }
        validate_label_count(&self.labels, self.values().len())
    }
}

fn validate_colors(colors: &[Color], field_name: &str) -> ChartResult<()> {
    for (index, color) in colors.iter().enumerate() {
        color
            .validate()
            .map_err(|err| ChartError::InvalidData(format!("{field_name}[{index}]: {err}")))?;
    }
    Ok(())
}
