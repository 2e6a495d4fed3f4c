use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel size of one drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Raw min/max of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataExtent {
    pub min: f64,
    pub max: f64,
}

impl DataExtent {
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let min = values.iter().copied().map(OrderedFloat).min()?;
        let max = values.iter().copied().map(OrderedFloat).max()?;
        Some(Self {
            min: min.0,
            max: max.0,
        })
    }

    /// Extent widened so that it also covers `value`.
    #[must_use]
    pub fn including(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn sign(self) -> ExtentSign {
        if self.min >= 0.0 {
            ExtentSign::NonNegative
        } else if self.max <= 0.0 {
            ExtentSign::NonPositive
        } else {
            ExtentSign::Mixed
        }
    }
}

/// Which side of zero a dataset lives on. Each case uses a different baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtentSign {
    /// Every value is `>= 0`; bars grow up from the bottom of the plot.
    NonNegative,
    /// Every value is `<= 0` and at least one is negative; bars hang from the top.
    NonPositive,
    /// Values on both sides of zero; bars grow from the zero line.
    Mixed,
}

/// One category label. Multi-line labels are stacked top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisLabel {
    Single(String),
    Lines(Vec<String>),
}

impl AxisLabel {
    #[must_use]
    pub fn lines(&self) -> &[String] {
        match self {
            Self::Single(line) => std::slice::from_ref(line),
            Self::Lines(lines) => lines,
        }
    }
}

impl From<&str> for AxisLabel {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for AxisLabel {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for AxisLabel {
    fn from(value: Vec<String>) -> Self {
        Self::Lines(value)
    }
}

/// Rejects NaN and infinite samples.
pub fn validate_values(values: &[f64], field_name: &str) -> ChartResult<()> {
    if let Some(index) = values.iter().position(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "{field_name}[{index}] must be finite"
        )));
    }
    Ok(())
}

/// Labels are optional, but when present there must be one per bar.
pub fn validate_label_count(labels: &[AxisLabel], bar_count: usize) -> ChartResult<()> {
    if !labels.is_empty() && labels.len() != bar_count {
        return Err(ChartError::InvalidData(format!(
            "label count ({}) must match bar count ({bar_count})",
            labels.len()
        )));
    }
    Ok(())
}

/// The four chart variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    StackedBar,
    MultiBar,
    HorizontalBar,
}
