use serde::{Deserialize, Serialize};

use crate::core::types::{DataExtent, ExtentSign};

/// Min/max based value-to-pixel scaling shared by every bar chart kind.
///
/// The scale is stateless: every call takes the full dataset so the extent is
/// always computed from the values actually being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValueScale {
    /// Forces the range through zero.
    #[serde(default)]
    pub from_zero: bool,
    /// Forces the range through an explicit value.
    #[serde(default)]
    pub from_number: Option<f64>,
}

impl ValueScale {
    #[must_use]
    pub fn new(from_zero: bool, from_number: Option<f64>) -> Self {
        Self {
            from_zero,
            from_number,
        }
    }

    #[must_use]
    pub fn from_zero() -> Self {
        Self::new(true, None)
    }

    /// Range used as the denominator of every height computation.
    ///
    /// Never returns zero: a degenerate or empty dataset yields `1.0`.
    #[must_use]
    pub fn scaler(self, values: &[f64]) -> f64 {
        let Some(extent) = DataExtent::from_values(values) else {
            return 1.0;
        };

        let (max, min) = match (self.from_zero, self.from_number) {
            (true, Some(number)) => (extent.max.max(number), extent.min.min(0.0)),
            (true, None) => (extent.max.max(0.0), extent.min.min(0.0)),
            (false, Some(number)) => (extent.max.max(number), extent.min.min(number)),
            (false, None) => (extent.max, extent.min),
        };

        let range = max - min;
        if range == 0.0 || !range.is_finite() {
            1.0
        } else {
            range
        }
    }

    /// Distance from the plot top to the bar baseline.
    #[must_use]
    pub fn base_height(self, values: &[f64], height: f64) -> f64 {
        let Some(extent) = DataExtent::from_values(values) else {
            return height;
        };

        match extent.sign() {
            ExtentSign::NonNegative => height,
            ExtentSign::NonPositive => 0.0,
            ExtentSign::Mixed => height * extent.max / self.scaler(values),
        }
    }

    /// Signed bar length for `value`; negative lengths hang below the baseline.
    #[must_use]
    pub fn bar_height(self, value: f64, values: &[f64], height: f64) -> f64 {
        let Some(extent) = DataExtent::from_values(values) else {
            return 0.0;
        };
        let scaler = self.scaler(values);

        match extent.sign() {
            ExtentSign::Mixed => height * (value / scaler),
            ExtentSign::NonNegative if self.from_zero => height * (value / scaler),
            ExtentSign::NonNegative => height * ((value - extent.min) / scaler),
            ExtentSign::NonPositive if self.from_zero => height * (value / scaler),
            ExtentSign::NonPositive => height * ((value - extent.max) / scaler),
        }
    }

    /// Value shown on the lowest gridline.
    #[must_use]
    pub fn axis_floor(self, values: &[f64]) -> f64 {
        let Some(extent) = DataExtent::from_values(values) else {
            return 0.0;
        };
        if self.from_zero {
            extent.min.min(0.0)
        } else {
            extent.min
        }
    }

    /// Value shown on gridline `index` of `count` evenly spaced segments.
    #[must_use]
    pub fn gridline_value(self, values: &[f64], index: usize, count: usize) -> f64 {
        let count = count.max(1) as f64;
        self.scaler(values) / count * index as f64 + self.axis_floor(values)
    }
}

#[cfg(test)]
mod tests {
    use super::ValueScale;

    #[test]
    fn degenerate_dataset_falls_back_to_unit_scaler() {
        let scale = ValueScale::default();
        assert_eq!(scale.scaler(&[7.0, 7.0, 7.0]), 1.0);
        assert_eq!(scale.scaler(&[]), 1.0);
    }

    #[test]
    fn from_number_extends_both_sides() {
        let scale = ValueScale::new(false, Some(50.0));
        assert_eq!(scale.scaler(&[10.0, 20.0]), 40.0);
        let scale = ValueScale::new(true, Some(50.0));
        assert_eq!(scale.scaler(&[10.0, 20.0]), 50.0);
    }
}
