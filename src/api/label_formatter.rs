use std::fmt;
use std::sync::Arc;

use crate::core::{decorate_label, format_number, to_fixed};

use super::{AxisOptions, ChartConfig};

/// Rewrites label text after numeric formatting.
pub type LabelFormatterFn = Arc<dyn Fn(&str) -> String + Send + Sync + 'static>;
/// Formats a raw bar value.
pub type ValueFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Optional text hooks applied to generated labels.
#[derive(Clone, Default)]
pub struct LabelFormatters {
    pub format_y_label: Option<LabelFormatterFn>,
    pub format_x_label: Option<LabelFormatterFn>,
    pub format_top_bar_value: Option<ValueFormatterFn>,
}

impl fmt::Debug for LabelFormatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelFormatters")
            .field("format_y_label", &self.format_y_label.is_some())
            .field("format_x_label", &self.format_x_label.is_some())
            .field("format_top_bar_value", &self.format_top_bar_value.is_some())
            .finish()
    }
}

impl LabelFormatters {
    /// Value-axis label: `prefix + format_y(to_fixed(value)) + suffix`.
    #[must_use]
    pub fn y_label(&self, value: f64, config: &ChartConfig, axis: &AxisOptions) -> String {
        let fixed = to_fixed(value, config.decimal_places);
        let body = match &self.format_y_label {
            Some(formatter) => formatter(&fixed),
            None => fixed,
        };
        decorate_label(&axis.y_axis_label, body, &axis.y_axis_suffix)
    }

    /// One line of a category label.
    #[must_use]
    pub fn x_label(&self, line: &str) -> String {
        match &self.format_x_label {
            Some(formatter) => formatter(line),
            None => line.to_owned(),
        }
    }

    /// Text drawn at the value end of a bar.
    #[must_use]
    pub fn top_bar_value(&self, value: f64) -> String {
        match &self.format_top_bar_value {
            Some(formatter) => formatter(value),
            None => format_number(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::LabelFormatters;
    use crate::api::{AxisOptions, ChartConfig};

    #[test]
    fn y_label_applies_formatter_between_affixes() {
        let formatters = LabelFormatters {
            format_y_label: Some(Arc::new(|text: &str| format!("[{text}]"))),
            ..LabelFormatters::default()
        };
        let axis = AxisOptions::default().with_y_axis_affixes("$", "k");
        let label = formatters.y_label(2.5, &ChartConfig::default(), &axis);
        assert_eq!(label, "$[2.50]k");
    }

    #[test]
    fn top_bar_value_defaults_to_shortest_form() {
        let formatters = LabelFormatters::default();
        assert_eq!(formatters.top_bar_value(12.0), "12");
        assert_eq!(formatters.top_bar_value(0.5), "0.5");
    }
}
