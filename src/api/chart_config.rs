use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_BAR_WIDTH_PX;
use crate::core::DEFAULT_ITEM_SPACING_PX;
use crate::core::DEFAULT_LABEL_FONT_SIZE_PX;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Largest precision accepted for value labels.
pub const MAX_DECIMAL_PLACES: u32 = 20;

/// Display configuration shared by every chart kind.
///
/// Serializable so hosts can persist and load chart setup. Every field is
/// optional in JSON and takes its default when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Base color; other colors derive from it with varying opacity.
    #[serde(default = "default_color")]
    pub color: Color,
    /// Label color; falls back to `color`.
    #[serde(default)]
    pub label_color: Option<Color>,
    /// Flat background. When unset the background gradient is used.
    #[serde(default)]
    pub background_color: Option<Color>,
    #[serde(default = "default_background_gradient_color")]
    pub background_gradient_from: Color,
    #[serde(default = "default_one")]
    pub background_gradient_from_opacity: f64,
    #[serde(default = "default_background_gradient_color")]
    pub background_gradient_to: Color,
    #[serde(default = "default_one")]
    pub background_gradient_to_opacity: f64,
    /// Top color of the bar fill; falls back to `color`.
    #[serde(default)]
    pub fill_shadow_gradient_from: Option<Color>,
    #[serde(default = "default_fill_shadow_opacity")]
    pub fill_shadow_gradient_from_opacity: f64,
    #[serde(default)]
    pub fill_shadow_gradient_from_offset: f64,
    /// Bottom color of the bar fill; falls back to the top color.
    #[serde(default)]
    pub fill_shadow_gradient_to: Option<Color>,
    #[serde(default = "default_fill_shadow_opacity")]
    pub fill_shadow_gradient_to_opacity: f64,
    #[serde(default = "default_one")]
    pub fill_shadow_gradient_to_offset: f64,
    /// Gives each dataset its own fill gradient in the dataset color.
    #[serde(default)]
    pub use_shadow_color_from_dataset: bool,
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    #[serde(default = "default_bar_width")]
    pub bar_width: f64,
    #[serde(default = "default_one")]
    pub bar_percentage: f64,
    #[serde(default)]
    pub bar_radius: f64,
    /// Gap between bars of one group in grouped charts.
    #[serde(default = "default_item_spacing")]
    pub item_spacing: f64,
    /// Category label band height; each chart kind has its own default.
    #[serde(default)]
    pub vertical_labels_height: Option<f64>,
    /// Category label column width in horizontal charts.
    #[serde(default)]
    pub horizontal_labels_width: Option<f64>,
    /// Gridline color; falls back to `color` at 20% opacity.
    #[serde(default)]
    pub grid_line_color: Option<Color>,
    #[serde(default = "default_grid_line_dash")]
    pub grid_line_dash: Vec<f64>,
    #[serde(default = "default_one")]
    pub grid_line_width: f64,
    #[serde(default = "default_label_font_size")]
    pub label_font_size: f64,
    /// Color of the pressed category label.
    #[serde(default)]
    pub highlight_color: Option<Color>,
    #[serde(default)]
    pub vertical_label_rotation: f64,
    #[serde(default)]
    pub horizontal_label_rotation: f64,
    #[serde(default)]
    pub padding_top: Option<f64>,
    #[serde(default)]
    pub padding_right: Option<f64>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            label_color: None,
            background_color: None,
            background_gradient_from: default_background_gradient_color(),
            background_gradient_from_opacity: default_one(),
            background_gradient_to: default_background_gradient_color(),
            background_gradient_to_opacity: default_one(),
            fill_shadow_gradient_from: None,
            fill_shadow_gradient_from_opacity: default_fill_shadow_opacity(),
            fill_shadow_gradient_from_offset: 0.0,
            fill_shadow_gradient_to: None,
            fill_shadow_gradient_to_opacity: default_fill_shadow_opacity(),
            fill_shadow_gradient_to_offset: default_one(),
            use_shadow_color_from_dataset: false,
            decimal_places: default_decimal_places(),
            bar_width: default_bar_width(),
            bar_percentage: default_one(),
            bar_radius: 0.0,
            item_spacing: default_item_spacing(),
            vertical_labels_height: None,
            horizontal_labels_width: None,
            grid_line_color: None,
            grid_line_dash: default_grid_line_dash(),
            grid_line_width: default_one(),
            label_font_size: default_label_font_size(),
            highlight_color: None,
            vertical_label_rotation: 0.0,
            horizontal_label_rotation: 0.0,
            padding_top: None,
            padding_right: None,
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Diagonal background gradient, used when no flat background is set.
    #[must_use]
    pub fn with_background_gradient(mut self, from: Color, to: Color) -> Self {
        self.background_color = None;
        self.background_gradient_from = from;
        self.background_gradient_to = to;
        self
    }

    #[must_use]
    pub fn with_fill_shadow_gradient(mut self, from: Color, from_opacity: f64) -> Self {
        self.fill_shadow_gradient_from = Some(from);
        self.fill_shadow_gradient_from_opacity = from_opacity;
        self
    }

    #[must_use]
    pub fn with_fill_shadow_gradient_to(mut self, to: Color, to_opacity: f64) -> Self {
        self.fill_shadow_gradient_to = Some(to);
        self.fill_shadow_gradient_to_opacity = to_opacity;
        self
    }

    #[must_use]
    pub fn with_shadow_color_from_dataset(mut self, enabled: bool) -> Self {
        self.use_shadow_color_from_dataset = enabled;
        self
    }

    #[must_use]
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    #[must_use]
    pub fn with_bar_width(mut self, bar_width: f64) -> Self {
        self.bar_width = bar_width;
        self
    }

    #[must_use]
    pub fn with_bar_percentage(mut self, bar_percentage: f64) -> Self {
        self.bar_percentage = bar_percentage;
        self
    }

    #[must_use]
    pub fn with_bar_radius(mut self, bar_radius: f64) -> Self {
        self.bar_radius = bar_radius;
        self
    }

    #[must_use]
    pub fn with_item_spacing(mut self, item_spacing: f64) -> Self {
        self.item_spacing = item_spacing;
        self
    }

    #[must_use]
    pub fn with_vertical_labels_height(mut self, height: f64) -> Self {
        self.vertical_labels_height = Some(height);
        self
    }

    #[must_use]
    pub fn with_horizontal_labels_width(mut self, width: f64) -> Self {
        self.horizontal_labels_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_grid_line(mut self, color: Color, dash: Vec<f64>, width: f64) -> Self {
        self.grid_line_color = Some(color);
        self.grid_line_dash = dash;
        self.grid_line_width = width;
        self
    }

    #[must_use]
    pub fn with_label_font_size(mut self, font_size: f64) -> Self {
        self.label_font_size = font_size;
        self
    }

    #[must_use]
    pub fn with_highlight_color(mut self, color: Color) -> Self {
        self.highlight_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_label_rotations(mut self, vertical_deg: f64, horizontal_deg: f64) -> Self {
        self.vertical_label_rotation = vertical_deg;
        self.horizontal_label_rotation = horizontal_deg;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding_top: f64, padding_right: f64) -> Self {
        self.padding_top = Some(padding_top);
        self.padding_right = Some(padding_right);
        self
    }

    /// Drawn bar width (`bar_width * bar_percentage`).
    #[must_use]
    pub fn effective_bar_width(&self) -> f64 {
        self.bar_width * self.bar_percentage
    }

    #[must_use]
    pub fn resolved_label_color(&self) -> Color {
        self.label_color.unwrap_or(self.color)
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, color) in [
            ("color", Some(self.color)),
            ("label_color", self.label_color),
            ("background_color", self.background_color),
            ("background_gradient_from", Some(self.background_gradient_from)),
            ("background_gradient_to", Some(self.background_gradient_to)),
            ("fill_shadow_gradient_from", self.fill_shadow_gradient_from),
            ("fill_shadow_gradient_to", self.fill_shadow_gradient_to),
            ("grid_line_color", self.grid_line_color),
            ("highlight_color", self.highlight_color),
        ] {
            if let Some(color) = color {
                color
                    .validate()
                    .map_err(|err| ChartError::InvalidConfig(format!("`{name}`: {err}")))?;
            }
        }

        for (name, value) in [
            (
                "background_gradient_from_opacity",
                self.background_gradient_from_opacity,
            ),
            (
                "background_gradient_to_opacity",
                self.background_gradient_to_opacity,
            ),
            (
                "fill_shadow_gradient_from_opacity",
                self.fill_shadow_gradient_from_opacity,
            ),
            (
                "fill_shadow_gradient_from_offset",
                self.fill_shadow_gradient_from_offset,
            ),
            (
                "fill_shadow_gradient_to_opacity",
                self.fill_shadow_gradient_to_opacity,
            ),
            (
                "fill_shadow_gradient_to_offset",
                self.fill_shadow_gradient_to_offset,
            ),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and in [0, 1]"
                )));
            }
        }

        for (name, value) in [
            ("bar_width", self.bar_width),
            ("bar_percentage", self.bar_percentage),
            ("label_font_size", self.label_font_size),
            ("grid_line_width", self.grid_line_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }

        let non_negative = [
            ("bar_radius", Some(self.bar_radius)),
            ("item_spacing", Some(self.item_spacing)),
            ("vertical_labels_height", self.vertical_labels_height),
            ("horizontal_labels_width", self.horizontal_labels_width),
            ("padding_top", self.padding_top),
            ("padding_right", self.padding_right),
        ];
        for (name, value) in non_negative {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(ChartError::InvalidConfig(format!(
                        "`{name}` must be finite and >= 0"
                    )));
                }
            }
        }

        if self
            .grid_line_dash
            .iter()
            .any(|len| !len.is_finite() || *len < 0.0)
        {
            return Err(ChartError::InvalidConfig(
                "`grid_line_dash` lengths must be finite and >= 0".to_owned(),
            ));
        }
        if !self.vertical_label_rotation.is_finite() || !self.horizontal_label_rotation.is_finite()
        {
            return Err(ChartError::InvalidConfig(
                "label rotations must be finite".to_owned(),
            ));
        }
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ChartError::InvalidConfig(format!(
                "`decimal_places` must be <= {MAX_DECIMAL_PLACES}"
            )));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_color() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

fn default_background_gradient_color() -> Color {
    Color::WHITE
}

fn default_one() -> f64 {
    1.0
}

fn default_fill_shadow_opacity() -> f64 {
    0.1
}

fn default_decimal_places() -> u32 {
    2
}

fn default_bar_width() -> f64 {
    DEFAULT_BAR_WIDTH_PX
}

fn default_item_spacing() -> f64 {
    DEFAULT_ITEM_SPACING_PX
}

fn default_grid_line_dash() -> Vec<f64> {
    vec![5.0, 10.0]
}

fn default_label_font_size() -> f64 {
    DEFAULT_LABEL_FONT_SIZE_PX
}
