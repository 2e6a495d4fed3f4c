use smallvec::SmallVec;

use crate::core::GridLine;
use crate::render::{Color, LinePrimitive, TextHAlign, TextPrimitive};

use super::ChartConfig;

const GRID_LINE_OPACITY: f64 = 0.2;
const LABEL_OPACITY: f64 = 0.8;
const BAR_TOP_OPACITY: f64 = 0.6;

/// Colors and strokes resolved from a [`ChartConfig`] for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub grid_line_dash: SmallVec<[f64; 2]>,
    pub label_color: Color,
    pub label_font_size: f64,
    pub highlight_color: Option<Color>,
    /// Bar top markers and value labels.
    pub accent_color: Color,
}

impl ChartStyle {
    #[must_use]
    pub fn resolve(config: &ChartConfig) -> Self {
        Self {
            grid_line_color: config
                .grid_line_color
                .unwrap_or_else(|| config.color.with_opacity(GRID_LINE_OPACITY)),
            grid_line_width: config.grid_line_width,
            grid_line_dash: SmallVec::from_slice(&config.grid_line_dash),
            label_color: config.resolved_label_color().with_opacity(LABEL_OPACITY),
            label_font_size: config.label_font_size,
            highlight_color: config.highlight_color,
            accent_color: config.color.with_opacity(BAR_TOP_OPACITY),
        }
    }

    #[must_use]
    pub fn grid_line(&self, line: GridLine) -> LinePrimitive {
        LinePrimitive::new(
            line.x1,
            line.y1,
            line.x2,
            line.y2,
            self.grid_line_width,
            self.grid_line_color,
        )
        .with_dash(&self.grid_line_dash)
    }

    /// Axis label; highlighted labels switch to the highlight color when one is set.
    #[must_use]
    pub fn label(
        &self,
        text: impl Into<String>,
        (x, y): (f64, f64),
        h_align: TextHAlign,
        rotation_deg: f64,
        highlighted: bool,
    ) -> TextPrimitive {
        let color = match (highlighted, self.highlight_color) {
            (true, Some(color)) => color,
            _ => self.label_color,
        };
        TextPrimitive::new(text, x, y, self.label_font_size, color, h_align)
            .with_rotation(rotation_deg)
    }

    #[must_use]
    pub fn value_label(&self, text: impl Into<String>, (x, y): (f64, f64), h_align: TextHAlign) -> TextPrimitive {
        TextPrimitive::new(text, x, y, self.label_font_size, self.accent_color, h_align)
    }
}

#[cfg(test)]
mod tests {
    use super::ChartStyle;
    use crate::api::ChartConfig;
    use crate::render::{Color, TextHAlign};

    #[test]
    fn derived_colors_follow_base_color() {
        let style = ChartStyle::resolve(&ChartConfig::new(Color::rgb(0.2, 0.4, 0.6)));
        assert_eq!(style.grid_line_color, Color::rgba(0.2, 0.4, 0.6, 0.2));
        assert_eq!(style.label_color, Color::rgba(0.2, 0.4, 0.6, 0.8));
        assert_eq!(style.accent_color, Color::rgba(0.2, 0.4, 0.6, 0.6));
        assert_eq!(style.grid_line_dash.as_slice(), &[5.0, 10.0]);
    }

    #[test]
    fn highlight_only_applies_when_configured() {
        let plain = ChartStyle::resolve(&ChartConfig::default());
        let label = plain.label("a", (0.0, 0.0), TextHAlign::Center, 0.0, true);
        assert_eq!(label.color, plain.label_color);

        let red = Color::rgb(1.0, 0.0, 0.0);
        let styled = ChartStyle::resolve(&ChartConfig::default().with_highlight_color(red));
        let label = styled.label("a", (0.0, 0.0), TextHAlign::Center, 0.0, true);
        assert_eq!(label.color, red);
    }
}
