//! Gradient definitions shared by every chart kind.

use crate::core::Viewport;
use crate::render::{
    CanvasLayerKind, Color, GradientStop, GradientUnits, LinearGradient, Paint, PanelFrame, RectPrimitive,
    RenderFrame,
};

use super::ChartConfig;

pub const BACKGROUND_GRADIENT_ID: &str = "backgroundGradient";
pub const FILL_SHADOW_GRADIENT_ID: &str = "fillShadowGradientFrom";

const CUSTOM_COLOR_LOW_OPACITY: f64 = 0.1;

/// Id of the per-dataset fill gradient.
#[must_use]
pub fn dataset_fill_gradient_id(dataset_index: usize) -> String {
    format!("{FILL_SHADOW_GRADIENT_ID}_{dataset_index}")
}

/// Id of the gradient for bar `bar_index` of dataset `dataset_index`.
#[must_use]
pub fn custom_color_gradient_id(dataset_index: usize, bar_index: usize) -> String {
    format!("customColor_{dataset_index}_{bar_index}")
}

/// Diagonal gradient from the bottom-left to the top-right corner.
#[must_use]
pub fn background_gradient(config: &ChartConfig, viewport: Viewport) -> LinearGradient {
    LinearGradient::new(
        BACKGROUND_GRADIENT_ID,
        (0.0, viewport.height),
        (viewport.width, 0.0),
        GradientUnits::UserSpace,
    )
    .with_stop(GradientStop::new(
        0.0,
        config.background_gradient_from,
        config.background_gradient_from_opacity,
    ))
    .with_stop(GradientStop::new(
        1.0,
        config.background_gradient_to,
        config.background_gradient_to_opacity,
    ))
}

/// Vertical bar fill fading from the configured top color to the bottom color.
#[must_use]
pub fn fill_shadow_gradient(config: &ChartConfig, height: f64) -> LinearGradient {
    let from = fill_shadow_from(config);
    let to = config.fill_shadow_gradient_to.unwrap_or(from);
    LinearGradient::new(
        FILL_SHADOW_GRADIENT_ID,
        (0.0, 0.0),
        (0.0, height),
        GradientUnits::UserSpace,
    )
    .with_stop(GradientStop::new(
        config.fill_shadow_gradient_from_offset,
        from,
        config.fill_shadow_gradient_from_opacity,
    ))
    .with_stop(GradientStop::new(
        config.fill_shadow_gradient_to_offset,
        to,
        config.fill_shadow_gradient_to_opacity,
    ))
}

fn fill_shadow_from(config: &ChartConfig) -> Color {
    config
        .fill_shadow_gradient_from
        .unwrap_or_else(|| config.color.with_opacity(1.0))
}

/// Fill gradient in a dataset's own color, or in the configured shadow color
/// when the dataset has none.
#[must_use]
pub fn dataset_fill_gradient(
    config: &ChartConfig,
    dataset_index: usize,
    color: Option<Color>,
    height: f64,
) -> LinearGradient {
    let (top, bottom) = match color {
        Some(color) => (
            color.with_opacity(1.0),
            color.with_opacity(config.fill_shadow_gradient_from_opacity),
        ),
        None => {
            let from = fill_shadow_from(config);
            (from, from)
        }
    };
    LinearGradient::new(
        dataset_fill_gradient_id(dataset_index),
        (0.0, 0.0),
        (0.0, height),
        GradientUnits::UserSpace,
    )
    .with_stop(GradientStop::new(
        config.fill_shadow_gradient_from_offset,
        top,
        config.fill_shadow_gradient_from_opacity,
    ))
    .with_stop(GradientStop::new(
        config.fill_shadow_gradient_to_offset,
        bottom,
        config.fill_shadow_gradient_to_opacity,
    ))
}

/// Top-to-bottom gradient in one bar's custom color.
#[must_use]
pub fn custom_color_gradient(
    dataset_index: usize,
    bar_index: usize,
    color: Color,
    flat: bool,
) -> LinearGradient {
    let bottom = if flat {
        GradientStop::new(1.0, color.with_opacity(1.0), 1.0)
    } else {
        GradientStop::new(1.0, color.with_opacity(CUSTOM_COLOR_LOW_OPACITY), 0.0)
    };
    LinearGradient::new(
        custom_color_gradient_id(dataset_index, bar_index),
        (0.0, 0.0),
        (0.0, 1.0),
        GradientUnits::BoundingBox,
    )
    .with_stop(GradientStop::new(0.0, color.with_opacity(1.0), 1.0))
    .with_stop(bottom)
}

/// Registers the background and bar fill gradients on `frame`.
///
/// `dataset_colors` feeds the per-dataset gradients when
/// `use_shadow_color_from_dataset` is set; missing colors use the configured
/// fill shadow color.
pub fn define_base_gradients(
    frame: &mut RenderFrame,
    config: &ChartConfig,
    fill_height: f64,
    dataset_colors: &[Option<Color>],
) {
    let viewport = frame.viewport;
    frame.define_gradient(background_gradient(config, viewport));
    frame.define_gradient(fill_shadow_gradient(config, fill_height));
    if config.use_shadow_color_from_dataset {
        for (index, color) in dataset_colors.iter().enumerate() {
            frame.define_gradient(dataset_fill_gradient(config, index, *color, fill_height));
        }
    }
}

/// Registers one custom-color gradient per bar color of each dataset.
pub fn define_custom_color_gradients(frame: &mut RenderFrame, datasets: &[&[Color]], flat: bool) {
    for (dataset_index, colors) in datasets.iter().enumerate() {
        for (bar_index, color) in colors.iter().enumerate() {
            frame.define_gradient(custom_color_gradient(dataset_index, bar_index, *color, flat));
        }
    }
}

/// Fill of bar `bar_index` in dataset `dataset_index`.
#[must_use]
pub fn bar_fill(
    config: &ChartConfig,
    dataset_index: usize,
    bar_index: usize,
    use_custom_color: bool,
) -> Paint {
    if use_custom_color {
        Paint::gradient(custom_color_gradient_id(dataset_index, bar_index))
    } else if config.use_shadow_color_from_dataset {
        Paint::gradient(dataset_fill_gradient_id(dataset_index))
    } else {
        Paint::gradient(FILL_SHADOW_GRADIENT_ID)
    }
}

/// Full-panel background rect.
pub fn push_background(panel: &mut PanelFrame, config: &ChartConfig) {
    let fill = match config.background_color {
        Some(color) => Paint::Solid(color),
        None => Paint::gradient(BACKGROUND_GRADIENT_ID),
    };
    let rect = RectPrimitive::new(0.0, 0.0, panel.width, panel.height, fill);
    panel.push_rect(CanvasLayerKind::Background, rect);
}
