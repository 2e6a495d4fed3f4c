use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Coordinate space of a gradient vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientUnits {
    /// Vector endpoints are panel pixels.
    UserSpace,
    /// Vector endpoints are fractions of the filled shape's bounding box.
    BoundingBox,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
    pub opacity: f64,
}

impl GradientStop {
    #[must_use]
    pub const fn new(offset: f64, color: Color, opacity: f64) -> Self {
        Self {
            offset,
            color,
            opacity,
        }
    }
}

/// Linear gradient definition referenced by [`crate::render::Paint::Gradient`].
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub id: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub units: GradientUnits,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        (x1, y1): (f64, f64),
        (x2, y2): (f64, f64),
        units: GradientUnits,
    ) -> Self {
        Self {
            id: id.into(),
            x1,
            y1,
            x2,
            y2,
            units,
            stops: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_stop(mut self, stop: GradientStop) -> Self {
        self.stops.push(stop);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.id.is_empty() {
            return Err(ChartError::InvalidData(
                "gradient id must not be empty".to_owned(),
            ));
        }
        if ![self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|value| value.is_finite())
        {
            return Err(ChartError::InvalidData(format!(
                "gradient `{}` vector must be finite",
                self.id
            )));
        }
        for stop in &self.stops {
            if !(0.0..=1.0).contains(&stop.offset) || !(0.0..=1.0).contains(&stop.opacity) {
                return Err(ChartError::InvalidData(format!(
                    "gradient `{}` stop offset and opacity must be in [0, 1]",
                    self.id
                )));
            }
            stop.color.validate()?;
        }
        Ok(())
    }
}
