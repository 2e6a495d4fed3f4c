//! barchart-rs: bar chart layout and SVG rendering.
//!
//! Simple, stacked, grouped and horizontal bar charts are laid out by pure
//! geometry in [`core`], styled into a backend-agnostic [`render::RenderFrame`]
//! by the chart types in [`api`], and drawn by any [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{
    BarChart, Chart, ChartConfig, ChartDocument, HorizontalBarChart, MultiBarChart,
    StackedBarChart,
};
pub use error::{ChartError, ChartResult};
