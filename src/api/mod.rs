//! Chart types and everything needed to configure them.
//!
//! Each chart owns a [`ChartRuntime`] (size, configuration, extensions and
//! highlight state) plus its data, and turns both into a [`RenderFrame`]
//! through the shared helpers in [`frame_builder`] and [`defs_builder`].
//!
//! [`RenderFrame`]: crate::render::RenderFrame

mod axis_options;
mod bar_chart;
mod chart_config;
mod chart_data;
mod chart_options;
mod chart_runtime;
pub mod defs_builder;
pub mod frame_builder;
mod horizontal_bar_chart;
mod json_contract;
mod label_formatter;
mod multi_bar_chart;
mod multi_series_layout;
mod plugin_registry;
mod press_dispatch;
mod stacked_bar_chart;
mod style;

pub use axis_options::AxisOptions;
pub use bar_chart::{BAR_CHART_PADDING_TOP_PX, BarChart};
pub use chart_config::{ChartConfig, MAX_DECIMAL_PLACES};
pub use chart_data::{BarChartData, BarDataset, HorizontalBarChartData, StackedBarChartData};
pub use chart_options::ChartOptions;
pub use chart_runtime::{Chart, ChartRuntime};
pub use frame_builder::FrameContext;
pub use horizontal_bar_chart::HorizontalBarChart;
pub use json_contract::{
    CHART_DOCUMENT_JSON_SCHEMA_V1, ChartDocument, ChartDocumentBody, ChartDocumentJsonContractV1,
    DocumentChart,
};
pub use label_formatter::{LabelFormatterFn, LabelFormatters, ValueFormatterFn};
pub use multi_bar_chart::{MULTI_BAR_CHART_PADDING_TOP_PX, MultiBarChart};
pub use multi_series_layout::LEGEND_BAR_SQUEEZE;
pub use press_dispatch::{BarPressHandler, GroupPressHandler};
pub use stacked_bar_chart::{STACKED_CHART_PADDING_TOP_PX, StackedBarChart};
pub use style::ChartStyle;
