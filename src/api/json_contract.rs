use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChartKind, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer, SvgRenderer};

use super::{
    AxisOptions, BarChart, BarChartData, Chart, ChartConfig, ChartOptions, HorizontalBarChart,
    HorizontalBarChartData, MultiBarChart, StackedBarChart, StackedBarChartData,
};

pub const CHART_DOCUMENT_JSON_SCHEMA_V1: u32 = 1;

/// Size, data and settings of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocumentBody<D> {
    pub width: f64,
    pub height: f64,
    pub data: D,
    #[serde(default)]
    pub config: ChartConfig,
    #[serde(default)]
    pub axis: AxisOptions,
    #[serde(default)]
    pub options: ChartOptions,
}

impl<D> ChartDocumentBody<D> {
    #[must_use]
    pub fn new(width: f64, height: f64, data: D) -> Self {
        Self {
            width,
            height,
            data,
            config: ChartConfig::default(),
            axis: AxisOptions::default(),
            options: ChartOptions::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisOptions) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

/// Serializable description of a complete chart, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartDocument {
    Bar(ChartDocumentBody<BarChartData>),
    StackedBar(ChartDocumentBody<StackedBarChartData>),
    MultiBar(ChartDocumentBody<StackedBarChartData>),
    HorizontalBar(ChartDocumentBody<HorizontalBarChartData>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocumentJsonContractV1 {
    pub schema_version: u32,
    pub document: ChartDocument,
}

/// A document turned into its chart type.
pub enum DocumentChart {
    Bar(BarChart),
    StackedBar(StackedBarChart),
    MultiBar(MultiBarChart),
    HorizontalBar(HorizontalBarChart),
}

impl DocumentChart {
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        match self {
            Self::Bar(chart) => chart.build_render_frame(),
            Self::StackedBar(chart) => chart.build_render_frame(),
            Self::MultiBar(chart) => chart.build_render_frame(),
            Self::HorizontalBar(chart) => chart.build_render_frame(),
        }
    }

    pub fn render<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> ChartResult<()> {
        match self {
            Self::Bar(chart) => chart.render(renderer),
            Self::StackedBar(chart) => chart.render(renderer),
            Self::MultiBar(chart) => chart.render(renderer),
            Self::HorizontalBar(chart) => chart.render(renderer),
        }
    }
}

impl ChartDocument {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Bar(_) => ChartKind::Bar,
            Self::StackedBar(_) => ChartKind::StackedBar,
            Self::MultiBar(_) => ChartKind::MultiBar,
            Self::HorizontalBar(_) => ChartKind::HorizontalBar,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        match self {
            Self::Bar(body) => body.viewport(),
            Self::StackedBar(body) | Self::MultiBar(body) => body.viewport(),
            Self::HorizontalBar(body) => body.viewport(),
        }
    }

    /// Validates the document and builds its chart.
    pub fn build_chart(&self) -> ChartResult<DocumentChart> {
        let chart = match self {
            Self::Bar(body) => DocumentChart::Bar(
                BarChart::new(body.viewport(), body.data.clone(), body.config.clone())?
                    .with_axis_options(body.axis.clone())?
                    .with_options(body.options)?,
            ),
            Self::StackedBar(body) => DocumentChart::StackedBar(
                StackedBarChart::new(body.viewport(), body.data.clone(), body.config.clone())?
                    .with_axis_options(body.axis.clone())?
                    .with_options(body.options)?,
            ),
            Self::MultiBar(body) => DocumentChart::MultiBar(
                MultiBarChart::new(body.viewport(), body.data.clone(), body.config.clone())?
                    .with_axis_options(body.axis.clone())?
                    .with_options(body.options)?,
            ),
            Self::HorizontalBar(body) => DocumentChart::HorizontalBar(
                HorizontalBarChart::new(body.viewport(), body.data.clone(), body.config.clone())?
                    .with_axis_options(body.axis.clone())?
                    .with_options(body.options)?,
            ),
        };
        Ok(chart)
    }

    /// Builds the chart and renders it to an SVG document.
    pub fn render_svg(&self) -> ChartResult<String> {
        let mut chart = self.build_chart()?;
        let mut renderer = SvgRenderer::new();
        chart.render(&mut renderer)?;
        debug!(chart_kind = ?self.kind(), "chart document rendered to svg");
        Ok(renderer.into_svg())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart document json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartDocumentJsonContractV1 {
            schema_version: CHART_DOCUMENT_JSON_SCHEMA_V1,
            document: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to serialize chart document contract v1: {e}"
            ))
        })
    }

    /// Parses either a bare document or a versioned contract envelope.
    ///
    /// Input without a `schema_version` key reports the bare-document error.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let bare_err = match serde_json::from_str::<ChartDocument>(input) {
            Ok(document) => return Ok(document),
            Err(err) => err,
        };
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart document json payload: {e}"))
        })?;
        let Some(version) = value.get("schema_version") else {
            return Err(ChartError::InvalidData(format!(
                "failed to parse chart document json: {bare_err}"
            )));
        };
        if version.as_u64() != Some(u64::from(CHART_DOCUMENT_JSON_SCHEMA_V1)) {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart document schema version: {version}"
            )));
        }
        let payload: ChartDocumentJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart document contract v1: {e}"))
        })?;
        Ok(payload.document)
    }
}
