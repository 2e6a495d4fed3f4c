use std::fmt::Write;

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, GradientUnits, LinePrimitive, LinearGradient, Paint, PanelFrame, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub gradients_written: usize,
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Serializes frames into a standalone SVG document.
///
/// Each panel becomes a nested `<svg>` positioned at the panel origin, so
/// panel-local primitive coordinates are written unchanged.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    output: String,
    font_family: Option<String>,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Document produced by the last successful render.
    #[must_use]
    pub fn svg(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn into_svg(self) -> String {
        self.output
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn write_document(&self, out: &mut String, frame: &RenderFrame) -> Result<SvgRenderStats, std::fmt::Error> {
        let mut stats = SvgRenderStats::default();
        let width = fmt_num(frame.viewport.width);
        let height = fmt_num(frame.viewport.height);
        write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}""#
        )?;
        if let Some(family) = &self.font_family {
            write!(out, r#" font-family="{}""#, escape_xml(family))?;
        }
        out.push('>');

        if !frame.gradients.is_empty() {
            out.push_str("<defs>");
            for gradient in frame.gradients.values() {
                write_gradient(out, gradient)?;
                stats.gradients_written += 1;
            }
            out.push_str("</defs>");
        }

        for panel in &frame.panels {
            write_panel(out, panel, &mut stats)?;
        }

        out.push_str("</svg>");
        Ok(stats)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut out = String::with_capacity(4096);
        let stats = self
            .write_document(&mut out, frame)
            .map_err(|err| ChartError::Render(format!("failed to write svg: {err}")))?;

        debug!(
            panels = frame.panels.len(),
            gradients = stats.gradients_written,
            lines = stats.lines_drawn,
            rects = stats.rects_drawn,
            texts = stats.texts_drawn,
            bytes = out.len(),
            "svg frame rendered"
        );
        self.output = out;
        self.last_stats = stats;
        Ok(())
    }
}

fn write_panel(out: &mut String, panel: &PanelFrame, stats: &mut SvgRenderStats) -> std::fmt::Result {
    write!(
        out,
        r#"<svg x="{}" y="{}" width="{}" height="{}" overflow="visible">"#,
        fmt_num(panel.x),
        fmt_num(panel.y),
        fmt_num(panel.width),
        fmt_num(panel.height)
    )?;
    for layer in &panel.layers {
        if layer.is_empty() {
            continue;
        }
        write!(out, r#"<g data-layer="{:?}">"#, layer.kind)?;
        for rect in &layer.rects {
            write_rect(out, rect)?;
            stats.rects_drawn += 1;
        }
        for line in &layer.lines {
            write_line(out, line)?;
            stats.lines_drawn += 1;
        }
        for text in &layer.texts {
            write_text(out, text)?;
            stats.texts_drawn += 1;
        }
        out.push_str("</g>");
    }
    out.push_str("</svg>");
    Ok(())
}

fn write_gradient(out: &mut String, gradient: &LinearGradient) -> std::fmt::Result {
    let units = match gradient.units {
        GradientUnits::UserSpace => "userSpaceOnUse",
        GradientUnits::BoundingBox => "objectBoundingBox",
    };
    write!(
        out,
        r#"<linearGradient id="{}" x1="{}" y1="{}" x2="{}" y2="{}" gradientUnits="{units}">"#,
        escape_xml(&gradient.id),
        fmt_num(gradient.x1),
        fmt_num(gradient.y1),
        fmt_num(gradient.x2),
        fmt_num(gradient.y2)
    )?;
    for stop in &gradient.stops {
        write!(
            out,
            r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
            fmt_num(stop.offset),
            stop.color.to_hex_rgb(),
            fmt_num(stop.opacity * stop.color.alpha)
        )?;
    }
    out.push_str("</linearGradient>");
    Ok(())
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        fmt_num(rect.x),
        fmt_num(rect.y),
        fmt_num(rect.width),
        fmt_num(rect.height)
    )?;
    if rect.corner_radius > 0.0 {
        let radius = fmt_num(rect.corner_radius);
        write!(out, r#" rx="{radius}" ry="{radius}""#)?;
    }
    match &rect.fill {
        Paint::Solid(color) => write_fill(out, *color)?,
        Paint::Gradient(id) => write!(out, r#" fill="url(#{})""#, escape_xml(id))?,
    }
    out.push_str("/>");
    Ok(())
}

fn write_line(out: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
        fmt_num(line.x1),
        fmt_num(line.y1),
        fmt_num(line.x2),
        fmt_num(line.y2),
        line.color.to_hex_rgb(),
        fmt_num(line.stroke_width)
    )?;
    if line.color.alpha < 1.0 {
        write!(out, r#" stroke-opacity="{}""#, fmt_num(line.color.alpha))?;
    }
    if !line.dash.is_empty() {
        let dash: Vec<String> = line.dash.iter().map(|len| fmt_num(*len)).collect();
        write!(out, r#" stroke-dasharray="{}""#, dash.join(", "))?;
    }
    out.push_str("/>");
    Ok(())
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let x = fmt_num(text.x);
    let y = fmt_num(text.y);
    write!(
        out,
        r#"<text x="{x}" y="{y}" font-size="{}" text-anchor="{anchor}""#,
        fmt_num(text.font_size_px)
    )?;
    write_fill(out, text.color)?;
    if text.rotation_deg != 0.0 {
        write!(
            out,
            r#" transform="rotate({} {x} {y})""#,
            fmt_num(text.rotation_deg)
        )?;
    }
    write!(out, ">{}</text>", escape_xml(&text.text))
}

fn write_fill(out: &mut String, color: Color) -> std::fmt::Result {
    write!(out, r#" fill="{}""#, color.to_hex_rgb())?;
    if color.alpha < 1.0 {
        write!(out, r#" fill-opacity="{}""#, fmt_num(color.alpha))?;
    }
    Ok(())
}

/// Shortest attribute form with at most three decimals; never `-0`.
fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    format!("{}", rounded + 0.0)
}

#[must_use]
pub fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape_xml, fmt_num};

    #[test]
    fn numbers_are_compact_and_never_negative_zero() {
        assert_eq!(fmt_num(12.0), "12");
        assert_eq!(fmt_num(0.1), "0.1");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(1.23456), "1.235");
    }

    #[test]
    fn markup_characters_are_escaped() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
