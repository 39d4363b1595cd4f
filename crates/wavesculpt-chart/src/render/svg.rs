//! SVG backend: transparent background, no axes, text legend.

use std::fmt::Write;

use super::Viewport;
use crate::error::RenderError;
use crate::spec::{ChartSpec, Series};

const LEGEND_FONT_PX: u32 = 12;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_series(out: &mut String, viewport: &Viewport, series: &Series) -> std::fmt::Result {
    if series.points.is_empty() {
        return Ok(());
    }
    out.push_str("<polyline fill=\"none\" points=\"");
    for (i, &point) in series.points.iter().enumerate() {
        let (x, y) = viewport.map(point);
        if i > 0 {
            out.push(' ');
        }
        write!(out, "{x:.2},{y:.2}")?;
    }
    writeln!(
        out,
        "\" stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
        series.color, series.alpha, series.width
    )
}

/// Serialize `spec` as a standalone SVG document with a `width × height`
/// view box. The plot fills the whole view box.
pub fn render_svg(spec: &ChartSpec, width: u32, height: u32) -> Result<String, RenderError> {
    let viewport = Viewport::new(spec, 0.0, 0.0, width as f32, height as f32);
    let mut out = String::new();

    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    )?;
    writeln!(out, "<g id=\"{}\">", spec.kind.name())?;
    for series in &spec.series {
        write_series(&mut out, &viewport, series)?;
    }
    out.push_str("</g>\n");

    if spec.legend {
        out.push_str("<g id=\"legend\" text-anchor=\"end\">\n");
        for (row, (label, series)) in spec.legend_entries().enumerate() {
            let y = LEGEND_FONT_PX * (row as u32 + 1) + 4;
            writeln!(
                out,
                "<text x=\"{}\" y=\"{y}\" font-size=\"{LEGEND_FONT_PX}\" fill=\"{}\">{}</text>",
                width.saturating_sub(4),
                series.color,
                escape(label)
            )?;
        }
        out.push_str("</g>\n");
    }

    out.push_str("</svg>\n");
    Ok(out)
}
