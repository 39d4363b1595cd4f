//! PNG backend.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use wavesculpt_config::Rgb;

use super::Viewport;
use crate::error::RenderError;
use crate::spec::{ChartSpec, Series};

const FRAME: Rgb = Rgb::new(128, 128, 128);

/// Plot area insets as fractions of the canvas.
const INSET_LEFT: f32 = 0.06;
const INSET_RIGHT: f32 = 0.02;
const INSET_TOP: f32 = 0.05;
const INSET_BOTTOM: f32 = 0.05;

/// Legend swatch geometry in pixels.
const SWATCH_LEN: u32 = 18;
const SWATCH_GAP: u32 = 6;

/// Draw `spec` onto a `width × height` canvas and encode it as PNG.
///
/// The canvas is filled with the background color, the plot area is framed
/// in gray, series are stroked in order with alpha blending, and labeled
/// series get a color swatch in the top-right corner when the legend is on.
pub fn render_png(spec: &ChartSpec, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
    let [r, g, b] = spec.background.channels();
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]));

    let w = width as f32;
    let h = height as f32;
    let left = (w * INSET_LEFT).round();
    let top = (h * INSET_TOP).round();
    let plot_w = (w - left - (w * INSET_RIGHT).round()).max(1.0);
    let plot_h = (h - top - (h * INSET_BOTTOM).round()).max(1.0);
    let viewport = Viewport::new(spec, left, top, plot_w, plot_h);

    stroke_rect(&mut canvas, left, top, plot_w, plot_h);

    for series in &spec.series {
        stroke_series(&mut canvas, &viewport, series);
    }

    if spec.legend {
        draw_legend(&mut canvas, spec, left + plot_w, top);
    }

    let mut bytes = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

fn blend(canvas: &mut RgbaImage, x: i64, y: i64, color: Rgb, alpha: f32) {
    if x < 0 || y < 0 || x >= i64::from(canvas.width()) || y >= i64::from(canvas.height()) {
        return;
    }
    let alpha = alpha.clamp(0.0, 1.0);
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    for (dst, src) in pixel.0.iter_mut().zip(color.channels()) {
        *dst = (f32::from(src) * alpha + f32::from(*dst) * (1.0 - alpha)).round() as u8;
    }
}

/// Stamp a square brush of side `size` centred on `(x, y)`.
fn stamp(canvas: &mut RgbaImage, x: f32, y: f32, size: u32, color: Rgb, alpha: f32) {
    let half = (size as i64 - 1) / 2;
    let cx = x.round() as i64;
    let cy = y.round() as i64;
    for dy in 0..i64::from(size) {
        for dx in 0..i64::from(size) {
            blend(canvas, cx - half + dx, cy - half + dy, color, alpha);
        }
    }
}

fn stroke_segment(
    canvas: &mut RgbaImage,
    (x0, y0): (f32, f32),
    (x1, y1): (f32, f32),
    size: u32,
    color: Rgb,
    alpha: f32,
) {
    let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as u32;
    // The end point belongs to the next segment.
    for i in 0..steps {
        let t = i as f32 / steps as f32;
        stamp(canvas, x0 + (x1 - x0) * t, y0 + (y1 - y0) * t, size, color, alpha);
    }
}

fn stroke_series(canvas: &mut RgbaImage, viewport: &Viewport, series: &Series) {
    let size = series.width.round().max(1.0) as u32;
    let mapped: Vec<(f32, f32)> = series.points.iter().map(|&p| viewport.map(p)).collect();

    match mapped.as_slice() {
        [] => {}
        [only] => stamp(canvas, only.0, only.1, size, series.color, series.alpha),
        points => {
            for pair in points.windows(2) {
                stroke_segment(canvas, pair[0], pair[1], size, series.color, series.alpha);
            }
            if let Some(&(x, y)) = points.last() {
                stamp(canvas, x, y, size, series.color, series.alpha);
            }
        }
    }
}

fn stroke_rect(canvas: &mut RgbaImage, left: f32, top: f32, width: f32, height: f32) {
    let corners = [
        (left, top),
        (left + width, top),
        (left + width, top + height),
        (left, top + height),
    ];
    for i in 0..corners.len() {
        let next = corners[(i + 1) % corners.len()];
        stroke_segment(canvas, corners[i], next, 1, FRAME, 1.0);
    }
}

fn draw_legend(canvas: &mut RgbaImage, spec: &ChartSpec, right: f32, top: f32) {
    let x_end = right - SWATCH_GAP as f32;
    let x_start = x_end - SWATCH_LEN as f32;
    for (row, (_, series)) in spec.legend_entries().enumerate() {
        let y = top + (SWATCH_GAP + row as u32 * (SWATCH_GAP + 4)) as f32 + 2.0;
        let size = series.width.round().max(1.0) as u32 + 1;
        stroke_segment(canvas, (x_start, y), (x_end, y), size, series.color, series.alpha.max(0.5));
    }
}
