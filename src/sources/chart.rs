// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! SVG line-chart renderer for the daily gas-spend series
//!
//! Writes the chart markup directly; vector output keeps the renderer free
//! of raster dependencies. Pixel coordinates are computed in `f64`, which is
//! fine here: they position points on a canvas and carry no monetary
//! precision. The displayed axis values come from exact decimal conversion.

use bigdecimal::ToPrimitive;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

use crate::errors::ChartError;
use crate::sources::ChartRenderer;
use crate::types::DailyBucket;

const WIDTH: f64 = 960.0;
const HEIGHT: f64 = 540.0;
const MARGIN: f64 = 64.0;

/// Renders the daily series as an SVG line chart.
///
/// The output target must carry an `.svg` extension; any other format is
/// rejected as unsupported.
#[derive(Debug, Clone, Default)]
pub struct SvgChartRenderer;

impl SvgChartRenderer {
    /// Create a renderer.
    pub fn new() -> Self {
        Self
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render(&self, series: &[DailyBucket], output: &Path) -> Result<(), ChartError> {
        let is_svg = output
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if !is_svg {
            return Err(ChartError::unsupported_format(output));
        }
        if series.is_empty() {
            return Err(ChartError::EmptySeries);
        }

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(output, render_svg(series))?;
        info!(path = %output.display(), points = series.len(), "wrote gas-spend chart");
        Ok(())
    }
}

fn render_svg(series: &[DailyBucket]) -> String {
    let gwei: Vec<f64> = series
        .iter()
        .map(|b| b.total_gas_fee.to_gwei().to_f64().unwrap_or(0.0))
        .collect();
    let max = gwei.iter().cloned().fold(0.0f64, f64::max).max(1.0);

    let plot_w = WIDTH - 2.0 * MARGIN;
    let plot_h = HEIGHT - 2.0 * MARGIN;

    let x_at = |i: usize| {
        if series.len() == 1 {
            MARGIN + plot_w / 2.0
        } else {
            MARGIN + plot_w * i as f64 / (series.len() - 1) as f64
        }
    };
    let y_at = |v: f64| HEIGHT - MARGIN - plot_h * v / max;

    let mut points = String::new();
    let mut markers = String::new();
    for (i, value) in gwei.iter().enumerate() {
        let (x, y) = (x_at(i), y_at(*value));
        let _ = write!(points, "{x:.1},{y:.1} ");
        let _ = write!(
            markers,
            r#"<circle cx="{x:.1}" cy="{y:.1}" r="3" fill="royalblue"/>"#
        );
    }

    let first_day = series[0].day;
    let last_day = series[series.len() - 1].day;
    let axis_y = HEIGHT - MARGIN;

    let mut svg = String::new();
    let _ = write!(
        svg,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<rect width="{w}" height="{h}" fill="white"/>"#,
            r#"<text x="{mid}" y="28" text-anchor="middle" font-family="sans-serif" font-size="18">Daily Gas Spending ({first} to {last})</text>"#,
            r#"<line x1="{m}" y1="{ay}" x2="{xe}" y2="{ay}" stroke="black"/>"#,
            r#"<line x1="{m}" y1="{m}" x2="{m}" y2="{ay}" stroke="black"/>"#,
            r#"<text x="{m}" y="{lbl_y}" text-anchor="middle" font-family="sans-serif" font-size="12">{first}</text>"#,
            r#"<text x="{xe}" y="{lbl_y}" text-anchor="end" font-family="sans-serif" font-size="12">{last}</text>"#,
            r#"<text x="{ylbl_x}" y="{m}" text-anchor="end" font-family="sans-serif" font-size="12">{max:.0} Gwei</text>"#,
            r#"<polyline points="{points}" fill="none" stroke="royalblue" stroke-width="2"/>"#,
            "{markers}",
            "</svg>"
        ),
        w = WIDTH,
        h = HEIGHT,
        m = MARGIN,
        mid = WIDTH / 2.0,
        xe = WIDTH - MARGIN,
        ay = axis_y,
        lbl_y = axis_y + 24.0,
        ylbl_x = MARGIN - 8.0,
        first = first_day,
        last = last_day,
        max = max,
        points = points.trim_end(),
        markers = markers,
    );
    svg
}
