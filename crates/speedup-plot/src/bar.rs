// Dweve Speedup - Parallel Benchmark Analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Grouped bar chart rendering.

use crate::error::{render_err, Result};
use crate::model::{BarChart, ChartSize};
use crate::style::{series_color, CAPTION_SIZE, FONT, LABEL_SIZE, VALUE_LABEL_SIZE};
use plotters::coord::ranged1d::{Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use tracing::{info, warn};

/// Fraction of each category slot covered by its bars.
const GROUP_WIDTH: f64 = 0.8;

/// Renders a grouped bar chart to an SVG file.
///
/// Undefined values, and non-positive values on a log scale, produce no bar
/// and no label.
pub fn render_bar_chart(chart: &BarChart, path: &Path, size: ChartSize) -> Result<()> {
    chart.validate()?;

    let values = chart.drawable_values();
    if values.is_empty() {
        warn!(title = %chart.title, "bar chart has no drawable values");
    }
    let (lo, hi) = value_range(&values, chart.log_scale);
    let slots = chart.categories.len().max(1) as f64;

    let root = SVGBackend::new(path, (size.width, size.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err(path))?;

    let mut builder = ChartBuilder::on(&root);
    builder
        .caption(&chart.title, (FONT, CAPTION_SIZE))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80);

    if chart.log_scale {
        let mut ctx = builder
            .build_cartesian_2d(-0.5..slots - 0.5, (lo..hi).log_scale())
            .map_err(render_err(path))?;
        draw_bars(&mut ctx, chart, lo).map_err(render_err(path))?;
    } else {
        let mut ctx = builder
            .build_cartesian_2d(-0.5..slots - 0.5, lo..hi)
            .map_err(render_err(path))?;
        draw_bars(&mut ctx, chart, lo).map_err(render_err(path))?;
    }

    root.present().map_err(render_err(path))?;
    info!(path = %path.display(), title = %chart.title, "wrote bar chart");
    Ok(())
}

fn draw_bars<'a, DB, Y>(
    ctx: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, Y>>,
    chart: &BarChart,
    floor: f64,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend + 'a,
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    let categories = &chart.categories;
    let category_at = |x: &f64| category_label(categories, *x);

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(categories.len().max(1))
        .x_label_formatter(&category_at)
        .x_desc(chart.x_desc.as_str())
        .y_desc(chart.y_desc.as_str())
        .label_style((FONT, LABEL_SIZE))
        .draw()?;

    let series_count = chart.series.len().max(1) as f64;
    let width = GROUP_WIDTH / series_count;
    let value_style = TextStyle::from((FONT, VALUE_LABEL_SIZE).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    for (idx, series) in chart.series.iter().enumerate() {
        let color = series_color(idx);
        let offset = (idx as f64 - (series_count - 1.0) / 2.0) * width;

        let bars: Vec<(f64, f64)> = series
            .values
            .iter()
            .enumerate()
            .filter_map(|(slot, value)| value.map(|v| (slot as f64 + offset, v)))
            .filter(|(_, v)| v.is_finite() && (!chart.log_scale || *v > 0.0))
            .collect();

        ctx.draw_series(bars.iter().map(|&(x, v)| {
            Rectangle::new([(x - width / 2.0, floor), (x + width / 2.0, v)], color.filled())
        }))?
        .label(series.label.as_str())
        .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled()));

        if let Some(precision) = chart.label_precision {
            ctx.draw_series(bars.iter().map(|&(x, v)| {
                Text::new(format!("{:.*}", precision, v), (x, v), value_style.clone())
            }))?;
        }
    }

    ctx.configure_series_labels()
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .label_font((FONT, LABEL_SIZE))
        .draw()?;

    Ok(())
}

/// Label for an x-axis tick. Ticks between slots stay blank.
fn category_label(categories: &[String], x: f64) -> String {
    let slot = x.round();
    if (x - slot).abs() > 1e-6 || slot < 0.0 {
        return String::new();
    }
    categories.get(slot as usize).cloned().unwrap_or_default()
}

/// Value axis bounds. Log axes leave room under the shortest bar and above
/// the tallest label.
fn value_range(values: &[f64], log_scale: bool) -> (f64, f64) {
    if values.is_empty() {
        return if log_scale { (0.1, 1.0) } else { (0.0, 1.0) };
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if log_scale {
        (min / 2.0, max * 3.0)
    } else if max <= 0.0 {
        (min * 1.15, 1.0)
    } else {
        (min.min(0.0), max * 1.15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        let categories = vec!["128".to_string(), "256".to_string()];
        assert_eq!(category_label(&categories, 0.0), "128");
        assert_eq!(category_label(&categories, 1.0), "256");
        assert_eq!(category_label(&categories, 0.5), "");
        assert_eq!(category_label(&categories, 2.0), "");
        assert_eq!(category_label(&categories, -1.0), "");
    }

    #[test]
    fn test_value_range_linear() {
        assert_eq!(value_range(&[], false), (0.0, 1.0));
        let (lo, hi) = value_range(&[2.0, 10.0], false);
        assert_eq!(lo, 0.0);
        assert!((hi - 11.5).abs() < 1e-9);
    }

    #[test]
    fn test_value_range_log() {
        assert_eq!(value_range(&[], true), (0.1, 1.0));
        let (lo, hi) = value_range(&[0.02, 40.0], true);
        assert!((lo - 0.01).abs() < 1e-12);
        assert!((hi - 120.0).abs() < 1e-9);
    }
}
