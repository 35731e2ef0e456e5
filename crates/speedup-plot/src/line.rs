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

//! Line chart rendering.

use crate::error::{render_err, Result};
use crate::model::{ChartSize, LineChart, Reference};
use crate::style::{format_tick, series_color, CAPTION_SIZE, FONT, LABEL_SIZE};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use tracing::{info, warn};

/// Renders a line chart with markers, reference lines and annotations to an
/// SVG file. Lines break where a point is undefined.
pub fn render_line_chart(chart: &LineChart, path: &Path, size: ChartSize) -> Result<()> {
    let xs = chart.x_values();
    if xs.is_empty() {
        warn!(title = %chart.title, "line chart has no points");
    }
    let (x_lo, x_hi) = padded_range(&xs, false);
    let (y_lo, y_hi) = padded_range(&chart.y_values(), chart.y_from_zero);

    let root = SVGBackend::new(path, (size.width, size.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err(path))?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, (FONT, CAPTION_SIZE))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(render_err(path))?;

    let tick = |x: &f64| format_tick(*x);
    ctx.configure_mesh()
        .x_label_formatter(&tick)
        .x_desc(chart.x_desc.as_str())
        .y_desc(chart.y_desc.as_str())
        .label_style((FONT, LABEL_SIZE))
        .draw()
        .map_err(render_err(path))?;

    for (idx, line) in chart.lines.iter().enumerate() {
        let color = series_color(idx);
        let segments = line.segments();

        for segment in &segments {
            ctx.draw_series(LineSeries::new(segment.iter().copied(), color.stroke_width(2)))
                .map_err(render_err(path))?;
        }

        ctx.draw_series(
            segments
                .iter()
                .flatten()
                .map(|&point| Circle::new(point, 4, color.filled())),
        )
        .map_err(render_err(path))?
        .label(line.label.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    for reference in &chart.references {
        let ends = match reference {
            Reference::Diagonal { .. } => {
                let start = x_lo.max(y_lo);
                let end = x_hi.min(y_hi);
                (start < end).then(|| vec![(start, start), (end, end)])
            }
            Reference::Horizontal { value, .. } => Some(vec![(x_lo, *value), (x_hi, *value)]),
        };
        let Some(ends) = ends else {
            continue;
        };
        ctx.draw_series(LineSeries::new(ends, BLACK.stroke_width(1)))
            .map_err(render_err(path))?
            .label(reference.label())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(1)));
    }

    let note_style =
        TextStyle::from((FONT, LABEL_SIZE).into_font()).pos(Pos::new(HPos::Right, VPos::Bottom));
    ctx.draw_series(chart.annotations.iter().map(|note| {
        EmptyElement::at((note.x, note.y))
            + Circle::new((0, 0), 6, BLACK.filled())
            + Text::new(note.text.clone(), (-8, -8), note_style.clone())
    }))
    .map_err(render_err(path))?;

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .label_font((FONT, LABEL_SIZE))
        .draw()
        .map_err(render_err(path))?;

    root.present().map_err(render_err(path))?;
    info!(path = %path.display(), title = %chart.title, "wrote line chart");
    Ok(())
}

/// Axis bounds covering `values` with a margin on both sides.
fn padded_range(values: &[f64], from_zero: bool) -> (f64, f64) {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min > max {
        return (0.0, 1.0);
    }

    let min = if from_zero { min.min(0.0) } else { min };
    let span = max - min;
    if span == 0.0 {
        let pad = if max == 0.0 { 1.0 } else { max.abs() * 0.1 };
        return (min - pad, max + pad);
    }

    let pad = span * 0.08;
    let lo = if from_zero && min >= 0.0 { min } else { min - pad };
    (lo, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_range_empty() {
        assert_eq!(padded_range(&[], false), (0.0, 1.0));
        assert_eq!(padded_range(&[f64::NAN], true), (0.0, 1.0));
    }

    #[test]
    fn test_padded_range_single_value() {
        let (lo, hi) = padded_range(&[4.0], false);
        assert!(lo < 4.0 && hi > 4.0);
    }

    #[test]
    fn test_padded_range_from_zero() {
        let (lo, hi) = padded_range(&[0.5, 1.0], true);
        assert_eq!(lo, 0.0);
        assert!(hi > 1.0);

        let (lo, _) = padded_range(&[0.5, 1.0], false);
        assert!(lo < 0.5 && lo > 0.0);
    }
}
