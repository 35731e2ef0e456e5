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

//! Chart models built from an [`Analysis`].

use crate::analysis::Analysis;
use crate::variant::{MethodSpec, ScalingSpec, VariantSpec, SIZE_AXIS};
use speedup_core::{ComparisonTable, ConfigKey};
use speedup_plot::{
    render_bar_chart, render_line_chart, Annotation, BarChart, BarSeries, ChartSize, LineChart,
    LineData, Reference,
};
use std::path::Path;

const TIME_AXIS: &str = "Tempo de Execução (segundos) - Escala Logarítmica";
const SPEEDUP_AXIS: &str = "Speedup (Sequencial / Paralelo)";
const THROUGHPUT_AXIS: &str = "Desempenho (GFLOPS)";

/// A chart ready to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    /// Grouped bars.
    Bar(BarChart),
    /// Lines over a numeric axis.
    Line(LineChart),
}

impl Chart {
    /// Renders the chart to `path`.
    pub fn render(&self, path: &Path, size: ChartSize) -> speedup_plot::Result<()> {
        match self {
            Chart::Bar(chart) => render_bar_chart(chart, path, size),
            Chart::Line(chart) => render_line_chart(chart, path, size),
        }
    }

    /// Returns the chart title.
    pub fn title(&self) -> &str {
        match self {
            Chart::Bar(chart) => &chart.title,
            Chart::Line(chart) => &chart.title,
        }
    }
}

/// A chart and the file name it is written to.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedChart {
    /// Output file name.
    pub file_name: &'static str,
    /// Chart model.
    pub chart: Chart,
}

/// Builds every chart of the variant, in output order.
pub fn build_charts(variant: &VariantSpec, analysis: &Analysis) -> Vec<NamedChart> {
    match variant {
        VariantSpec::Scaling { spec, .. } => scaling_charts(spec, analysis),
        VariantSpec::Methods { spec, .. } => method_charts(spec, analysis),
    }
}

fn scaling_charts(spec: &ScalingSpec, analysis: &Analysis) -> Vec<NamedChart> {
    let series_label = |key: &ConfigKey| match key.units() {
        Some(n) => format!("{} {}", n, spec.unit_noun),
        None => key.to_string(),
    };

    let mut time = bar_chart(spec.time_chart.1, TIME_AXIS, &analysis.time, series_label);
    time.log_scale = true;

    let mut charts = vec![
        NamedChart {
            file_name: spec.time_chart.0,
            chart: Chart::Bar(time),
        },
        NamedChart {
            file_name: spec.speedup_chart.0,
            chart: Chart::Line(speedup_by_units(spec, analysis)),
        },
    ];

    if let Some((file_name, title)) = spec.efficiency_chart {
        charts.push(NamedChart {
            file_name,
            chart: Chart::Line(efficiency_by_units(spec, title, analysis)),
        });
    }
    charts
}

fn method_charts(spec: &MethodSpec, analysis: &Analysis) -> Vec<NamedChart> {
    let method_label = |key: &ConfigKey| key.to_string();

    let mut time = bar_chart(
        spec.time_chart.1,
        "Tempo de Execução (s) - Escala Log",
        &analysis.time,
        method_label,
    );
    time.x_desc = "Tamanho da Matriz (N)".to_string();
    time.log_scale = true;

    let mut charts = vec![
        NamedChart {
            file_name: spec.time_chart.0,
            chart: Chart::Bar(time),
        },
        NamedChart {
            file_name: spec.speedup_chart.0,
            chart: Chart::Line(speedup_by_size(spec, analysis)),
        },
    ];

    if let Some(throughput) = &analysis.throughput {
        charts.push(NamedChart {
            file_name: spec.scalability_chart.0,
            chart: Chart::Line(scalability(spec, throughput)),
        });

        let mut bars = bar_chart(
            spec.throughput_chart.1,
            "GFLOPS (Bilhões de Op/s)",
            throughput,
            method_label,
        );
        bars.x_desc = "Tamanho da Matriz (N)".to_string();
        bars.label_precision = Some(1);
        charts.push(NamedChart {
            file_name: spec.throughput_chart.0,
            chart: Chart::Bar(bars),
        });
    }
    charts
}

/// One group per size, one bar per table column.
fn bar_chart(
    title: &str,
    y_desc: &str,
    table: &ComparisonTable,
    label: impl Fn(&ConfigKey) -> String,
) -> BarChart {
    let mut chart = BarChart::new(title, SIZE_AXIS, y_desc);
    chart.categories = table.sizes().iter().map(u64::to_string).collect();
    chart.series = table
        .columns()
        .iter()
        .map(|key| BarSeries {
            label: label(key),
            values: table.column(key).unwrap_or_default(),
        })
        .collect();
    chart
}

/// Unit counts of the derived columns paired with their column index.
fn unit_axis(analysis: &Analysis) -> Vec<(f64, usize)> {
    analysis
        .metrics
        .columns()
        .iter()
        .enumerate()
        .filter_map(|(idx, column)| column.units.map(|n| (f64::from(n), idx)))
        .collect()
}

fn size_line_label(size: u64) -> String {
    format!("Matriz {}x{}", size, size)
}

fn speedup_by_units(spec: &ScalingSpec, analysis: &Analysis) -> LineChart {
    let mut chart = LineChart::new(spec.speedup_chart.1, spec.unit_axis, SPEEDUP_AXIS);
    let axis = unit_axis(analysis);
    let columns = analysis.metrics.columns();

    for (row, &size) in analysis.metrics.sizes().iter().enumerate() {
        let mut points = vec![(1.0, Some(1.0))];
        points.extend(axis.iter().map(|&(x, idx)| (x, columns[idx].speedup[row])));
        chart.lines.push(LineData {
            label: size_line_label(size),
            points,
        });
    }

    chart.references.push(Reference::Diagonal {
        label: "Speedup Ideal (Linear)".to_string(),
    });
    chart
}

fn efficiency_by_units(spec: &ScalingSpec, title: &str, analysis: &Analysis) -> LineChart {
    let y_desc = format!("Eficiência (Speedup / {})", spec.unit_noun);
    let mut chart = LineChart::new(title, spec.unit_axis, y_desc);
    let axis = unit_axis(analysis);
    let columns = analysis.metrics.columns();

    for (row, &size) in analysis.metrics.sizes().iter().enumerate() {
        let mut points = vec![(1.0, Some(1.0))];
        points.extend(axis.iter().map(|&(x, idx)| {
            let efficiency = columns[idx]
                .efficiency
                .as_ref()
                .and_then(|values| values[row]);
            (x, efficiency)
        }));
        chart.lines.push(LineData {
            label: size_line_label(size),
            points,
        });
    }

    chart.references.push(Reference::Horizontal {
        label: "Eficiência Ideal (1.0)".to_string(),
        value: 1.0,
    });
    chart.y_from_zero = true;
    chart
}

fn speedup_by_size(spec: &MethodSpec, analysis: &Analysis) -> LineChart {
    let mut chart = LineChart::new(
        spec.speedup_chart.1,
        "Tamanho da Matriz (N)",
        "Speedup (x vezes mais rápido)",
    );
    let sizes = analysis.metrics.sizes();

    for column in analysis.metrics.columns() {
        chart.lines.push(LineData {
            label: spec.speedup_label(&column.config.to_string()),
            points: sizes
                .iter()
                .zip(&column.speedup)
                .map(|(&size, &speedup)| (size as f64, speedup))
                .collect(),
        });
    }

    chart.references.push(Reference::Horizontal {
        label: format!("Baseline ({})", analysis.metrics.baseline()),
        value: 1.0,
    });
    chart
}

fn scalability(spec: &MethodSpec, throughput: &ComparisonTable) -> LineChart {
    let mut chart = LineChart::new(
        spec.scalability_chart.1,
        "Tamanho da Matriz (N)",
        THROUGHPUT_AXIS,
    );

    for row_key in throughput.columns() {
        let points = throughput
            .rows()
            .iter()
            .map(|row| (row.size as f64, throughput.cell(row.size, row_key)))
            .collect();
        chart.lines.push(LineData {
            label: row_key.to_string(),
            points,
        });
    }

    let peak_key = ConfigKey::method(spec.peak_method);
    if let Some((size, gflops)) = peak(throughput, &peak_key) {
        chart.annotations.push(Annotation {
            x: size as f64,
            y: gflops,
            text: format!("Pico GPU: {:.1} GFLOPS", gflops),
        });
    }
    chart
}

/// First size holding the largest defined value of `key`'s column.
fn peak(table: &ComparisonTable, key: &ConfigKey) -> Option<(u64, f64)> {
    let idx = table.column_index(key)?;
    table
        .rows()
        .iter()
        .filter_map(|row| row.cells[idx].map(|value| (row.size, value)))
        .fold(None, |best: Option<(u64, f64)>, (size, value)| match best {
            Some((_, top)) if top >= value => best,
            _ => Some((size, value)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AverageGroup, Analysis};
    use speedup_core::{
        aggregate, compute_relative_metrics, pivot, ColumnOrder, GroupBy, Metric, Trial,
    };

    fn seq() -> ConfigKey {
        ConfigKey::method("Sequencial")
    }

    fn mpi_analysis() -> Analysis {
        let baseline = vec![
            Trial::new(100, None, 8.0),
            Trial::new(200, None, 64.0),
        ];
        let parallel = vec![
            Trial::new(100, Some(ConfigKey::Units(2)), 4.0),
            Trial::new(100, Some(ConfigKey::Units(4)), 4.0),
            Trial::new(200, Some(ConfigKey::Units(2)), 32.0),
        ];
        let base = aggregate(&baseline, GroupBy::Size);
        let par = aggregate(&parallel, GroupBy::SizeAndConfig);
        let time = pivot(&par, Metric::Time, &ColumnOrder::Ascending).with_baseline(&base, seq());
        let metrics = compute_relative_metrics(&time, &seq(), ConfigKey::units);
        Analysis {
            variant: "mpi",
            files: Vec::new(),
            averages: vec![AverageGroup {
                label: "Parallel",
                aggregates: par,
            }],
            time,
            throughput: None,
            metrics,
        }
    }

    fn cuda_analysis() -> Analysis {
        let trials = vec![
            Trial::new(512, Some(seq()), 1.0).with_gflops(0.3),
            Trial::new(512, Some(ConfigKey::method("CUDA_Tiled")), 0.25).with_gflops(120.0),
            Trial::new(1024, Some(seq()), 8.0).with_gflops(0.3),
            Trial::new(1024, Some(ConfigKey::method("CUDA_Tiled")), 1.0).with_gflops(140.0),
            Trial::new(2048, Some(ConfigKey::method("CUDA_Tiled")), 8.0).with_gflops(140.0),
        ];
        let avg = aggregate(&trials, GroupBy::SizeAndConfig);
        let order = ColumnOrder::Explicit(vec![seq(), ConfigKey::method("CUDA_Tiled")]);
        let time = pivot(&avg, Metric::Time, &order).anchored(&seq());
        let throughput = pivot(&avg, Metric::Gflops, &order);
        let metrics = compute_relative_metrics(&time, &seq(), ConfigKey::units);
        Analysis {
            variant: "cuda",
            files: Vec::new(),
            averages: Vec::new(),
            time,
            throughput: Some(throughput),
            metrics,
        }
    }

    fn line(chart: &NamedChart) -> &LineChart {
        match &chart.chart {
            Chart::Line(line) => line,
            Chart::Bar(_) => panic!("expected a line chart"),
        }
    }

    fn bar(chart: &NamedChart) -> &BarChart {
        match &chart.chart {
            Chart::Bar(bar) => bar,
            Chart::Line(_) => panic!("expected a bar chart"),
        }
    }

    #[test]
    fn test_scaling_charts_follow_variant_outputs() {
        let charts = build_charts(&VariantSpec::mpi(), &mpi_analysis());
        let names: Vec<_> = charts.iter().map(|c| c.file_name).collect();
        assert_eq!(
            names,
            vec![
                "grafico_tempo_execucao_mpi.svg",
                "grafico_speedup_mpi.svg",
                "grafico_eficiencia_mpi.svg",
            ]
        );
        assert_eq!(charts[1].chart.title(), "Escalabilidade e Speedup do Código MPI");
    }

    #[test]
    fn test_time_bars_keep_gaps() {
        let charts = build_charts(&VariantSpec::mpi(), &mpi_analysis());
        let time = bar(&charts[0]);

        assert!(time.log_scale);
        assert_eq!(time.categories, vec!["100", "200"]);
        let labels: Vec<_> = time.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Sequencial", "2 Processos", "4 Processos"]);
        assert_eq!(time.series[2].values, vec![Some(4.0), None]);
    }

    #[test]
    fn test_speedup_lines_start_at_one_unit() {
        let charts = build_charts(&VariantSpec::mpi(), &mpi_analysis());
        let speedup = line(&charts[1]);

        assert_eq!(speedup.lines.len(), 2);
        assert_eq!(speedup.lines[0].label, "Matriz 100x100");
        assert_eq!(
            speedup.lines[0].points,
            vec![(1.0, Some(1.0)), (2.0, Some(2.0)), (4.0, Some(2.0))]
        );
        assert_eq!(speedup.lines[1].points[2], (4.0, None));
        assert!(matches!(speedup.references[0], Reference::Diagonal { .. }));
    }

    #[test]
    fn test_efficiency_chart() {
        let charts = build_charts(&VariantSpec::mpi(), &mpi_analysis());
        let efficiency = line(&charts[2]);

        assert!(efficiency.y_from_zero);
        assert_eq!(
            efficiency.lines[0].points,
            vec![(1.0, Some(1.0)), (2.0, Some(1.0)), (4.0, Some(0.5))]
        );
        assert!(matches!(
            efficiency.references[0],
            Reference::Horizontal { value, .. } if value == 1.0
        ));
    }

    #[test]
    fn test_threads_has_no_efficiency_chart() {
        let charts = build_charts(&VariantSpec::threads(), &mpi_analysis());
        assert_eq!(charts.len(), 2);
        assert_eq!(bar(&charts[0]).series[1].label, "2 Threads");
    }

    #[test]
    fn test_cuda_charts() {
        let charts = build_charts(&VariantSpec::cuda(), &cuda_analysis());
        assert_eq!(charts.len(), 4);

        let time = bar(&charts[0]);
        assert_eq!(time.categories, vec!["512", "1024"]);

        let speedup = line(&charts[1]);
        assert_eq!(speedup.lines.len(), 1);
        assert_eq!(speedup.lines[0].label, "GPU Tiled (Shared Mem)");
        assert_eq!(
            speedup.lines[0].points,
            vec![(512.0, Some(4.0)), (1024.0, Some(8.0))]
        );

        let scalability = line(&charts[2]);
        assert_eq!(scalability.lines.len(), 2);
        assert_eq!(scalability.lines[0].points[2], (2048.0, None));
        assert_eq!(scalability.annotations.len(), 1);
        assert_eq!(scalability.annotations[0].x, 1024.0);
        assert_eq!(scalability.annotations[0].text, "Pico GPU: 140.0 GFLOPS");

        let throughput = bar(&charts[3]);
        assert_eq!(throughput.label_precision, Some(1));
        assert!(!throughput.log_scale);
    }

    #[test]
    fn test_peak_prefers_first_maximum() {
        let analysis = cuda_analysis();
        let table = analysis.throughput.unwrap();
        assert_eq!(peak(&table, &ConfigKey::method("CUDA_Tiled")), Some((1024, 140.0)));
        assert_eq!(peak(&table, &ConfigKey::method("CUDA_Naive")), None);
    }
}
