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

//! Console reporter for analysis results.
//!
//! Undefined cells print as `-`.

use crate::analysis::Analysis;
use colored::Colorize;
use speedup_core::{AggregateSet, ComparisonTable, RelativeMetrics};
use std::path::Path;

/// Prints the loaded files, averages and derived tables.
pub fn print_analysis(analysis: &Analysis) {
    println!("\n{}", "=".repeat(80));
    println!("{} {}", "SPEEDUP ANALYSIS:".bright_blue().bold(), analysis.variant);
    println!("{}", "=".repeat(80));

    section("LOADED FILES");
    for file in &analysis.files {
        println!("  {}: {} rows", file.path.display(), file.rows);
    }

    for group in &analysis.averages {
        section(&format!("MEAN TIME (s): {}", group.label.to_uppercase()));
        print!("{}", render_averages(&group.aggregates));
    }

    section("COMPARISON TABLE: MEAN TIME (s)");
    print!("{}", render_comparison(&analysis.time, 6));

    if let Some(throughput) = &analysis.throughput {
        section("COMPARISON TABLE: MEAN GFLOPS");
        print!("{}", render_comparison(throughput, 2));
    }

    section("SPEEDUP");
    print!("{}", render_speedup(&analysis.metrics));

    if analysis.metrics.has_efficiency() {
        section("EFFICIENCY");
        print!("{}", render_efficiency(&analysis.metrics));
    }
    println!("{}", "-".repeat(80));
}

/// Prints one line for a written chart.
pub fn print_chart_written(path: &Path) {
    println!("{} {}", "✓".green().bold(), path.display());
}

/// Prints the closing summary line.
pub fn print_summary(charts: usize, json: Option<&Path>) {
    println!("{}", "=".repeat(80));
    println!("{} {}", "Charts written:".green().bold(), charts);
    if let Some(path) = json {
        println!("{} {}", "JSON report:".green().bold(), path.display());
    }
    println!("{}\n", "=".repeat(80));
}

fn section(title: &str) {
    println!("\n{}", "-".repeat(80));
    println!("{}", title.bold());
    println!("{}", "-".repeat(80));
}

fn cell(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    }
}

/// Right-aligns every column to its widest entry.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, value) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(idx) {
                *width = (*width).max(value.chars().count());
            }
        }
    }

    let line = |values: &[String]| {
        let cells: Vec<String> = values
            .iter()
            .zip(&widths)
            .map(|(value, width)| format!("{:>width$}", value, width = *width))
            .collect();
        format!("  {}\n", cells.join("  "))
    };

    let mut out = line(headers);
    for row in rows {
        out.push_str(&line(row));
    }
    out
}

/// Renders per-key means with trial counts.
pub fn render_averages(aggregates: &AggregateSet) -> String {
    let has_config = aggregates.records().iter().any(|agg| agg.config.is_some());
    let has_gflops = aggregates.records().iter().any(|agg| agg.mean_gflops.is_some());

    let mut headers = vec!["Size".to_string()];
    if has_config {
        headers.push("Config".to_string());
    }
    headers.push("Time (s)".to_string());
    if has_gflops {
        headers.push("GFLOPS".to_string());
    }
    headers.push("Trials".to_string());

    let rows: Vec<Vec<String>> = aggregates
        .records()
        .iter()
        .map(|agg| {
            let mut row = vec![agg.size.to_string()];
            if has_config {
                row.push(agg.config.as_ref().map(ToString::to_string).unwrap_or_default());
            }
            row.push(format!("{:.6}", agg.mean_time_s));
            if has_gflops {
                row.push(cell(agg.mean_gflops, 2));
            }
            row.push(agg.trials.to_string());
            row
        })
        .collect();

    render_table(&headers, &rows)
}

/// Renders a size × configuration table.
pub fn render_comparison(table: &ComparisonTable, precision: usize) -> String {
    let mut headers = vec!["Size".to_string()];
    headers.extend(table.columns().iter().map(ToString::to_string));

    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| {
            let mut values = vec![row.size.to_string()];
            values.extend(row.cells.iter().map(|v| cell(*v, precision)));
            values
        })
        .collect();

    render_table(&headers, &rows)
}

/// Renders speedup per derived column.
pub fn render_speedup(metrics: &RelativeMetrics) -> String {
    let mut headers = vec!["Size".to_string()];
    headers.extend(
        metrics
            .columns()
            .iter()
            .map(|column| format!("Speedup_{}", column.config)),
    );

    let rows: Vec<Vec<String>> = metrics
        .sizes()
        .iter()
        .enumerate()
        .map(|(row, size)| {
            let mut values = vec![size.to_string()];
            values.extend(metrics.columns().iter().map(|c| cell(c.speedup[row], 2)));
            values
        })
        .collect();

    render_table(&headers, &rows)
}

/// Renders efficiency for the columns that have a unit count.
pub fn render_efficiency(metrics: &RelativeMetrics) -> String {
    let columns: Vec<_> = metrics
        .columns()
        .iter()
        .filter_map(|c| c.efficiency.as_ref().map(|values| (&c.config, values)))
        .collect();

    let mut headers = vec!["Size".to_string()];
    headers.extend(columns.iter().map(|(config, _)| format!("Efficiency_{}", config)));

    let rows: Vec<Vec<String>> = metrics
        .sizes()
        .iter()
        .enumerate()
        .map(|(row, size)| {
            let mut values = vec![size.to_string()];
            values.extend(columns.iter().map(|(_, efficiency)| cell(efficiency[row], 3)));
            values
        })
        .collect();

    render_table(&headers, &rows)
}
