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

//! Load, aggregate, pivot and derive metrics for one variant.

use crate::config::RunConfig;
use crate::error::CliError;
use crate::variant::{MethodSpec, ScalingSpec, VariantSpec, BASELINE_LABEL};
use speedup_core::{
    aggregate, compute_relative_metrics, pivot, AggregateSet, ColumnOrder, ComparisonTable,
    ConfigKey, ConfigKind, GroupBy, Metric, RelativeMetrics,
};
use speedup_csv::{load, FileSummary, TrialSchema};
use tracing::info;

/// Averages of one group of input files.
#[derive(Debug, Clone)]
pub struct AverageGroup {
    /// Heading for the group.
    pub label: &'static str,
    /// Per-key means.
    pub aggregates: AggregateSet,
}

/// Everything computed for one run, before any chart is drawn.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Variant name.
    pub variant: &'static str,
    /// Row counts per loaded file.
    pub files: Vec<FileSummary>,
    /// Averaged trials per input group.
    pub averages: Vec<AverageGroup>,
    /// Mean time, baseline column first.
    pub time: ComparisonTable,
    /// Mean throughput, for variants that report it.
    pub throughput: Option<ComparisonTable>,
    /// Speedup and efficiency against the baseline.
    pub metrics: RelativeMetrics,
}

/// Runs the numeric pipeline for `variant` over files in the configured
/// input directory.
///
/// # Errors
///
/// Any load failure, in particular a missing input file, aborts the run
/// before anything is written.
pub fn analyze(variant: &VariantSpec, config: &RunConfig) -> Result<Analysis, CliError> {
    let analysis = match variant {
        VariantSpec::Scaling { name, spec } => analyze_scaling(name, spec, config)?,
        VariantSpec::Methods { name, spec } => analyze_methods(name, spec, config)?,
    };
    info!(
        variant = analysis.variant,
        sizes = analysis.time.len(),
        columns = analysis.time.columns().len(),
        "analysis complete"
    );
    Ok(analysis)
}

/// Baseline column key.
pub fn baseline_key() -> ConfigKey {
    ConfigKey::method(BASELINE_LABEL)
}

fn analyze_scaling(
    name: &'static str,
    spec: &ScalingSpec,
    config: &RunConfig,
) -> Result<Analysis, CliError> {
    let baseline = load(&[config.input_path(spec.baseline_file)], &TrialSchema::default())?;
    let parallel = load(
        &[config.input_path(spec.parallel_file)],
        &TrialSchema::default().with_config(spec.unit_column, ConfigKind::Units),
    )?;

    let baseline_avg = aggregate(&baseline.trials, GroupBy::Size);
    let parallel_avg = aggregate(&parallel.trials, GroupBy::SizeAndConfig);

    let key = baseline_key();
    let time = pivot(&parallel_avg, Metric::Time, &ColumnOrder::Ascending)
        .with_baseline(&baseline_avg, key.clone());
    let metrics = compute_relative_metrics(&time, &key, ConfigKey::units);

    let mut files = baseline.files;
    files.extend(parallel.files);

    Ok(Analysis {
        variant: name,
        files,
        averages: vec![
            AverageGroup {
                label: "Sequential",
                aggregates: baseline_avg,
            },
            AverageGroup {
                label: "Parallel",
                aggregates: parallel_avg,
            },
        ],
        time,
        throughput: None,
        metrics,
    })
}

fn analyze_methods(
    name: &'static str,
    spec: &MethodSpec,
    config: &RunConfig,
) -> Result<Analysis, CliError> {
    let paths: Vec<_> = spec.files.iter().map(|file| config.input_path(file)).collect();
    let loaded = load(
        &paths,
        &TrialSchema::default().with_config(spec.method_column, ConfigKind::Method),
    )?;

    let averages = aggregate(&loaded.trials, GroupBy::SizeAndConfig);
    let order = ColumnOrder::Explicit(
        spec.method_order
            .iter()
            .map(|method| ConfigKey::method(*method))
            .collect(),
    );

    let key = baseline_key();
    let time = pivot(&averages, Metric::Time, &order).anchored(&key);
    let throughput = pivot(&averages, Metric::Gflops, &order);
    let metrics = compute_relative_metrics(&time, &key, ConfigKey::units);

    Ok(Analysis {
        variant: name,
        files: loaded.files,
        averages: vec![AverageGroup {
            label: "Consolidated",
            aggregates: averages,
        }],
        time,
        throughput: Some(throughput),
        metrics,
    })
}
