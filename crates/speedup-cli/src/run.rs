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

//! One end-to-end run: analyze, report, render.

use crate::analysis::analyze;
use crate::charts::build_charts;
use crate::config::RunConfig;
use crate::error::CliError;
use crate::report;
use crate::variant::VariantSpec;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Files written by a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    /// Charts, in the order they were written.
    pub charts: Vec<PathBuf>,
    /// JSON report, when requested.
    pub json: Option<PathBuf>,
}

/// Runs `variant` with `config`, printing progress to stdout.
///
/// Nothing is written until every input has loaded.
pub fn run(variant: &VariantSpec, config: &RunConfig) -> Result<RunOutput, CliError> {
    info!(variant = variant.name(), input_dir = %config.input_dir.display(), "starting run");

    let analysis = analyze(variant, config)?;
    report::print_analysis(&analysis);

    let mut output = RunOutput::default();

    if config.render_charts {
        let charts = build_charts(variant, &analysis);
        debug!(count = charts.len(), "built chart models");

        fs::create_dir_all(config.output_dir())
            .map_err(|e| CliError::io_error(config.output_dir(), e))?;

        for named in charts {
            let path = config.output_path(named.file_name);
            debug!(title = named.chart.title(), path = %path.display(), "rendering chart");
            named.chart.render(&path, config.chart_size)?;
            report::print_chart_written(&path);
            output.charts.push(path);
        }
    }

    if let Some(path) = &config.json_path {
        report::export_json(&analysis, path)?;
        info!(path = %path.display(), "wrote JSON report");
        output.json = Some(path.clone());
    }

    report::print_summary(output.charts.len(), output.json.as_deref());
    Ok(output)
}
