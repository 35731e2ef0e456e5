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

//! Run configuration.
//!
//! Carries directories, chart dimensions and export settings from the
//! command line into a run.

use speedup_plot::ChartSize;
use std::path::{Path, PathBuf};

/// Settings for one run.
///
/// # Example
///
/// ```
/// use speedup_cli::config::RunConfig;
///
/// let config = RunConfig::default()
///     .with_input_dir("bench")
///     .with_chart_size(800, 600)
///     .without_charts();
/// assert!(!config.render_charts);
/// assert_eq!(config.chart_size.width, 800);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Directory holding the fixed-name input files.
    pub input_dir: PathBuf,
    /// Directory charts are written to.
    pub output_dir: PathBuf,
    /// Chart dimensions.
    pub chart_size: ChartSize,
    /// Optional JSON report path.
    pub json_path: Option<PathBuf>,
    /// Whether charts are rendered at all.
    pub render_charts: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            chart_size: ChartSize::default(),
            json_path: None,
            render_charts: true,
        }
    }
}

impl RunConfig {
    /// Sets the input directory.
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the chart dimensions in pixels.
    pub fn with_chart_size(mut self, width: u32, height: u32) -> Self {
        self.chart_size = ChartSize { width, height };
        self
    }

    /// Writes a JSON report to `path`.
    pub fn with_json_report(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_path = Some(path.into());
        self
    }

    /// Skips chart rendering.
    pub fn without_charts(mut self) -> Self {
        self.render_charts = false;
        self
    }

    /// Resolves an input file name against the input directory.
    pub fn input_path(&self, file_name: &str) -> PathBuf {
        self.input_dir.join(file_name)
    }

    /// Resolves a chart file name against the output directory.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
