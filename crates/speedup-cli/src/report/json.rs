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

//! JSON export for analysis results.

use crate::analysis::Analysis;
use crate::error::CliError;
use serde::Serialize;
use speedup_core::{AggregateSet, ComparisonTable, RelativeMetrics};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
struct FileEntry {
    path: String,
    rows: usize,
}

#[derive(Debug, Serialize)]
struct AverageEntry<'a> {
    label: &'a str,
    aggregates: &'a AggregateSet,
}

/// Machine-readable view of an [`Analysis`]. Undefined cells are `null`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    variant: &'a str,
    files: Vec<FileEntry>,
    averages: Vec<AverageEntry<'a>>,
    time: &'a ComparisonTable,
    throughput: Option<&'a ComparisonTable>,
    metrics: &'a RelativeMetrics,
}

impl<'a> JsonReport<'a> {
    /// Borrows the report contents from `analysis`.
    pub fn new(analysis: &'a Analysis) -> Self {
        Self {
            variant: analysis.variant,
            files: analysis
                .files
                .iter()
                .map(|file| FileEntry {
                    path: file.path.display().to_string(),
                    rows: file.rows,
                })
                .collect(),
            averages: analysis
                .averages
                .iter()
                .map(|group| AverageEntry {
                    label: group.label,
                    aggregates: &group.aggregates,
                })
                .collect(),
            time: &analysis.time,
            throughput: analysis.throughput.as_ref(),
            metrics: &analysis.metrics,
        }
    }
}

/// Writes the analysis as pretty-printed JSON.
pub fn export_json(analysis: &Analysis, path: &Path) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(&JsonReport::new(analysis))?;
    fs::write(path, json).map_err(|e| CliError::io_error(path, e))?;
    Ok(())
}
