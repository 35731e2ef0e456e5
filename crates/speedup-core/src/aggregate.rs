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

//! Grouping of repeated trials into per-configuration means.
//!
//! Groups are kept in an ordered map of composite `(size, config)` keys to
//! running sums, so the output order and the summation order are both fixed
//! for a given input.

use crate::model::{ConfigKey, Trial};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Key columns used to group trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    /// Problem size only. Used for baseline files without a configuration column.
    Size,
    /// Problem size and configuration.
    SizeAndConfig,
}

/// Mean values for one `(size, config)` group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    /// Problem size.
    pub size: u64,
    /// Configuration, `None` when grouped by size only.
    pub config: Option<ConfigKey>,
    /// Arithmetic mean of elapsed seconds.
    pub mean_time_s: f64,
    /// Arithmetic mean of the trials that reported throughput.
    pub mean_gflops: Option<f64>,
    /// Number of trials averaged.
    pub trials: usize,
}

/// Aggregates sorted by `(size, config)`, plus the order in which
/// configurations first appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateSet {
    records: Vec<Aggregate>,
    config_order: Vec<ConfigKey>,
}

impl AggregateSet {
    /// Returns all aggregates, sorted by size then configuration.
    pub fn records(&self) -> &[Aggregate] {
        &self.records
    }

    /// Returns configurations in order of first appearance.
    pub fn config_order(&self) -> &[ConfigKey] {
        &self.config_order
    }

    /// Returns the number of aggregates.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the set holds no aggregates.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up the aggregate for a key.
    pub fn get(&self, size: u64, config: Option<&ConfigKey>) -> Option<&Aggregate> {
        self.records
            .binary_search_by(|agg| (agg.size, agg.config.as_ref()).cmp(&(size, config)))
            .ok()
            .map(|idx| &self.records[idx])
    }

    /// Returns the distinct problem sizes in ascending order.
    pub fn sizes(&self) -> Vec<u64> {
        let mut sizes: Vec<u64> = self.records.iter().map(|agg| agg.size).collect();
        sizes.dedup();
        sizes
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    count: usize,
    time_sum: f64,
    gflops_count: usize,
    gflops_sum: f64,
}

impl Accumulator {
    fn push(&mut self, trial: &Trial) {
        self.count += 1;
        self.time_sum += trial.time_s;
        if let Some(gflops) = trial.gflops {
            self.gflops_count += 1;
            self.gflops_sum += gflops;
        }
    }

    fn finish(self, size: u64, config: Option<ConfigKey>) -> Aggregate {
        let mean_gflops = if self.gflops_count > 0 {
            Some(self.gflops_sum / self.gflops_count as f64)
        } else {
            None
        };

        Aggregate {
            size,
            config,
            mean_time_s: self.time_sum / self.count as f64,
            mean_gflops,
            trials: self.count,
        }
    }
}

/// Averages trials sharing the same group key.
///
/// Every group holds at least one trial, since groups are only created from
/// rows that are present.
pub fn aggregate(trials: &[Trial], group_by: GroupBy) -> AggregateSet {
    let mut groups: BTreeMap<(u64, Option<ConfigKey>), Accumulator> = BTreeMap::new();
    let mut config_order: Vec<ConfigKey> = Vec::new();

    for trial in trials {
        let config = match group_by {
            GroupBy::Size => None,
            GroupBy::SizeAndConfig => trial.config.clone(),
        };

        if let Some(key) = &config {
            if !config_order.contains(key) {
                config_order.push(key.clone());
            }
        }

        groups.entry((trial.size, config)).or_default().push(trial);
    }

    let records: Vec<Aggregate> = groups
        .into_iter()
        .map(|((size, config), acc)| acc.finish(size, config))
        .collect();

    debug!(
        trials = trials.len(),
        groups = records.len(),
        configs = config_order.len(),
        "aggregated trials"
    );

    AggregateSet {
        records,
        config_order,
    }
}
