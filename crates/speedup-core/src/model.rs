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

//! Trial records and configuration identifiers.

use crate::aggregate::Aggregate;
use serde::Serialize;
use std::fmt;

/// Identifies the configuration a trial was measured under.
///
/// Numeric configurations (thread or process counts) order before named
/// methods, and numerically among themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum ConfigKey {
    /// Thread or process count.
    Units(u32),
    /// Named method, e.g. `CUDA_Tiled`.
    Method(String),
}

impl ConfigKey {
    /// Creates a method-keyed configuration.
    pub fn method(name: impl Into<String>) -> Self {
        ConfigKey::Method(name.into())
    }

    /// Returns the parallelism unit count, if this configuration has one.
    pub fn units(&self) -> Option<u32> {
        match self {
            ConfigKey::Units(n) => Some(*n),
            ConfigKey::Method(_) => None,
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigKey::Units(n) => write!(f, "{}", n),
            ConfigKey::Method(name) => f.write_str(name),
        }
    }
}

/// The kind of value held by a configuration column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfigKind {
    /// Positive integer unit count (threads, processes).
    Units,
    /// Free-form method label.
    Method,
}

/// One measured run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trial {
    /// Problem size (matrix dimension).
    pub size: u64,
    /// Configuration, absent for baseline-only files.
    pub config: Option<ConfigKey>,
    /// Elapsed wall time in seconds.
    pub time_s: f64,
    /// Measured throughput, when the producer reported one.
    pub gflops: Option<f64>,
}

impl Trial {
    /// Creates a trial without a throughput value.
    pub fn new(size: u64, config: Option<ConfigKey>, time_s: f64) -> Self {
        Self {
            size,
            config,
            time_s,
            gflops: None,
        }
    }

    /// Sets the throughput value.
    pub fn with_gflops(mut self, gflops: f64) -> Self {
        self.gflops = Some(gflops);
        self
    }
}

/// Aggregated value placed in comparison table cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    /// Mean elapsed seconds.
    Time,
    /// Mean GFLOPS.
    Gflops,
}

impl Metric {
    /// Extracts this metric from an aggregate.
    pub fn of(&self, aggregate: &Aggregate) -> Option<f64> {
        match self {
            Metric::Time => Some(aggregate.mean_time_s),
            Metric::Gflops => aggregate.mean_gflops,
        }
    }

    /// Returns the metric name as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Metric::Time => "time_s",
            Metric::Gflops => "gflops",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_order_numerically() {
        let mut keys = vec![
            ConfigKey::Units(12),
            ConfigKey::Units(2),
            ConfigKey::Units(8),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![ConfigKey::Units(2), ConfigKey::Units(8), ConfigKey::Units(12)]
        );
    }

    #[test]
    fn test_units_before_methods() {
        assert!(ConfigKey::Units(64) < ConfigKey::method("A"));
    }

    #[test]
    fn test_units_extraction() {
        assert_eq!(ConfigKey::Units(4).units(), Some(4));
        assert_eq!(ConfigKey::method("CUDA_Naive").units(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfigKey::Units(6).to_string(), "6");
        assert_eq!(ConfigKey::method("Sequencial").to_string(), "Sequencial");
    }

    #[test]
    fn test_metric_of_aggregate() {
        let agg = Aggregate {
            size: 512,
            config: None,
            mean_time_s: 1.5,
            mean_gflops: None,
            trials: 3,
        };
        assert_eq!(Metric::Time.of(&agg), Some(1.5));
        assert_eq!(Metric::Gflops.of(&agg), None);
    }
}
