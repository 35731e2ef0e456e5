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

//! Speedup and efficiency relative to a baseline column.

use crate::model::ConfigKey;
use crate::table::ComparisonTable;
use serde::Serialize;
use tracing::debug;

/// Divides two optional values.
///
/// Returns `None` when either operand is absent, the denominator is zero, or
/// the quotient is not finite.
///
/// ```
/// use speedup_core::ratio;
///
/// assert_eq!(ratio(Some(2.0), Some(0.5)), Some(4.0));
/// assert_eq!(ratio(Some(2.0), Some(0.0)), None);
/// assert_eq!(ratio(None, Some(1.0)), None);
/// ```
pub fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let (num, den) = (numerator?, denominator?);
    if den == 0.0 {
        return None;
    }
    let value = num / den;
    value.is_finite().then_some(value)
}

/// Speedup (and efficiency, when the configuration has a unit count) for one
/// non-baseline column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedColumn {
    /// Configuration this column describes.
    pub config: ConfigKey,
    /// Parallelism units, if applicable.
    pub units: Option<u32>,
    /// `baseline / time`, aligned with [`RelativeMetrics::sizes`].
    pub speedup: Vec<Option<f64>>,
    /// `speedup / units`; `None` for configurations without a unit count.
    pub efficiency: Option<Vec<Option<f64>>>,
}

/// Derived metrics for every non-baseline column of a comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelativeMetrics {
    baseline: ConfigKey,
    sizes: Vec<u64>,
    columns: Vec<DerivedColumn>,
}

/// Computes speedup and efficiency against `baseline`.
///
/// `units` maps a column to its parallelism unit count; returning `None`
/// disables efficiency for that column. The baseline column itself gets no
/// derived column: its speedup is the constant 1.0 reported by
/// [`RelativeMetrics::speedup`].
pub fn compute_relative_metrics<F>(
    table: &ComparisonTable,
    baseline: &ConfigKey,
    units: F,
) -> RelativeMetrics
where
    F: Fn(&ConfigKey) -> Option<u32>,
{
    let base_idx = table.column_index(baseline);
    let base_times: Vec<Option<f64>> = table
        .rows()
        .iter()
        .map(|row| base_idx.and_then(|idx| row.cells[idx]))
        .collect();

    let columns: Vec<DerivedColumn> = table
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, key)| *key != baseline)
        .map(|(idx, key)| {
            let speedup: Vec<Option<f64>> = table
                .rows()
                .iter()
                .zip(&base_times)
                .map(|(row, base)| ratio(*base, row.cells[idx]))
                .collect();

            let units = units(key).filter(|n| *n > 0);
            let efficiency = units.map(|n| {
                speedup
                    .iter()
                    .map(|s| ratio(*s, Some(f64::from(n))))
                    .collect()
            });

            DerivedColumn {
                config: key.clone(),
                units,
                speedup,
                efficiency,
            }
        })
        .collect();

    debug!(
        baseline = %baseline,
        columns = columns.len(),
        rows = table.len(),
        "computed relative metrics"
    );

    RelativeMetrics {
        baseline: baseline.clone(),
        sizes: table.sizes(),
        columns,
    }
}

impl RelativeMetrics {
    /// Returns the baseline configuration.
    pub fn baseline(&self) -> &ConfigKey {
        &self.baseline
    }

    /// Returns the row sizes.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Returns the derived columns in table order, baseline excluded.
    pub fn columns(&self) -> &[DerivedColumn] {
        &self.columns
    }

    /// Returns whether any column carries efficiency values.
    pub fn has_efficiency(&self) -> bool {
        self.columns.iter().any(|column| column.efficiency.is_some())
    }

    fn row_index(&self, size: u64) -> Option<usize> {
        self.sizes.binary_search(&size).ok()
    }

    fn derived(&self, config: &ConfigKey) -> Option<&DerivedColumn> {
        self.columns.iter().find(|column| column.config == *config)
    }

    /// Speedup of `config` at `size`. Always `Some(1.0)` for the baseline on
    /// a known row.
    pub fn speedup(&self, size: u64, config: &ConfigKey) -> Option<f64> {
        let row = self.row_index(size)?;
        if *config == self.baseline {
            return Some(1.0);
        }
        self.derived(config)?.speedup[row]
    }

    /// Efficiency of `config` at `size`. The baseline reports 1.0 when the
    /// table has efficiency columns at all.
    pub fn efficiency(&self, size: u64, config: &ConfigKey) -> Option<f64> {
        let row = self.row_index(size)?;
        if *config == self.baseline {
            return self.has_efficiency().then_some(1.0);
        }
        self.derived(config)?.efficiency.as_ref()?[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{aggregate, GroupBy};
    use crate::model::{Metric, Trial};
    use crate::table::{pivot, ColumnOrder};

    fn seq() -> ConfigKey {
        ConfigKey::method("Sequencial")
    }

    fn threads_table(trials: &[Trial], baseline: &[Trial]) -> ComparisonTable {
        let par = aggregate(trials, GroupBy::SizeAndConfig);
        let base = aggregate(baseline, GroupBy::Size);
        pivot(&par, Metric::Time, &ColumnOrder::Ascending).with_baseline(&base, seq())
    }

    #[test]
    fn test_ratio_edge_cases() {
        assert_eq!(ratio(Some(1.0), Some(4.0)), Some(0.25));
        assert_eq!(ratio(Some(1.0), Some(0.0)), None);
        assert_eq!(ratio(Some(0.0), Some(0.0)), None);
        assert_eq!(ratio(Some(1.0), None), None);
        assert_eq!(ratio(None, None), None);
        assert_eq!(ratio(Some(f64::MAX), Some(f64::MIN_POSITIVE)), None);
        assert_eq!(ratio(Some(f64::NAN), Some(1.0)), None);
    }

    #[test]
    fn test_scenario_four_threads() {
        let baseline = vec![Trial::new(100, None, 2.0), Trial::new(100, None, 2.0)];
        let trials = vec![Trial::new(100, Some(ConfigKey::Units(4)), 0.5)];
        let table = threads_table(&trials, &baseline);

        assert_eq!(table.cell(100, &seq()), Some(2.0));
        assert_eq!(table.cell(100, &ConfigKey::Units(4)), Some(0.5));

        let metrics = compute_relative_metrics(&table, &seq(), ConfigKey::units);
        assert_eq!(metrics.speedup(100, &ConfigKey::Units(4)), Some(4.0));
        assert_eq!(metrics.efficiency(100, &ConfigKey::Units(4)), Some(1.0));
    }

    #[test]
    fn test_baseline_speedup_is_one() {
        let baseline = vec![Trial::new(100, None, 0.0)];
        let trials = vec![Trial::new(100, Some(ConfigKey::Units(2)), 1.0)];
        let table = threads_table(&trials, &baseline);
        let metrics = compute_relative_metrics(&table, &seq(), ConfigKey::units);

        assert_eq!(metrics.speedup(100, &seq()), Some(1.0));
        assert_eq!(metrics.efficiency(100, &seq()), Some(1.0));
        assert!(metrics.columns().iter().all(|c| c.config != seq()));
    }

    #[test]
    fn test_zero_time_gives_undefined_speedup() {
        let baseline = vec![Trial::new(100, None, 2.0)];
        let trials = vec![
            Trial::new(100, Some(ConfigKey::Units(2)), 0.0),
            Trial::new(100, Some(ConfigKey::Units(4)), 1.0),
        ];
        let table = threads_table(&trials, &baseline);
        let metrics = compute_relative_metrics(&table, &seq(), ConfigKey::units);

        assert_eq!(metrics.speedup(100, &ConfigKey::Units(2)), None);
        assert_eq!(metrics.efficiency(100, &ConfigKey::Units(2)), None);
        assert_eq!(metrics.speedup(100, &ConfigKey::Units(4)), Some(2.0));
        assert_eq!(metrics.sizes(), &[100]);
    }

    #[test]
    fn test_missing_cell_gives_undefined_speedup() {
        let baseline = vec![Trial::new(100, None, 2.0), Trial::new(200, None, 8.0)];
        let trials = vec![
            Trial::new(100, Some(ConfigKey::Units(2)), 1.0),
            Trial::new(200, Some(ConfigKey::Units(4)), 2.0),
        ];
        let table = threads_table(&trials, &baseline);
        let metrics = compute_relative_metrics(&table, &seq(), ConfigKey::units);

        assert_eq!(metrics.speedup(200, &ConfigKey::Units(2)), None);
        assert_eq!(metrics.speedup(100, &ConfigKey::Units(4)), None);
        assert_eq!(metrics.speedup(200, &ConfigKey::Units(4)), Some(4.0));
        assert_eq!(metrics.efficiency(200, &ConfigKey::Units(4)), Some(1.0));
    }

    #[test]
    fn test_methods_have_no_efficiency() {
        let trials = vec![
            Trial::new(1024, Some(seq()), 10.0),
            Trial::new(1024, Some(ConfigKey::method("CUDA_Tiled")), 0.1),
        ];
        let set = aggregate(&trials, GroupBy::SizeAndConfig);
        let table = pivot(&set, Metric::Time, &ColumnOrder::FirstSeen).anchored(&seq());
        let metrics = compute_relative_metrics(&table, &seq(), ConfigKey::units);

        let tiled = ConfigKey::method("CUDA_Tiled");
        let speedup = metrics.speedup(1024, &tiled).unwrap();
        assert!((speedup - 100.0).abs() < 1e-9);
        assert_eq!(metrics.efficiency(1024, &tiled), None);
        assert_eq!(metrics.efficiency(1024, &seq()), None);
        assert!(!metrics.has_efficiency());
    }

    #[test]
    fn test_zero_units_disable_efficiency() {
        let baseline = vec![Trial::new(100, None, 2.0)];
        let trials = vec![Trial::new(100, Some(ConfigKey::Units(0)), 1.0)];
        let table = threads_table(&trials, &baseline);
        let metrics = compute_relative_metrics(&table, &seq(), ConfigKey::units);

        assert_eq!(metrics.speedup(100, &ConfigKey::Units(0)), Some(2.0));
        assert_eq!(metrics.efficiency(100, &ConfigKey::Units(0)), None);
    }

    #[test]
    fn test_unknown_size_or_column() {
        let baseline = vec![Trial::new(100, None, 2.0)];
        let trials = vec![Trial::new(100, Some(ConfigKey::Units(2)), 1.0)];
        let table = threads_table(&trials, &baseline);
        let metrics = compute_relative_metrics(&table, &seq(), ConfigKey::units);

        assert_eq!(metrics.speedup(999, &seq()), None);
        assert_eq!(metrics.speedup(100, &ConfigKey::Units(32)), None);
    }
}
