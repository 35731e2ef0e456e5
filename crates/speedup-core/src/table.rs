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

//! Wide comparison tables.
//!
//! A [`ComparisonTable`] has one row per problem size and one column per
//! configuration. Cells are `Option<f64>`: a configuration that was never
//! measured at a size is `None`, not zero.

use crate::aggregate::AggregateSet;
use crate::model::{ConfigKey, Metric};
use serde::Serialize;
use tracing::{debug, warn};

/// Column ordering applied by [`pivot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnOrder {
    /// Sorted by [`ConfigKey`] ordering (numeric for unit counts).
    Ascending,
    /// Order of first appearance in the input trials.
    FirstSeen,
    /// The listed configurations first, then any others in first-seen order.
    /// Listed configurations without data are skipped.
    Explicit(Vec<ConfigKey>),
}

impl ColumnOrder {
    fn resolve(&self, seen: &[ConfigKey]) -> Vec<ConfigKey> {
        match self {
            ColumnOrder::Ascending => {
                let mut columns = seen.to_vec();
                columns.sort();
                columns
            }
            ColumnOrder::FirstSeen => seen.to_vec(),
            ColumnOrder::Explicit(listed) => {
                let mut columns: Vec<ConfigKey> = listed
                    .iter()
                    .filter(|key| seen.contains(key))
                    .cloned()
                    .collect();
                for key in seen {
                    if !columns.contains(key) {
                        columns.push(key.clone());
                    }
                }
                columns
            }
        }
    }
}

/// One row of a comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// Problem size.
    pub size: u64,
    /// Cells aligned with the table's columns.
    pub cells: Vec<Option<f64>>,
}

/// Problem size × configuration table of one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    metric: Metric,
    columns: Vec<ConfigKey>,
    rows: Vec<TableRow>,
}

/// Reshapes aggregates into a size × configuration table.
///
/// Rows cover every size present in `aggregates`; columns follow `order`.
/// Size-only aggregates (no configuration) contribute no columns; attach them
/// with [`ComparisonTable::with_baseline`] instead.
pub fn pivot(aggregates: &AggregateSet, metric: Metric, order: &ColumnOrder) -> ComparisonTable {
    let columns = order.resolve(aggregates.config_order());

    let rows: Vec<TableRow> = aggregates
        .sizes()
        .into_iter()
        .map(|size| TableRow {
            size,
            cells: columns
                .iter()
                .map(|key| aggregates.get(size, Some(key)).and_then(|agg| metric.of(agg)))
                .collect(),
        })
        .collect();

    debug!(
        metric = metric.as_str(),
        rows = rows.len(),
        columns = columns.len(),
        "pivoted aggregates"
    );

    ComparisonTable {
        metric,
        columns,
        rows,
    }
}

impl ComparisonTable {
    /// Attaches size-only baseline aggregates as the first column, labelled `key`.
    ///
    /// Rows become exactly the baseline's sizes. Sizes the baseline does not
    /// cover are dropped; sizes it covers but this table lacks get `None`
    /// cells for every other column.
    pub fn with_baseline(self, baseline: &AggregateSet, key: ConfigKey) -> ComparisonTable {
        let metric = self.metric;
        let others: Vec<(usize, ConfigKey)> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, column)| **column != key)
            .map(|(idx, column)| (idx, column.clone()))
            .collect();

        let rows: Vec<TableRow> = baseline
            .sizes()
            .into_iter()
            .map(|size| {
                let own = self.row(size);
                let mut cells = Vec::with_capacity(others.len() + 1);
                cells.push(baseline.get(size, None).and_then(|agg| metric.of(agg)));
                cells.extend(
                    others
                        .iter()
                        .map(|(idx, _)| own.and_then(|row| row.cells[*idx])),
                );
                TableRow { size, cells }
            })
            .collect();

        let dropped = self
            .rows
            .iter()
            .filter(|row| baseline.get(row.size, None).is_none())
            .count();
        if dropped > 0 {
            warn!(dropped, baseline = %key, "dropped sizes without a baseline measurement");
        }

        let mut columns = Vec::with_capacity(others.len() + 1);
        columns.push(key);
        columns.extend(others.into_iter().map(|(_, column)| column));

        ComparisonTable {
            metric,
            columns,
            rows,
        }
    }

    /// Moves `baseline` to the first column and keeps only the rows where it
    /// has a value.
    ///
    /// A table without a `baseline` column ends up with no rows.
    pub fn anchored(self, baseline: &ConfigKey) -> ComparisonTable {
        let Some(base_idx) = self.column_index(baseline) else {
            warn!(baseline = %baseline, "baseline column missing; comparison table is empty");
            let mut columns = vec![baseline.clone()];
            columns.extend(self.columns);
            return ComparisonTable {
                metric: self.metric,
                columns,
                rows: Vec::new(),
            };
        };

        let mut order: Vec<usize> = vec![base_idx];
        order.extend((0..self.columns.len()).filter(|idx| *idx != base_idx));

        let before = self.rows.len();
        let rows: Vec<TableRow> = self
            .rows
            .into_iter()
            .filter(|row| row.cells[base_idx].is_some())
            .map(|row| TableRow {
                size: row.size,
                cells: order.iter().map(|idx| row.cells[*idx]).collect(),
            })
            .collect();

        if rows.len() < before {
            warn!(
                dropped = before - rows.len(),
                baseline = %baseline,
                "dropped sizes without a baseline measurement"
            );
        }

        let columns = order.iter().map(|idx| self.columns[*idx].clone()).collect();

        ComparisonTable {
            metric: self.metric,
            columns,
            rows,
        }
    }

    /// Returns the metric held in the cells.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Returns the column labels in order.
    pub fn columns(&self) -> &[ConfigKey] {
        &self.columns
    }

    /// Returns the rows in ascending size order.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Returns the row sizes in ascending order.
    pub fn sizes(&self) -> Vec<u64> {
        self.rows.iter().map(|row| row.size).collect()
    }

    /// Returns the position of a column.
    pub fn column_index(&self, key: &ConfigKey) -> Option<usize> {
        self.columns.iter().position(|column| column == key)
    }

    /// Returns the row for a size.
    pub fn row(&self, size: u64) -> Option<&TableRow> {
        self.rows
            .binary_search_by_key(&size, |row| row.size)
            .ok()
            .map(|idx| &self.rows[idx])
    }

    /// Reads one cell. `None` when the row, the column or the value is absent.
    pub fn cell(&self, size: u64, key: &ConfigKey) -> Option<f64> {
        let idx = self.column_index(key)?;
        self.row(size).and_then(|row| row.cells[idx])
    }

    /// Returns one column's cells, aligned with [`ComparisonTable::sizes`].
    pub fn column(&self, key: &ConfigKey) -> Option<Vec<Option<f64>>> {
        let idx = self.column_index(key)?;
        Some(self.rows.iter().map(|row| row.cells[idx]).collect())
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
