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

//! Benchmark aggregation core.
//!
//! Turns raw timing trials into per-configuration means, reshapes them into a
//! wide comparison table keyed by problem size, and derives speedup and
//! efficiency against a baseline configuration.
//!
//! ## Pipeline
//!
//! ```text
//! Vec<Trial> --aggregate--> AggregateSet --pivot--> ComparisonTable
//!                                                        |
//!                                      compute_relative_metrics
//!                                                        v
//!                                                 RelativeMetrics
//! ```
//!
//! Missing values are always `None`. A zero or absent denominator never turns
//! into `0.0`, `inf` or `NaN`.
//!
//! # Examples
//!
//! ```
//! use speedup_core::{
//!     aggregate, compute_relative_metrics, pivot, ColumnOrder, ConfigKey, GroupBy, Metric,
//!     Trial,
//! };
//!
//! let baseline = vec![
//!     Trial::new(100, None, 2.0),
//!     Trial::new(100, None, 2.0),
//! ];
//! let parallel = vec![Trial::new(100, Some(ConfigKey::Units(4)), 0.5)];
//!
//! let seq = aggregate(&baseline, GroupBy::Size);
//! let par = aggregate(&parallel, GroupBy::SizeAndConfig);
//!
//! let sequential = ConfigKey::method("Sequencial");
//! let table = pivot(&par, Metric::Time, &ColumnOrder::Ascending)
//!     .with_baseline(&seq, sequential.clone());
//!
//! let metrics = compute_relative_metrics(&table, &sequential, ConfigKey::units);
//! assert_eq!(metrics.speedup(100, &ConfigKey::Units(4)), Some(4.0));
//! assert_eq!(metrics.efficiency(100, &ConfigKey::Units(4)), Some(1.0));
//! ```

pub mod aggregate;
pub mod metrics;
pub mod model;
pub mod table;

pub use aggregate::{aggregate, Aggregate, AggregateSet, GroupBy};
pub use metrics::{compute_relative_metrics, ratio, DerivedColumn, RelativeMetrics};
pub use model::{ConfigKey, ConfigKind, Metric, Trial};
pub use table::{pivot, ColumnOrder, ComparisonTable, TableRow};
