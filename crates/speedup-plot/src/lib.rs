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

//! Chart rendering for benchmark comparisons.
//!
//! Charts are described by plain models ([`BarChart`], [`LineChart`]) and
//! rendered to SVG files with plotters. Undefined values are skipped rather
//! than drawn as zero.
//!
//! # Examples
//!
//! ```no_run
//! use speedup_plot::{render_bar_chart, BarChart, BarSeries, ChartSize};
//! use std::path::Path;
//!
//! let mut chart = BarChart::new("Execution time", "Matrix size", "Time (s)");
//! chart.categories = vec!["512".into(), "1024".into()];
//! chart.series.push(BarSeries {
//!     label: "Sequencial".into(),
//!     values: vec![Some(0.8), Some(6.4)],
//! });
//! chart.log_scale = true;
//!
//! render_bar_chart(&chart, Path::new("tempo.svg"), ChartSize::default())?;
//! # Ok::<(), speedup_plot::PlotError>(())
//! ```

#![warn(missing_docs)]

mod bar;
mod error;
mod line;
mod model;
mod style;

pub use bar::render_bar_chart;
pub use error::{PlotError, Result};
pub use line::render_line_chart;
pub use model::{Annotation, BarChart, BarSeries, ChartSize, LineChart, LineData, Reference};
