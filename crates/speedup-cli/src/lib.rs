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

//! Speedup CLI library.
//!
//! Turns the CSV files written by matrix multiplication benchmarks into
//! averaged tables, speedup and efficiency figures, and SVG charts.
//!
//! # Commands
//!
//! - **threads**: `resultados.csv` vs `resultados2.csv`, time and speedup charts
//! - **mpi**: `resultados_seq.csv` vs `resultados_mpi.csv`, plus efficiency
//! - **cuda**: `resultados_cuda{1,2,3}.csv`, time, speedup and GFLOPS charts
//!
//! # Examples
//!
//! ```no_run
//! use speedup_cli::config::RunConfig;
//! use speedup_cli::run::run;
//! use speedup_cli::variant::VariantSpec;
//!
//! # fn main() -> Result<(), speedup_cli::error::CliError> {
//! let config = RunConfig::default()
//!     .with_input_dir("bench")
//!     .with_output_dir("charts");
//! let output = run(&VariantSpec::mpi(), &config)?;
//! assert_eq!(output.charts.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod charts;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod run;
pub mod variant;
