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

//! Benchmark trial CSV loading.
//!
//! Reads the timing files written by the sequential, OpenMP, MPI and CUDA
//! DGEMM programs into [`speedup_core::Trial`] records.
//!
//! # Features
//!
//! - **Multiple files**: trials from several runs are concatenated in order
//! - **Header-driven**: columns are located by name, extra columns are ignored
//! - **Short rows**: a throughput column announced but not written is absent
//! - **Error handling**: missing files, columns and bad values are reported
//!   with file, line and column context
//!
//! # Examples
//!
//! ```no_run
//! use speedup_core::ConfigKind;
//! use speedup_csv::{load, TrialSchema, THREADS_COLUMN};
//!
//! let schema = TrialSchema::default().with_config(THREADS_COLUMN, ConfigKind::Units);
//! let loaded = load(&["resultados2.csv"], &schema).unwrap();
//! println!("{} trials", loaded.len());
//! ```

mod error;
mod load;
mod schema;

pub use error::{LoadError, Result};
pub use load::{
    from_reader, from_str, load, load_with_config, FileSummary, LoadConfig, LoadedTrials,
    DEFAULT_MAX_ROWS,
};
pub use schema::{
    ConfigColumn, TrialSchema, GFLOPS_COLUMN, METHOD_COLUMN, PROCESSES_COLUMN, SIZE_COLUMN,
    THREADS_COLUMN, TIME_COLUMN,
};
