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

//! Error types for trial loading.

use std::path::PathBuf;
use thiserror::Error;

/// Trial loading error types.
///
/// # Examples
///
/// ```
/// use speedup_csv::LoadError;
///
/// let err = LoadError::MissingInput {
///     path: "resultados.csv".into(),
/// };
/// assert_eq!(err.to_string(), "Input file 'resultados.csv' not found");
/// ```
#[derive(Debug, Error)]
pub enum LoadError {
    /// An input file does not exist.
    ///
    /// The run aborts before any output is produced.
    #[error("Input file '{}' not found", path.display())]
    MissingInput {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A required column is absent from the header row.
    ///
    /// # Examples
    ///
    /// ```
    /// use speedup_csv::LoadError;
    ///
    /// let err = LoadError::MissingColumn {
    ///     source_name: "resultados2.csv".to_string(),
    ///     column: "Threads".to_string(),
    /// };
    /// assert!(err.to_string().contains("Threads"));
    /// ```
    #[error("Missing required column '{column}' in {source_name}")]
    MissingColumn {
        /// File or stream name.
        source_name: String,
        /// Column name.
        column: String,
    },

    /// A field could not be parsed as the type its column requires.
    #[error("Invalid value in {source_name} at line {line}, column '{column}': expected {expected}, got '{value}'")]
    InvalidValue {
        /// File or stream name.
        source_name: String,
        /// Line number (1-based, header included).
        line: u64,
        /// Column name.
        column: String,
        /// Expected type description.
        expected: &'static str,
        /// Raw field content.
        value: String,
    },

    /// Malformed CSV reported by the parser.
    #[error("CSV parse error in {source_name}: {source}")]
    Parse {
        /// File or stream name.
        source_name: String,
        /// Underlying parser error.
        #[source]
        source: csv::Error,
    },

    /// Row count exceeded the configured limit.
    #[error("Row limit exceeded in {source_name}: more than {limit} rows")]
    RowLimit {
        /// File or stream name.
        source_name: String,
        /// Maximum allowed rows.
        limit: usize,
    },

    /// I/O error other than a missing file.
    #[error("I/O error for '{}': {source}", path.display())]
    Io {
        /// The path being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Returns the missing path for [`LoadError::MissingInput`].
    pub fn missing_path(&self) -> Option<&std::path::Path> {
        match self {
            LoadError::MissingInput { path } => Some(path),
            _ => None,
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, LoadError>;
