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

//! Structured error types for the Speedup CLI.
//!
//! Library errors from loading and rendering are wrapped unchanged so their
//! context (file names, line numbers, columns) reaches the operator.
//!
//! # Examples
//!
//! ```
//! use speedup_cli::error::CliError;
//! use speedup_csv::LoadError;
//!
//! let err: CliError = LoadError::MissingInput {
//!     path: "resultados.csv".into(),
//! }
//! .into();
//! assert!(err.missing_input().is_some());
//! ```

use speedup_csv::LoadError;
use speedup_plot::PlotError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or parsing a trial file failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Rendering a chart failed.
    #[error(transparent)]
    Plot(#[from] PlotError),

    /// Filesystem error outside loading and rendering.
    #[error("I/O error for '{}': {source}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// Serializing the JSON report failed.
    #[error("JSON report error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Creates an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the input path that was not found, if that is what failed.
    pub fn missing_input(&self) -> Option<&Path> {
        match self {
            CliError::Load(err) => err.missing_path(),
            _ => None,
        }
    }

    /// Guidance printed after a missing input error.
    pub fn hint(&self) -> Option<String> {
        let path = self.missing_input()?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.display().to_string(),
            _ => ".".to_string(),
        };
        Some(format!(
            "Place '{}' in the input directory '{}' (see --input-dir) and run again.",
            name, dir
        ))
    }
}
