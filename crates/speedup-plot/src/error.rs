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

//! Error types for chart rendering.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Chart rendering error types.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The drawing backend reported a failure.
    #[error("Failed to render '{}': {message}", path.display())]
    Render {
        /// Output path of the chart.
        path: PathBuf,
        /// Backend error message.
        message: String,
    },

    /// The chart model is inconsistent.
    ///
    /// # Examples
    ///
    /// ```
    /// use speedup_plot::PlotError;
    ///
    /// let err = PlotError::InvalidChart {
    ///     title: "Speedup".to_string(),
    ///     reason: "series 'x' has 3 values for 2 categories".to_string(),
    /// };
    /// assert!(err.to_string().contains("Speedup"));
    /// ```
    #[error("Invalid chart '{title}': {reason}")]
    InvalidChart {
        /// Chart title.
        title: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, PlotError>;

pub(crate) fn render_err<E: Display>(path: &Path) -> impl FnOnce(E) -> PlotError + '_ {
    move |e| PlotError::Render {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}
