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

//! Column names expected in trial files.
//!
//! The names are shared with the DGEMM benchmark programs that write the
//! files, so they are kept exactly as those programs emit them.

use speedup_core::ConfigKind;

/// Matrix size column.
pub const SIZE_COLUMN: &str = "Tamanho";
/// Elapsed seconds column.
pub const TIME_COLUMN: &str = "Tempo_s";
/// Throughput column.
pub const GFLOPS_COLUMN: &str = "GFLOPS";
/// Thread count column (OpenMP runs).
pub const THREADS_COLUMN: &str = "Threads";
/// Process count column (MPI runs).
pub const PROCESSES_COLUMN: &str = "Processos";
/// Method name column (CUDA runs).
pub const METHOD_COLUMN: &str = "Metodo";

/// Column holding the configuration identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigColumn {
    /// Header name.
    pub name: String,
    /// How field values are interpreted.
    pub kind: ConfigKind,
}

/// Columns read from a trial file.
///
/// # Examples
///
/// ```
/// use speedup_csv::{TrialSchema, THREADS_COLUMN};
/// use speedup_core::ConfigKind;
///
/// let schema = TrialSchema::default().with_config(THREADS_COLUMN, ConfigKind::Units);
/// assert_eq!(schema.config.map(|column| column.name).as_deref(), Some("Threads"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialSchema {
    /// Problem size column.
    pub size: String,
    /// Elapsed time column.
    pub time: String,
    /// Optional throughput column; read when present in the header.
    pub throughput: Option<String>,
    /// Configuration column; `None` for baseline files.
    pub config: Option<ConfigColumn>,
}

impl Default for TrialSchema {
    fn default() -> Self {
        Self {
            size: SIZE_COLUMN.to_string(),
            time: TIME_COLUMN.to_string(),
            throughput: Some(GFLOPS_COLUMN.to_string()),
            config: None,
        }
    }
}

impl TrialSchema {
    /// Sets the configuration column.
    pub fn with_config(mut self, name: impl Into<String>, kind: ConfigKind) -> Self {
        self.config = Some(ConfigColumn {
            name: name.into(),
            kind,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_is_baseline() {
        let schema = TrialSchema::default();
        assert!(schema.config.is_none());
        assert_eq!(schema.throughput.as_deref(), Some("GFLOPS"));
        assert_eq!((schema.size.as_str(), schema.time.as_str()), ("Tamanho", "Tempo_s"));
    }

    #[test]
    fn test_method_schema() {
        let schema = TrialSchema::default().with_config(METHOD_COLUMN, ConfigKind::Method);
        let config = schema.config.unwrap();
        assert_eq!(config.name, "Metodo");
        assert_eq!(config.kind, ConfigKind::Method);
    }
}
