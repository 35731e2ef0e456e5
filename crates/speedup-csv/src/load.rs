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

//! Read trial CSV files into [`Trial`] records.

use crate::error::{LoadError, Result};
use crate::schema::TrialSchema;
use speedup_core::{ConfigKey, ConfigKind, Trial};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default maximum number of rows accepted per file.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for CSV parsing.
///
/// # Examples
///
/// ```
/// use speedup_csv::LoadConfig;
///
/// let config = LoadConfig {
///     delimiter: b';',
///     ..Default::default()
/// };
/// assert_eq!(config.max_rows, 1_000_000);
/// ```
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Field delimiter (default: `,`).
    pub delimiter: u8,
    /// Trim whitespace around fields and headers (default: `true`).
    pub trim: bool,
    /// Maximum rows per file (default: [`DEFAULT_MAX_ROWS`]).
    pub max_rows: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Row count for one loaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    /// Path the rows were read from.
    pub path: PathBuf,
    /// Number of trial rows.
    pub rows: usize,
}

/// Trials concatenated across every input file.
#[derive(Debug, Clone, Default)]
pub struct LoadedTrials {
    /// All trial rows, in file order then row order.
    pub trials: Vec<Trial>,
    /// One summary per input file.
    pub files: Vec<FileSummary>,
}

impl LoadedTrials {
    /// Returns the total row count.
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    /// Returns whether no rows were loaded.
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }
}

/// Loads trials from every path using the default [`LoadConfig`].
///
/// All files are opened before any is parsed, so a missing file aborts the
/// load without partial results.
///
/// # Errors
///
/// - [`LoadError::MissingInput`] naming the first path that does not exist
/// - [`LoadError::MissingColumn`] when the header lacks a required column
/// - [`LoadError::InvalidValue`] for fields that do not parse
pub fn load<P: AsRef<Path>>(paths: &[P], schema: &TrialSchema) -> Result<LoadedTrials> {
    load_with_config(paths, schema, &LoadConfig::default())
}

/// Loads trials from every path with a custom configuration.
pub fn load_with_config<P: AsRef<Path>>(
    paths: &[P],
    schema: &TrialSchema,
    config: &LoadConfig,
) -> Result<LoadedTrials> {
    let mut handles = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        handles.push((path.to_path_buf(), open_input(path)?));
    }

    let mut loaded = LoadedTrials::default();
    for (path, file) in handles {
        let source_name = path.display().to_string();
        let trials = from_reader(file, schema, config, &source_name)?;
        info!(file = %source_name, rows = trials.len(), "loaded trial file");

        loaded.files.push(FileSummary {
            path,
            rows: trials.len(),
        });
        loaded.trials.extend(trials);
    }

    Ok(loaded)
}

fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::MissingInput {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// Parses trials from CSV text.
///
/// # Examples
///
/// ```
/// use speedup_csv::{from_str, TrialSchema};
///
/// let trials = from_str("Tamanho,Tempo_s\n100,2.0\n100,2.5\n", &TrialSchema::default()).unwrap();
/// assert_eq!(trials.len(), 2);
/// assert_eq!(trials[1].time_s, 2.5);
/// ```
pub fn from_str(csv: &str, schema: &TrialSchema) -> Result<Vec<Trial>> {
    from_reader(csv.as_bytes(), schema, &LoadConfig::default(), "<input>")
}

struct Columns {
    size: usize,
    time: usize,
    throughput: Option<usize>,
    config: Option<(usize, ConfigKind)>,
}

impl Columns {
    fn locate(headers: &csv::StringRecord, schema: &TrialSchema, source_name: &str) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| LoadError::MissingColumn {
                source_name: source_name.to_string(),
                column: name.to_string(),
            })
        };

        let config = match &schema.config {
            Some(column) => Some((require(&column.name)?, column.kind)),
            None => None,
        };

        Ok(Self {
            size: require(&schema.size)?,
            time: require(&schema.time)?,
            throughput: schema.throughput.as_deref().and_then(find),
            config,
        })
    }
}

/// Parses trials from any reader.
///
/// Rows may be shorter than the header: producers sometimes announce a
/// throughput column without writing it. Missing optional fields are `None`;
/// missing required fields are [`LoadError::InvalidValue`].
pub fn from_reader<R: Read>(
    reader: R,
    schema: &TrialSchema,
    config: &LoadConfig,
    source_name: &str,
) -> Result<Vec<Trial>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let parse_error = |source: csv::Error| LoadError::Parse {
        source_name: source_name.to_string(),
        source,
    };

    let headers = csv_reader.headers().map_err(parse_error)?.clone();
    let columns = Columns::locate(&headers, schema, source_name)?;
    debug!(file = source_name, headers = ?headers, "located trial columns");

    let mut trials = Vec::new();
    for (record_idx, result) in csv_reader.records().enumerate() {
        if record_idx >= config.max_rows {
            return Err(LoadError::RowLimit {
                source_name: source_name.to_string(),
                limit: config.max_rows,
            });
        }

        let record = result.map_err(parse_error)?;
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(record_idx as u64 + 2);
        let field = FieldReader {
            record: &record,
            headers: &headers,
            source_name,
            line,
        };

        let size = field.required(columns.size, "integer", |v| v.parse::<u64>().ok())?;
        let time_s = field.required(columns.time, "number", parse_number)?;
        let gflops = match columns.throughput {
            Some(idx) => field.optional(idx, "number", parse_number)?,
            None => None,
        };
        let config = match columns.config {
            Some((idx, ConfigKind::Units)) => Some(ConfigKey::Units(field.required(
                idx,
                "integer",
                |v| v.parse::<u32>().ok(),
            )?)),
            Some((idx, ConfigKind::Method)) => Some(ConfigKey::method(field.required(
                idx,
                "method name",
                |v| Some(v.to_string()),
            )?)),
            None => None,
        };

        trials.push(Trial {
            size,
            config,
            time_s,
            gflops,
        });
    }

    Ok(trials)
}

fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

struct FieldReader<'a> {
    record: &'a csv::StringRecord,
    headers: &'a csv::StringRecord,
    source_name: &'a str,
    line: u64,
}

impl FieldReader<'_> {
    fn invalid(&self, idx: usize, expected: &'static str, value: &str) -> LoadError {
        LoadError::InvalidValue {
            source_name: self.source_name.to_string(),
            line: self.line,
            column: self.headers.get(idx).unwrap_or_default().to_string(),
            expected,
            value: value.to_string(),
        }
    }

    fn required<T>(
        &self,
        idx: usize,
        expected: &'static str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        let raw = self.record.get(idx).unwrap_or_default();
        if raw.is_empty() {
            return Err(self.invalid(idx, expected, raw));
        }
        parse(raw).ok_or_else(|| self.invalid(idx, expected, raw))
    }

    fn optional<T>(
        &self,
        idx: usize,
        expected: &'static str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        match self.record.get(idx) {
            None | Some("") => Ok(None),
            Some(raw) => parse(raw)
                .map(Some)
                .ok_or_else(|| self.invalid(idx, expected, raw)),
        }
    }
}
