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

//! CLI command definitions and argument parsing.
//!
//! Each subcommand is one benchmark variant and shares the same options.
//!
//! # Examples
//!
//! ```no_run
//! use clap::Parser;
//! use speedup_cli::cli::Commands;
//!
//! #[derive(Parser)]
//! struct Cli {
//!     #[command(subcommand)]
//!     command: Commands,
//! }
//! ```

use crate::config::RunConfig;
use crate::error::CliError;
use crate::run::run;
use crate::variant::VariantSpec;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Options shared by every variant.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Directory containing the input CSV files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub input_dir: PathBuf,

    /// Directory charts are written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Chart width in pixels
    #[arg(long, default_value_t = 1400, value_parser = clap::value_parser!(u32).range(100..))]
    pub width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(100..))]
    pub height: u32,

    /// Also write a JSON report of every table to FILE
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Print the tables without rendering charts
    #[arg(long)]
    pub no_charts: bool,
}

impl RunArgs {
    /// Converts the arguments into a run configuration.
    pub fn to_config(&self) -> RunConfig {
        let mut config = RunConfig::default()
            .with_input_dir(&self.input_dir)
            .with_output_dir(&self.output_dir)
            .with_chart_size(self.width, self.height);
        if let Some(json) = &self.json {
            config = config.with_json_report(json);
        }
        if self.no_charts {
            config = config.without_charts();
        }
        config
    }
}

/// Benchmark variants.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Shared-memory threads against the sequential baseline
    ///
    /// Reads resultados.csv (baseline) and resultados2.csv (Threads column).
    Threads(RunArgs),

    /// MPI processes against the sequential baseline
    ///
    /// Reads resultados_seq.csv (baseline) and resultados_mpi.csv (Processos
    /// column) and also draws parallel efficiency.
    Mpi(RunArgs),

    /// CUDA kernels against the sequential CPU method
    ///
    /// Reads resultados_cuda1.csv, resultados_cuda2.csv and
    /// resultados_cuda3.csv (Metodo column, GFLOPS).
    Cuda(RunArgs),
}

impl Commands {
    /// Returns the variant preset and arguments for this command.
    pub fn variant(&self) -> (VariantSpec, &RunArgs) {
        match self {
            Commands::Threads(args) => (VariantSpec::threads(), args),
            Commands::Mpi(args) => (VariantSpec::mpi(), args),
            Commands::Cuda(args) => (VariantSpec::cuda(), args),
        }
    }

    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an input file is missing or malformed, or if a chart
    /// or report cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        let (variant, args) = self.variant();
        run(&variant, &args.to_config())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    fn parse(args: &[&str]) -> Commands {
        TestCli::try_parse_from(std::iter::once("speedup").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn test_defaults() {
        let command = parse(&["threads"]);
        let (variant, args) = command.variant();

        assert_eq!(variant.name(), "threads");
        assert_eq!(args.to_config(), RunConfig::default());
    }

    #[test]
    fn test_all_options() {
        let command = parse(&[
            "mpi",
            "--input-dir",
            "data",
            "-o",
            "charts",
            "--width",
            "800",
            "--height",
            "600",
            "--json",
            "report.json",
            "--no-charts",
        ]);
        let (variant, args) = command.variant();
        let config = args.to_config();

        assert_eq!(variant.name(), "mpi");
        assert_eq!(config.input_dir, PathBuf::from("data"));
        assert_eq!(config.output_dir, PathBuf::from("charts"));
        assert_eq!((config.chart_size.width, config.chart_size.height), (800, 600));
        assert_eq!(config.json_path, Some(PathBuf::from("report.json")));
        assert!(!config.render_charts);
    }

    #[test]
    fn test_rejects_tiny_charts() {
        let result = TestCli::try_parse_from(["speedup", "cuda", "--width", "10"]);
        assert!(result.is_err());
    }
}
